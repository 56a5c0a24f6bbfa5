//! Dynamic getter/setter invocation by constructed name.

use obx_reflect::Reflect;
use obx_reflect::derive::Reflect;
use obx_reflect::error::{ErrorCategory, ReflectError};
use obx_reflect::props::{get_by_name, get_for_field, set_by_name, set_for_field};

#[derive(Reflect, Default)]
struct User {
    pub name: String,
    pub age: i32,
    pub admin: bool,
    pub quota: i64,
    pub rating: Option<i32>,
    secret: String,
}

#[test]
fn getter_by_constructed_name() {
    let user = User {
        age: 30,
        ..User::default()
    };

    let age = get_by_name(user.as_reflect(), "get_age").unwrap();
    assert_eq!(age.downcast_ref::<i32>(), Some(&30));

    // Matching ignores case.
    let age = get_by_name(user.as_reflect(), "GET_AGE").unwrap();
    assert_eq!(age.downcast_ref::<i32>(), Some(&30));
}

#[test]
fn bool_fields_use_the_is_prefix() {
    let user = User {
        admin: true,
        ..User::default()
    };

    let admin = get_by_name(user.as_reflect(), "is_admin").unwrap();
    assert_eq!(admin.downcast_ref::<bool>(), Some(&true));

    // `get_admin` does not exist; the getter was generated as `is_admin`.
    let err = get_by_name(user.as_reflect(), "get_admin").unwrap_err();
    assert!(matches!(err, ReflectError::AccessorNotFound { .. }));

    let admin = get_for_field(user.as_reflect(), "admin").unwrap();
    assert_eq!(admin.downcast_ref::<bool>(), Some(&true));
}

#[test]
fn missing_and_empty_names_are_rejected() {
    let user = User::default();

    let err = get_by_name(user.as_reflect(), "get_shoe_size").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::LookupFailure);

    let err = get_by_name(user.as_reflect(), "  ").unwrap_err();
    assert!(matches!(err, ReflectError::EmptyArgument { .. }));
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
}

#[test]
fn non_public_accessors_are_refused() {
    let user = User::default();

    let err = get_by_name(user.as_reflect(), "get_secret").unwrap_err();
    assert!(matches!(err, ReflectError::AccessorNotPublic { .. }));

    let mut user = User::default();
    let err = set_for_field(
        user.as_reflect_mut(),
        "secret",
        Some(Box::new(String::from("x"))),
    )
    .unwrap_err();
    assert!(matches!(err, ReflectError::AccessorNotPublic { .. }));
    // The refused write left the field alone.
    assert_eq!(user.secret, "");
}

#[test]
fn setter_by_constructed_name() {
    let mut user = User::default();

    set_by_name(user.as_reflect_mut(), "set_age", Some(Box::new(28_i32))).unwrap();
    assert_eq!(user.age, 28);

    set_by_name(
        user.as_reflect_mut(),
        "SET_NAME",
        Some(Box::new(String::from("ada"))),
    )
    .unwrap();
    assert_eq!(user.name, "ada");
}

#[test]
fn absent_value_substitutes_the_scalar_zero() {
    let mut user = User {
        age: 30,
        admin: true,
        ..User::default()
    };

    // A field named `age` of primitive integer type, set to absent,
    // results in the field holding value 0.
    set_for_field(user.as_reflect_mut(), "age", None).unwrap();
    assert_eq!(user.age, 0);

    set_for_field(user.as_reflect_mut(), "admin", None).unwrap();
    assert!(!user.admin);
}

#[test]
fn absent_value_clears_an_optional_field() {
    let mut user = User {
        rating: Some(4),
        ..User::default()
    };

    set_for_field(user.as_reflect_mut(), "rating", None).unwrap();
    assert_eq!(user.rating, None);
}

#[test]
fn absent_value_is_not_storable_in_text() {
    let mut user = User::default();

    let err = set_for_field(user.as_reflect_mut(), "name", None).unwrap_err();
    assert!(matches!(err, ReflectError::AbsentNotStorable { .. }));
    assert_eq!(err.category(), ErrorCategory::InvocationFailure);
}

#[test]
fn bare_values_wrap_into_optional_fields() {
    let mut user = User::default();

    set_for_field(user.as_reflect_mut(), "rating", Some(Box::new(5_i32))).unwrap();
    assert_eq!(user.rating, Some(5));
}

#[test]
fn optional_values_unwrap_into_bare_fields() {
    let mut user = User::default();

    set_for_field(user.as_reflect_mut(), "age", Some(Box::new(Some(7_i32)))).unwrap();
    assert_eq!(user.age, 7);

    // An absent optional takes the zero-substitution path.
    user.age = 30;
    set_for_field(user.as_reflect_mut(), "age", Some(Box::new(None::<i32>))).unwrap();
    assert_eq!(user.age, 0);
}

#[test]
fn numeric_values_widen_losslessly() {
    let mut user = User::default();

    set_for_field(user.as_reflect_mut(), "quota", Some(Box::new(12_i32))).unwrap();
    assert_eq!(user.quota, 12);

    // Narrowing is refused.
    let err = set_for_field(user.as_reflect_mut(), "age", Some(Box::new(1_i64))).unwrap_err();
    assert!(matches!(err, ReflectError::MismatchedValue { .. }));
}

#[test]
fn mismatched_value_errors_name_the_field() {
    let mut user = User::default();

    let err = set_for_field(user.as_reflect_mut(), "name", Some(Box::new(1_i32))).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("name"));
    assert_eq!(err.category(), ErrorCategory::InvocationFailure);
}
