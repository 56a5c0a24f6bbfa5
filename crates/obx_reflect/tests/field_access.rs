//! The field accessor's fallback chain, tier by tier.

use obx_reflect::Reflect;
use obx_reflect::access::{
    AccessorStrategy, FieldAccessor, FieldStrategy, HandleStrategy, produces_none,
};
use obx_reflect::derive::Reflect;
use obx_reflect::error::{ErrorCategory, ReflectError};

#[derive(Reflect)]
struct Profile {
    pub nickname: String,
    pub age: i32,
    pub tags: Option<Vec<i32>>,
    // Private: the accessor tier refuses this one.
    score: f64,
}

fn profile() -> Profile {
    Profile {
        nickname: String::from("kit"),
        age: 30,
        tags: None,
        score: 1.5,
    }
}

#[test]
fn public_field_round_trips_through_the_default_chain() {
    let accessor = FieldAccessor::new();
    let mut profile = profile();

    accessor
        .set(
            profile.as_reflect_mut(),
            "nickname",
            Some(Box::new(String::from("ada"))),
        )
        .unwrap();

    let value = accessor.get(profile.as_reflect(), "nickname").unwrap();
    assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("ada"));
}

#[test]
fn private_field_round_trips_via_the_handle_tier() {
    let accessor = FieldAccessor::new();
    let mut profile = profile();

    accessor
        .set(profile.as_reflect_mut(), "score", Some(Box::new(9.75_f64)))
        .unwrap();
    assert_eq!(profile.score, 9.75);

    let value = accessor.get(profile.as_reflect(), "score").unwrap();
    assert_eq!(value.downcast_ref::<f64>(), Some(&9.75));
}

#[test]
fn accessor_tier_alone_refuses_private_fields() {
    let accessor = FieldAccessor::with_strategies(vec![Box::new(AccessorStrategy)]);
    let mut profile = profile();

    let err = accessor
        .set(profile.as_reflect_mut(), "score", Some(Box::new(2.0_f64)))
        .unwrap_err();
    let ReflectError::StrategiesExhausted { op, source, .. } = err else {
        panic!("expected an exhausted chain, got {err}");
    };
    assert_eq!(op, "set");
    assert!(matches!(*source, ReflectError::AccessorNotPublic { .. }));
    // The failed chain left the field untouched.
    assert_eq!(profile.score, 1.5);
}

#[test]
fn handle_tier_alone_reaches_private_fields() {
    let accessor = FieldAccessor::with_strategies(vec![Box::new(HandleStrategy)]);
    let mut profile = profile();

    accessor
        .set(profile.as_reflect_mut(), "score", Some(Box::new(3.25_f64)))
        .unwrap();
    let value = accessor.get(profile.as_reflect(), "score").unwrap();
    assert_eq!(value.downcast_ref::<f64>(), Some(&3.25));
}

#[test]
fn brute_force_tier_alone_round_trips() {
    let accessor = FieldAccessor::with_strategies(vec![Box::new(FieldStrategy)]);
    let mut profile = profile();

    accessor
        .set(profile.as_reflect_mut(), "age", Some(Box::new(44_i32)))
        .unwrap();
    assert_eq!(profile.age, 44);

    let value = accessor.get(profile.as_reflect(), "age").unwrap();
    assert_eq!(value.downcast_ref::<i32>(), Some(&44));
}

#[test]
fn absent_value_stores_zero_into_a_scalar_field() {
    let accessor = FieldAccessor::new();
    let mut profile = profile();

    accessor.set(profile.as_reflect_mut(), "age", None).unwrap();
    assert_eq!(profile.age, 0);
}

#[test]
fn absent_value_stores_none_into_an_optional_field() {
    let accessor = FieldAccessor::new();
    let mut profile = profile();
    profile.tags = Some(vec![1, 2]);

    accessor.set(profile.as_reflect_mut(), "tags", None).unwrap();
    assert_eq!(profile.tags, None);
}

#[test]
fn unknown_fields_fail_lookup() {
    let accessor = FieldAccessor::new();
    let profile = profile();

    let err = accessor.get(profile.as_reflect(), "missing").unwrap_err();
    assert!(matches!(err, ReflectError::FieldNotFound { .. }));
    assert_eq!(err.category(), ErrorCategory::LookupFailure);
}

#[test]
fn mismatched_values_fail_before_the_chain_runs() {
    let accessor = FieldAccessor::new();
    let mut profile = profile();

    let err = accessor
        .set(
            profile.as_reflect_mut(),
            "age",
            Some(Box::new(String::from("not a number"))),
        )
        .unwrap_err();
    assert!(matches!(err, ReflectError::MismatchedValue { .. }));
    assert_eq!(err.category(), ErrorCategory::InvocationFailure);
    assert_eq!(profile.age, 30);
}

#[test]
fn empty_strategy_chains_report_exhaustion() {
    let accessor = FieldAccessor::with_strategies(vec![]);
    let profile = profile();

    let err = accessor.get(profile.as_reflect(), "age").unwrap_err();
    assert!(matches!(err, ReflectError::StrategiesExhausted { .. }));
}

#[test]
fn produces_none_reports_absent_suppliers() {
    let profile = profile();
    assert!(produces_none(|| profile.tags.clone()));
    assert!(!produces_none(|| Some(profile.age)));
}
