//! End-to-end coverage of `#[derive(Reflect)]`.

use obx_reflect::Reflect;
use obx_reflect::derive::Reflect;
use obx_reflect::info::{ReflectKind, Typed, VariantKind};
use obx_reflect::lookup::VariantArray;
use obx_reflect::ops::{Enum, Struct};
use obx_reflect::props::{fields, fields_including_ancestors, getters, setters};

#[derive(Reflect)]
struct Account {
    pub owner: String,
    pub active: bool,
    balance: i64,
}

#[derive(Reflect)]
struct Wrapper<T> {
    pub value: T,
}

#[derive(Reflect)]
struct Session {
    pub user: String,
    #[reflect(ignore)]
    secret: u64,
}

#[derive(Reflect)]
struct AuditBase {
    pub created_by: String,
    pub revision: i32,
}

#[derive(Reflect)]
struct Document {
    pub title: String,
    #[reflect(flatten)]
    pub audit: AuditBase,
}

#[derive(Reflect, Debug, PartialEq)]
enum Status {
    Draft,
    Published,
    Archived,
}

#[derive(Reflect)]
enum Shape {
    Point,
    Circle(f64),
    Rect { w: f64, h: f64 },
}

#[test]
fn struct_metadata() {
    let info = Account::type_info();
    assert_eq!(info.kind(), ReflectKind::Struct);
    assert!(info.type_is::<Account>());

    let info = info.as_struct().unwrap();
    assert_eq!(info.field_len(), 3);
    assert!(info.field("owner").unwrap().is_public());
    assert!(info.field("active").unwrap().is_public());
    assert!(!info.field("balance").unwrap().is_public());
    assert!(info.field("balance").unwrap().ty().is::<i64>());
    assert!(info.field("missing").is_none());
}

#[test]
fn accessor_naming_convention() {
    let info = Account::type_info().as_struct().unwrap();

    let getter_names: Vec<_> = getters(info).iter().map(|g| g.name()).collect();
    assert_eq!(getter_names, ["get_owner", "is_active", "get_balance"]);

    let setter_names: Vec<_> = setters(info).iter().map(|s| s.name()).collect();
    assert_eq!(setter_names, ["set_owner", "set_active", "set_balance"]);
}

#[test]
fn struct_ops_by_name_and_index() {
    let mut account = Account {
        owner: String::from("ada"),
        active: true,
        balance: 10,
    };

    assert_eq!(account.field_len(), 3);
    assert_eq!(account.name_at(0), Some("owner"));
    assert_eq!(account.name_at(3), None);

    let owner: &dyn Struct = &account;
    assert_eq!(owner.field_as::<String>("owner").map(String::as_str), Some("ada"));
    assert_eq!(owner.field_at_as::<bool>(1), Some(&true));

    let account_mut: &mut dyn Struct = &mut account;
    *account_mut.field_mut_as::<i64>("balance").unwrap() = 99;
    assert_eq!(account.balance, 99);

    let collected: Vec<_> = account.iter_fields().collect();
    assert_eq!(collected.len(), 3);
}

#[test]
fn derived_struct_equality_is_fieldwise() {
    let a = Account {
        owner: String::from("ada"),
        active: true,
        balance: 1,
    };
    let b = Account {
        owner: String::from("ada"),
        active: true,
        balance: 1,
    };
    let c = Account {
        owner: String::from("ada"),
        active: true,
        balance: 2,
    };

    assert_eq!(a.reflect_partial_eq(&b), Some(true));
    assert_eq!(a.reflect_partial_eq(&c), Some(false));
    assert_eq!(a.reflect_partial_eq(&5_i32), Some(false));
}

#[test]
fn generic_struct_metadata_is_per_instantiation() {
    let info = <Wrapper<i32>>::type_info();
    assert!(info.type_is::<Wrapper<i32>>());
    assert!(
        info.as_struct()
            .unwrap()
            .field("value")
            .unwrap()
            .ty()
            .is::<i32>()
    );

    let info = <Wrapper<String>>::type_info();
    assert!(info.type_is::<Wrapper<String>>());
    assert!(
        info.as_struct()
            .unwrap()
            .field("value")
            .unwrap()
            .ty()
            .is::<String>()
    );
}

#[test]
fn ignored_fields_are_invisible() {
    let info = Session::type_info().as_struct().unwrap();
    assert_eq!(info.field_len(), 1);
    assert!(info.field("secret").is_none());

    let session = Session {
        user: String::from("ada"),
        secret: 42,
    };
    assert!(session.field("secret").is_none());
    assert_eq!(session.field_len(), 1);
    // The ignored field is still plain data.
    assert_eq!(session.secret, 42);
}

#[test]
fn flattened_fields_expand_in_ancestor_enumeration() {
    let info = Document::type_info().as_struct().unwrap();

    let own: Vec<_> = fields(info).iter().map(|f| f.name()).collect();
    assert_eq!(own, ["title", "audit"]);

    let all: Vec<_> = fields_including_ancestors(info)
        .iter()
        .map(|f| f.name())
        .collect();
    assert_eq!(all, ["title", "created_by", "revision"]);
}

#[test]
fn enum_metadata_lists_variants_in_declaration_order() {
    let info = Status::type_info().as_enum().unwrap();
    assert_eq!(info.variant_len(), 3);
    assert_eq!(info.variant_at(0).unwrap().name(), "Draft");
    assert_eq!(info.variant_at(2).unwrap().name(), "Archived");
    assert_eq!(info.variant("Published").unwrap().index(), 1);
    assert_eq!(info.variant("Published").unwrap().kind(), VariantKind::Unit);
}

#[test]
fn enum_ops_cover_all_variant_shapes() {
    let point = Shape::Point;
    assert_eq!(point.variant_name(), "Point");
    assert_eq!(point.variant_index(), 0);
    assert_eq!(point.variant_kind(), VariantKind::Unit);
    assert_eq!(point.field_len(), 0);
    assert!(point.field_at(0).is_none());

    let circle = Shape::Circle(2.0);
    assert_eq!(circle.variant_kind(), VariantKind::Tuple);
    assert_eq!(circle.field_len(), 1);
    assert_eq!(circle.field_at(0).unwrap().downcast_ref::<f64>(), Some(&2.0));
    assert!(circle.field("radius").is_none());

    let mut rect = Shape::Rect { w: 3.0, h: 4.0 };
    assert_eq!(rect.variant_kind(), VariantKind::Struct);
    assert_eq!(rect.field("w").unwrap().downcast_ref::<f64>(), Some(&3.0));
    *rect.field_mut("h").unwrap().downcast_mut::<f64>().unwrap() = 5.0;
    assert!(matches!(rect, Shape::Rect { h, .. } if h == 5.0));
}

#[test]
fn derived_enum_equality() {
    assert_eq!(Status::Draft.reflect_partial_eq(&Status::Draft), Some(true));
    assert_eq!(
        Status::Draft.reflect_partial_eq(&Status::Archived),
        Some(false)
    );

    let a = Shape::Rect { w: 1.0, h: 2.0 };
    let b = Shape::Rect { w: 1.0, h: 2.0 };
    let c = Shape::Circle(1.0);
    assert_eq!(a.reflect_partial_eq(&b), Some(true));
    assert_eq!(a.reflect_partial_eq(&c), Some(false));
}

#[test]
fn unit_enums_expose_a_variant_array() {
    assert_eq!(
        Status::VARIANTS,
        [Status::Draft, Status::Published, Status::Archived]
    );
}

#[test]
fn derived_set_replaces_whole_value() {
    let mut account = Account {
        owner: String::from("ada"),
        active: false,
        balance: 0,
    };
    let replacement = Account {
        owner: String::from("grace"),
        active: true,
        balance: 7,
    };

    account.set(replacement.into_boxed_reflect()).unwrap();
    assert_eq!(account.owner, "grace");
    assert!(account.set(3_i32.into_boxed_reflect()).is_err());
}
