//! Static type metadata.
//!
//! Every reflectable type exposes a [`TypeInfo`] describing its shape:
//! fields and accessors for structs, variants for enums, element types for
//! containers. The metadata is built once per type inside a static cell (see
//! [`crate::impls::NonGenericTypeInfoCell`]) and handed out as `&'static`.

mod container_info;
mod enum_info;
mod opaque_info;
mod struct_info;
mod ty;
mod type_info;

pub use container_info::{IntoContainedFn, ListInfo, MapInfo, NoneFn, OptionalInfo, SetInfo, WrapFn};
pub use enum_info::{EnumInfo, VariantInfo, VariantKind};
pub use opaque_info::OpaqueInfo;
pub use struct_info::{FieldInfo, StructInfo};
pub use ty::{DynamicTyped, Ty, Typed};
pub use type_info::{ReflectKind, TypeInfo};
