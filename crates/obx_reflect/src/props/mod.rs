//! Conventional accessors: discovery and dynamic invocation by name.
//!
//! The derive macro generates one getter (`get_<field>`, or `is_<field>`
//! for `bool` fields) and one setter (`set_<field>`) per reflectable field.
//! This module enumerates those accessors from a type's metadata, filters
//! them by field name, and invokes them dynamically — with the wrapper and
//! zero-value coercion rules applied on the setter path.

mod accessor;
mod discover;
mod invoke;
mod safe;

pub use accessor::{AccessorKind, GetFn, PropertyAccessor, SetFn, SetValueError};
pub use discover::{
    FilterMode, accessors, fields, fields_including_ancestors, filter_accessors, getters, setters,
};
pub use invoke::{get_by_name, get_for_field, set_by_name, set_for_field};
pub(crate) use invoke::{coerce_value, field_of, struct_info_of};
pub use safe::{remove_nones, safe_get, safe_get_or};
