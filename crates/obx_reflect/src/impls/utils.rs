use core::fmt;

use crate::Reflect;
use crate::info::DynamicTyped;
use crate::ops::{Enum, List, Map, Optional, ReflectRef, Set, Struct};

// -----------------------------------------------------------------------------
// Partial equality helpers

/// A function for implementing [`Reflect::reflect_partial_eq`] on structs.
///
/// # Rules
///
/// 1. If `other` is not a struct of the same type, returns `Some(false)`.
/// 2. Compares fields pairwise by name; any missing or unequal field yields
///    `Some(false)`.
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    for (index, item) in x.iter_fields().enumerate() {
        let name = x.name_at(index)?;
        let Some(y_item) = y.field(name) else {
            return Some(false);
        };
        if item.reflect_partial_eq(y_item) != Some(true) {
            return Some(false);
        }
    }

    Some(true)
}

/// A function for implementing [`Reflect::reflect_partial_eq`] on enums.
///
/// Two enum values are equal when they are of the same type, hold the same
/// variant, and all variant fields compare equal.
#[inline(never)]
pub fn enum_partial_eq(x: &dyn Enum, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let ReflectRef::Enum(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.variant_index() != y.variant_index() || x.field_len() != y.field_len() {
        return Some(false);
    }

    for (index, item) in x.iter_fields().enumerate() {
        let Some(y_item) = y.field_at(index) else {
            return Some(false);
        };
        if item.reflect_partial_eq(y_item) != Some(true) {
            return Some(false);
        }
    }

    Some(true)
}

/// A function for implementing [`Reflect::reflect_partial_eq`] on
/// `Option`-like types.
#[inline(never)]
pub fn optional_partial_eq(x: &dyn Optional, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Optional(y) = y.reflect_ref() else {
        return Some(false);
    };

    match (x.contained(), y.contained()) {
        (None, None) => Some(x.ty_id() == y.ty_id()),
        (Some(x_value), Some(y_value)) => x_value.reflect_partial_eq(y_value),
        _ => Some(false),
    }
}

/// A function for implementing [`Reflect::reflect_partial_eq`] on lists.
///
/// # Rules
///
/// 1. If `other` is not a list, returns `Some(false)`.
/// 2. If the lengths differ, returns `Some(false)`.
/// 3. Compares elements pairwise in order.
#[inline(never)]
pub fn list_partial_eq(x: &dyn List, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::List(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (item, y_item) in x.iter().zip(y.iter()) {
        if item.reflect_partial_eq(y_item) != Some(true) {
            return Some(false);
        }
    }

    Some(true)
}

/// A function for implementing [`Reflect::reflect_partial_eq`] on maps.
///
/// Each key of `x` must resolve in `y` to an equal value, and the entry
/// counts must match.
#[inline(never)]
pub fn map_partial_eq(x: &dyn Map, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Map(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (key, value) in x.iter() {
        let Some(y_value) = y.get(key) else {
            return Some(false);
        };
        if value.reflect_partial_eq(y_value) != Some(true) {
            return Some(false);
        }
    }

    Some(true)
}

/// A function for implementing [`Reflect::reflect_partial_eq`] on sets.
///
/// Every element of `x` must be contained in `y`, and the element counts
/// must match.
#[inline(never)]
pub fn set_partial_eq(x: &dyn Set, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Set(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for item in x.iter() {
        if !y.contains(item) {
            return Some(false);
        }
    }

    Some(true)
}

// -----------------------------------------------------------------------------
// Debug helpers

/// A function for implementing [`Reflect::reflect_debug`] on structs.
pub fn struct_debug(x: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(x.reflect_type_info().type_path());
    for (index, item) in x.iter_fields().enumerate() {
        debug.field(x.name_at(index).unwrap_or("?"), &item);
    }
    debug.finish()
}

/// A function for implementing [`Reflect::reflect_debug`] on enums.
pub fn enum_debug(x: &dyn Enum, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.field_len() == 0 {
        return f.write_str(x.variant_name());
    }
    let mut debug = f.debug_tuple(x.variant_name());
    for item in x.iter_fields() {
        debug.field(&item);
    }
    debug.finish()
}

/// A function for implementing [`Reflect::reflect_debug`] on `Option`-like
/// types.
pub fn optional_debug(x: &dyn Optional, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match x.contained() {
        Some(value) => f.debug_tuple("Some").field(&value).finish(),
        None => f.write_str("None"),
    }
}

/// A function for implementing [`Reflect::reflect_debug`] on lists.
pub fn list_debug(x: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(x.iter()).finish()
}

/// A function for implementing [`Reflect::reflect_debug`] on maps.
pub fn map_debug(x: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(x.iter()).finish()
}

/// A function for implementing [`Reflect::reflect_debug`] on sets.
pub fn set_debug(x: &dyn Set, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(x.iter()).finish()
}
