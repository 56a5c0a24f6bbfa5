//! Field-by-field comparison of same-typed values.
//!
//! [`compare_values`] compares every getter-exposed value of two objects of
//! the same runtime type. A null-safe baseline equality
//! ([`Reflect::reflect_partial_eq`]) runs first; where it reports unequal,
//! type-specific equivalence rules apply:
//!
//! - absent text equals empty text (`None` vs `Some("")`),
//! - absent numeric equals zero (`None` vs `Some(0)`, decimal-normalized),
//! - absent list equals an empty list (`None` vs `Some(vec![])`).
//!
//! The numeric rule deliberately covers only `i32` and `f64`, and the
//! container rule only list kinds — sets and maps are excluded even though
//! [`crate::classify`] treats them as containers. This replicates the
//! equivalence asymmetry of the system this library models; see DESIGN.md.

use crate::Reflect;
use crate::error::ReflectError;
use crate::info::{DynamicTyped, FieldInfo};
use crate::ops::{List, Optional, ReflectRef};
use crate::props::struct_info_of;

// -----------------------------------------------------------------------------
// Comparison entry points

/// Compares all getter-exposed values of two same-typed objects.
///
/// Returns `true` only if every pair of values is equal under the baseline
/// comparison or the equivalence rules. Types without conventional getters
/// (non-structs included) expose nothing to compare and yield `true`.
///
/// Fails with an invalid-argument error when the runtime types differ.
///
/// # Examples
///
/// ```
/// use obx_reflect::Reflect;
/// use obx_reflect::compare::compare_values;
/// use obx_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Customer {
///     pub name: Option<String>,
///     pub visits: i32,
/// }
///
/// let a = Customer { name: None, visits: 3 };
/// let b = Customer { name: Some(String::new()), visits: 3 };
/// assert!(compare_values(a.as_reflect(), b.as_reflect()).unwrap());
/// ```
pub fn compare_values(a: &dyn Reflect, b: &dyn Reflect) -> Result<bool, ReflectError> {
    compare_filtered(a, b, &[], Filter::None)
}

/// Like [`compare_values`], but fields named in `exclude` are skipped.
///
/// Useful for ignoring timestamps or generated identifiers. Matching is
/// case-insensitive.
pub fn compare_values_excluding(
    a: &dyn Reflect,
    b: &dyn Reflect,
    exclude: &[&str],
) -> Result<bool, ReflectError> {
    compare_filtered(a, b, exclude, Filter::Exclude)
}

/// Like [`compare_values`], but only fields named in `retain` are compared.
///
/// Matching is case-insensitive.
pub fn compare_values_retaining(
    a: &dyn Reflect,
    b: &dyn Reflect,
    retain: &[&str],
) -> Result<bool, ReflectError> {
    compare_filtered(a, b, retain, Filter::Retain)
}

#[derive(Clone, Copy)]
enum Filter {
    None,
    Exclude,
    Retain,
}

fn compare_filtered(
    a: &dyn Reflect,
    b: &dyn Reflect,
    names: &[&str],
    filter: Filter,
) -> Result<bool, ReflectError> {
    if a.ty_id() != b.ty_id() {
        return Err(ReflectError::MismatchedComparison {
            left: a.reflect_type_info().type_path(),
            right: b.reflect_type_info().type_path(),
        });
    }

    // Non-struct values expose no getters, so there is nothing to compare.
    let Ok(info) = struct_info_of(a) else {
        return Ok(true);
    };

    for field in info.iter() {
        let selected = match filter {
            Filter::None => true,
            Filter::Exclude => !name_matches(field, names),
            Filter::Retain => name_matches(field, names),
        };
        if !selected {
            continue;
        }
        let Some(getter) = field.getter() else {
            continue;
        };

        let value_a = getter.get(a)?;
        let value_b = getter.get(b)?;

        if value_a.reflect_partial_eq(value_b) == Some(true) {
            continue;
        }
        if !values_equivalent(value_a, value_b) {
            return Ok(false);
        }
    }

    Ok(true)
}

fn name_matches(field: &FieldInfo, names: &[&str]) -> bool {
    names
        .iter()
        .any(|name| field.name().eq_ignore_ascii_case(name))
}

// -----------------------------------------------------------------------------
// Equivalence rules

/// Applies the type-specific equivalence rules to a pair the baseline
/// comparison reported unequal.
///
/// Exactly one side must be absent; the present side must be the empty
/// representative of its type.
fn values_equivalent(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    let (ReflectRef::Optional(a), ReflectRef::Optional(b)) = (a.reflect_ref(), b.reflect_ref())
    else {
        return false;
    };

    let present = match (a.contained(), b.contained()) {
        (None, Some(value)) | (Some(value), None) => value,
        _ => return false,
    };

    match present.reflect_ref() {
        ReflectRef::Opaque(value) => text_is_empty(value) || number_is_zero(value),
        ReflectRef::List(list) => list.is_empty(),
        _ => false,
    }
}

fn text_is_empty(value: &dyn Reflect) -> bool {
    if let Some(text) = value.downcast_ref::<String>() {
        return text.is_empty();
    }
    if let Some(text) = value.downcast_ref::<&str>() {
        return text.is_empty();
    }
    false
}

/// Zero check via decimal normalization.
///
/// Only `i32` and `f64` receive the treatment; other numeric types fall
/// outside the equivalence rules by design.
fn number_is_zero(value: &dyn Reflect) -> bool {
    if let Some(number) = value.downcast_ref::<i32>() {
        return f64::from(*number) == 0.0;
    }
    if let Some(number) = value.downcast_ref::<f64>() {
        return *number == 0.0;
    }
    false
}
