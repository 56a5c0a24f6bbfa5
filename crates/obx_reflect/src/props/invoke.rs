use crate::Reflect;
use crate::classify;
use crate::error::ReflectError;
use crate::info::{DynamicTyped, FieldInfo, StructInfo, TypeInfo};
use crate::props::accessor::PropertyAccessor;

// -----------------------------------------------------------------------------
// Resolution

pub(crate) fn struct_info_of(target: &dyn Reflect) -> Result<&'static StructInfo, ReflectError> {
    target
        .reflect_type_info()
        .as_struct()
        .ok_or(ReflectError::NotAStruct {
            type_path: target.reflect_type_info().type_path(),
        })
}

fn validate_name(name: &str, what: &'static str) -> Result<(), ReflectError> {
    if name.trim().is_empty() {
        return Err(ReflectError::EmptyArgument { what });
    }
    Ok(())
}

/// Accessor-name matching is case-insensitive, like the field-name
/// filtering in [`crate::props::filter_accessors`].
fn resolve<'i>(
    info: &'i StructInfo,
    name: &str,
    pick: impl Fn(&'i FieldInfo) -> Option<&'i PropertyAccessor>,
    kind: &'static str,
) -> Result<(&'i FieldInfo, &'i PropertyAccessor), ReflectError> {
    let mut any = false;
    for field in info.iter() {
        let Some(accessor) = pick(field) else {
            continue;
        };
        any = true;
        if accessor.name().eq_ignore_ascii_case(name) {
            if !accessor.is_public() {
                return Err(ReflectError::AccessorNotPublic {
                    name: accessor.name(),
                    type_path: info.type_path(),
                });
            }
            return Ok((field, accessor));
        }
    }

    if any {
        Err(ReflectError::AccessorNotFound {
            kind,
            name: name.to_owned(),
            type_path: info.type_path(),
        })
    } else {
        Err(ReflectError::NoAccessors {
            kind,
            type_path: info.type_path(),
        })
    }
}

pub(crate) fn field_of<'i>(info: &'i StructInfo, name: &str) -> Result<&'i FieldInfo, ReflectError> {
    info.iter()
        .find(|field| field.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| ReflectError::FieldNotFound {
            name: name.to_owned(),
            type_path: info.type_path(),
        })
}

// -----------------------------------------------------------------------------
// Dynamic getter invocation

/// Invokes a getter by its accessor name, e.g. `"get_age"`.
///
/// The getter must exist and its field must be public.
///
/// # Examples
///
/// ```
/// use obx_reflect::Reflect;
/// use obx_reflect::derive::Reflect;
/// use obx_reflect::props::get_by_name;
///
/// #[derive(Reflect)]
/// struct User {
///     pub age: i32,
/// }
///
/// let user = User { age: 30 };
/// let age = get_by_name(user.as_reflect(), "get_age").unwrap();
/// assert_eq!(age.downcast_ref::<i32>(), Some(&30));
/// ```
pub fn get_by_name<'a>(
    target: &'a dyn Reflect,
    name: &str,
) -> Result<&'a dyn Reflect, ReflectError> {
    validate_name(name, "getter name")?;
    let info = struct_info_of(target)?;
    let (_, getter) = resolve(info, name, FieldInfo::getter, "getter")?;
    getter.get(target)
}

/// Invokes the getter of the named field.
///
/// The accessor name is derived from the field: `is_<field>` for `bool`
/// fields, `get_<field>` otherwise.
pub fn get_for_field<'a>(
    target: &'a dyn Reflect,
    field_name: &str,
) -> Result<&'a dyn Reflect, ReflectError> {
    validate_name(field_name, "field name")?;
    let info = struct_info_of(target)?;
    let field = field_of(info, field_name)?;
    let getter = field.getter().ok_or_else(|| ReflectError::NoAccessors {
        kind: "getter",
        type_path: info.type_path(),
    })?;
    get_by_name(target, getter.name())
}

// -----------------------------------------------------------------------------
// Dynamic setter invocation

/// Invokes a setter by its accessor name, e.g. `"set_age"`.
///
/// The setter must exist and its field must be public. `value` may be
/// absent; see [`set_for_field`] for the coercion rules.
pub fn set_by_name(
    target: &mut dyn Reflect,
    name: &str,
    value: Option<Box<dyn Reflect>>,
) -> Result<(), ReflectError> {
    validate_name(name, "setter name")?;
    let info = struct_info_of(target)?;
    let (field, setter) = resolve(info, name, FieldInfo::setter, "setter")?;
    let value = coerce_value(field, value)?;
    let field_name = field.name();
    setter
        .set(target, value)
        .map_err(|failure| failure.to_error(field_name))
}

/// Invokes the setter of the named field (`set_<field>`).
///
/// # Coercion rules
///
/// - A value of the field's exact type passes through.
/// - A bare element value is `Some`-wrapped into an `Option` field, and an
///   `Option` value is unwrapped into a bare field of the element type.
/// - Numeric values convert between scalar types when the conversion is
///   lossless.
/// - An absent value (`None`) stores `None` into an `Option` field and the
///   type-appropriate zero value into a scalar field; for any other field
///   type it is an error.
///
/// # Examples
///
/// ```
/// use obx_reflect::Reflect;
/// use obx_reflect::derive::Reflect;
/// use obx_reflect::props::set_for_field;
///
/// #[derive(Reflect, Default)]
/// struct User {
///     pub age: i32,
/// }
///
/// let mut user = User { age: 30 };
/// set_for_field(user.as_reflect_mut(), "age", None).unwrap();
/// assert_eq!(user.age, 0);
/// ```
pub fn set_for_field(
    target: &mut dyn Reflect,
    field_name: &str,
    value: Option<Box<dyn Reflect>>,
) -> Result<(), ReflectError> {
    validate_name(field_name, "field name")?;
    let info = struct_info_of(target)?;
    let field = field_of(info, field_name)?;
    let setter = field.setter().ok_or_else(|| ReflectError::NoAccessors {
        kind: "setter",
        type_path: info.type_path(),
    })?;
    set_by_name(target, setter.name(), value)
}

// -----------------------------------------------------------------------------
// Value coercion

fn mismatched(field: &FieldInfo, value: &dyn Reflect) -> ReflectError {
    ReflectError::MismatchedValue {
        field: field.name().to_owned(),
        expected: field.ty().path(),
        actual: value.reflect_type_info().type_path(),
    }
}

/// Applies the setter coercion rules, producing a value of the field's
/// exact type.
pub(crate) fn coerce_value(
    field: &FieldInfo,
    value: Option<Box<dyn Reflect>>,
) -> Result<Box<dyn Reflect>, ReflectError> {
    let Some(value) = value else {
        return match field.type_info() {
            TypeInfo::Optional(optional) => Ok(optional.none_value()),
            info => {
                classify::default_value_for(info).ok_or_else(|| ReflectError::AbsentNotStorable {
                    field: field.name().to_owned(),
                    expected: field.ty().path(),
                })
            }
        };
    };

    if value.ty_id() == field.ty().id() {
        return Ok(value);
    }

    // Bare element (possibly numerically widened) into an optional field.
    if let TypeInfo::Optional(optional) = field.type_info() {
        if value.ty_id() == optional.item().id() {
            return optional
                .wrap(value)
                .map_err(|value| mismatched(field, &*value));
        }
        if let Some(widened) = classify::widen_numeric(&*value, optional.item().id()) {
            return optional
                .wrap(widened)
                .map_err(|value| mismatched(field, &*value));
        }
    }

    // Optional value into a bare field of its element type; an absent
    // optional falls back to the zero-substitution path.
    if let TypeInfo::Optional(value_optional) = value.reflect_type_info() {
        if value_optional.item().id() == field.ty().id() {
            return match value_optional.into_contained(value) {
                Ok(Some(contained)) => Ok(contained),
                Ok(None) => coerce_value(field, None),
                Err(value) => Err(mismatched(field, &*value)),
            };
        }
    }

    // Lossless numeric conversion.
    if let Some(widened) = classify::widen_numeric(&*value, field.ty().id()) {
        return Ok(widened);
    }

    Err(mismatched(field, &*value))
}
