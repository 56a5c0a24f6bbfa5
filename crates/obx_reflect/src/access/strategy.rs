use crate::Reflect;
use crate::error::ReflectError;
use crate::info::{DynamicTyped, FieldInfo};
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// SetFailure

/// The failure of a single strategy's set attempt.
///
/// `value` carries the unconsumed value back so the chain can hand it to
/// the next strategy; a `None` value means the attempt consumed it and the
/// chain must stop.
pub struct SetFailure {
    /// What went wrong.
    pub error: ReflectError,
    /// The value, if the strategy did not consume it.
    pub value: Option<Box<dyn Reflect>>,
}

impl SetFailure {
    fn recoverable(error: ReflectError, value: Box<dyn Reflect>) -> Self {
        Self {
            error,
            value: Some(value),
        }
    }

    fn fatal(error: ReflectError) -> Self {
        Self { error, value: None }
    }
}

// -----------------------------------------------------------------------------
// AccessStrategy

/// One tier of the field-access fallback chain.
///
/// A strategy attempts a get or set and reports failure without side
/// effects, so the chain can move on to the next tier. The value handed to
/// [`set`](AccessStrategy::set) has already been coerced to the field's
/// exact type.
pub trait AccessStrategy: Send + Sync {
    /// A short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Attempts to read the field from `target`.
    fn get<'a>(
        &self,
        target: &'a dyn Reflect,
        field: &FieldInfo,
    ) -> Result<&'a dyn Reflect, ReflectError>;

    /// Attempts to write `value` into the field of `target`.
    fn set(
        &self,
        target: &mut dyn Reflect,
        field: &FieldInfo,
        value: Box<dyn Reflect>,
    ) -> Result<(), SetFailure>;
}

// -----------------------------------------------------------------------------
// Tier 1: conventional accessor

/// Accesses the field through its conventional accessor.
///
/// Preferred because it matches how hand-written code would touch the
/// field; only public fields pass its visibility gate.
pub struct AccessorStrategy;

impl AccessStrategy for AccessorStrategy {
    fn name(&self) -> &'static str {
        "accessor"
    }

    fn get<'a>(
        &self,
        target: &'a dyn Reflect,
        field: &FieldInfo,
    ) -> Result<&'a dyn Reflect, ReflectError> {
        let getter = field.getter().ok_or(ReflectError::AccessorNotFound {
            kind: "getter",
            name: field.name().to_owned(),
            type_path: target.reflect_type_info().type_path(),
        })?;
        if !getter.is_public() {
            return Err(ReflectError::AccessorNotPublic {
                name: getter.name(),
                type_path: target.reflect_type_info().type_path(),
            });
        }
        getter.get(target)
    }

    fn set(
        &self,
        target: &mut dyn Reflect,
        field: &FieldInfo,
        value: Box<dyn Reflect>,
    ) -> Result<(), SetFailure> {
        let type_path = target.reflect_type_info().type_path();
        let Some(setter) = field.setter() else {
            return Err(SetFailure::recoverable(
                ReflectError::AccessorNotFound {
                    kind: "setter",
                    name: field.name().to_owned(),
                    type_path,
                },
                value,
            ));
        };
        if !setter.is_public() {
            return Err(SetFailure::recoverable(
                ReflectError::AccessorNotPublic {
                    name: setter.name(),
                    type_path,
                },
                value,
            ));
        }
        let field_name = field.name();
        setter.set(target, value).map_err(|failure| {
            let error = failure.to_error(field_name);
            SetFailure::recoverable(error, failure.into_value())
        })
    }
}

// -----------------------------------------------------------------------------
// Tier 2: raw field handle

/// Accesses the field through its raw [`FieldHandle`](crate::access::FieldHandle),
/// ignoring visibility.
pub struct HandleStrategy;

impl AccessStrategy for HandleStrategy {
    fn name(&self) -> &'static str {
        "handle"
    }

    fn get<'a>(
        &self,
        target: &'a dyn Reflect,
        field: &FieldInfo,
    ) -> Result<&'a dyn Reflect, ReflectError> {
        let handle = field.handle().ok_or(ReflectError::AccessorNotFound {
            kind: "field handle",
            name: field.name().to_owned(),
            type_path: target.reflect_type_info().type_path(),
        })?;
        handle.read(target)
    }

    fn set(
        &self,
        target: &mut dyn Reflect,
        field: &FieldInfo,
        value: Box<dyn Reflect>,
    ) -> Result<(), SetFailure> {
        let Some(handle) = field.handle() else {
            return Err(SetFailure::recoverable(
                ReflectError::AccessorNotFound {
                    kind: "field handle",
                    name: field.name().to_owned(),
                    type_path: target.reflect_type_info().type_path(),
                },
                value,
            ));
        };
        // A handle write that fails has already reclaimed and dropped the
        // value; the chain cannot continue past it.
        handle.write(target, value).map_err(SetFailure::fatal)
    }
}

// -----------------------------------------------------------------------------
// Tier 3: brute-force reflective access

/// Accesses the field through [`Struct::field`](crate::ops::Struct::field) /
/// [`field_mut`](crate::ops::Struct::field_mut) and
/// [`Reflect::set`](crate::Reflect::set).
///
/// The most compatible tier; works for anything that reflects as a struct.
pub struct FieldStrategy;

impl AccessStrategy for FieldStrategy {
    fn name(&self) -> &'static str {
        "field"
    }

    fn get<'a>(
        &self,
        target: &'a dyn Reflect,
        field: &FieldInfo,
    ) -> Result<&'a dyn Reflect, ReflectError> {
        let type_path = target.reflect_type_info().type_path();
        let struct_ref = target
            .reflect_ref()
            .as_struct()
            .ok_or(ReflectError::NotAStruct { type_path })?;
        struct_ref
            .field(field.name())
            .ok_or_else(|| ReflectError::FieldNotFound {
                name: field.name().to_owned(),
                type_path,
            })
    }

    fn set(
        &self,
        target: &mut dyn Reflect,
        field: &FieldInfo,
        value: Box<dyn Reflect>,
    ) -> Result<(), SetFailure> {
        let type_path = target.reflect_type_info().type_path();
        let Some(struct_mut) = target.reflect_mut().as_struct() else {
            return Err(SetFailure::recoverable(
                ReflectError::NotAStruct { type_path },
                value,
            ));
        };
        let Some(field_value) = struct_mut.field_mut(field.name()) else {
            return Err(SetFailure::recoverable(
                ReflectError::FieldNotFound {
                    name: field.name().to_owned(),
                    type_path,
                },
                value,
            ));
        };
        let expected = field.ty().path();
        field_value.set(value).map_err(|value| {
            let error = ReflectError::MismatchedValue {
                field: field.name().to_owned(),
                expected,
                actual: value.reflect_type_info().type_path(),
            };
            SetFailure::recoverable(error, value)
        })
    }
}
