use core::fmt;

use crate::Reflect;
use crate::error::ReflectError;
use crate::info::{DynamicTyped, Ty};

// -----------------------------------------------------------------------------
// Accessor functions

/// Erased invoker of a conventional getter.
///
/// Borrows the field value from the target object.
pub type GetFn = for<'a> fn(&'a dyn Reflect) -> Result<&'a dyn Reflect, ReflectError>;

/// Erased invoker of a conventional setter.
///
/// Consumes the boxed value; returns it inside [`SetValueError`] when the
/// target or value type does not match.
pub type SetFn = fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), SetValueError>;

/// The failure of a setter invocation, carrying the unconsumed value.
pub enum SetValueError {
    /// The target object was not of the accessor's owning type.
    MismatchedTarget {
        /// Type path the accessor belongs to.
        expected: &'static str,
        /// The value, returned unconsumed.
        value: Box<dyn Reflect>,
    },
    /// The value was not of the field's type.
    MismatchedValue {
        /// The field's [`Ty`].
        expected: Ty,
        /// The value, returned unconsumed.
        value: Box<dyn Reflect>,
    },
}

impl SetValueError {
    /// Recovers the unconsumed value.
    pub fn into_value(self) -> Box<dyn Reflect> {
        match self {
            Self::MismatchedTarget { value, .. } | Self::MismatchedValue { value, .. } => value,
        }
    }

    /// Converts into the crate error taxonomy, naming the failing field.
    pub fn to_error(&self, field: &str) -> ReflectError {
        match self {
            Self::MismatchedTarget { expected, value } => ReflectError::MismatchedTarget {
                expected,
                actual: value.reflect_type_info().type_path(),
            },
            Self::MismatchedValue { expected, value } => ReflectError::MismatchedValue {
                field: field.to_owned(),
                expected: expected.path(),
                actual: value.reflect_type_info().type_path(),
            },
        }
    }
}

impl fmt::Debug for SetValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedTarget { expected, .. } => f
                .debug_struct("MismatchedTarget")
                .field("expected", expected)
                .finish_non_exhaustive(),
            Self::MismatchedValue { expected, .. } => f
                .debug_struct("MismatchedValue")
                .field("expected", &expected.path())
                .finish_non_exhaustive(),
        }
    }
}

// -----------------------------------------------------------------------------
// PropertyAccessor

/// Which side of a field an accessor covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// A `get_*` / `is_*` accessor.
    Getter,
    /// A `set_*` accessor.
    Setter,
}

/// A conventional accessor generated for a single field.
///
/// The accessor exists whether or not the field is public; invocation
/// through [`crate::props::get_by_name`] and friends is what enforces the
/// visibility gate, mirroring how discovery sees every accessor but only
/// public ones may be called.
pub struct PropertyAccessor {
    name: &'static str,
    field: &'static str,
    kind: AccessorKind,
    public: bool,
    get: Option<GetFn>,
    set: Option<SetFn>,
}

impl PropertyAccessor {
    /// Creates a getter accessor.
    pub fn getter(name: &'static str, field: &'static str, public: bool, get: GetFn) -> Self {
        Self {
            name,
            field,
            kind: AccessorKind::Getter,
            public,
            get: Some(get),
            set: None,
        }
    }

    /// Creates a setter accessor.
    pub fn setter(name: &'static str, field: &'static str, public: bool, set: SetFn) -> Self {
        Self {
            name,
            field,
            kind: AccessorKind::Setter,
            public,
            get: None,
            set: Some(set),
        }
    }

    /// Returns the accessor name, e.g. `"get_age"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name of the field the accessor covers.
    #[inline]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the [`AccessorKind`].
    #[inline]
    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// Returns `true` if the covered field is declared `pub`.
    #[inline]
    pub fn is_public(&self) -> bool {
        self.public
    }

    /// Invokes the getter, borrowing the field value from `target`.
    ///
    /// Fails when this accessor is a setter or the target is of the wrong
    /// type. The visibility gate is *not* applied here.
    pub fn get<'a>(&self, target: &'a dyn Reflect) -> Result<&'a dyn Reflect, ReflectError> {
        match self.get {
            Some(get) => get(target),
            None => Err(ReflectError::AccessorNotFound {
                kind: "getter",
                name: self.name.to_owned(),
                type_path: target.reflect_type_info().type_path(),
            }),
        }
    }

    /// Invokes the setter, moving `value` into the field.
    ///
    /// Fails when this accessor is a getter or the types do not match; the
    /// value travels back inside the error. The visibility gate is *not*
    /// applied here.
    pub fn set(
        &self,
        target: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), SetValueError> {
        match self.set {
            Some(set) => set(target, value),
            None => Err(SetValueError::MismatchedTarget {
                expected: target.reflect_type_info().type_path(),
                value,
            }),
        }
    }
}

impl fmt::Debug for PropertyAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyAccessor")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("kind", &self.kind)
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
