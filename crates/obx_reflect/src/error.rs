//! The error taxonomy shared by every utility surface in this crate.
//!
//! All failures are reported through [`ReflectError`]. Variants fall into
//! three [categories](ErrorCategory):
//!
//! - **invalid argument** — a precondition on the inputs failed; raised
//!   before any reflective work is attempted.
//! - **lookup failure** — a requested accessor, field, variant, or component
//!   could not be resolved.
//! - **invocation failure** — the reflective operation itself failed; wraps
//!   the underlying cause where one exists.
//!
//! No error is retried or suppressed internally; every failure is surfaced
//! to the caller with the name of the failing field, accessor, or component.

use thiserror::Error;

// -----------------------------------------------------------------------------
// ReflectError

/// The single error type for all reflection utilities.
#[derive(Debug, Error)]
pub enum ReflectError {
    /// A required textual argument was empty.
    #[error("{what} cannot be empty")]
    EmptyArgument {
        /// Description of the offending argument.
        what: &'static str,
    },

    /// A required argument was absent.
    #[error("{what} cannot be absent")]
    AbsentArgument {
        /// Description of the offending argument.
        what: &'static str,
    },

    /// Two values handed to the comparison utility had different runtime types.
    #[error("values to compare must be of the same type, got `{left}` and `{right}`")]
    MismatchedComparison {
        /// Type path of the left value.
        left: &'static str,
        /// Type path of the right value.
        right: &'static str,
    },

    /// A component was registered twice under the same type or name.
    #[error("component `{name}` is already registered")]
    DuplicateComponent {
        /// The type path or registration name.
        name: String,
    },

    /// No accessor with the requested name exists on the type.
    #[error("no {kind} named `{name}` on `{type_path}`")]
    AccessorNotFound {
        /// `"getter"` or `"setter"`.
        kind: &'static str,
        /// The requested accessor name.
        name: String,
        /// Type path of the target.
        type_path: &'static str,
    },

    /// The type has no accessors of the requested kind at all.
    #[error("there is no {kind} on `{type_path}`")]
    NoAccessors {
        /// `"getter"` or `"setter"`.
        kind: &'static str,
        /// Type path of the target.
        type_path: &'static str,
    },

    /// The accessor exists but its field is not public.
    #[error("accessor `{name}` on `{type_path}` is not public")]
    AccessorNotPublic {
        /// The resolved accessor name.
        name: &'static str,
        /// Type path of the target.
        type_path: &'static str,
    },

    /// No field with the requested name exists on the type.
    #[error("no field named `{name}` on `{type_path}`")]
    FieldNotFound {
        /// The requested field name.
        name: String,
        /// Type path of the target.
        type_path: &'static str,
    },

    /// The target type carries no reflectable fields.
    #[error("type `{type_path}` is not a reflectable struct")]
    NotAStruct {
        /// Type path of the target.
        type_path: &'static str,
    },

    /// The global locator was queried before a registry was installed.
    #[error("component registry has not been installed yet")]
    LocatorUninitialized,

    /// The registry holds no component matching the request.
    #[error("no component registered for `{name}`")]
    ComponentNotFound {
        /// The requested type path or registration name.
        name: String,
    },

    /// An accessor was invoked against a value of the wrong type.
    #[error("accessor of `{expected}` invoked on a `{actual}`")]
    MismatchedTarget {
        /// Type path the accessor belongs to.
        expected: &'static str,
        /// Type path of the value it was invoked on.
        actual: &'static str,
    },

    /// A value of the wrong type was supplied to a setter or field write.
    #[error("field `{field}` expects `{expected}`, got `{actual}`")]
    MismatchedValue {
        /// Name of the field being written.
        field: String,
        /// Type path the field expects.
        expected: &'static str,
        /// Type path of the supplied value.
        actual: &'static str,
    },

    /// An absent value was written into a field with no absent representation
    /// and no type-appropriate zero value.
    #[error("cannot store an absent value in field `{field}` of type `{expected}`")]
    AbsentNotStorable {
        /// Name of the field being written.
        field: String,
        /// Type path the field expects.
        expected: &'static str,
    },

    /// Every strategy in an access chain failed.
    #[error("failed to {op} field `{field}` after trying all strategies")]
    StrategiesExhausted {
        /// `"get"` or `"set"`.
        op: &'static str,
        /// Name of the field being accessed.
        field: String,
        /// The failure reported by the last strategy tried.
        #[source]
        source: Box<ReflectError>,
    },
}

// -----------------------------------------------------------------------------
// Categories

/// The coarse classification of a [`ReflectError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A precondition on the inputs failed.
    InvalidArgument,
    /// A requested accessor, field, variant, or component does not exist.
    LookupFailure,
    /// The reflective operation itself failed.
    InvocationFailure,
}

impl ReflectError {
    /// Returns the [category](ErrorCategory) of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyArgument { .. }
            | Self::AbsentArgument { .. }
            | Self::MismatchedComparison { .. }
            | Self::DuplicateComponent { .. } => ErrorCategory::InvalidArgument,
            Self::AccessorNotFound { .. }
            | Self::NoAccessors { .. }
            | Self::AccessorNotPublic { .. }
            | Self::FieldNotFound { .. }
            | Self::NotAStruct { .. }
            | Self::LocatorUninitialized
            | Self::ComponentNotFound { .. } => ErrorCategory::LookupFailure,
            Self::MismatchedTarget { .. }
            | Self::MismatchedValue { .. }
            | Self::AbsentNotStorable { .. }
            | Self::StrategiesExhausted { .. } => ErrorCategory::InvocationFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCategory, ReflectError};

    #[test]
    fn categories() {
        let err = ReflectError::AbsentArgument { what: "expected value" };
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);

        let err = ReflectError::LocatorUninitialized;
        assert_eq!(err.category(), ErrorCategory::LookupFailure);

        let err = ReflectError::StrategiesExhausted {
            op: "set",
            field: "age".into(),
            source: Box::new(ReflectError::AccessorNotPublic {
                name: "set_age",
                type_path: "Foo",
            }),
        };
        assert_eq!(err.category(), ErrorCategory::InvocationFailure);
    }

    #[test]
    fn exhausted_chain_names_field_and_keeps_cause() {
        let err = ReflectError::StrategiesExhausted {
            op: "get",
            field: "age".into(),
            source: Box::new(ReflectError::FieldNotFound {
                name: "age".into(),
                type_path: "Foo",
            }),
        };
        let message = err.to_string();
        assert!(message.contains("age"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
