use crate::Reflect;
use crate::access::strategy::{AccessStrategy, AccessorStrategy, FieldStrategy, HandleStrategy};
use crate::error::ReflectError;
use crate::props::{coerce_value, field_of, struct_info_of};

// -----------------------------------------------------------------------------
// FieldAccessor

/// Reads and writes struct fields through an ordered chain of
/// [`AccessStrategy`] objects.
///
/// [`FieldAccessor::new`] builds the conventional three-tier chain —
/// accessor, handle, brute force — succeeding even when the field is not
/// public. [`with_strategies`](FieldAccessor::with_strategies) accepts a
/// custom ordered list.
///
/// # Examples
///
/// ```
/// use obx_reflect::Reflect;
/// use obx_reflect::access::FieldAccessor;
/// use obx_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Account {
///     // Not public: the accessor tier refuses it, the handle tier does not.
///     balance: i64,
/// }
///
/// let accessor = FieldAccessor::new();
/// let mut account = Account { balance: 12 };
///
/// accessor
///     .set(account.as_reflect_mut(), "balance", Some(Box::new(99_i64)))
///     .unwrap();
///
/// let value = accessor.get(account.as_reflect(), "balance").unwrap();
/// assert_eq!(value.downcast_ref::<i64>(), Some(&99));
/// ```
pub struct FieldAccessor {
    strategies: Vec<Box<dyn AccessStrategy>>,
}

impl Default for FieldAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldAccessor {
    /// Builds the conventional chain: [`AccessorStrategy`],
    /// [`HandleStrategy`], [`FieldStrategy`].
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(AccessorStrategy),
            Box::new(HandleStrategy),
            Box::new(FieldStrategy),
        ])
    }

    /// Builds a chain from a custom ordered strategy list.
    pub fn with_strategies(strategies: Vec<Box<dyn AccessStrategy>>) -> Self {
        Self { strategies }
    }

    /// Reads the named field from `target`, trying each strategy in order.
    ///
    /// Fails with a chain-exhausted error wrapping the last strategy
    /// failure when no tier succeeds.
    pub fn get<'a>(
        &self,
        target: &'a dyn Reflect,
        field_name: &str,
    ) -> Result<&'a dyn Reflect, ReflectError> {
        let info = struct_info_of(target)?;
        let field = field_of(info, field_name)?;

        let mut last_error = ReflectError::EmptyArgument {
            what: "strategy chain",
        };
        for strategy in &self.strategies {
            match strategy.get(target, field) {
                Ok(value) => return Ok(value),
                Err(error) => last_error = error,
            }
        }

        Err(ReflectError::StrategiesExhausted {
            op: "get",
            field: field_name.to_owned(),
            source: Box::new(last_error),
        })
    }

    /// Writes a value into the named field of `target`, trying each
    /// strategy in order.
    ///
    /// The value goes through the same coercion rules as
    /// [`crate::props::set_for_field`] (wrapper wrapping/unwrapping,
    /// lossless numeric widening, zero substitution for an absent value)
    /// before the chain runs, so every tier receives the field's exact
    /// type.
    pub fn set(
        &self,
        target: &mut dyn Reflect,
        field_name: &str,
        value: Option<Box<dyn Reflect>>,
    ) -> Result<(), ReflectError> {
        let info = struct_info_of(target)?;
        let field = field_of(info, field_name)?;
        let mut value = Some(coerce_value(field, value)?);

        let mut last_error = ReflectError::EmptyArgument {
            what: "strategy chain",
        };
        for strategy in &self.strategies {
            let Some(attempt) = value.take() else {
                break;
            };
            match strategy.set(target, field, attempt) {
                Ok(()) => return Ok(()),
                Err(failure) => {
                    last_error = failure.error;
                    value = failure.value;
                }
            }
        }

        Err(ReflectError::StrategiesExhausted {
            op: "set",
            field: field_name.to_owned(),
            source: Box::new(last_error),
        })
    }
}

// -----------------------------------------------------------------------------
// Null-check helper

/// Evaluates a zero-argument value-producing closure and reports whether it
/// produced an absent value.
///
/// A convenience for null-checking call sites:
///
/// ```
/// use obx_reflect::access::produces_none;
///
/// struct User {
///     nickname: Option<String>,
/// }
///
/// let user = User { nickname: None };
/// assert!(produces_none(|| user.nickname.clone()));
/// ```
pub fn produces_none<T>(supplier: impl FnOnce() -> Option<T>) -> bool {
    supplier().is_none()
}
