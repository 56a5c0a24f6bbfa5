//! Enum constant lookup by extracted property.
//!
//! Scans an enum's constants in declaration order and returns the first one
//! whose extracted property equals a target value. Constants whose property
//! is absent are skipped and never match.

use crate::error::ReflectError;

// -----------------------------------------------------------------------------
// VariantArray

/// An enum whose constants can be enumerated in declaration order.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for enums
/// consisting solely of unit variants.
pub trait VariantArray: Sized + 'static {
    /// Every constant of the enum, in declaration order.
    const VARIANTS: &'static [Self];
}

// -----------------------------------------------------------------------------
// Lookup

/// Finds the first constant of `E` whose extracted property equals
/// `expected`.
///
/// Constants for which `extract` returns `None` are skipped. Returns
/// `Ok(None)` when no constant matches; fails with an invalid-argument
/// error when `expected` is absent.
///
/// # Examples
///
/// ```
/// use obx_reflect::derive::Reflect;
/// use obx_reflect::lookup::variant_by;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// enum Status {
///     Active,
///     Suspended,
///     Retired,
/// }
///
/// impl Status {
///     fn code(&self) -> Option<i32> {
///         match self {
///             Status::Active => Some(1),
///             Status::Suspended => Some(2),
///             Status::Retired => None,
///         }
///     }
/// }
///
/// let found = variant_by(Status::code, Some(&2)).unwrap();
/// assert_eq!(found, Some(&Status::Suspended));
///
/// let missing = variant_by(Status::code, Some(&9)).unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn variant_by<E, R>(
    extract: impl Fn(&E) -> Option<R>,
    expected: Option<&R>,
) -> Result<Option<&'static E>, ReflectError>
where
    E: VariantArray,
    R: PartialEq,
{
    let Some(expected) = expected else {
        return Err(ReflectError::AbsentArgument {
            what: "expected property value",
        });
    };
    Ok(find(extract, expected))
}

/// Like [`variant_by`], but absent arguments and no-match both yield
/// `None` instead of an error.
pub fn variant_by_or_none<E, R>(
    extract: impl Fn(&E) -> Option<R>,
    expected: Option<&R>,
) -> Option<&'static E>
where
    E: VariantArray,
    R: PartialEq,
{
    find(extract, expected?)
}

fn find<E, R>(extract: impl Fn(&E) -> Option<R>, expected: &R) -> Option<&'static E>
where
    E: VariantArray,
    R: PartialEq,
{
    E::VARIANTS
        .iter()
        .find(|variant| extract(variant).is_some_and(|property| property == *expected))
}

#[cfg(test)]
mod tests {
    use super::{VariantArray, variant_by, variant_by_or_none};
    use crate::error::{ErrorCategory, ReflectError};

    #[derive(Debug, PartialEq)]
    enum Grade {
        A,
        B,
        C,
    }

    impl VariantArray for Grade {
        const VARIANTS: &'static [Self] = &[Grade::A, Grade::B, Grade::C];
    }

    impl Grade {
        fn points(&self) -> Option<u8> {
            match self {
                Grade::A => Some(4),
                Grade::B => Some(3),
                Grade::C => None,
            }
        }

        // B and C share a label; declaration order decides the winner.
        fn label(&self) -> Option<&'static str> {
            match self {
                Grade::A => Some("pass"),
                Grade::B => Some("pass"),
                Grade::C => Some("fail"),
            }
        }
    }

    #[test]
    fn first_declaration_order_match_wins() {
        let found = variant_by(Grade::label, Some(&"pass")).unwrap();
        assert_eq!(found, Some(&Grade::A));
    }

    #[test]
    fn absent_properties_never_match() {
        // Grade::C has no point value; looking for any value skips it.
        let found = variant_by(Grade::points, Some(&3)).unwrap();
        assert_eq!(found, Some(&Grade::B));
        let missing = variant_by(Grade::points, Some(&0)).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn absent_argument_is_an_error_in_the_strict_variant() {
        let err = variant_by(Grade::points, None).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
        assert!(matches!(err, ReflectError::AbsentArgument { .. }));
    }

    #[test]
    fn lenient_variant_swallows_absent_argument() {
        assert_eq!(variant_by_or_none(Grade::points, None), None);
        assert_eq!(
            variant_by_or_none(Grade::points, Some(&4)),
            Some(&Grade::A)
        );
    }
}
