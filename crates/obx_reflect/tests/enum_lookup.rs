//! Enum lookup against derived `VariantArray` enums.

use obx_reflect::derive::Reflect;
use obx_reflect::error::{ErrorCategory, ReflectError};
use obx_reflect::lookup::{VariantArray, variant_by, variant_by_or_none};

#[derive(Reflect, Debug, PartialEq)]
enum Currency {
    Eur,
    Usd,
    Chf,
    Internal,
}

impl Currency {
    fn code(&self) -> Option<&'static str> {
        match self {
            Currency::Eur => Some("EUR"),
            Currency::Usd => Some("USD"),
            Currency::Chf => Some("CHF"),
            // Not exposed externally; has no code.
            Currency::Internal => None,
        }
    }

    fn region(&self) -> Option<&'static str> {
        match self {
            Currency::Eur => Some("europe"),
            Currency::Usd => Some("americas"),
            Currency::Chf => Some("europe"),
            Currency::Internal => None,
        }
    }
}

#[test]
fn derive_generates_declaration_order_variants() {
    assert_eq!(
        Currency::VARIANTS,
        [
            Currency::Eur,
            Currency::Usd,
            Currency::Chf,
            Currency::Internal
        ]
    );
}

#[test]
fn finds_the_constant_by_property() {
    let found = variant_by(Currency::code, Some(&"USD")).unwrap();
    assert_eq!(found, Some(&Currency::Usd));
}

#[test]
fn first_declaration_order_match_wins_among_duplicates() {
    // Eur and Chf share a region; Eur is declared first.
    let found = variant_by(Currency::region, Some(&"europe")).unwrap();
    assert_eq!(found, Some(&Currency::Eur));
}

#[test]
fn constants_with_absent_properties_never_match() {
    let found = variant_by(Currency::code, Some(&"INTERNAL")).unwrap();
    assert_eq!(found, None);
}

#[test]
fn no_match_yields_an_empty_result() {
    let found = variant_by(Currency::code, Some(&"JPY")).unwrap();
    assert_eq!(found, None);
    assert_eq!(variant_by_or_none(Currency::code, Some(&"JPY")), None);
}

#[test]
fn absent_argument_strict_and_lenient() {
    let err = variant_by(Currency::code, None).unwrap_err();
    assert!(matches!(err, ReflectError::AbsentArgument { .. }));
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);

    assert_eq!(variant_by_or_none(Currency::code, None), None);
}
