//! Lookups against the locator before any registry is installed.
//!
//! Kept in its own integration test so the process never installs one.

use obx_reflect::error::{ErrorCategory, ReflectError};
use obx_reflect::locator::{is_installed, resolve, resolve_named};

#[derive(Debug)]
struct Clock;

#[test]
fn resolving_before_install_is_a_lookup_failure() {
    assert!(!is_installed());

    let err = resolve::<Clock>().unwrap_err();
    assert!(matches!(err, ReflectError::LocatorUninitialized));
    assert_eq!(err.category(), ErrorCategory::LookupFailure);

    let err = resolve_named::<Clock>("clock").unwrap_err();
    assert!(matches!(err, ReflectError::LocatorUninitialized));
}
