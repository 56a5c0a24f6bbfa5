//! The global locator's write-once install semantics.
//!
//! The installed registry is process-wide state, so everything lives in a
//! single test; `locator_uninstalled.rs` covers the pre-install error in
//! its own process.

use std::sync::Arc;

use obx_reflect::locator::{ComponentRegistry, install, is_installed, resolve, resolve_named};

struct Clock {
    frozen_at: u64,
}

struct Mailer {
    from: &'static str,
}

#[test]
fn first_install_wins_and_serves_lookups() {
    assert!(!is_installed());

    let mut registry = ComponentRegistry::new();
    registry.insert(Clock { frozen_at: 17 }).unwrap();
    registry.insert_named("mailer", Mailer { from: "noreply" }).unwrap();
    let registry = Arc::new(registry);

    assert!(install(registry.clone()));
    assert!(is_installed());

    assert_eq!(resolve::<Clock>().unwrap().frozen_at, 17);
    assert_eq!(resolve_named::<Mailer>("mailer").unwrap().from, "noreply");

    // Re-installing the same registry is idempotent.
    assert!(install(registry));

    // A different registry is ignored; the original keeps serving.
    let mut replacement = ComponentRegistry::new();
    replacement.insert(Clock { frozen_at: 99 }).unwrap();
    assert!(!install(Arc::new(replacement)));
    assert_eq!(resolve::<Clock>().unwrap().frozen_at, 17);

    // Unknown components still fail cleanly through the global surface.
    assert!(resolve::<Mailer>().is_err());
    assert!(resolve_named::<Clock>("missing").is_err());
}
