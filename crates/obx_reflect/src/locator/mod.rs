//! A process-wide, write-once component locator.
//!
//! [`ComponentRegistry`] is a first-class registry mapping types and names
//! to shared component instances; applications build one during startup and
//! pass it around explicitly where they can.
//!
//! For call sites that cannot take a registry parameter, [`install`] places
//! one registry behind a process-wide slot, set at most once: the first
//! writer wins, later attempts to install a *different* registry are
//! ignored with a warning. [`resolve`] and [`resolve_named`] look
//! components up against the installed registry.

use core::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::error::ReflectError;
use crate::info::Ty;

// -----------------------------------------------------------------------------
// ComponentRegistry

type Component = Arc<dyn Any + Send + Sync>;

/// A registry mapping types and names to shared component instances.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use obx_reflect::locator::ComponentRegistry;
///
/// struct Mailer {
///     from: &'static str,
/// }
///
/// let mut registry = ComponentRegistry::new();
/// registry.insert(Mailer { from: "noreply" }).unwrap();
///
/// let mailer: Arc<Mailer> = registry.get().unwrap();
/// assert_eq!(mailer.from, "noreply");
/// ```
#[derive(Default)]
pub struct ComponentRegistry {
    by_type: HashMap<TypeId, Component>,
    by_name: HashMap<String, Component>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            by_type: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Registers the unnamed component of type `T`.
    ///
    /// Fails with an invalid-argument error when a component of `T` is
    /// already registered; nothing is replaced.
    pub fn insert<T: Any + Send + Sync>(&mut self, component: T) -> Result<(), ReflectError> {
        self.insert_arc(Arc::new(component))
    }

    /// Registers an already-shared unnamed component of type `T`.
    pub fn insert_arc<T: Any + Send + Sync>(
        &mut self,
        component: Arc<T>,
    ) -> Result<(), ReflectError> {
        let key = TypeId::of::<T>();
        if self.by_type.contains_key(&key) {
            return Err(ReflectError::DuplicateComponent {
                name: Ty::of::<T>().path().to_owned(),
            });
        }
        self.by_type.insert(key, component);
        Ok(())
    }

    /// Registers a named component.
    ///
    /// Fails with an invalid-argument error when the name is empty or
    /// already taken; nothing is replaced.
    pub fn insert_named<T: Any + Send + Sync>(
        &mut self,
        name: impl Into<String>,
        component: T,
    ) -> Result<(), ReflectError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ReflectError::EmptyArgument {
                what: "component name",
            });
        }
        if self.by_name.contains_key(&name) {
            return Err(ReflectError::DuplicateComponent { name });
        }
        self.by_name.insert(name, Arc::new(component));
        Ok(())
    }

    /// Returns the unnamed component of type `T`.
    ///
    /// Fails with a lookup error naming the type when none is registered.
    pub fn get<T: Any + Send + Sync>(&self) -> Result<Arc<T>, ReflectError> {
        let component = self
            .by_type
            .get(&TypeId::of::<T>())
            .ok_or_else(|| ReflectError::ComponentNotFound {
                name: Ty::of::<T>().path().to_owned(),
            })?;
        downcast_component(component.clone())
    }

    /// Returns the named component, checked against type `T`.
    ///
    /// Fails with a lookup error when the name is unknown, and with an
    /// invocation error when the registered component is not a `T`.
    pub fn get_named<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>, ReflectError> {
        if name.trim().is_empty() {
            return Err(ReflectError::EmptyArgument {
                what: "component name",
            });
        }
        let component = self
            .by_name
            .get(name)
            .ok_or_else(|| ReflectError::ComponentNotFound {
                name: name.to_owned(),
            })?;
        downcast_component(component.clone())
    }

    /// Returns the number of registered components.
    pub fn len(&self) -> usize {
        self.by_type.len() + self.by_name.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty() && self.by_name.is_empty()
    }
}

fn downcast_component<T: Any + Send + Sync>(component: Component) -> Result<Arc<T>, ReflectError> {
    component
        .downcast::<T>()
        .map_err(|_| ReflectError::MismatchedTarget {
            expected: Ty::of::<T>().path(),
            actual: "a component of another type",
        })
}

// -----------------------------------------------------------------------------
// Global locator

static REGISTRY: OnceLock<Arc<ComponentRegistry>> = OnceLock::new();

/// Installs the process-wide registry.
///
/// The first call wins; the transition is one-way. Re-installing the same
/// registry instance is idempotent, while an attempt to install a
/// *different* one is ignored with a warning. Returns `true` when the given
/// registry is the installed one after the call.
pub fn install(registry: Arc<ComponentRegistry>) -> bool {
    match REGISTRY.set(registry.clone()) {
        Ok(()) => true,
        Err(rejected) => {
            let current = REGISTRY.get().expect("slot is initialized");
            if Arc::ptr_eq(current, &rejected) {
                true
            } else {
                warn!("attempted to install a different component registry; keeping the original");
                false
            }
        }
    }
}

/// Returns `true` once a registry has been installed.
pub fn is_installed() -> bool {
    REGISTRY.get().is_some()
}

/// Resolves the unnamed component of type `T` from the installed registry.
///
/// Fails with a lookup error when no registry is installed or the
/// component is missing.
pub fn resolve<T: Any + Send + Sync>() -> Result<Arc<T>, ReflectError> {
    installed()?.get::<T>()
}

/// Resolves a named component from the installed registry.
pub fn resolve_named<T: Any + Send + Sync>(name: &str) -> Result<Arc<T>, ReflectError> {
    installed()?.get_named::<T>(name)
}

fn installed() -> Result<&'static Arc<ComponentRegistry>, ReflectError> {
    REGISTRY.get().ok_or(ReflectError::LocatorUninitialized)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::ComponentRegistry;
    use crate::error::{ErrorCategory, ReflectError};

    #[derive(Debug)]
    struct Repo {
        rows: usize,
    }

    #[derive(Debug)]
    struct Cache;

    #[test]
    fn lookup_by_type_and_name() {
        let mut registry = ComponentRegistry::new();
        registry.insert(Repo { rows: 3 }).unwrap();
        registry.insert_named("cache", Cache).unwrap();

        assert_eq!(registry.get::<Repo>().unwrap().rows, 3);
        assert!(registry.get_named::<Cache>("cache").is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ComponentRegistry::new();
        registry.insert(Repo { rows: 1 }).unwrap();

        let err = registry.insert(Repo { rows: 2 }).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
        // The original instance survives.
        assert_eq!(registry.get::<Repo>().unwrap().rows, 1);
    }

    #[test]
    fn missing_lookups_name_the_component() {
        let registry = ComponentRegistry::new();

        let err = registry.get::<Repo>().unwrap_err();
        assert!(matches!(err, ReflectError::ComponentNotFound { .. }));

        let err = registry.get_named::<Repo>("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn named_lookup_checks_the_type() {
        let mut registry = ComponentRegistry::new();
        registry.insert_named("repo", Repo { rows: 1 }).unwrap();

        let err = registry.get_named::<Cache>("repo").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvocationFailure);
    }

    #[test]
    fn empty_names_are_invalid() {
        let mut registry = ComponentRegistry::new();
        assert!(registry.insert_named("  ", Cache).is_err());
        assert!(registry.get_named::<Cache>("").is_err());
    }

    #[test]
    fn shared_instances_resolve_to_the_same_allocation() {
        let mut registry = ComponentRegistry::new();
        let repo = Arc::new(Repo { rows: 9 });
        registry.insert_arc(repo.clone()).unwrap();

        let resolved = registry.get::<Repo>().unwrap();
        assert!(Arc::ptr_eq(&repo, &resolved));
    }
}
