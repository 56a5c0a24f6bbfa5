use core::any::TypeId;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Static storage for the [`TypeInfo`] of a non-generic type.
///
/// Internally an [`OnceLock`]; almost no additional expense.
///
/// # Example
///
/// ```ignore
/// impl Typed for Foo {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Foo>()))
///     }
/// }
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored [`TypeInfo`], initializing it from `f` on first
    /// use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Static storage for the [`TypeInfo`] of a generic type.
///
/// A `static CELL` inside a generic function is shared by every
/// instantiation, so the cell keys the stored info by [`TypeId`].
///
/// # Example
///
/// ```ignore
/// impl<T: Reflect + Typed> Typed for Foo<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_init::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
///     }
/// }
/// ```
pub struct GenericTypeInfoCell(OnceLock<RwLock<HashMap<TypeId, &'static TypeInfo>>>);

impl GenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored [`TypeInfo`] for `T`, initializing it from `f` on
    /// first use.
    ///
    /// The info is leaked on first initialization; each distinct `T` leaks
    /// exactly once for the lifetime of the process.
    pub fn get_or_init<T: 'static>(&self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        let key = TypeId::of::<T>();
        let table = self.0.get_or_init(|| RwLock::new(HashMap::new()));

        if let Some(info) = table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return info;
        }

        let mut table = table.write().unwrap_or_else(PoisonError::into_inner);
        // A concurrent writer may have raced us between the locks.
        *table.entry(key).or_insert_with(|| Box::leak(Box::new(f())))
    }
}
