use core::any::{TypeId, type_name};

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Ty

/// A lightweight handle to a concrete Rust type: its [`TypeId`] plus a
/// diagnostic type path.
///
/// # Examples
///
/// ```
/// use obx_reflect::info::Ty;
///
/// let ty = Ty::of::<i32>();
/// assert!(ty.is::<i32>());
/// assert_eq!(ty.path(), "i32");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ty {
    id: TypeId,
    path: &'static str,
}

impl Ty {
    /// Creates the handle for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the type path of the described type.
    ///
    /// The path comes from [`type_name`] and is meant for diagnostics, not
    /// for stable identification.
    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns `true` if this handle describes `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

// -----------------------------------------------------------------------------
// Typed / DynamicTyped

/// A type with static reflection metadata.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// std impls in [`crate::impls`]. The returned reference is built once and
/// cached for the lifetime of the process.
pub trait Typed: 'static {
    /// Returns the metadata describing this type.
    fn type_info() -> &'static TypeInfo;
}

/// Object-safe access to [`Typed`] metadata.
///
/// This is what lets `&dyn Reflect` values report their own [`TypeInfo`].
pub trait DynamicTyped {
    /// Returns the metadata describing the underlying type.
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
