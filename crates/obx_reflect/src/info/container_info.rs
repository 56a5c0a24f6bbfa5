use core::fmt;

use crate::Reflect;
use crate::info::Ty;

// -----------------------------------------------------------------------------
// OptionalInfo

/// Erased constructor for the `Some` case of an optional type.
///
/// Consumes a boxed element value; returns the element back on type mismatch.
pub type WrapFn = fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>;

/// Erased constructor for the `None` case of an optional type.
pub type NoneFn = fn() -> Box<dyn Reflect>;

/// Erased extractor of the contained value of an owned optional.
///
/// Returns the owned value back on type mismatch.
pub type IntoContainedFn =
    fn(Box<dyn Reflect>) -> Result<Option<Box<dyn Reflect>>, Box<dyn Reflect>>;

/// Metadata of an `Option`-like type.
///
/// Besides the element type, this carries erased thunks for building the
/// absent and present representations, which the dynamic setter uses for
/// wrapper coercion.
pub struct OptionalInfo {
    ty: Ty,
    item: Ty,
    wrap: WrapFn,
    none: NoneFn,
    into_contained: IntoContainedFn,
}

impl OptionalInfo {
    /// Creates the metadata for `Option<T>`-like type `O` with element `T`.
    pub fn new<O, T>(wrap: WrapFn, none: NoneFn, into_contained: IntoContainedFn) -> Self
    where
        O: Reflect,
        T: Reflect,
    {
        Self {
            ty: Ty::of::<O>(),
            item: Ty::of::<T>(),
            wrap,
            none,
            into_contained,
        }
    }

    /// Returns the [`Ty`] handle of the optional type itself.
    #[inline]
    pub fn ty(&self) -> Ty {
        self.ty
    }

    /// Returns the [`Ty`] handle of the contained element type.
    #[inline]
    pub fn item(&self) -> Ty {
        self.item
    }

    /// Wraps an element value into the present representation.
    ///
    /// Returns the value back if it is not of the element type.
    #[inline]
    pub fn wrap(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.wrap)(value)
    }

    /// Builds the absent representation.
    #[inline]
    pub fn none_value(&self) -> Box<dyn Reflect> {
        (self.none)()
    }

    /// Extracts the contained value from an owned optional.
    ///
    /// Returns the value back if it is not of this optional type.
    #[inline]
    pub fn into_contained(
        &self,
        value: Box<dyn Reflect>,
    ) -> Result<Option<Box<dyn Reflect>>, Box<dyn Reflect>> {
        (self.into_contained)(value)
    }
}

impl fmt::Debug for OptionalInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalInfo")
            .field("ty", &self.ty.path())
            .field("item", &self.item.path())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// ListInfo

/// Metadata of a sequence type.
#[derive(Debug)]
pub struct ListInfo {
    ty: Ty,
    item: Ty,
}

impl ListInfo {
    /// Creates the metadata for list type `L` with element `T`.
    pub fn new<L: Reflect, T: Reflect>() -> Self {
        Self {
            ty: Ty::of::<L>(),
            item: Ty::of::<T>(),
        }
    }

    /// Returns the [`Ty`] handle of the list type itself.
    #[inline]
    pub fn ty(&self) -> Ty {
        self.ty
    }

    /// Returns the [`Ty`] handle of the element type.
    #[inline]
    pub fn item(&self) -> Ty {
        self.item
    }
}

// -----------------------------------------------------------------------------
// MapInfo

/// Metadata of a key-value map type.
#[derive(Debug)]
pub struct MapInfo {
    ty: Ty,
    key: Ty,
    value: Ty,
}

impl MapInfo {
    /// Creates the metadata for map type `M` with keys `K` and values `V`.
    pub fn new<M: Reflect, K: Reflect, V: Reflect>() -> Self {
        Self {
            ty: Ty::of::<M>(),
            key: Ty::of::<K>(),
            value: Ty::of::<V>(),
        }
    }

    /// Returns the [`Ty`] handle of the map type itself.
    #[inline]
    pub fn ty(&self) -> Ty {
        self.ty
    }

    /// Returns the [`Ty`] handle of the key type.
    #[inline]
    pub fn key(&self) -> Ty {
        self.key
    }

    /// Returns the [`Ty`] handle of the value type.
    #[inline]
    pub fn value(&self) -> Ty {
        self.value
    }
}

// -----------------------------------------------------------------------------
// SetInfo

/// Metadata of a set type.
#[derive(Debug)]
pub struct SetInfo {
    ty: Ty,
    item: Ty,
}

impl SetInfo {
    /// Creates the metadata for set type `S` with element `T`.
    pub fn new<S: Reflect, T: Reflect>() -> Self {
        Self {
            ty: Ty::of::<S>(),
            item: Ty::of::<T>(),
        }
    }

    /// Returns the [`Ty`] handle of the set type itself.
    #[inline]
    pub fn ty(&self) -> Ty {
        self.ty
    }

    /// Returns the [`Ty`] handle of the element type.
    #[inline]
    pub fn item(&self) -> Ty {
        self.item
    }
}
