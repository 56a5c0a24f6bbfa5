use core::any::{Any, TypeId};

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection.
///
/// `Reflect` enables dynamic access to values without compile-time type
/// information. It is implemented for the common std types by
/// [`crate::impls`], and for user types by
/// [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on a
/// `Box<dyn Reflect>` returns the container's type ID, not the inner
/// value's. Use [`Reflect::ty_id`] instead:
///
/// ```
/// use obx_reflect::Reflect;
/// use core::any::{Any, TypeId};
///
/// let x: Box<dyn Reflect> = Box::new(32_i32).into_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!((*x).type_id() == TypeId::of::<i32>()); // Dereferenced works
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Kind Dispatch
///
/// Use [`reflect_ref`] and [`reflect_mut`] to dispatch on the value's
/// [kind](ReflectKind) ([`Struct`], [`List`], [`Optional`], ...):
///
/// ```
/// use obx_reflect::Reflect;
/// # use obx_reflect::ops::List;
///
/// let vec = vec![1, 2, 3].into_boxed_reflect();
/// let list = vec.reflect_ref().as_list().unwrap();
/// assert_eq!(list.len(), 3);
/// ```
///
/// Use `downcast_ref`, `downcast_mut`, `downcast`, and `take` for concrete
/// type conversion:
///
/// ```
/// use obx_reflect::Reflect;
///
/// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
/// let y = x.downcast_ref::<i32>().unwrap();
/// assert_eq!(*y, 10);
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`Optional`]: crate::ops::Optional
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts a boxed value to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use obx_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// // Equal to this:
    /// // let r = Box::new(32) as Box<dyn Reflect>;
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// Calling `type_id` on a `Box<dyn Reflect>` yields the [`TypeId`] of
    /// the box; this method always reports the contained value's.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// Returns the value back unchanged if it is not of type `Self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use obx_reflect::Reflect;
    ///
    /// let mut x = 5_i32;
    /// x.set(7_i32.into_boxed_reflect()).unwrap();
    /// assert_eq!(x, 7);
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the pure enumeration of the value's [kind](ReflectKind).
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable kind-dispatched view of the value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable kind-dispatched view of the value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns a "partial equality" comparison result.
    ///
    /// Returns `None` if the underlying type does not support equality
    /// testing. Composite kinds compare element-wise; opaque types compare
    /// through their own `PartialEq`.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        // Only inline for the default implementation
        None
    }

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_info().type_path())
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use obx_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            Ok(<Box<dyn Any>>::downcast::<T>(self).expect("type is already checked"))
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait
    /// object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use obx_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// let x = x.take::<i32>().unwrap();
    /// assert_eq!(x, 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl core::fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements the common kind-cast methods (`set`, `reflect_kind`,
/// `reflect_ref`, `reflect_mut`) for a given kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::std::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::std::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
