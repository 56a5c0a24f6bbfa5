// -----------------------------------------------------------------------------
// Opaque impl macro

/// Implements [`Reflect`](crate::Reflect) and [`Typed`](crate::info::Typed)
/// for a type treated as an atomic value.
///
/// The type must be `Send + Sync + 'static` and implement [`PartialEq`] and
/// [`Debug`](core::fmt::Debug). Generic types are not supported; implement
/// the traits by hand for those.
///
/// # Example
///
/// ```
/// use obx_reflect::impl_reflect_opaque;
///
/// #[derive(PartialEq, Debug)]
/// struct Marker(u8);
///
/// impl_reflect_opaque!(Marker);
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<$ty>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            fn set(
                &mut self,
                value: ::std::boxed::Box<dyn $crate::Reflect>,
            ) -> Result<(), ::std::boxed::Box<dyn $crate::Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Opaque(self)
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn $crate::Reflect) -> Option<bool> {
                other.downcast_ref::<Self>().map(|other| self == other)
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

// -----------------------------------------------------------------------------
// Scalar impls

impl_reflect_opaque!(i8, i16, i32, i64, i128, isize);
impl_reflect_opaque!(u8, u16, u32, u64, u128, usize);
impl_reflect_opaque!(f32, f64);
impl_reflect_opaque!(bool, char);
impl_reflect_opaque!(String, &'static str);
