use core::hash::Hash;
use std::collections::{BTreeMap, HashMap};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, map_debug, map_partial_eq};
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Maps

macro_rules! impl_reflect_map {
    ($ty:ty, ($($bound:tt)*)) => {
        impl<K, V> Typed for $ty
        where
            K: Reflect + Typed + $($bound)*,
            V: Reflect + Typed,
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_init::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V> Reflect for $ty
        where
            K: Reflect + Typed + $($bound)*,
            V: Reflect + Typed,
        {
            impl_reflect_cast_fn!(Map);

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                map_partial_eq(self, other)
            }

            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                map_debug(self, f)
            }
        }

        impl<K, V> Map for $ty
        where
            K: Reflect + Typed + $($bound)*,
            V: Reflect + Typed,
        {
            fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                Self::get(self, key).map(V::as_reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(Self::iter(self).map(|(key, value)| (key.as_reflect(), value.as_reflect())))
            }
        }
    };
}

impl_reflect_map!(HashMap<K, V>, (Eq + Hash));
impl_reflect_map!(BTreeMap<K, V>, (Ord));
