use core::hash::Hash;
use std::collections::{BTreeSet, HashSet};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, set_debug, set_partial_eq};
use crate::info::{SetInfo, TypeInfo, Typed};
use crate::ops::Set;
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Sets

macro_rules! impl_reflect_set {
    ($ty:ty, ($($bound:tt)*)) => {
        impl<T> Typed for $ty
        where
            T: Reflect + Typed + $($bound)*,
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_init::<Self>(|| TypeInfo::Set(SetInfo::new::<Self, T>()))
            }
        }

        impl<T> Reflect for $ty
        where
            T: Reflect + Typed + $($bound)*,
        {
            impl_reflect_cast_fn!(Set);

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                set_partial_eq(self, other)
            }

            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                set_debug(self, f)
            }
        }

        impl<T> Set for $ty
        where
            T: Reflect + Typed + $($bound)*,
        {
            fn contains(&self, value: &dyn Reflect) -> bool {
                value
                    .downcast_ref::<T>()
                    .is_some_and(|value| Self::contains(self, value))
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
                Box::new(Self::iter(self).map(T::as_reflect))
            }
        }
    };
}

impl_reflect_set!(HashSet<T>, (Eq + Hash));
impl_reflect_set!(BTreeSet<T>, (Ord));

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::Reflect;
    use crate::ops::Set;

    #[test]
    fn set_membership_by_erased_value() {
        let mut values = HashSet::new();
        values.insert(2_i32);

        let set: &dyn Set = &values;
        assert!(set.contains(2_i32.as_reflect()));
        assert!(!set.contains(3_i32.as_reflect()));
        assert!(!set.contains("two".as_reflect()));
    }
}
