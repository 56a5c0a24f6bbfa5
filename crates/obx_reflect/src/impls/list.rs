use std::collections::VecDeque;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, list_debug, list_partial_eq};
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::{List, ListIter};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Sequences

// `$via` is the type that actually carries `get`/`get_mut`/`len` (`[T]` for
// `Vec<T>`); calling through it avoids resolving to `List::get` itself.
macro_rules! impl_reflect_list {
    ($ty:ty, via $via:ty) => {
        impl<T: Reflect + Typed> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_init::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty {
            impl_reflect_cast_fn!(List);

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                list_partial_eq(self, other)
            }

            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                list_debug(self, f)
            }
        }

        impl<T: Reflect + Typed> List for $ty {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                <$via>::get(self, index).map(T::as_reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                <$via>::get_mut(self, index).map(T::as_reflect_mut)
            }

            #[inline]
            fn len(&self) -> usize {
                <$via>::len(self)
            }

            #[inline]
            fn iter(&self) -> ListIter<'_> {
                ListIter::new(self)
            }
        }
    };
}

impl_reflect_list!(Vec<T>, via [T]);
impl_reflect_list!(VecDeque<T>, via VecDeque<T>);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::List;

    #[test]
    fn vec_reflects_as_list() {
        let values = vec![1, 2, 3];
        let list: &dyn List = &values;
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).unwrap().downcast_ref::<i32>(), Some(&3));
        assert!(list.get(3).is_none());

        let info = <Vec<i32>>::type_info().as_list().unwrap();
        assert!(info.item().is::<i32>());
    }

    #[test]
    fn list_equality_is_elementwise() {
        let a = vec![1, 2];
        assert_eq!(a.reflect_partial_eq(&vec![1, 2]), Some(true));
        assert_eq!(a.reflect_partial_eq(&vec![2, 1]), Some(false));
        assert_eq!(a.reflect_partial_eq(&vec![1]), Some(false));
    }
}
