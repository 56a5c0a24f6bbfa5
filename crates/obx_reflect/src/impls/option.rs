use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, optional_debug, optional_partial_eq};
use crate::info::{OptionalInfo, TypeInfo, Typed};
use crate::ops::Optional;
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Option<T>

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_init::<Self>(|| {
            TypeInfo::Optional(OptionalInfo::new::<Self, T>(
                |value| {
                    value
                        .take::<T>()
                        .map(|contained| Box::new(Some(contained)) as Box<dyn Reflect>)
                },
                || Box::new(None::<T>),
                |value| {
                    value.take::<Option<T>>().map(|optional| {
                        optional.map(|contained| Box::new(contained) as Box<dyn Reflect>)
                    })
                },
            ))
        })
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Optional);

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        optional_partial_eq(self, other)
    }

    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        optional_debug(self, f)
    }
}

impl<T: Reflect + Typed> Optional for Option<T> {
    #[inline]
    fn contained(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(T::as_reflect)
    }

    #[inline]
    fn contained_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(T::as_reflect_mut)
    }

    #[inline]
    fn set_none(&mut self) {
        *self = None;
    }

    fn set_contained(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(value.take::<T>()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Optional;

    #[test]
    fn optional_info_round_trips() {
        let info = <Option<i32>>::type_info().as_optional().unwrap();
        assert!(info.item().is::<i32>());

        let wrapped = info.wrap(5_i32.into_boxed_reflect()).unwrap();
        assert_eq!(wrapped.downcast_ref::<Option<i32>>(), Some(&Some(5)));

        let none = info.none_value();
        assert_eq!(none.downcast_ref::<Option<i32>>(), Some(&None));

        let contained = info.into_contained(wrapped).unwrap().unwrap();
        assert_eq!(contained.downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn optional_equality_distinguishes_absent() {
        let none: Option<String> = None;
        let empty = Some(String::new());
        assert_eq!(none.reflect_partial_eq(&empty), Some(false));
        assert_eq!(none.reflect_partial_eq(&None::<String>), Some(true));
    }

    #[test]
    fn set_contained_rejects_wrong_type() {
        let mut value = Some(3_i32);
        assert!(value.set_contained(Box::new("nope")).is_err());
        assert_eq!(value, Some(3));
    }
}
