//! Type classification helpers.
//!
//! The counterpart of a managed runtime's "is this a simple value?" checks:
//! scalar/container/wrapper classification, category sets, and
//! type-appropriate zero values.
//!
//! [`is_wrapper_ty`] and [`is_simple_ty`] are backed by process-wide
//! read-through caches keyed by [`TypeId`]. Entries are idempotent —
//! recomputing yields the same classification — so the caches are never
//! invalidated.

use core::any::TypeId;
use std::sync::LazyLock;
use std::time::{Duration, SystemTime};

use dashmap::DashMap;

use crate::Reflect;
use crate::info::{Ty, TypeInfo};

// -----------------------------------------------------------------------------
// Category sets

macro_rules! ty_slice {
    ($($ty:ty),* $(,)?) => {
        vec![$(Ty::of::<$ty>()),*]
    };
}

static NUMBER_TYS: LazyLock<Vec<Ty>> = LazyLock::new(|| {
    ty_slice![i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64]
});

static TEXT_TYS: LazyLock<Vec<Ty>> = LazyLock::new(|| ty_slice![String, &'static str, char]);

static DATE_TYS: LazyLock<Vec<Ty>> = LazyLock::new(|| ty_slice![Duration, SystemTime]);

/// Returns the numeric scalar types.
pub fn number_tys() -> &'static [Ty] {
    &NUMBER_TYS
}

/// Returns the text types.
pub fn text_tys() -> &'static [Ty] {
    &TEXT_TYS
}

/// Returns the date/time types.
pub fn date_tys() -> &'static [Ty] {
    &DATE_TYS
}

/// Returns every wrapper type: numbers, `bool`, text, and date types.
pub fn wrapper_tys() -> Vec<Ty> {
    let mut tys = Vec::with_capacity(NUMBER_TYS.len() + TEXT_TYS.len() + DATE_TYS.len() + 1);
    tys.extend_from_slice(&NUMBER_TYS);
    tys.push(Ty::of::<bool>());
    tys.extend_from_slice(&TEXT_TYS);
    tys.extend_from_slice(&DATE_TYS);
    tys
}

// -----------------------------------------------------------------------------
// Classification

/// Returns `true` for scalar-like types: numeric scalars, `bool`, `char`,
/// and enums.
pub fn is_scalar(info: &TypeInfo) -> bool {
    if info.is_enum() {
        return true;
    }
    let ty = info.ty();
    ty.is::<bool>() || ty.is::<char>() || NUMBER_TYS.contains(&ty)
}

/// Returns `true` for container kinds: lists, maps, and sets.
pub fn is_container(info: &TypeInfo) -> bool {
    info.is_list() || info.is_map() || info.is_set()
}

static WRAPPER_CACHE: LazyLock<DashMap<TypeId, bool>> = LazyLock::new(DashMap::new);
static SIMPLE_CACHE: LazyLock<DashMap<TypeId, bool>> = LazyLock::new(DashMap::new);

/// Returns `true` if the type belongs to the wrapper set
/// (see [`wrapper_tys`]).
///
/// Results are cached per [`TypeId`]; concurrent callers may race to
/// populate an entry, but every writer computes the same value.
pub fn is_wrapper_ty(ty: Ty) -> bool {
    if let Some(cached) = WRAPPER_CACHE.get(&ty.id()) {
        return *cached;
    }
    let result =
        ty.is::<bool>() || NUMBER_TYS.contains(&ty) || TEXT_TYS.contains(&ty) || DATE_TYS.contains(&ty);
    WRAPPER_CACHE.insert(ty.id(), result);
    result
}

/// Returns `true` for "simple" types: wrappers, enums, and lists of
/// wrappers.
///
/// A list of lists is not simple, mirroring the exclusion of
/// multi-dimensional arrays in the original rule this replicates.
pub fn is_simple_ty(info: &TypeInfo) -> bool {
    let key = info.ty().id();
    if let Some(cached) = SIMPLE_CACHE.get(&key) {
        return *cached;
    }
    let result = match info {
        TypeInfo::List(list) => is_wrapper_ty(list.item()),
        TypeInfo::Enum(_) => true,
        info => is_wrapper_ty(info.ty()),
    };
    SIMPLE_CACHE.insert(key, result);
    result
}

// -----------------------------------------------------------------------------
// Zero values

/// Returns the type-appropriate zero value, if the type has one.
///
/// Numeric scalars yield `0`, `bool` yields `false`, `char` yields `'\0'`.
/// Every other type — including `String` — has no zero value and yields
/// `None`.
pub fn default_value_for(info: &TypeInfo) -> Option<Box<dyn Reflect>> {
    macro_rules! zero_for {
        ($ty:expr, { $($src:ty => $value:expr),* $(,)? }) => {
            $(
                if $ty.is::<$src>() {
                    return Some(Box::new($value));
                }
            )*
        };
    }

    let ty = info.ty();
    zero_for!(ty, {
        i8 => 0_i8, i16 => 0_i16, i32 => 0_i32, i64 => 0_i64, i128 => 0_i128,
        isize => 0_isize,
        u8 => 0_u8, u16 => 0_u16, u32 => 0_u32, u64 => 0_u64, u128 => 0_u128,
        usize => 0_usize,
        f32 => 0.0_f32, f64 => 0.0_f64,
        bool => false,
        char => '\0',
    });
    None
}

// -----------------------------------------------------------------------------
// Numeric conversion

/// Reads any numeric scalar as `f64`, for decimal-normalized comparisons.
pub(crate) fn numeric_as_f64(value: &dyn Reflect) -> Option<f64> {
    macro_rules! read_as_f64 {
        ($($ty:ty),*) => {
            $(
                if let Some(v) = value.downcast_ref::<$ty>() {
                    return Some(*v as f64);
                }
            )*
        };
    }
    read_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
    None
}

/// Converts a numeric scalar into the target numeric type when the
/// conversion is lossless, returning the converted boxed value.
///
/// Only widening conversions are allowed; anything that could truncate or
/// round yields `None`.
pub(crate) fn widen_numeric(value: &dyn Reflect, target: TypeId) -> Option<Box<dyn Reflect>> {
    macro_rules! widen {
        ($($src:ty => [$($dst:ty),*]);* $(;)?) => {
            $(
                if let Some(v) = value.downcast_ref::<$src>() {
                    $(
                        if target == TypeId::of::<$dst>() {
                            return Some(Box::new(<$dst>::from(*v)));
                        }
                    )*
                    return None;
                }
            )*
        };
    }

    widen! {
        i8 => [i16, i32, i64, i128, f32, f64];
        i16 => [i32, i64, i128, f32, f64];
        i32 => [i64, i128, f64];
        i64 => [i128];
        u8 => [u16, u32, u64, u128, i16, i32, i64, i128, f32, f64];
        u16 => [u32, u64, u128, i32, i64, i128, f32, f64];
        u32 => [u64, u128, i64, i128, f64];
        u64 => [u128, i128];
        f32 => [f64];
    }
    None
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::{
        default_value_for, is_container, is_scalar, is_simple_ty, is_wrapper_ty, numeric_as_f64,
        widen_numeric, wrapper_tys,
    };
    use crate::info::{Ty, Typed};

    #[test]
    fn wrapper_classification_is_cached_and_stable() {
        // First call populates the cache, second reads through it.
        assert!(is_wrapper_ty(Ty::of::<i32>()));
        assert!(is_wrapper_ty(Ty::of::<i32>()));
        assert!(is_wrapper_ty(Ty::of::<String>()));
        assert!(!is_wrapper_ty(Ty::of::<Vec<i32>>()));
        assert!(!is_wrapper_ty(Ty::of::<Vec<i32>>()));
    }

    #[test]
    fn simple_types() {
        assert!(is_simple_ty(i32::type_info()));
        assert!(is_simple_ty(String::type_info()));
        assert!(is_simple_ty(<Vec<i32>>::type_info()));
        assert!(is_simple_ty(<Vec<String>>::type_info()));
        assert!(!is_simple_ty(<Vec<Vec<i32>>>::type_info()));
        assert!(!is_simple_ty(<Option<i32>>::type_info()));
    }

    #[test]
    fn scalar_and_container_kinds() {
        assert!(is_scalar(i32::type_info()));
        assert!(is_scalar(bool::type_info()));
        assert!(!is_scalar(String::type_info()));
        assert!(is_container(<Vec<i32>>::type_info()));
        assert!(!is_container(i32::type_info()));
    }

    #[test]
    fn wrapper_set_covers_all_categories() {
        let tys = wrapper_tys();
        assert!(tys.contains(&Ty::of::<i32>()));
        assert!(tys.contains(&Ty::of::<f64>()));
        assert!(tys.contains(&Ty::of::<String>()));
        assert!(tys.contains(&Ty::of::<bool>()));
        assert!(tys.contains(&Ty::of::<std::time::Duration>()));
    }

    #[test]
    fn zero_values() {
        let zero = default_value_for(i32::type_info()).unwrap();
        assert_eq!(zero.downcast_ref::<i32>(), Some(&0));

        let zero = default_value_for(bool::type_info()).unwrap();
        assert_eq!(zero.downcast_ref::<bool>(), Some(&false));

        let zero = default_value_for(char::type_info()).unwrap();
        assert_eq!(zero.downcast_ref::<char>(), Some(&'\0'));

        assert!(default_value_for(String::type_info()).is_none());
    }

    #[test]
    fn numeric_widening_is_lossless_only() {
        let widened = widen_numeric(&3_i32, TypeId::of::<i64>()).unwrap();
        assert_eq!(widened.downcast_ref::<i64>(), Some(&3));

        let widened = widen_numeric(&3_i32, TypeId::of::<f64>()).unwrap();
        assert_eq!(widened.downcast_ref::<f64>(), Some(&3.0));

        // Narrowing and lossy conversions are refused.
        assert!(widen_numeric(&3_i64, TypeId::of::<i32>()).is_none());
        assert!(widen_numeric(&3_i64, TypeId::of::<f64>()).is_none());
        assert!(widen_numeric(&3.0_f64, TypeId::of::<f32>()).is_none());
    }

    #[test]
    fn numbers_normalize_to_f64() {
        assert_eq!(numeric_as_f64(&7_u8), Some(7.0));
        assert_eq!(numeric_as_f64(&-1_i64), Some(-1.0));
        assert_eq!(numeric_as_f64(&0.5_f32), Some(0.5));
        assert_eq!(numeric_as_f64(&String::new()), None);
    }
}
