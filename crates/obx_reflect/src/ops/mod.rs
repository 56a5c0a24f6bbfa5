//! Type-erased operations per reflection kind.
//!
//! [`ReflectRef`] and [`ReflectMut`] are the kind-dispatched views returned
//! by [`Reflect::reflect_ref`] and [`Reflect::reflect_mut`]; the traits in
//! this module ([`Struct`], [`Enum`], [`Optional`], [`List`], [`Map`],
//! [`Set`]) expose the operations of each kind.

mod enum_ops;
mod list_ops;
mod map_ops;
mod option_ops;
mod set_ops;
mod struct_ops;

pub use enum_ops::{Enum, VariantFieldIter};
pub use list_ops::{List, ListIter};
pub use map_ops::Map;
pub use option_ops::Optional;
pub use set_ops::Set;
pub use struct_ops::{Struct, StructFieldIter};

use crate::Reflect;
use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// ReflectRef / ReflectMut

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $retval:ty) => {
        /// Returns the inner view if the value is of the matching kind.
        #[inline]
        pub fn $name(self) -> Option<$retval> {
            match self {
                Self::$kind(value) => Some(value),
                _ => None,
            }
        }
    };
}

/// An immutable enumeration of kind-dispatched views.
pub enum ReflectRef<'a> {
    /// A view of a struct with named fields.
    Struct(&'a dyn Struct),
    /// A view of an enum.
    Enum(&'a dyn Enum),
    /// A view of an `Option`-like value.
    Optional(&'a dyn Optional),
    /// A view of a sequence.
    List(&'a dyn List),
    /// A view of a key-value map.
    Map(&'a dyn Map),
    /// A view of a set.
    Set(&'a dyn Set),
    /// A view of an atomic value.
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Optional(_) => ReflectKind::Optional,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Set(_) => ReflectKind::Set,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_method!(as_struct: Struct => &'a dyn Struct);
    impl_cast_method!(as_enum: Enum => &'a dyn Enum);
    impl_cast_method!(as_optional: Optional => &'a dyn Optional);
    impl_cast_method!(as_list: List => &'a dyn List);
    impl_cast_method!(as_map: Map => &'a dyn Map);
    impl_cast_method!(as_set: Set => &'a dyn Set);
    impl_cast_method!(as_opaque: Opaque => &'a dyn Reflect);
}

/// A mutable enumeration of kind-dispatched views.
pub enum ReflectMut<'a> {
    /// A view of a struct with named fields.
    Struct(&'a mut dyn Struct),
    /// A view of an enum.
    Enum(&'a mut dyn Enum),
    /// A view of an `Option`-like value.
    Optional(&'a mut dyn Optional),
    /// A view of a sequence.
    List(&'a mut dyn List),
    /// A view of a key-value map.
    Map(&'a mut dyn Map),
    /// A view of a set.
    Set(&'a mut dyn Set),
    /// A view of an atomic value.
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the [`ReflectKind`] of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Optional(_) => ReflectKind::Optional,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Set(_) => ReflectKind::Set,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_method!(as_struct: Struct => &'a mut dyn Struct);
    impl_cast_method!(as_enum: Enum => &'a mut dyn Enum);
    impl_cast_method!(as_optional: Optional => &'a mut dyn Optional);
    impl_cast_method!(as_list: List => &'a mut dyn List);
    impl_cast_method!(as_map: Map => &'a mut dyn Map);
    impl_cast_method!(as_set: Set => &'a mut dyn Set);
    impl_cast_method!(as_opaque: Opaque => &'a mut dyn Reflect);
}
