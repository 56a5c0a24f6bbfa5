use core::fmt;

use crate::info::{EnumInfo, ListInfo, MapInfo, OpaqueInfo, OptionalInfo, SetInfo, StructInfo, Ty};

// -----------------------------------------------------------------------------
// ReflectKind

/// A pure enumeration of the reflection kinds a type can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A struct with named fields.
    Struct,
    /// An enum.
    Enum,
    /// An `Option`-like container with zero or one contained value.
    Optional,
    /// An ordered, growable sequence.
    List,
    /// A key-value map.
    Map,
    /// An unordered collection of unique values.
    Set,
    /// Everything else; treated as an atomic value.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Optional => "optional",
            Self::List => "list",
            Self::Map => "map",
            Self::Set => "set",
            Self::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static metadata describing the shape of a reflectable type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info) or
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info).
#[derive(Debug)]
pub enum TypeInfo {
    /// Metadata of a struct with named fields.
    Struct(StructInfo),
    /// Metadata of an enum.
    Enum(EnumInfo),
    /// Metadata of an `Option`-like type.
    Optional(OptionalInfo),
    /// Metadata of a sequence type.
    List(ListInfo),
    /// Metadata of a map type.
    Map(MapInfo),
    /// Metadata of a set type.
    Set(SetInfo),
    /// Metadata of an atomic type.
    Opaque(OpaqueInfo),
}

macro_rules! impl_kind_cast_fn {
    ($as_fn:ident, $is_fn:ident, $kind:ident, $info:ty) => {
        /// Returns the inner metadata if this is the matching kind.
        #[inline]
        pub fn $as_fn(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }

        /// Returns `true` if this is the matching kind.
        #[inline]
        pub fn $is_fn(&self) -> bool {
            matches!(self, Self::$kind(_))
        }
    };
}

impl TypeInfo {
    /// Returns the [`ReflectKind`] of the described type.
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

    /// Returns the [`Ty`] handle of the described type.
    pub fn ty(&self) -> Ty {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Set(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the type path of the described type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns `true` if this metadata describes `T`.
    #[inline]
    pub fn type_is<T: 'static>(&self) -> bool {
        self.ty().is::<T>()
    }

    impl_kind_cast_fn!(as_struct, is_struct, Struct, StructInfo);
    impl_kind_cast_fn!(as_enum, is_enum, Enum, EnumInfo);
    impl_kind_cast_fn!(as_optional, is_optional, Optional, OptionalInfo);
    impl_kind_cast_fn!(as_list, is_list, List, ListInfo);
    impl_kind_cast_fn!(as_map, is_map, Map, MapInfo);
    impl_kind_cast_fn!(as_set, is_set, Set, SetInfo);
    impl_kind_cast_fn!(as_opaque, is_opaque, Opaque, OpaqueInfo);
}
