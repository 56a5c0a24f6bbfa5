use core::fmt;

use crate::Reflect;
use crate::info::{Ty, Typed};

// -----------------------------------------------------------------------------
// VariantKind

/// The shape of a single enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// A variant without data, e.g. `Status::Active`.
    Unit,
    /// A variant with named fields, e.g. `Shape::Rect { w: f64, h: f64 }`.
    Struct,
    /// A variant with unnamed fields, e.g. `Shape::Circle(f64)`.
    Tuple,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unit => "unit",
            Self::Struct => "struct",
            Self::Tuple => "tuple",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// Metadata of an enum: its variants in declaration order.
#[derive(Debug)]
pub struct EnumInfo {
    ty: Ty,
    variants: Box<[VariantInfo]>,
}

impl EnumInfo {
    /// Creates the metadata for enum `T` from its variant descriptions.
    pub fn new<T: Reflect + Typed>(variants: Vec<VariantInfo>) -> Self {
        Self {
            ty: Ty::of::<T>(),
            variants: variants.into_boxed_slice(),
        }
    }

    /// Returns the [`Ty`] handle of the enum.
    #[inline]
    pub fn ty(&self) -> Ty {
        self.ty
    }

    /// Returns the type path of the enum.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the variant with the given name, if any.
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.iter().find(|variant| variant.name() == name)
    }

    /// Returns the variant at the given declaration index, if any.
    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(index)
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }

    /// Returns an iterator over the variants in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, VariantInfo> {
        self.variants.iter()
    }
}

// -----------------------------------------------------------------------------
// VariantInfo

/// Metadata of a single enum variant.
#[derive(Debug)]
pub struct VariantInfo {
    name: &'static str,
    index: usize,
    kind: VariantKind,
}

impl VariantInfo {
    /// Creates the description of a variant.
    pub fn new(name: &'static str, index: usize, kind: VariantKind) -> Self {
        Self { name, index, kind }
    }

    /// Returns the variant name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declaration index of the variant.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the [`VariantKind`] of the variant.
    #[inline]
    pub fn kind(&self) -> VariantKind {
        self.kind
    }
}
