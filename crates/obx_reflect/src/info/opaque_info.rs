use crate::Reflect;
use crate::info::Ty;

// -----------------------------------------------------------------------------
// OpaqueInfo

/// Metadata of a type treated as an atomic value.
///
/// Scalars, strings, and any type without a structural reflection kind end
/// up here.
#[derive(Debug)]
pub struct OpaqueInfo {
    ty: Ty,
}

impl OpaqueInfo {
    /// Creates the metadata for opaque type `T`.
    pub fn new<T: Reflect>() -> Self {
        Self { ty: Ty::of::<T>() }
    }

    /// Returns the [`Ty`] handle of the described type.
    #[inline]
    pub fn ty(&self) -> Ty {
        self.ty
    }

    /// Returns the type path of the described type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }
}
