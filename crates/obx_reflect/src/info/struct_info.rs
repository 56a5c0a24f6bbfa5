use core::fmt;

use crate::Reflect;
use crate::access::FieldHandle;
use crate::info::{Ty, TypeInfo, Typed};
use crate::props::PropertyAccessor;

// -----------------------------------------------------------------------------
// StructInfo

/// Metadata of a struct with named fields.
///
/// Contains one [`FieldInfo`] per reflectable field, in declaration order.
/// Fields annotated `#[reflect(ignore)]` do not appear here.
///
/// # Examples
///
/// ```
/// use obx_reflect::derive::Reflect;
/// use obx_reflect::info::Typed;
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: i32,
///     b: bool,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert!(info.field("a").unwrap().is_public());
/// assert!(!info.field("b").unwrap().is_public());
/// ```
#[derive(Debug)]
pub struct StructInfo {
    ty: Ty,
    fields: Box<[FieldInfo]>,
}

impl StructInfo {
    /// Creates the metadata for struct `T` from its field descriptions.
    pub fn new<T: Reflect + Typed>(fields: Vec<FieldInfo>) -> Self {
        Self {
            ty: Ty::of::<T>(),
            fields: fields.into_boxed_slice(),
        }
    }

    /// Returns the [`Ty`] handle of the struct.
    #[inline]
    pub fn ty(&self) -> Ty {
        self.ty
    }

    /// Returns the type path of the struct.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the field with the given name, if any.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the field at the given declaration index, if any.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the number of reflectable fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldInfo> {
        self.fields.iter()
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Metadata of a single named struct field.
///
/// Carries the field's type, byte offset, visibility, and — when generated
/// by the derive macro — its conventional accessors and raw field handle.
pub struct FieldInfo {
    name: &'static str,
    ty: Ty,
    info: fn() -> &'static TypeInfo,
    public: bool,
    flattened: bool,
    offset: usize,
    handle: Option<FieldHandle>,
    getter: Option<PropertyAccessor>,
    setter: Option<PropertyAccessor>,
}

impl FieldInfo {
    /// Creates the description of a field of type `F`.
    ///
    /// The description starts private, un-flattened, and without accessors
    /// or handle; use the `with_*` methods to attach them.
    pub fn new<F: Reflect + Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Ty::of::<F>(),
            info: F::type_info,
            public: false,
            flattened: false,
            offset: 0,
            handle: None,
            getter: None,
            setter: None,
        }
    }

    /// Sets whether the field is declared `pub`.
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Marks the field as `#[reflect(flatten)]`.
    pub fn with_flattened(mut self, flattened: bool) -> Self {
        self.flattened = flattened;
        self
    }

    /// Sets the byte offset of the field inside its struct.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Attaches the raw field handle.
    pub fn with_handle(mut self, handle: FieldHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Attaches the conventional getter.
    pub fn with_getter(mut self, getter: PropertyAccessor) -> Self {
        self.getter = Some(getter);
        self
    }

    /// Attaches the conventional setter.
    pub fn with_setter(mut self, setter: PropertyAccessor) -> Self {
        self.setter = Some(setter);
        self
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Ty`] handle of the field's type.
    #[inline]
    pub fn ty(&self) -> Ty {
        self.ty
    }

    /// Returns the [`TypeInfo`] of the field's type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.info)()
    }

    /// Returns `true` if the field is declared `pub`.
    #[inline]
    pub fn is_public(&self) -> bool {
        self.public
    }

    /// Returns `true` if the field is marked `#[reflect(flatten)]`.
    #[inline]
    pub fn is_flattened(&self) -> bool {
        self.flattened
    }

    /// Returns the byte offset of the field inside its struct.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the raw field handle, if one was generated.
    #[inline]
    pub fn handle(&self) -> Option<&FieldHandle> {
        self.handle.as_ref()
    }

    /// Returns the conventional getter, if one was generated.
    #[inline]
    pub fn getter(&self) -> Option<&PropertyAccessor> {
        self.getter.as_ref()
    }

    /// Returns the conventional setter, if one was generated.
    #[inline]
    pub fn setter(&self) -> Option<&PropertyAccessor> {
        self.setter.as_ref()
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("ty", &self.ty.path())
            .field("public", &self.public)
            .field("flattened", &self.flattened)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
