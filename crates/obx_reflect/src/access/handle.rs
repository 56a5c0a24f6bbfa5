use crate::Reflect;
use crate::error::ReflectError;
use crate::info::{DynamicTyped, Ty};

// -----------------------------------------------------------------------------
// Thunk types

/// Erased reader: offsets into an instance of the owning type and returns
/// the field as a reflected pointer.
pub type HandleGetFn = fn(*const u8) -> *const dyn Reflect;

/// Erased writer: offsets into an instance of the owning type and replaces
/// the field. Returns the value back on element type mismatch.
pub type HandleSetFn = fn(*mut u8, Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

// -----------------------------------------------------------------------------
// FieldHandle

/// A low-level handle to one struct field: the owning type plus raw
/// offset-based read/write thunks.
///
/// This is the second tier of the access chain. It reaches private fields
/// without going through an accessor, the way a runtime's variable handles
/// bypass member visibility.
///
/// The public [`read`](FieldHandle::read) and [`write`](FieldHandle::write)
/// methods verify that the target really is an instance of the owning type
/// before any pointer arithmetic happens, so a soundly constructed handle
/// is safe to use.
pub struct FieldHandle {
    owner: Ty,
    field: &'static str,
    field_ty: Ty,
    get: HandleGetFn,
    set: HandleSetFn,
}

impl FieldHandle {
    /// Creates a handle from its thunks.
    ///
    /// # Safety
    ///
    /// The thunks must only offset within a valid instance of `owner` and
    /// must read/write the field's actual type at its actual offset. The
    /// derive macro is the intended caller.
    #[expect(unsafe_code, reason = "constructor contract for the generated thunks")]
    pub unsafe fn new(
        owner: Ty,
        field: &'static str,
        field_ty: Ty,
        get: HandleGetFn,
        set: HandleSetFn,
    ) -> Self {
        Self {
            owner,
            field,
            field_ty,
            get,
            set,
        }
    }

    /// Returns the [`Ty`] of the struct this handle belongs to.
    #[inline]
    pub fn owner(&self) -> Ty {
        self.owner
    }

    /// Returns the name of the field this handle reaches.
    #[inline]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Reads the field from `target`.
    ///
    /// Fails when `target` is not an instance of the owning type.
    #[expect(unsafe_code, reason = "pointer access after verifying the owner type")]
    pub fn read<'a>(&self, target: &'a dyn Reflect) -> Result<&'a dyn Reflect, ReflectError> {
        self.check_owner(target)?;
        let base = (target as *const dyn Reflect).cast::<u8>();
        // SAFETY: `target` is verified to be an instance of the owning type,
        // and the thunk only offsets within that instance.
        unsafe { Ok(&*(self.get)(base)) }
    }

    /// Writes `value` into the field of `target`.
    ///
    /// Fails when `target` is not an instance of the owning type or `value`
    /// is not of the field's type.
    pub fn write(
        &self,
        target: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError> {
        self.check_owner(target)?;
        let base = (target as *mut dyn Reflect).cast::<u8>();
        // The thunk rejects values of the wrong type before touching the
        // pointer; its own body carries the unsafe write.
        (self.set)(base, value).map_err(|value| ReflectError::MismatchedValue {
            field: self.field.to_owned(),
            expected: self.field_ty.path(),
            actual: value.reflect_type_info().type_path(),
        })
    }

    fn check_owner(&self, target: &dyn Reflect) -> Result<(), ReflectError> {
        if target.ty_id() != self.owner.id() {
            return Err(ReflectError::MismatchedTarget {
                expected: self.owner.path(),
                actual: target.reflect_type_info().type_path(),
            });
        }
        Ok(())
    }
}
