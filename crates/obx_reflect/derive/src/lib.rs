//! Derive macro for `obx_reflect`.
//!
//! See [`Reflect`].

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod enums;
mod structs;

// -----------------------------------------------------------------------------
// Macro

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` implements the reflection traits for a type:
///
/// - `Typed` — static metadata (fields, offsets, accessors, variants)
/// - `Reflect` — erased value access
/// - `Struct` (for `struct T { ... }`) or `Enum` (for `enum T { ... }`)
/// - `VariantArray` (for enums consisting solely of unit variants)
///
/// Tuple structs and unit structs are not supported; reflection in this
/// library is organized around named fields.
///
/// ## Accessors
///
/// Each field gets a conventional getter (`get_<field>`, or `is_<field>`
/// for `bool` fields) and setter (`set_<field>`) in the type's accessor
/// table. An accessor is *public* exactly when its field is declared
/// `pub`; dynamic invocation refuses non-public accessors, while the raw
/// field handle ignores visibility.
///
/// ## Field attributes
///
/// - `#[reflect(ignore)]` removes the field from reflection entirely.
///   The field's type then does not need to implement `Reflect`.
/// - `#[reflect(flatten)]` marks an embedded struct whose own fields are
///   surfaced by ancestor-inclusive field enumeration.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Customer {
///     pub name: Option<String>,
///     pub active: bool,
///     #[reflect(ignore)]
///     session: RawSession,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let output = match derive_data::ReflectDerive::from_input(&input) {
        Ok(derive_data::ReflectDerive::Struct(data)) => structs::impl_struct(&data),
        Ok(derive_data::ReflectDerive::Enum(data)) => enums::impl_enum(&data),
        Err(err) => err.into_compile_error(),
    };

    output.into()
}
