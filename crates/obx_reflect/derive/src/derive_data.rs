//! Parsed derive input, separated from code generation.

use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Error, Fields, Generics, Ident, Result, Type, Visibility};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// ReflectDerive

/// The parsed shape of a `#[derive(Reflect)]` input.
pub(crate) enum ReflectDerive {
    Struct(ReflectStruct),
    Enum(ReflectEnum),
}

impl ReflectDerive {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        match &input.data {
            Data::Struct(data) => {
                let Fields::Named(fields) = &data.fields else {
                    return Err(Error::new(
                        input.ident.span(),
                        "`#[derive(Reflect)]` only supports structs with named fields",
                    ));
                };
                let fields = fields
                    .named
                    .iter()
                    .map(StructField::parse)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Struct(ReflectStruct {
                    ident: input.ident.clone(),
                    generics: input.generics.clone(),
                    fields,
                }))
            }
            Data::Enum(data) => {
                if data.variants.is_empty() {
                    return Err(Error::new(
                        input.ident.span(),
                        "`#[derive(Reflect)]` does not support empty enums",
                    ));
                }
                let variants = data
                    .variants
                    .iter()
                    .map(EnumVariant::parse)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Enum(ReflectEnum {
                    ident: input.ident.clone(),
                    generics: input.generics.clone(),
                    variants,
                }))
            }
            Data::Union(_) => Err(Error::new(
                input.ident.span(),
                "`#[derive(Reflect)]` does not support unions",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// Structs

pub(crate) struct ReflectStruct {
    pub ident: Ident,
    pub generics: Generics,
    pub fields: Vec<StructField>,
}

impl ReflectStruct {
    /// The fields that participate in reflection.
    pub(crate) fn active_fields(&self) -> impl Iterator<Item = &StructField> {
        self.fields.iter().filter(|field| !field.ignore)
    }
}

pub(crate) struct StructField {
    pub ident: Ident,
    pub ty: Type,
    pub public: bool,
    pub ignore: bool,
    pub flatten: bool,
}

impl StructField {
    fn parse(field: &syn::Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .expect("named fields always carry an ident");
        let (ignore, flatten) = parse_field_attrs(field)?;
        Ok(Self {
            ident,
            ty: field.ty.clone(),
            public: matches!(field.vis, Visibility::Public(_)),
            ignore,
            flatten,
        })
    }

    /// Whether the field is spelled exactly `bool`, which switches the
    /// getter prefix from `get_` to `is_`.
    pub(crate) fn is_bool(&self) -> bool {
        matches!(&self.ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("bool"))
    }
}

fn parse_field_attrs(field: &syn::Field) -> Result<(bool, bool)> {
    let mut ignore = false;
    let mut flatten = false;

    for attr in &field.attrs {
        if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("ignore") {
                ignore = true;
                Ok(())
            } else if meta.path.is_ident("flatten") {
                flatten = true;
                Ok(())
            } else {
                Err(meta.error("expected `ignore` or `flatten`"))
            }
        })?;
    }

    if ignore && flatten {
        return Err(Error::new(
            field.span(),
            "`ignore` and `flatten` are mutually exclusive",
        ));
    }
    Ok((ignore, flatten))
}

// -----------------------------------------------------------------------------
// Enums

pub(crate) struct ReflectEnum {
    pub ident: Ident,
    pub generics: Generics,
    pub variants: Vec<EnumVariant>,
}

impl ReflectEnum {
    /// `true` when every variant is a unit variant, enabling `VariantArray`.
    pub(crate) fn all_unit(&self) -> bool {
        self.variants
            .iter()
            .all(|variant| matches!(variant.fields, VariantFields::Unit))
    }
}

pub(crate) struct EnumVariant {
    pub ident: Ident,
    pub fields: VariantFields,
}

pub(crate) enum VariantFields {
    Unit,
    /// Named fields: `(ident, type)` pairs in declaration order.
    Named(Vec<(Ident, Type)>),
    /// Unnamed fields: types in declaration order.
    Unnamed(Vec<Type>),
}

impl EnumVariant {
    fn parse(variant: &syn::Variant) -> Result<Self> {
        let fields = match &variant.fields {
            Fields::Unit => VariantFields::Unit,
            Fields::Named(fields) => VariantFields::Named(
                fields
                    .named
                    .iter()
                    .map(|field| {
                        (
                            field.ident.clone().expect("named field"),
                            field.ty.clone(),
                        )
                    })
                    .collect(),
            ),
            Fields::Unnamed(fields) => VariantFields::Unnamed(
                fields.unnamed.iter().map(|field| field.ty.clone()).collect(),
            ),
        };
        Ok(Self {
            ident: variant.ident.clone(),
            fields,
        })
    }
}
