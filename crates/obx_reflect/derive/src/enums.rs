//! Code generation for enums.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse_quote;

use crate::derive_data::{ReflectEnum, VariantFields};

pub(crate) fn impl_enum(data: &ReflectEnum) -> TokenStream {
    let mut generics = data.generics.clone();
    let where_clause = generics.make_where_clause();
    for param in data.generics.type_params() {
        let param_ident = &param.ident;
        where_clause.predicates.push(parse_quote! {
            #param_ident: obx_reflect::Reflect + obx_reflect::info::Typed
        });
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let typed_impl = impl_typed(data, &impl_generics, &ty_generics, where_clause);
    let reflect_impl = impl_reflect(data, &impl_generics, &ty_generics, where_clause);
    let enum_impl = impl_enum_ops(data, &impl_generics, &ty_generics, where_clause);
    let variant_array_impl = impl_variant_array(data);

    quote! {
        const _: () = {
            #typed_impl
            #reflect_impl
            #enum_impl
            #variant_array_impl
        };
    }
}

fn impl_typed(
    data: &ReflectEnum,
    impl_generics: &syn::ImplGenerics<'_>,
    ty_generics: &syn::TypeGenerics<'_>,
    where_clause: Option<&syn::WhereClause>,
) -> TokenStream {
    let ident = &data.ident;

    let variant_infos = data.variants.iter().enumerate().map(|(index, variant)| {
        let name = variant.ident.to_string();
        let kind = match &variant.fields {
            VariantFields::Unit => quote!(obx_reflect::info::VariantKind::Unit),
            VariantFields::Named(_) => quote!(obx_reflect::info::VariantKind::Struct),
            VariantFields::Unnamed(_) => quote!(obx_reflect::info::VariantKind::Tuple),
        };
        quote! { obx_reflect::info::VariantInfo::new(#name, #index, #kind) }
    });

    let cell = if data.generics.params.is_empty() {
        quote! {
            static CELL: obx_reflect::impls::NonGenericTypeInfoCell =
                obx_reflect::impls::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| Self::__obx_enum_info())
        }
    } else {
        quote! {
            static CELL: obx_reflect::impls::GenericTypeInfoCell =
                obx_reflect::impls::GenericTypeInfoCell::new();
            CELL.get_or_init::<Self>(|| Self::__obx_enum_info())
        }
    };

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            // Builds the enum metadata; called once per type by the cell.
            fn __obx_enum_info() -> obx_reflect::info::TypeInfo {
                obx_reflect::info::TypeInfo::Enum(obx_reflect::info::EnumInfo::new::<Self>(
                    ::std::vec![ #(#variant_infos),* ],
                ))
            }
        }

        #[automatically_derived]
        impl #impl_generics obx_reflect::info::Typed for #ident #ty_generics #where_clause {
            fn type_info() -> &'static obx_reflect::info::TypeInfo {
                #cell
            }
        }
    }
}

fn impl_reflect(
    data: &ReflectEnum,
    impl_generics: &syn::ImplGenerics<'_>,
    ty_generics: &syn::TypeGenerics<'_>,
    where_clause: Option<&syn::WhereClause>,
) -> TokenStream {
    let ident = &data.ident;

    quote! {
        #[automatically_derived]
        impl #impl_generics obx_reflect::Reflect for #ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: ::std::boxed::Box<dyn obx_reflect::Reflect>,
            ) -> Result<(), ::std::boxed::Box<dyn obx_reflect::Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> obx_reflect::info::ReflectKind {
                obx_reflect::info::ReflectKind::Enum
            }

            #[inline]
            fn reflect_ref(&self) -> obx_reflect::ops::ReflectRef<'_> {
                obx_reflect::ops::ReflectRef::Enum(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> obx_reflect::ops::ReflectMut<'_> {
                obx_reflect::ops::ReflectMut::Enum(self)
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn obx_reflect::Reflect) -> Option<bool> {
                obx_reflect::impls::enum_partial_eq(self, other)
            }

            fn reflect_debug(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
            ) -> ::core::fmt::Result {
                obx_reflect::impls::enum_debug(self, f)
            }
        }
    }
}

fn impl_enum_ops(
    data: &ReflectEnum,
    impl_generics: &syn::ImplGenerics<'_>,
    ty_generics: &syn::TypeGenerics<'_>,
    where_clause: Option<&syn::WhereClause>,
) -> TokenStream {
    let ident = &data.ident;

    let mut name_arms = Vec::new();
    let mut index_arms = Vec::new();
    let mut kind_arms = Vec::new();
    let mut len_arms = Vec::new();
    let mut field_arms = Vec::new();
    let mut field_mut_arms = Vec::new();
    let mut field_at_arms = Vec::new();
    let mut field_at_mut_arms = Vec::new();

    for (index, variant) in data.variants.iter().enumerate() {
        let variant_ident = &variant.ident;
        let name = variant_ident.to_string();

        match &variant.fields {
            VariantFields::Unit => {
                name_arms.push(quote! { Self::#variant_ident => #name, });
                index_arms.push(quote! { Self::#variant_ident => #index, });
                kind_arms.push(quote! {
                    Self::#variant_ident => obx_reflect::info::VariantKind::Unit,
                });
                len_arms.push(quote! { Self::#variant_ident => 0usize, });
            }
            VariantFields::Named(fields) => {
                let idents: Vec<_> = fields.iter().map(|(ident, _)| ident).collect();
                let names: Vec<_> = idents.iter().map(|ident| ident.to_string()).collect();
                let indices: Vec<_> = (0..fields.len()).collect();
                let len = fields.len();

                name_arms.push(quote! { Self::#variant_ident { .. } => #name, });
                index_arms.push(quote! { Self::#variant_ident { .. } => #index, });
                kind_arms.push(quote! {
                    Self::#variant_ident { .. } => obx_reflect::info::VariantKind::Struct,
                });
                len_arms.push(quote! { Self::#variant_ident { .. } => #len, });
                field_arms.push(quote! {
                    Self::#variant_ident { #(#idents),* } => match name {
                        #(#names => Some(obx_reflect::Reflect::as_reflect(#idents)),)*
                        _ => None,
                    },
                });
                field_mut_arms.push(quote! {
                    Self::#variant_ident { #(#idents),* } => match name {
                        #(#names => Some(obx_reflect::Reflect::as_reflect_mut(#idents)),)*
                        _ => None,
                    },
                });
                field_at_arms.push(quote! {
                    Self::#variant_ident { #(#idents),* } => match index {
                        #(#indices => Some(obx_reflect::Reflect::as_reflect(#idents)),)*
                        _ => None,
                    },
                });
                field_at_mut_arms.push(quote! {
                    Self::#variant_ident { #(#idents),* } => match index {
                        #(#indices => Some(obx_reflect::Reflect::as_reflect_mut(#idents)),)*
                        _ => None,
                    },
                });
            }
            VariantFields::Unnamed(fields) => {
                let idents: Vec<_> = (0..fields.len())
                    .map(|position| format_ident!("field_{position}"))
                    .collect();
                let indices: Vec<_> = (0..fields.len()).collect();
                let len = fields.len();

                name_arms.push(quote! { Self::#variant_ident(..) => #name, });
                index_arms.push(quote! { Self::#variant_ident(..) => #index, });
                kind_arms.push(quote! {
                    Self::#variant_ident(..) => obx_reflect::info::VariantKind::Tuple,
                });
                len_arms.push(quote! { Self::#variant_ident(..) => #len, });
                field_at_arms.push(quote! {
                    Self::#variant_ident(#(#idents),*) => match index {
                        #(#indices => Some(obx_reflect::Reflect::as_reflect(#idents)),)*
                        _ => None,
                    },
                });
                field_at_mut_arms.push(quote! {
                    Self::#variant_ident(#(#idents),*) => match index {
                        #(#indices => Some(obx_reflect::Reflect::as_reflect_mut(#idents)),)*
                        _ => None,
                    },
                });
            }
        }
    }

    quote! {
        #[automatically_derived]
        impl #impl_generics obx_reflect::ops::Enum for #ident #ty_generics #where_clause {
            fn variant_name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }

            fn variant_index(&self) -> usize {
                match self {
                    #(#index_arms)*
                }
            }

            fn variant_kind(&self) -> obx_reflect::info::VariantKind {
                match self {
                    #(#kind_arms)*
                }
            }

            #[allow(unreachable_patterns, reason = "catch-all arm for variant shapes without fields")]
            fn field(&self, name: &str) -> Option<&dyn obx_reflect::Reflect> {
                match self {
                    #(#field_arms)*
                    _ => None,
                }
            }

            #[allow(unreachable_patterns, reason = "catch-all arm for variant shapes without fields")]
            fn field_mut(&mut self, name: &str) -> Option<&mut dyn obx_reflect::Reflect> {
                match self {
                    #(#field_mut_arms)*
                    _ => None,
                }
            }

            #[allow(unreachable_patterns, reason = "catch-all arm for variant shapes without fields")]
            fn field_at(&self, index: usize) -> Option<&dyn obx_reflect::Reflect> {
                match self {
                    #(#field_at_arms)*
                    _ => None,
                }
            }

            #[allow(unreachable_patterns, reason = "catch-all arm for variant shapes without fields")]
            fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn obx_reflect::Reflect> {
                match self {
                    #(#field_at_mut_arms)*
                    _ => None,
                }
            }

            fn field_len(&self) -> usize {
                match self {
                    #(#len_arms)*
                }
            }

            #[inline]
            fn iter_fields(&self) -> obx_reflect::ops::VariantFieldIter<'_> {
                obx_reflect::ops::VariantFieldIter::new(self)
            }
        }
    }
}

fn impl_variant_array(data: &ReflectEnum) -> TokenStream {
    if !data.all_unit() || !data.generics.params.is_empty() {
        return TokenStream::new();
    }

    let ident = &data.ident;
    let variants = data.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        quote! { Self::#variant_ident }
    });

    quote! {
        #[automatically_derived]
        impl obx_reflect::lookup::VariantArray for #ident {
            const VARIANTS: &'static [Self] = &[ #(#variants),* ];
        }
    }
}
