//! Code generation for structs with named fields.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use crate::derive_data::ReflectStruct;

pub(crate) fn impl_struct(data: &ReflectStruct) -> TokenStream {
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
    let struct_impl = impl_struct_ops(data, &impl_generics, &ty_generics, where_clause);

    quote! {
        #[allow(unsafe_code, reason = "generated field handles offset into `Self`")]
        const _: () = {
            #typed_impl
            #reflect_impl
            #struct_impl
        };
    }
}

fn impl_typed(
    data: &ReflectStruct,
    impl_generics: &syn::ImplGenerics<'_>,
    ty_generics: &syn::TypeGenerics<'_>,
    where_clause: Option<&syn::WhereClause>,
) -> TokenStream {
    let ident = &data.ident;
    let field_infos = data.active_fields().map(field_info_expr);

    let cell = if data.generics.params.is_empty() {
        quote! {
            static CELL: obx_reflect::impls::NonGenericTypeInfoCell =
                obx_reflect::impls::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| Self::__obx_struct_info())
        }
    } else {
        quote! {
            static CELL: obx_reflect::impls::GenericTypeInfoCell =
                obx_reflect::impls::GenericTypeInfoCell::new();
            CELL.get_or_init::<Self>(|| Self::__obx_struct_info())
        }
    };

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            // Builds the struct metadata; called once per type by the cell.
            fn __obx_struct_info() -> obx_reflect::info::TypeInfo {
                obx_reflect::info::TypeInfo::Struct(obx_reflect::info::StructInfo::new::<Self>(
                    ::std::vec![ #(#field_infos),* ],
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

fn field_info_expr(field: &crate::derive_data::StructField) -> TokenStream {
    let field_ident = &field.ident;
    let field_ty = &field.ty;
    let name = field_ident.to_string();
    let public = field.public;
    let flatten = field.flatten;

    let getter_name = if field.is_bool() {
        format!("is_{name}")
    } else {
        format!("get_{name}")
    };
    let setter_name = format!("set_{name}");

    quote! {
        obx_reflect::info::FieldInfo::new::<#field_ty>(#name)
            .with_public(#public)
            .with_flattened(#flatten)
            .with_offset(::core::mem::offset_of!(Self, #field_ident))
            .with_handle({
                // SAFETY: both thunks offset into a valid `Self` at this
                // field's offset and read/write its actual type.
                unsafe {
                    obx_reflect::access::FieldHandle::new(
                        obx_reflect::info::Ty::of::<Self>(),
                        #name,
                        obx_reflect::info::Ty::of::<#field_ty>(),
                        |base: *const u8| unsafe {
                            base.add(::core::mem::offset_of!(Self, #field_ident))
                                .cast::<#field_ty>() as *const dyn obx_reflect::Reflect
                        },
                        |base: *mut u8, value: ::std::boxed::Box<dyn obx_reflect::Reflect>| {
                            match value.take::<#field_ty>() {
                                Ok(value) => {
                                    unsafe {
                                        *base
                                            .add(::core::mem::offset_of!(Self, #field_ident))
                                            .cast::<#field_ty>() = value;
                                    }
                                    Ok(())
                                }
                                Err(value) => Err(value),
                            }
                        },
                    )
                }
            })
            .with_getter(obx_reflect::props::PropertyAccessor::getter(
                #getter_name,
                #name,
                #public,
                |target: &dyn obx_reflect::Reflect| match target.downcast_ref::<Self>() {
                    Some(this) => Ok(obx_reflect::Reflect::as_reflect(&this.#field_ident)),
                    None => Err(obx_reflect::ReflectError::MismatchedTarget {
                        expected: obx_reflect::info::Ty::of::<Self>().path(),
                        actual: obx_reflect::info::DynamicTyped::reflect_type_info(target)
                            .type_path(),
                    }),
                },
            ))
            .with_setter(obx_reflect::props::PropertyAccessor::setter(
                #setter_name,
                #name,
                #public,
                |target: &mut dyn obx_reflect::Reflect,
                 value: ::std::boxed::Box<dyn obx_reflect::Reflect>| {
                    let Some(this) = target.downcast_mut::<Self>() else {
                        return Err(obx_reflect::props::SetValueError::MismatchedTarget {
                            expected: obx_reflect::info::Ty::of::<Self>().path(),
                            value,
                        });
                    };
                    match value.take::<#field_ty>() {
                        Ok(value) => {
                            this.#field_ident = value;
                            Ok(())
                        }
                        Err(value) => Err(obx_reflect::props::SetValueError::MismatchedValue {
                            expected: obx_reflect::info::Ty::of::<#field_ty>(),
                            value,
                        }),
                    }
                },
            ))
    }
}

fn impl_reflect(
    data: &ReflectStruct,
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
                obx_reflect::info::ReflectKind::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> obx_reflect::ops::ReflectRef<'_> {
                obx_reflect::ops::ReflectRef::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> obx_reflect::ops::ReflectMut<'_> {
                obx_reflect::ops::ReflectMut::Struct(self)
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn obx_reflect::Reflect) -> Option<bool> {
                obx_reflect::impls::struct_partial_eq(self, other)
            }

            fn reflect_debug(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
            ) -> ::core::fmt::Result {
                obx_reflect::impls::struct_debug(self, f)
            }
        }
    }
}

fn impl_struct_ops(
    data: &ReflectStruct,
    impl_generics: &syn::ImplGenerics<'_>,
    ty_generics: &syn::TypeGenerics<'_>,
    where_clause: Option<&syn::WhereClause>,
) -> TokenStream {
    let ident = &data.ident;

    let field_arms: Vec<_> = data
        .active_fields()
        .map(|field| {
            let field_ident = &field.ident;
            let name = field_ident.to_string();
            quote! { #name => Some(obx_reflect::Reflect::as_reflect(&self.#field_ident)), }
        })
        .collect();

    let field_mut_arms: Vec<_> = data
        .active_fields()
        .map(|field| {
            let field_ident = &field.ident;
            let name = field_ident.to_string();
            quote! { #name => Some(obx_reflect::Reflect::as_reflect_mut(&mut self.#field_ident)), }
        })
        .collect();

    let field_at_arms: Vec<_> = data
        .active_fields()
        .enumerate()
        .map(|(index, field)| {
            let field_ident = &field.ident;
            quote! { #index => Some(obx_reflect::Reflect::as_reflect(&self.#field_ident)), }
        })
        .collect();

    let field_at_mut_arms: Vec<_> = data
        .active_fields()
        .enumerate()
        .map(|(index, field)| {
            let field_ident = &field.ident;
            quote! { #index => Some(obx_reflect::Reflect::as_reflect_mut(&mut self.#field_ident)), }
        })
        .collect();

    let name_at_arms: Vec<_> = data
        .active_fields()
        .enumerate()
        .map(|(index, field)| {
            let name = field.ident.to_string();
            quote! { #index => Some(#name), }
        })
        .collect();

    let field_len = data.active_fields().count();

    quote! {
        #[automatically_derived]
        impl #impl_generics obx_reflect::ops::Struct for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> Option<&dyn obx_reflect::Reflect> {
                match name {
                    #(#field_arms)*
                    _ => None,
                }
            }

            fn field_mut(&mut self, name: &str) -> Option<&mut dyn obx_reflect::Reflect> {
                match name {
                    #(#field_mut_arms)*
                    _ => None,
                }
            }

            fn field_at(&self, index: usize) -> Option<&dyn obx_reflect::Reflect> {
                match index {
                    #(#field_at_arms)*
                    _ => None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn obx_reflect::Reflect> {
                match index {
                    #(#field_at_mut_arms)*
                    _ => None,
                }
            }

            fn name_at(&self, index: usize) -> Option<&str> {
                match index {
                    #(#name_at_arms)*
                    _ => None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> obx_reflect::ops::StructFieldIter<'_> {
                obx_reflect::ops::StructFieldIter::new(self)
            }
        }
    }
}
