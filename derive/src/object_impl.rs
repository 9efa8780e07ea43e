//! Codegen for structs with named fields: `Plain` + `Object`.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{DataStruct, DeriveInput};

use crate::derive_data;
use crate::utils::accessor_name;

pub(crate) fn impl_object(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    let container = derive_data::parse_container_attrs(&input.attrs)?;
    let fields = derive_data::parse_fields(data)?;

    let ident = &input.ident;
    let field_count = fields.len();

    // Every directly-read field type must be `Plain`; configuration fields
    // and private fields are reached differently and stay unconstrained.
    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for field in fields.iter().filter(|f| f.public && !f.is_config()) {
            let ty = field.ty;
            where_clause
                .predicates
                .push(syn::parse_quote!(#ty: plainview::Plain));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let name_arms = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let index = Literal::usize_unsuffixed(index);
            let name = &field.name;
            quote! { #index => plainview::__macro_exports::Option::Some(#name), }
        })
        .collect::<Vec<_>>();

    let access_arms = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let index = Literal::usize_unsuffixed(index);
            let access = if field.public && !field.is_config() {
                let ident = field.ident;
                quote! { plainview::ops::FieldAccess::Public(&self.#ident) }
            } else {
                // Configuration fields are skipped by name before access is
                // consulted; reporting them as private keeps their types
                // free of the `Plain` bound.
                quote! { plainview::ops::FieldAccess::Private }
            };
            quote! { #index => plainview::__macro_exports::Option::Some(#access), }
        })
        .collect::<Vec<_>>();

    let name_at_body = if fields.is_empty() {
        quote! {
            let _ = index;
            plainview::__macro_exports::Option::None
        }
    } else {
        quote! {
            match index {
                #(#name_arms)*
                _ => plainview::__macro_exports::Option::None,
            }
        }
    };

    let field_at_body = if fields.is_empty() {
        quote! {
            let _ = index;
            plainview::__macro_exports::Option::None
        }
    } else {
        quote! {
            match index {
                #(#access_arms)*
                _ => plainview::__macro_exports::Option::None,
            }
        }
    };

    let accessor_arms = fields
        .iter()
        .filter(|field| !field.public && !field.is_config())
        .filter_map(|field| {
            let getter = field.getter.as_ref()?;
            let key = accessor_name(&field.name);
            Some(quote! {
                #key => plainview::__macro_exports::Option::Some(
                    plainview::__macro_exports::Box::new(self.#getter()),
                ),
            })
        })
        .collect::<Vec<_>>();

    let accessor_fn = if accessor_arms.is_empty() {
        TokenStream::new()
    } else {
        quote! {
            fn accessor(
                &self,
                name: &str,
            ) -> plainview::__macro_exports::Option<
                plainview::__macro_exports::Box<dyn plainview::Plain + '_>,
            > {
                match name {
                    #(#accessor_arms)*
                    _ => plainview::__macro_exports::Option::None,
                }
            }
        }
    };

    let whitelist_field_fn = config_field_fn(&fields, "whitelist", quote!(whitelist_field));
    let blacklist_field_fn = config_field_fn(&fields, "blacklist", quote!(blacklist_field));

    let whitelist_accessor_fn =
        config_accessor_fn(container.whitelist.as_ref(), quote!(whitelist_accessor));
    let blacklist_accessor_fn =
        config_accessor_fn(container.blacklist.as_ref(), quote!(blacklist_accessor));

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics plainview::Plain for #ident #ty_generics #where_clause {
            #[inline]
            fn plain_ref(&self) -> plainview::PlainRef<'_> {
                plainview::PlainRef::Object(self)
            }
        }

        #[automatically_derived]
        impl #impl_generics plainview::ops::Object for #ident #ty_generics #where_clause {
            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            fn name_at(&self, index: usize) -> plainview::__macro_exports::Option<&str> {
                #name_at_body
            }

            fn field_at(
                &self,
                index: usize,
            ) -> plainview::__macro_exports::Option<plainview::ops::FieldAccess<'_>> {
                #field_at_body
            }

            #accessor_fn

            #whitelist_field_fn

            #whitelist_accessor_fn

            #blacklist_field_fn

            #blacklist_accessor_fn
        }
    })
}

/// Generates the field-form configuration probe when a field with the
/// reserved name exists.
fn config_field_fn(
    fields: &[derive_data::PlainField<'_>],
    name: &str,
    method: TokenStream,
) -> TokenStream {
    fields
        .iter()
        .find(|field| field.name == name)
        .map(|field| {
            let ident = field.ident;
            quote! {
                fn #method(
                    &self,
                ) -> plainview::__macro_exports::Option<plainview::visibility::FieldNames> {
                    plainview::__macro_exports::Option::Some(
                        <_ as plainview::visibility::AsFieldNames>::as_field_names(&self.#ident),
                    )
                }
            }
        })
        .unwrap_or_default()
}

/// Generates the accessor-form configuration probe when the container
/// attribute names a method.
fn config_accessor_fn(getter: Option<&syn::Ident>, method: TokenStream) -> TokenStream {
    getter
        .map(|getter| {
            quote! {
                fn #method(
                    &self,
                ) -> plainview::__macro_exports::Option<plainview::visibility::FieldNames> {
                    plainview::__macro_exports::Option::Some(
                        <_ as plainview::visibility::AsFieldNames>::as_field_names(&self.#getter()),
                    )
                }
            }
        })
        .unwrap_or_default()
}
