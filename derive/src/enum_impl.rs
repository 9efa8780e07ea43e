//! Codegen for unit enums with backing scalars: `Plain` + `Enumerated`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DeriveInput};

use crate::derive_data::{self, VariantBacking};

pub(crate) fn impl_enumerated(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let variants = derive_data::parse_variants(data)?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let name_arms = variants
        .iter()
        .map(|variant| {
            let variant_ident = variant.ident;
            let name = &variant.name;
            quote! { Self::#variant_ident => #name, }
        })
        .collect::<Vec<_>>();

    let backing_arms = variants
        .iter()
        .map(|variant| {
            let variant_ident = variant.ident;
            let backing = match &variant.backing {
                VariantBacking::Int(expr) => {
                    quote! { plainview::ops::Backing::Int((#expr) as i64) }
                }
                VariantBacking::Str(name) => {
                    quote! { plainview::ops::Backing::Str(#name) }
                }
            };
            quote! { Self::#variant_ident => #backing, }
        })
        .collect::<Vec<_>>();

    let variant_name_body = if variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#name_arms)* } }
    };

    let backing_body = if variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#backing_arms)* } }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics plainview::Plain for #ident #ty_generics #where_clause {
            #[inline]
            fn plain_ref(&self) -> plainview::PlainRef<'_> {
                plainview::PlainRef::Enumerated(self)
            }
        }

        #[automatically_derived]
        impl #impl_generics plainview::ops::Enumerated for #ident #ty_generics #where_clause {
            fn variant_name(&self) -> &str {
                #variant_name_body
            }

            fn backing(&self) -> plainview::ops::Backing<'_> {
                #backing_body
            }
        }
    })
}
