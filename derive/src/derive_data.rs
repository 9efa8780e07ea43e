//! Parsed models of the types `#[derive(Plain)]` is applied to.

use syn::{Attribute, DataEnum, DataStruct, Expr, Fields, Ident, LitStr, Type, Visibility};

use crate::PLAIN_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Container attributes

/// Accessor-form configuration declared on the container:
/// `#[plain(whitelist = "method")]` / `#[plain(blacklist = "method")]`.
pub(crate) struct ContainerAttrs {
    pub whitelist: Option<Ident>,
    pub blacklist: Option<Ident>,
}

pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut parsed = ContainerAttrs {
        whitelist: None,
        blacklist: None,
    };

    for attr in attrs {
        if !attr.path().is_ident(PLAIN_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("whitelist") {
                let name: LitStr = meta.value()?.parse()?;
                parsed.whitelist = Some(Ident::new(&name.value(), name.span()));
                Ok(())
            } else if meta.path.is_ident("blacklist") {
                let name: LitStr = meta.value()?.parse()?;
                parsed.blacklist = Some(Ident::new(&name.value(), name.span()));
                Ok(())
            } else {
                Err(meta.error("expected `whitelist = \"...\"` or `blacklist = \"...\"`"))
            }
        })?;
    }

    Ok(parsed)
}

// -----------------------------------------------------------------------------
// Struct fields

pub(crate) struct PlainField<'a> {
    pub ident: &'a Ident,
    pub name: String,
    pub ty: &'a Type,
    pub public: bool,
    pub getter: Option<Ident>,
}

impl PlainField<'_> {
    /// `true` for the reserved `whitelist` / `blacklist` names.
    pub fn is_config(&self) -> bool {
        self.name == "whitelist" || self.name == "blacklist"
    }
}

pub(crate) fn parse_fields(data: &DataStruct) -> syn::Result<Vec<PlainField<'_>>> {
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "`#[derive(Plain)]` requires a struct with named fields",
        ));
    };

    fields
        .named
        .iter()
        .map(|field| {
            let ident = field.ident.as_ref().expect("named field without ident");
            let mut getter = None;

            for attr in &field.attrs {
                if !attr.path().is_ident(PLAIN_ATTRIBUTE_NAME) {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("getter") {
                        if meta.input.peek(syn::Token![=]) {
                            let name: LitStr = meta.value()?.parse()?;
                            getter = Some(Ident::new(&name.value(), name.span()));
                        } else {
                            getter = Some(ident.clone());
                        }
                        Ok(())
                    } else {
                        Err(meta.error("expected `getter` or `getter = \"...\"`"))
                    }
                })?;
            }

            Ok(PlainField {
                ident,
                name: ident.to_string(),
                ty: &field.ty,
                public: matches!(field.vis, Visibility::Public(_)),
                getter,
            })
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Enum variants

/// The backing scalar of one unit variant.
pub(crate) enum VariantBacking {
    Int(Expr),
    Str(LitStr),
}

pub(crate) struct PlainVariant<'a> {
    pub ident: &'a Ident,
    pub name: String,
    pub backing: VariantBacking,
}

pub(crate) fn parse_variants(data: &DataEnum) -> syn::Result<Vec<PlainVariant<'_>>> {
    data.variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "`#[derive(Plain)]` only supports unit variants; \
                     data-carrying enums need a manual `Plain` implementation",
                ));
            }

            let mut backing = None;
            for attr in &variant.attrs {
                if !attr.path().is_ident(PLAIN_ATTRIBUTE_NAME) {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("value") {
                        let expr: Expr = meta.value()?.parse()?;
                        backing = Some(classify_backing(expr));
                        Ok(())
                    } else {
                        Err(meta.error("expected `value = \"...\"` or `value = <int>`"))
                    }
                })?;
            }

            // The attribute takes precedence over a declared discriminant.
            let backing = backing
                .or_else(|| {
                    variant
                        .discriminant
                        .as_ref()
                        .map(|(_, expr)| VariantBacking::Int(expr.clone()))
                })
                .ok_or_else(|| {
                    syn::Error::new_spanned(
                        variant,
                        "variant needs a backing scalar: an explicit discriminant \
                         or `#[plain(value = ...)]`",
                    )
                })?;

            Ok(PlainVariant {
                ident: &variant.ident,
                name: variant.ident.to_string(),
                backing,
            })
        })
        .collect()
}

fn classify_backing(expr: Expr) -> VariantBacking {
    if let Expr::Lit(lit) = &expr
        && let syn::Lit::Str(name) = &lit.lit
    {
        return VariantBacking::Str(name.clone());
    }
    VariantBacking::Int(expr)
}
