//! Derive support for `plainview`.
//!
//! See [`Plain`](macro@Plain).
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{Data, DeriveInput, parse_macro_input};

pub(crate) static PLAIN_ATTRIBUTE_NAME: &str = "plain";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod enum_impl;
mod object_impl;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Plain Derivation
///
/// `#[derive(Plain)]` implements the capability traits of `plainview`:
///
/// - for a struct with named fields: `Plain` + `Object`;
/// - for an enum with unit variants: `Plain` + `Enumerated`.
///
/// Tuple structs, unit structs, unions and enums with data-carrying
/// variants are rejected; they have no place in the plain data model and
/// need a hand-written `Plain` implementation if they are to be serialized
/// at all.
///
/// ## Structs
///
/// Declared fields are enumerated in declaration order. Field visibility
/// follows the Rust `pub` keyword:
///
/// - `pub` fields are read directly (their types must implement `Plain`);
/// - non-`pub` fields (including `pub(crate)` and friends) extract as null
///   unless a getter is declared.
///
/// ```rust, ignore
/// #[derive(Plain)]
/// struct Account {
///     pub id: i64,       // read directly
///     secret: String,    // no getter: extracts as null
/// }
/// ```
///
/// ### Getters
///
/// `#[plain(getter)]` exposes a non-`pub` field through the zero-argument
/// method of the same name; `#[plain(getter = "m")]` names the method
/// explicitly. Either way the extractor finds it under the derived lookup
/// name (`count` → `getCount`), so manual `Object::accessor` callers and
/// derived objects agree.
///
/// ```rust, ignore
/// #[derive(Plain)]
/// struct Counter {
///     #[plain(getter)]
///     count: i64,
/// }
///
/// impl Counter {
///     fn count(&self) -> i64 {
///         self.count
///     }
/// }
/// ```
///
/// ### Visibility configuration
///
/// A field literally named `whitelist` or `blacklist` becomes the
/// field-form configuration list. Its type goes through `AsFieldNames`
/// (`Vec<String>`, `Vec<&str>`, arrays and slices of either, or
/// `FieldNames`), and the field itself never appears in output.
///
/// The accessor form is declared on the container and, when present,
/// overrides the field form:
///
/// ```rust, ignore
/// #[derive(Plain)]
/// #[plain(blacklist = "hidden_fields")]
/// struct Session {
///     pub token: String,
///     pub user: String,
/// }
///
/// impl Session {
///     fn hidden_fields(&self) -> [&'static str; 1] {
///         ["token"]
///     }
/// }
/// ```
///
/// ## Enums
///
/// Every variant must be a unit variant and carry a backing scalar: either
/// an explicit discriminant (integer backing) or `#[plain(value = ...)]`
/// (string or integer backing, taking precedence over the discriminant).
/// Normalization replaces the value with its backing.
///
/// ```rust, ignore
/// #[derive(Plain)]
/// enum Status {
///     Inactive = 0,
///     Active = 2,
/// }
///
/// #[derive(Plain)]
/// enum Tier {
///     #[plain(value = "free")]
///     Free,
///     #[plain(value = "pro")]
///     Pro,
/// }
/// ```
#[proc_macro_derive(Plain, attributes(plain))]
pub fn derive_plain(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let output = match &input.data {
        Data::Struct(data) => object_impl::impl_object(&input, data),
        Data::Enum(data) => enum_impl::impl_enumerated(&input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "`#[derive(Plain)]` does not support unions",
        )),
    };

    match output {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
