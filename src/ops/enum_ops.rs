use crate::Plain;

// -----------------------------------------------------------------------------
// Backing

/// The underlying scalar of a backed enumeration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backing<'a> {
    /// An integer-backed constant.
    Int(i64),
    /// A string-backed constant.
    Str(&'a str),
}

// -----------------------------------------------------------------------------
// Enumerated trait

/// A trait for backed enumerations: unit enums whose every variant carries
/// an underlying scalar.
///
/// The normalizer replaces an `Enumerated` value with its [`backing`]
/// scalar; the variant name never reaches the output and exists only for
/// diagnostics.
///
/// When using [`#[derive(Plain)]`](crate::derive::Plain) on a unit enum,
/// this trait is implemented automatically; backings come from explicit
/// discriminants or `#[plain(value = ...)]` attributes.
///
/// # Examples
///
/// ```
/// use plainview::derive::Plain;
/// use plainview::ops::{Backing, Enumerated};
///
/// #[derive(Plain)]
/// enum Status {
///     Pending = 1,
///     Active = 2,
/// }
///
/// let status = Status::Active;
/// assert_eq!(status.variant_name(), "Active");
/// assert_eq!(status.backing(), Backing::Int(2));
/// ```
///
/// [`backing`]: Enumerated::backing
pub trait Enumerated: Plain {
    /// Returns the name of the current variant.
    fn variant_name(&self) -> &str;

    /// Returns the underlying scalar of the current variant.
    fn backing(&self) -> Backing<'_>;
}
