use core::fmt;

use crate::kind::{PlainKind, PlainRef};

// -----------------------------------------------------------------------------
// Plain

/// The foundational trait: a value that can be reduced to plain, JSON-safe
/// data.
///
/// Every value reachable from a serialized object must implement `Plain`.
/// The trait has a single obligation, [`plain_ref`], which casts the value
/// into exactly one variant of the closed [`PlainRef`] dispatch:
///
/// - a [`Primitive`] leaf (numbers, strings, booleans, null),
/// - an indexable [`List`],
/// - a keyed [`Map`],
/// - a backed [`Enumerated`] constant, or
/// - a named-field [`Object`].
///
/// # Recommendations
///
/// For your own structs and backed enums, use
/// [the derive macro](crate::derive::Plain) instead of implementing this
/// trait (and the matching capability trait) by hand. Implementations for
/// primitives, strings, `Option`, references, boxes and the common
/// collections ship with the crate.
///
/// # Borrowing
///
/// `Plain` deliberately has no `'static` bound: borrowed values such as
/// `&str` or accessor results that borrow their object are first-class
/// citizens. The extraction algorithm only ever reads through `&dyn Plain`.
///
/// # Examples
///
/// ```
/// use plainview::{Plain, PlainKind};
///
/// assert_eq!("hello".plain_kind(), PlainKind::Primitive);
/// assert_eq!(vec![1, 2].plain_kind(), PlainKind::List);
/// ```
///
/// [`plain_ref`]: Plain::plain_ref
/// [`Primitive`]: crate::Primitive
/// [`List`]: crate::ops::List
/// [`Map`]: crate::ops::Map
/// [`Enumerated`]: crate::ops::Enumerated
/// [`Object`]: crate::ops::Object
pub trait Plain {
    /// Casts this value into the closed [`PlainRef`] dispatch.
    fn plain_ref(&self) -> PlainRef<'_>;

    /// Returns the data-less [`PlainKind`] of this value.
    #[inline]
    fn plain_kind(&self) -> PlainKind {
        self.plain_ref().kind()
    }
}

impl<'a> fmt::Debug for dyn Plain + 'a {
    /// Renders the normalized form of the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&crate::extract::normalize(self), f)
    }
}
