use core::fmt;

use crate::ops::{Enumerated, List, Map, Object};

// -----------------------------------------------------------------------------
// PlainKind

/// A pure enumeration of the ["kinds"](crate::Plain::plain_kind) a value can
/// present to the extraction algorithm.
///
/// Unlike [`PlainRef`], this carries no data and is mainly useful for
/// diagnostics.
///
/// # Examples
///
/// ```
/// # use plainview::{Plain, PlainKind};
/// assert_eq!(10_i32.plain_kind(), PlainKind::Primitive);
/// assert_eq!(vec![1, 2, 3].plain_kind(), PlainKind::List);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlainKind {
    /// A leaf value: string, number, boolean or null.
    Primitive,
    /// An indexable sequence.
    List,
    /// A keyed collection.
    Map,
    /// A backed enumeration.
    Enumerated,
    /// A named-field object.
    Object,
}

impl fmt::Display for PlainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlainKind::Primitive => f.write_str("primitive"),
            PlainKind::List => f.write_str("list"),
            PlainKind::Map => f.write_str("map"),
            PlainKind::Enumerated => f.write_str("enumerated"),
            PlainKind::Object => f.write_str("object"),
        }
    }
}

// -----------------------------------------------------------------------------
// Primitive

/// A borrowed leaf value.
///
/// This is the closed set of scalars the normalizer passes through unchanged
/// (modulo ownership): everything else recurses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    /// The absent value.
    Null,
    Bool(bool),
    /// A signed integer. Implementations only produce this for negative
    /// values or naturally signed types.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    Float(f64),
    Str(&'a str),
    /// A single character, encoded as a one-character string.
    Char(char),
}

// -----------------------------------------------------------------------------
// PlainRef

/// An immutable enumeration of ["kinds"](PlainKind) of a value, with access.
///
/// This is the dispatch point of the whole crate: [`Plain::plain_ref`] casts
/// any value into exactly one of these variants, and
/// [`normalize`](crate::normalize) matches on the result. The set is closed
/// on purpose: a value is a primitive, an indexable collection, a backed
/// enumeration, or an object, and nothing else.
///
/// # Examples
///
/// ```
/// # use plainview::{Plain, PlainRef};
/// let vec = vec![1, 2, 3];
///
/// match vec.plain_ref() {
///     PlainRef::List(list) => assert_eq!(list.len(), 3),
///     _ => unreachable!(),
/// }
/// ```
///
/// [`Plain::plain_ref`]: crate::Plain::plain_ref
#[derive(Clone, Copy)]
pub enum PlainRef<'a> {
    Primitive(Primitive<'a>),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Enumerated(&'a dyn Enumerated),
    Object(&'a dyn Object),
}

impl PlainRef<'_> {
    /// Returns the data-less [`PlainKind`] of this reference.
    pub fn kind(&self) -> PlainKind {
        match self {
            PlainRef::Primitive(_) => PlainKind::Primitive,
            PlainRef::List(_) => PlainKind::List,
            PlainRef::Map(_) => PlainKind::Map,
            PlainRef::Enumerated(_) => PlainKind::Enumerated,
            PlainRef::Object(_) => PlainKind::Object,
        }
    }
}

impl fmt::Debug for PlainRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlainRef::Primitive(value) => f.debug_tuple("Primitive").field(value).finish(),
            other => write!(f, "{}", other.kind()),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Plain;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", PlainKind::Primitive), "primitive");
        assert_eq!(format!("{}", PlainKind::Object), "object");
    }

    #[test]
    fn ref_kind() {
        assert_eq!(1_u8.plain_ref().kind(), PlainKind::Primitive);
        assert_eq!(vec![1].plain_ref().kind(), PlainKind::List);
    }
}
