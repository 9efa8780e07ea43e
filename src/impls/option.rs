use crate::Plain;
use crate::kind::{PlainRef, Primitive};

// `None` plays the role of an absent value and normalizes to null; `Some`
// is transparent.
impl<T: Plain> Plain for Option<T> {
    fn plain_ref(&self) -> PlainRef<'_> {
        match self {
            Some(value) => value.plain_ref(),
            None => PlainRef::Primitive(Primitive::Null),
        }
    }
}
