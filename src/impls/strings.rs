use alloc::borrow::Cow;
use alloc::string::String;

use crate::Plain;
use crate::kind::{PlainRef, Primitive};

impl Plain for str {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        PlainRef::Primitive(Primitive::Str(self))
    }
}

impl Plain for String {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        PlainRef::Primitive(Primitive::Str(self))
    }
}

impl Plain for Cow<'_, str> {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        PlainRef::Primitive(Primitive::Str(self))
    }
}
