use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::Plain;
use crate::kind::PlainRef;

impl<T: Plain + ?Sized> Plain for &T {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        (**self).plain_ref()
    }
}

impl<T: Plain + ?Sized> Plain for &mut T {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        (**self).plain_ref()
    }
}

impl<T: Plain + ?Sized> Plain for Box<T> {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        (**self).plain_ref()
    }
}

impl<T: Plain + ?Sized> Plain for Rc<T> {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        (**self).plain_ref()
    }
}

impl<T: Plain + ?Sized> Plain for Arc<T> {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        (**self).plain_ref()
    }
}
