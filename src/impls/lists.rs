use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Plain;
use crate::kind::PlainRef;
use crate::ops::List;

impl<T: Plain> Plain for Vec<T> {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        PlainRef::List(self)
    }
}

impl<T: Plain> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Plain> {
        self.as_slice().get(index).map(|value| value as &dyn Plain)
    }
}

// NOTE: there is no `impl Plain for [T]` / `impl List for [T]` for bare
// unsized slices: `&[T]` cannot be coerced to `&dyn List` (a doubly-fat
// pointer is not representable). Slice-shaped data is covered by `Vec<T>`,
// `[T; N]` and `VecDeque<T>` below.

impl<T: Plain, const N: usize> Plain for [T; N] {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        PlainRef::List(self)
    }
}

impl<T: Plain, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Plain> {
        self.as_slice().get(index).map(|value| value as &dyn Plain)
    }
}

impl<T: Plain> Plain for VecDeque<T> {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        PlainRef::List(self)
    }
}

impl<T: Plain> List for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Plain> {
        VecDeque::get(self, index).map(|value| value as &dyn Plain)
    }
}
