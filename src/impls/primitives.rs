use crate::Plain;
use crate::kind::{PlainRef, Primitive};

macro_rules! impl_plain_primitive {
    ($($ty:ty => $variant:ident $(as $cast:ty)?),* $(,)?) => {
        $(impl Plain for $ty {
            #[inline]
            fn plain_ref(&self) -> PlainRef<'_> {
                PlainRef::Primitive(Primitive::$variant(*self $(as $cast)?))
            }
        })*
    };
}

impl_plain_primitive!(
    bool => Bool,
    char => Char,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int,
    isize => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt,
    usize => UInt as u64,
    f32 => Float as f64,
    f64 => Float,
);

#[cfg(test)]
mod tests {
    use crate::{Plain, Primitive, PlainRef};

    #[test]
    fn integer_signedness() {
        assert!(matches!(
            3_u8.plain_ref(),
            PlainRef::Primitive(Primitive::UInt(3))
        ));
        assert!(matches!(
            (-3_i32).plain_ref(),
            PlainRef::Primitive(Primitive::Int(-3))
        ));
    }
}
