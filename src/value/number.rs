use core::fmt;

use crate::kind::Primitive;

// -----------------------------------------------------------------------------
// Number

/// A JSON-safe number.
///
/// Follows the representation of the delegated JSON encoder: an unsigned
/// integer, a signed integer, or a double. The invariant that non-negative
/// integers are always stored unsigned makes structural comparison against
/// re-parsed output reliable.
#[derive(Clone, Copy, PartialEq)]
pub struct Number {
    n: N,
}

#[derive(Clone, Copy, PartialEq)]
enum N {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this number is a (signed or unsigned) integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        !matches!(self.n, N::Float(_))
    }

    /// Returns the number as `i64` if it fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            N::PosInt(value) => i64::try_from(value).ok(),
            N::NegInt(value) => Some(value),
            N::Float(_) => None,
        }
    }

    /// Returns the number as `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            N::PosInt(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the number as `f64`. Integers are converted; large
    /// magnitudes may lose precision.
    pub fn as_f64(&self) -> f64 {
        match self.n {
            N::PosInt(value) => value as f64,
            N::NegInt(value) => value as f64,
            N::Float(value) => value,
        }
    }

    /// Views this number as a borrowed [`Primitive`].
    pub fn as_primitive(&self) -> Primitive<'static> {
        match self.n {
            N::PosInt(value) => Primitive::UInt(value),
            N::NegInt(value) => Primitive::Int(value),
            N::Float(value) => Primitive::Float(value),
        }
    }

    pub(crate) fn serialize_with<S: serde_core::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self.n {
            N::PosInt(value) => serializer.serialize_u64(value),
            N::NegInt(value) => serializer.serialize_i64(value),
            N::Float(value) => serializer.serialize_f64(value),
        }
    }
}

impl From<u64> for Number {
    #[inline]
    fn from(value: u64) -> Self {
        Number { n: N::PosInt(value) }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number { n: N::NegInt(value) }
        } else {
            Number {
                n: N::PosInt(value as u64),
            }
        }
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number { n: N::Float(value) }
    }
}

macro_rules! impl_number_from {
    ($($ty:ty),* => $via:ty) => {
        $(impl From<$ty> for Number {
            #[inline]
            fn from(value: $ty) -> Self {
                Number::from(value as $via)
            }
        })*
    };
}

impl_number_from!(i8, i16, i32, isize => i64);
impl_number_from!(u8, u16, u32, usize => u64);
impl_number_from!(f32 => f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            N::PosInt(value) => write!(f, "{value}"),
            N::NegInt(value) => write!(f, "{value}"),
            N::Float(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({self})")
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_unsigned_normalization() {
        // Non-negative i64 input lands on the unsigned representation, so
        // values agree regardless of the source type.
        assert_eq!(Number::from(2_i64), Number::from(2_u64));
        assert_eq!(Number::from(-2_i64).as_i64(), Some(-2));
        assert_eq!(Number::from(-2_i64).as_u64(), None);
    }

    #[test]
    fn float_access() {
        let number = Number::from(1.5_f64);
        assert!(!number.is_integer());
        assert_eq!(number.as_i64(), None);
        assert_eq!(number.as_f64(), 1.5);
    }

    #[test]
    fn overflow_boundaries() {
        let big = Number::from(u64::MAX);
        assert_eq!(big.as_i64(), None);
        assert_eq!(big.as_u64(), Some(u64::MAX));
    }
}
