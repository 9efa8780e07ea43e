use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Plain;
use crate::kind::{PlainRef, Primitive};
use crate::value::{Number, PlainMap};

// -----------------------------------------------------------------------------
// Plain Value

/// A normalized, JSON-safe value.
///
/// This is the closed output type of [`normalize`](crate::normalize): a
/// leaf (`Null`, `Bool`, `Number`, `String`) or a container of further
/// `PlainValue`s. Any JSON document maps onto this type and vice versa.
///
/// `PlainValue` implements [`Plain`] itself, so an already-normalized value
/// normalizes to an equal value.
///
/// # Examples
///
/// ```
/// use plainview::value::PlainValue;
///
/// let value = PlainValue::from("hello");
/// assert_eq!(value.as_str(), Some("hello"));
/// assert!(!value.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlainValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<PlainValue>),
    Map(PlainMap),
}

impl PlainValue {
    /// Returns `true` if the value is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, PlainValue::Null)
    }

    /// Returns the boolean if the value is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PlainValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PlainValue::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    /// Returns the value as `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            PlainValue::Number(number) => number.as_u64(),
            _ => None,
        }
    }

    /// Returns the value as `f64` if it is any number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PlainValue::Number(number) => Some(number.as_f64()),
            _ => None,
        }
    }

    /// Returns the string slice if the value is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlainValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the elements if the value is a `List`.
    pub fn as_list(&self) -> Option<&[PlainValue]> {
        match self {
            PlainValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the map if the value is a `Map`.
    pub fn as_map(&self) -> Option<&PlainMap> {
        match self {
            PlainValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up an entry by name if the value is a `Map`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&PlainValue> {
        self.as_map().and_then(|map| map.get(name))
    }
}

impl Plain for PlainValue {
    fn plain_ref(&self) -> PlainRef<'_> {
        match self {
            PlainValue::Null => PlainRef::Primitive(Primitive::Null),
            PlainValue::Bool(value) => PlainRef::Primitive(Primitive::Bool(*value)),
            PlainValue::Number(number) => PlainRef::Primitive(number.as_primitive()),
            PlainValue::String(value) => PlainRef::Primitive(Primitive::Str(value)),
            PlainValue::List(values) => PlainRef::List(values),
            PlainValue::Map(map) => PlainRef::Map(map),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl From<bool> for PlainValue {
    #[inline]
    fn from(value: bool) -> Self {
        PlainValue::Bool(value)
    }
}

impl From<Number> for PlainValue {
    #[inline]
    fn from(value: Number) -> Self {
        PlainValue::Number(value)
    }
}

macro_rules! impl_value_from_number {
    ($($ty:ty),*) => {
        $(impl From<$ty> for PlainValue {
            #[inline]
            fn from(value: $ty) -> Self {
                PlainValue::Number(Number::from(value))
            }
        })*
    };
}

impl_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for PlainValue {
    #[inline]
    fn from(value: &str) -> Self {
        PlainValue::String(String::from(value))
    }
}

impl From<String> for PlainValue {
    #[inline]
    fn from(value: String) -> Self {
        PlainValue::String(value)
    }
}

impl From<Cow<'_, str>> for PlainValue {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        PlainValue::String(value.into_owned())
    }
}

impl From<Vec<PlainValue>> for PlainValue {
    #[inline]
    fn from(values: Vec<PlainValue>) -> Self {
        PlainValue::List(values)
    }
}

impl From<PlainMap> for PlainValue {
    #[inline]
    fn from(map: PlainMap) -> Self {
        PlainValue::Map(map)
    }
}

impl<T: Into<PlainValue>> From<Option<T>> for PlainValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => PlainValue::Null,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn accessors() {
        assert!(PlainValue::Null.is_null());
        assert_eq!(PlainValue::from(true).as_bool(), Some(true));
        assert_eq!(PlainValue::from(-2).as_i64(), Some(-2));
        assert_eq!(PlainValue::from("x").as_str(), Some("x"));
        assert_eq!(PlainValue::from(1).as_str(), None);
    }

    #[test]
    fn option_conversion() {
        assert_eq!(PlainValue::from(None::<i32>), PlainValue::Null);
        assert_eq!(PlainValue::from(Some(3)), PlainValue::from(3));
    }

    #[test]
    fn nested_lookup() {
        let map = PlainMap::from_iter([("inner", PlainValue::from(vec![PlainValue::from(1)]))]);
        let value = PlainValue::from(map);

        let inner = value.get("inner").and_then(PlainValue::as_list).unwrap();
        assert_eq!(inner.len(), 1);
    }
}
