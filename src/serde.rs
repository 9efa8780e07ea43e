//! JSON encoding of extraction results.
//!
//! The value model implements [`Serialize`], and [`to_json`] /
//! [`to_json_pretty`] bundle extraction and encoding into one call. The
//! encoding itself is entirely delegated: whatever `serde_json` accepts or
//! rejects is surfaced unchanged, and the extractor performs no
//! pre-validation (notably, non-finite floats encode the way the encoder
//! encodes them).

use alloc::string::String;

use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use crate::extract::extract;
use crate::ops::Object;
use crate::value::{Number, PlainMap, PlainValue};

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Number {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_with(serializer)
    }
}

impl Serialize for PlainValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlainValue::Null => serializer.serialize_unit(),
            PlainValue::Bool(value) => serializer.serialize_bool(*value),
            PlainValue::Number(number) => number.serialize(serializer),
            PlainValue::String(value) => serializer.serialize_str(value),
            PlainValue::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            PlainValue::Map(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for PlainMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            state.serialize_entry(name, value)?;
        }
        state.end()
    }
}

// -----------------------------------------------------------------------------
// Encoders

/// Extracts `object` and encodes the result as a compact JSON string.
///
/// Field order in the output follows declaration order, as in the
/// [`PlainMap`] itself.
///
/// # Errors
///
/// Any error reported by the JSON encoder is returned unchanged.
///
/// # Examples
///
/// ```
/// use plainview::derive::Plain;
/// use plainview::serde::to_json;
///
/// #[derive(Plain)]
/// struct Account {
///     pub id: i64,
///     pub name: &'static str,
/// }
///
/// let json = to_json(&Account { id: 1, name: "a" }).unwrap();
/// assert_eq!(json, r#"{"id":1,"name":"a"}"#);
/// ```
pub fn to_json(object: &dyn Object) -> Result<String, serde_json::Error> {
    serde_json::to_string(&extract(object))
}

/// Extracts `object` and encodes the result as pretty-printed JSON.
///
/// # Errors
///
/// Any error reported by the JSON encoder is returned unchanged.
pub fn to_json_pretty(object: &dyn Object) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&extract(object))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    use crate::ToPlain;
    use crate::ops::DynamicObject;
    use crate::value::PlainValue;

    fn sample() -> DynamicObject {
        let mut object = DynamicObject::new();
        object.extend("id", 1_i64);
        object.extend("name", "a");
        object.extend("tags", vec!["x", "y"]);
        object.extend_unset("pending");
        object
    }

    #[test]
    fn field_order_is_declaration_order() {
        assert_eq!(
            sample().to_json().unwrap(),
            r#"{"id":1,"name":"a","tags":["x","y"],"pending":null}"#,
        );
    }

    #[test]
    fn round_trip_is_structural() {
        let json = sample().to_json().unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            reparsed,
            serde_json::json!({
                "id": 1,
                "name": "a",
                "tags": ["x", "y"],
                "pending": null,
            }),
        );
    }

    #[test]
    fn values_encode_as_json_leaves() {
        let encode = |value: &PlainValue| serde_json::to_string(value).unwrap();

        assert_eq!(encode(&PlainValue::Null), "null");
        assert_eq!(encode(&PlainValue::from(true)), "true");
        assert_eq!(encode(&PlainValue::from(-3)), "-3");
        assert_eq!(encode(&PlainValue::from("s")), r#""s""#);
    }

    #[test]
    fn non_finite_floats_follow_the_encoder() {
        // The core does not pre-validate; serde_json renders non-finite
        // numbers as null.
        let mut object = DynamicObject::new();
        object.extend("ratio", f64::NAN);

        assert_eq!(object.to_json().unwrap(), r#"{"ratio":null}"#);
    }

    #[test]
    fn pretty_output_parses_back() {
        let pretty = sample().to_json_pretty().unwrap();
        let compact = sample().to_json().unwrap();

        let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
    }
}
