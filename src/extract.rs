use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::kind::{PlainRef, Primitive};
use crate::ops::{Backing, FieldAccess, ListItemIter, Object};
use crate::plain::Plain;
use crate::value::{Number, PlainMap, PlainValue};
use crate::visibility::{self, accessor_name};

// -----------------------------------------------------------------------------
// Extraction

/// Extracts the visible fields of `object` into a fresh [`PlainMap`].
///
/// For every declared field, in declaration order:
///
/// 1. the reserved configuration names (`whitelist`, `blacklist`) are
///    dropped outright;
/// 2. the [visibility](crate::visibility) rules decide inclusion, with the
///    allow/deny-lists resolved once per object (both resolutions are
///    pure, see [`included`](crate::visibility::included));
/// 3. the raw value is read: directly for
///    [`Public`](FieldAccess::Public) fields, through the derived getter
///    ([`accessor_name`]) for [`Private`](FieldAccess::Private) ones, and
///    as null for [`Unset`](FieldAccess::Unset) fields or when no getter is
///    defined;
/// 4. the raw value is [`normalize`]d and stored under the field name.
///
/// The input is never mutated and nothing is cached across calls.
///
/// # Cycles
///
/// There is no cycle detection. Extracting an object graph that reaches
/// itself recurses without bound and aborts the process on stack overflow;
/// cyclic graphs are unsupported.
///
/// # Examples
///
/// ```
/// use plainview::extract;
/// use plainview::derive::Plain;
///
/// #[derive(Plain)]
/// struct Account {
///     pub id: i64,
///     pub name: &'static str,
/// }
///
/// let account = Account { id: 1, name: "a" };
/// let plain = extract(&account); // or: account.to_plain()
///
/// assert_eq!(plain.name_at(0), Some("id"));
/// assert_eq!(plain.get("name").and_then(|v| v.as_str()), Some("a"));
/// ```
pub fn extract(object: &dyn Object) -> PlainMap {
    let allow = visibility::allow_list(object);
    let deny = visibility::deny_list(object);

    let mut result = PlainMap::with_capacity(object.field_len());
    for index in 0..object.field_len() {
        let Some(name) = object.name_at(index) else {
            continue;
        };
        if visibility::is_config_field(name) {
            continue;
        }
        if !visibility::included_in(name, allow.as_ref(), deny.as_ref()) {
            continue;
        }

        let value = match object.field_at(index) {
            Some(FieldAccess::Public(field)) => normalize(field),
            Some(FieldAccess::Private) => match object.accessor(&accessor_name(name)) {
                Some(value) => normalize(&*value),
                None => PlainValue::Null,
            },
            Some(FieldAccess::Unset) | None => PlainValue::Null,
        };
        result.insert(name.to_owned(), value);
    }
    result
}

// -----------------------------------------------------------------------------
// Normalization

/// Reduces any value to its JSON-safe [`PlainValue`] form.
///
/// Dispatches on [`Plain::plain_ref`]:
///
/// 1. a [`List`](crate::ops::List) recurses element-wise, preserving order;
/// 2. a [`Map`](crate::ops::Map) recurses entry-wise, reducing keys to
///    strings;
/// 3. an [`Enumerated`](crate::ops::Enumerated) collapses to its backing
///    scalar;
/// 4. an [`Object`](crate::ops::Object) re-enters [`extract`], so nested
///    objects honor their own visibility configuration;
/// 5. a [`Primitive`](crate::Primitive) converts to the matching leaf.
///
/// The function is pure and idempotent: normalizing an already-normalized
/// value yields an equal value. Like [`extract`], it does not guard against
/// cyclic graphs.
///
/// # Examples
///
/// ```
/// use plainview::normalize;
/// use plainview::value::PlainValue;
///
/// let normalized = normalize(&vec![Some(1), None]);
/// assert_eq!(
///     normalized,
///     PlainValue::List(vec![PlainValue::from(1), PlainValue::Null]),
/// );
/// assert_eq!(normalize(&normalized), normalized);
/// ```
pub fn normalize(value: &dyn Plain) -> PlainValue {
    match value.plain_ref() {
        PlainRef::List(list) => {
            PlainValue::List(ListItemIter::new(list).map(normalize).collect())
        }
        PlainRef::Map(map) => {
            let mut entries = PlainMap::with_capacity(map.len());
            for (key, item) in map.iter_entries() {
                entries.insert(key.to_name().into_owned(), normalize(item));
            }
            PlainValue::Map(entries)
        }
        PlainRef::Enumerated(value) => match value.backing() {
            Backing::Int(scalar) => PlainValue::Number(Number::from(scalar)),
            Backing::Str(scalar) => PlainValue::String(scalar.to_owned()),
        },
        PlainRef::Object(object) => PlainValue::Map(extract(object)),
        PlainRef::Primitive(primitive) => match primitive {
            Primitive::Null => PlainValue::Null,
            Primitive::Bool(value) => PlainValue::Bool(value),
            Primitive::Int(value) => PlainValue::Number(Number::from(value)),
            Primitive::UInt(value) => PlainValue::Number(Number::from(value)),
            Primitive::Float(value) => PlainValue::Number(Number::from(value)),
            Primitive::Str(value) => PlainValue::String(value.to_owned()),
            Primitive::Char(value) => PlainValue::String(String::from(value)),
        },
    }
}

// -----------------------------------------------------------------------------
// ToPlain

/// Method-syntax convenience over [`extract`] and the JSON encoders.
///
/// Blanket-implemented for every [`Object`], including derived ones.
///
/// # Examples
///
/// ```
/// use plainview::ToPlain;
/// use plainview::derive::Plain;
///
/// #[derive(Plain)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let json = Point { x: 1, y: 2 }.to_json().unwrap();
/// assert_eq!(json, r#"{"x":1,"y":2}"#);
/// ```
pub trait ToPlain: Object {
    /// Extracts this object into a [`PlainMap`].
    fn to_plain(&self) -> PlainMap;

    /// Extracts this object and encodes the result as a JSON string.
    fn to_json(&self) -> Result<String, serde_json::Error>;

    /// Extracts this object and encodes the result as pretty-printed JSON.
    fn to_json_pretty(&self) -> Result<String, serde_json::Error>;
}

impl<T: Object> ToPlain for T {
    #[inline]
    fn to_plain(&self) -> PlainMap {
        extract(self)
    }

    #[inline]
    fn to_json(&self) -> Result<String, serde_json::Error> {
        crate::serde::to_json(self)
    }

    #[inline]
    fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        crate::serde::to_json_pretty(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::derive::Plain;
    use crate::ops::DynamicObject;
    use crate::visibility::FieldNames;

    #[derive(Plain)]
    struct Account {
        pub id: i64,
        pub name: &'static str,
        pub secret: &'static str,
        blacklist: Vec<&'static str>,
    }

    fn account() -> Account {
        Account {
            id: 1,
            name: "a",
            secret: "x",
            blacklist: vec!["secret"],
        }
    }

    #[test]
    fn deny_list_scenario() {
        let plain = extract(&account());

        assert_eq!(plain.len(), 2);
        assert_eq!(plain.get("id").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(plain.get("name").and_then(|v| v.as_str()), Some("a"));
        assert!(plain.get("secret").is_none());
        // The configuration field itself never shows up either.
        assert!(plain.get("blacklist").is_none());
    }

    #[derive(Plain)]
    struct Masked {
        pub id: i64,
        pub email: &'static str,
        whitelist: Vec<&'static str>,
    }

    #[test]
    fn allow_list_filters() {
        let masked = Masked {
            id: 9,
            email: "a@b.c",
            whitelist: vec!["id"],
        };
        let plain = extract(&masked);

        assert_eq!(plain.len(), 1);
        assert_eq!(plain.get("id").and_then(|v| v.as_i64()), Some(9));
        assert!(plain.get("email").is_none());
    }

    #[derive(Plain)]
    struct Unfiltered {
        pub id: i64,
        pub name: &'static str,
    }

    #[test]
    fn no_config_includes_everything() {
        let plain = extract(&Unfiltered { id: 3, name: "n" });

        let names: Vec<_> = plain.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "name"]);
    }

    // Both list forms declared: the accessor result must replace the
    // field-held list, not merge with it.
    #[derive(Plain)]
    #[plain(blacklist = "hidden_fields")]
    struct Session {
        pub token: &'static str,
        pub user: &'static str,
        blacklist: Vec<&'static str>,
    }

    impl Session {
        fn hidden_fields(&self) -> [&'static str; 1] {
            ["token"]
        }
    }

    #[test]
    fn accessor_list_overrides_field_list() {
        let session = Session {
            token: "t",
            user: "u",
            blacklist: vec!["user"],
        };
        let plain = extract(&session);

        assert!(plain.get("token").is_none());
        assert_eq!(plain.get("user").and_then(|v| v.as_str()), Some("u"));
    }

    #[derive(Plain)]
    #[plain(whitelist = "visible_fields")]
    struct Badge {
        pub serial: i64,
        pub holder: &'static str,
        whitelist: Vec<&'static str>,
    }

    impl Badge {
        fn visible_fields(&self) -> [&'static str; 1] {
            ["holder"]
        }
    }

    #[test]
    fn accessor_allow_list_overrides_field_list() {
        let badge = Badge {
            serial: 5,
            holder: "h",
            whitelist: vec!["serial"],
        };
        let plain = extract(&badge);

        assert!(plain.get("serial").is_none());
        assert_eq!(plain.get("holder").and_then(|v| v.as_str()), Some("h"));
    }

    #[derive(Plain)]
    enum Status {
        Inactive = 0,
        Active = 2,
    }

    #[derive(Plain)]
    enum Tier {
        #[plain(value = "free")]
        Free,
        #[plain(value = "pro")]
        Pro,
    }

    #[derive(Plain)]
    struct Subscription {
        pub status: Status,
        pub tier: Tier,
    }

    #[test]
    fn backed_enums_collapse_to_scalars() {
        let _ = (Status::Inactive, Tier::Pro);
        let plain = extract(&Subscription {
            status: Status::Active,
            tier: Tier::Free,
        });

        assert_eq!(plain.get("status").and_then(|v| v.as_i64()), Some(2));
        assert_eq!(plain.get("tier").and_then(|v| v.as_str()), Some("free"));
    }

    #[derive(Plain)]
    struct Owner {
        pub id: i64,
        pub name: &'static str,
    }

    #[derive(Plain)]
    struct Repo {
        pub slug: &'static str,
        pub owner: Owner,
    }

    #[test]
    fn nested_objects_expand() {
        let repo = Repo {
            slug: "plainview",
            owner: Owner { id: 7, name: "ada" },
        };
        let plain = extract(&repo);

        let owner = plain.get("owner").and_then(|v| v.as_map()).unwrap();
        assert_eq!(owner.get("id").and_then(|v| v.as_i64()), Some(7));
        assert_eq!(owner.get("name").and_then(|v| v.as_str()), Some("ada"));
    }

    #[derive(Plain)]
    struct Counter {
        #[plain(getter)]
        count: i64,
    }

    impl Counter {
        fn count(&self) -> i64 {
            self.count
        }
    }

    #[test]
    fn private_field_reads_through_getter() {
        let plain = extract(&Counter { count: 5 });
        assert_eq!(plain.get("count").and_then(|v| v.as_i64()), Some(5));
    }

    #[derive(Plain)]
    struct Sealed {
        pub id: i64,
        #[allow(dead_code)]
        secret: &'static str,
    }

    #[test]
    fn private_field_without_getter_is_null() {
        let plain = extract(&Sealed { id: 1, secret: "x" });

        assert_eq!(plain.get("id").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(plain.get("secret"), Some(&PlainValue::Null));
    }

    #[derive(Plain)]
    struct Renamed {
        #[plain(getter = "label")]
        display_name: &'static str,
    }

    impl Renamed {
        fn label(&self) -> &'static str {
            self.display_name
        }
    }

    #[test]
    fn explicit_getter_keeps_derived_lookup_name() {
        let plain = extract(&Renamed { display_name: "d" });
        assert_eq!(plain.get("display_name").and_then(|v| v.as_str()), Some("d"));
    }

    #[test]
    fn unset_fields_are_null() {
        let mut object = DynamicObject::new();
        object.extend("id", 1_i64);
        object.extend_unset("pending");

        let plain = extract(&object);
        assert_eq!(plain.get("pending"), Some(&PlainValue::Null));
    }

    #[test]
    fn dynamic_allow_list() {
        let mut object = DynamicObject::new();
        object.extend("id", 1_i64);
        object.extend("name", "a");
        object.set_whitelist(Some(FieldNames::from_iter(["name"])));

        let plain = extract(&object);
        assert_eq!(plain.len(), 1);
        assert_eq!(plain.get("name").and_then(|v| v.as_str()), Some("a"));
    }

    #[test]
    fn empty_allow_list_admits_nothing() {
        let mut object = DynamicObject::new();
        object.extend("id", 1_i64);
        object.set_whitelist(Some(FieldNames::new()));

        assert!(extract(&object).is_empty());
    }

    #[test]
    fn collections_normalize_element_wise() {
        let mut ranks = BTreeMap::new();
        ranks.insert("ada", 1_u32);
        ranks.insert("bob", 2_u32);

        let normalized = normalize(&ranks);
        let map = normalized.as_map().unwrap();
        assert_eq!(map.get("ada").and_then(|v| v.as_u64()), Some(1));

        let normalized = normalize(&vec![vec![1_u8], vec![2, 3]]);
        let outer = normalized.as_list().unwrap();
        assert_eq!(outer[1].as_list().map(<[_]>::len), Some(2));
    }

    #[test]
    fn integer_map_keys_become_names() {
        let mut by_id = BTreeMap::new();
        by_id.insert(10_u32, "ten");

        let normalized = normalize(&by_id);
        assert_eq!(
            normalized.get("10").and_then(|v| v.as_str()),
            Some("ten"),
        );
    }

    #[test]
    fn options_normalize_to_null_or_value() {
        assert_eq!(normalize(&None::<i32>), PlainValue::Null);
        assert_eq!(normalize(&Some("v")), PlainValue::from("v"));
    }

    #[test]
    fn normalize_is_idempotent() {
        let repo = Repo {
            slug: "s",
            owner: Owner { id: 1, name: "n" },
        };
        let once = normalize(&repo as &dyn Plain);
        let twice = normalize(&once);
        assert_eq!(once, twice);

        let primitives = normalize(&vec![
            PlainValue::Null,
            PlainValue::from(true),
            PlainValue::from(-7),
            PlainValue::from("s"),
        ]);
        assert_eq!(normalize(&primitives), primitives);
    }

    // A hand-written implementation exercising borrowed accessor results,
    // the way a type outside the derive's reach would be wired up.
    struct Manual {
        title: alloc::string::String,
    }

    impl crate::Plain for Manual {
        fn plain_ref(&self) -> crate::PlainRef<'_> {
            crate::PlainRef::Object(self)
        }
    }

    impl crate::ops::Object for Manual {
        fn field_len(&self) -> usize {
            1
        }

        fn name_at(&self, index: usize) -> Option<&str> {
            (index == 0).then_some("title")
        }

        fn field_at(&self, index: usize) -> Option<FieldAccess<'_>> {
            (index == 0).then_some(FieldAccess::Private)
        }

        fn accessor(&self, name: &str) -> Option<Box<dyn crate::Plain + '_>> {
            match name {
                "getTitle" => Some(Box::new(Cow::Borrowed(self.title.as_str()))),
                _ => None,
            }
        }
    }

    #[test]
    fn manual_object_with_borrowed_accessor() {
        let manual = Manual {
            title: alloc::string::String::from("borrowed"),
        };
        let plain = extract(&manual);
        assert_eq!(plain.get("title").and_then(|v| v.as_str()), Some("borrowed"));
    }
}
