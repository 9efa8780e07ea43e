//! Per-field visibility resolution.
//!
//! An object may carry an allow-list and a deny-list, each supplied in one
//! of two forms: as a field literally named `whitelist` / `blacklist`, or as
//! a zero-argument accessor of the same name. Resolution probes the field
//! form first, then the accessor form, and an accessor result *replaces* a
//! field result; both sources are consulted and the accessor wins.
//!
//! A field is included iff it passes both checks:
//!
//! - allow-list: absent, or contains the field name;
//! - deny-list: absent, or does not contain the field name.
//!
//! Fields named `whitelist` or `blacklist` are configuration, never data;
//! the [extractor](crate::extract()) drops them before consulting this
//! module.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::ops::Object;

// -----------------------------------------------------------------------------
// Reserved names

/// The reserved allow-list field/accessor name.
pub const WHITELIST: &str = "whitelist";

/// The reserved deny-list field/accessor name.
pub const BLACKLIST: &str = "blacklist";

/// Returns `true` for the reserved configuration names, which never appear
/// in extraction output.
#[inline]
pub fn is_config_field(name: &str) -> bool {
    name == WHITELIST || name == BLACKLIST
}

// -----------------------------------------------------------------------------
// FieldNames

/// An ordered sequence of field names, the payload of an allow-list or
/// deny-list.
///
/// An *absent* list (`Option::None` at the [`Object`] probes) and an
/// *empty* `FieldNames` are different states: absence disables the check
/// entirely, while an empty allow-list admits no field at all.
///
/// # Examples
///
/// ```
/// use plainview::visibility::FieldNames;
///
/// let names = FieldNames::from_iter(["id", "name"]);
/// assert!(names.contains("id"));
/// assert!(!names.contains("secret"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FieldNames {
    names: Vec<Cow<'static, str>>,
}

impl FieldNames {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Appends a name.
    #[inline]
    pub fn push(&mut self, name: impl Into<Cow<'static, str>>) {
        self.names.push(name.into());
    }

    /// Returns `true` if `name` appears in the sequence.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns the number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the sequence holds no names.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns an iterator over the names, in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(AsRef::as_ref)
    }
}

impl<S: Into<Cow<'static, str>>> FromIterator<S> for FieldNames {
    fn from_iter<T: IntoIterator<Item = S>>(names: T) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Debug for FieldNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// AsFieldNames

/// Conversion of a user-held list into [`FieldNames`].
///
/// This is what lets a `whitelist` field keep its natural type
/// (`Vec<String>`, `Vec<&str>`, an array of literals, or `FieldNames`
/// itself) while the resolver sees one shape. The derive macro routes
/// configuration fields and accessors through this trait.
pub trait AsFieldNames {
    /// Copies this list into an owned [`FieldNames`].
    fn as_field_names(&self) -> FieldNames;
}

impl AsFieldNames for FieldNames {
    #[inline]
    fn as_field_names(&self) -> FieldNames {
        self.clone()
    }
}

impl AsFieldNames for [&str] {
    fn as_field_names(&self) -> FieldNames {
        self.iter().map(|name| name.to_string()).collect()
    }
}

impl AsFieldNames for [String] {
    fn as_field_names(&self) -> FieldNames {
        self.iter().map(|name| name.clone()).collect()
    }
}

impl<const N: usize> AsFieldNames for [&str; N] {
    #[inline]
    fn as_field_names(&self) -> FieldNames {
        self.as_slice().as_field_names()
    }
}

impl<const N: usize> AsFieldNames for [String; N] {
    #[inline]
    fn as_field_names(&self) -> FieldNames {
        self.as_slice().as_field_names()
    }
}

impl AsFieldNames for Vec<&str> {
    #[inline]
    fn as_field_names(&self) -> FieldNames {
        self.as_slice().as_field_names()
    }
}

impl AsFieldNames for Vec<String> {
    #[inline]
    fn as_field_names(&self) -> FieldNames {
        self.as_slice().as_field_names()
    }
}

// -----------------------------------------------------------------------------
// Resolution

/// Resolves the allow-list configured on `object`, if any.
///
/// The field form is probed first, then the accessor form; an accessor
/// result replaces a field result.
pub fn allow_list(object: &dyn Object) -> Option<FieldNames> {
    let mut list = object.whitelist_field();
    if let Some(names) = object.whitelist_accessor() {
        list = Some(names);
    }
    list
}

/// Resolves the deny-list configured on `object`, if any.
///
/// Same source resolution as [`allow_list`].
pub fn deny_list(object: &dyn Object) -> Option<FieldNames> {
    let mut list = object.blacklist_field();
    if let Some(names) = object.blacklist_accessor() {
        list = Some(names);
    }
    list
}

/// Decides whether the field `name` is visible on `object`.
///
/// A field passes when the resolved allow-list is absent or contains it,
/// and the resolved deny-list is absent or does not. The reserved
/// configuration names are not this function's concern; the extractor
/// drops them before visibility is consulted.
pub fn included(name: &str, object: &dyn Object) -> bool {
    included_in(name, allow_list(object).as_ref(), deny_list(object).as_ref())
}

/// Visibility check against already-resolved lists.
pub(crate) fn included_in(
    name: &str,
    allow: Option<&FieldNames>,
    deny: Option<&FieldNames>,
) -> bool {
    if let Some(allow) = allow
        && !allow.contains(name)
    {
        return false;
    }
    if let Some(deny) = deny
        && deny.contains(name)
    {
        return false;
    }
    true
}

// -----------------------------------------------------------------------------
// Accessor names

/// Derives the getter name the extractor probes for a non-public field:
/// `get` followed by the upper-camel-case form of the field name.
///
/// # Examples
///
/// ```
/// use plainview::visibility::accessor_name;
///
/// assert_eq!(accessor_name("count"), "getCount");
/// assert_eq!(accessor_name("display_name"), "getDisplayName");
/// ```
pub fn accessor_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len() + 3);
    name.push_str("get");
    for part in field.split('_').filter(|part| !part.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_names() {
        assert!(is_config_field("whitelist"));
        assert!(is_config_field("blacklist"));
        assert!(!is_config_field("id"));
    }

    #[test]
    fn empty_is_not_absent() {
        let empty = FieldNames::new();
        assert!(!included_in("id", Some(&empty), None));
        assert!(included_in("id", None, Some(&empty)));
        assert!(included_in("id", None, None));
    }

    #[test]
    fn allow_and_deny() {
        let allow = FieldNames::from_iter(["id", "name"]);
        let deny = FieldNames::from_iter(["name"]);

        assert!(included_in("id", Some(&allow), Some(&deny)));
        assert!(!included_in("name", Some(&allow), Some(&deny)));
        assert!(!included_in("secret", Some(&allow), Some(&deny)));
    }

    #[test]
    fn list_conversions() {
        let from_vec = alloc::vec![String::from("a"), String::from("b")].as_field_names();
        let from_array = ["a", "b"].as_field_names();
        assert_eq!(from_vec, from_array);
    }

    #[test]
    fn getter_names() {
        assert_eq!(accessor_name("count"), "getCount");
        assert_eq!(accessor_name("display_name"), "getDisplayName");
        assert_eq!(accessor_name("_hidden"), "getHidden");
        assert_eq!(accessor_name("already_camelCase"), "getAlreadyCamelCase");
    }
}
