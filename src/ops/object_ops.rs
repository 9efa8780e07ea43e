use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::Plain;
use crate::kind::PlainRef;
use crate::visibility::FieldNames;

// -----------------------------------------------------------------------------
// FieldAccess

/// The access state of one declared field, as seen by the extractor.
///
/// The extractor turns each state into a raw value:
///
/// - [`Public`]: the field is initialized and publicly readable, so its value
///   is used directly.
/// - [`Unset`]: the field is declared but holds no value, so it extracts as
///   null.
/// - [`Private`]: the field is not publicly readable; the extractor probes
///   the object's [`accessor`] under the derived getter name and falls back
///   to null when none is defined.
///
/// [`Public`]: FieldAccess::Public
/// [`Unset`]: FieldAccess::Unset
/// [`Private`]: FieldAccess::Private
/// [`accessor`]: Object::accessor
#[derive(Debug, Clone, Copy)]
pub enum FieldAccess<'a> {
    /// Initialized and publicly readable.
    Public(&'a dyn Plain),
    /// Declared but uninitialized.
    Unset,
    /// Initialized but not publicly readable.
    Private,
}

// -----------------------------------------------------------------------------
// Object trait

/// A trait for named-field objects, the targets of extraction.
///
/// An `Object` exposes everything the extraction algorithm needs to know
/// about an instance:
///
/// - its declared fields, in declaration order ([`field_len`] / [`name_at`]),
/// - the access state of each field ([`field_at`]),
/// - zero-argument accessor dispatch by name ([`accessor`]), and
/// - the optional visibility configuration, split by source form
///   ([`whitelist_field`] / [`whitelist_accessor`] and the blacklist pair).
///
/// The configuration probes return `None` when the corresponding source
/// does not exist at all, a state deliberately distinct from
/// `Some(FieldNames::new())`, which is an existing-but-empty list. Absence
/// means "no filtering of this kind"; an empty allow-list admits nothing.
///
/// When using [`#[derive(Plain)]`](crate::derive::Plain) on a struct with
/// named fields, this trait is implemented automatically.
///
/// # Examples
///
/// ```
/// use plainview::ToPlain;
/// use plainview::derive::Plain;
///
/// #[derive(Plain)]
/// struct Account {
///     pub id: u32,
///     pub name: &'static str,
/// }
///
/// let account = Account { id: 7, name: "ada" };
/// let plain = account.to_plain();
///
/// assert_eq!(plain.get("id").and_then(|v| v.as_u64()), Some(7));
/// assert_eq!(plain.get("name").and_then(|v| v.as_str()), Some("ada"));
/// ```
///
/// [`field_len`]: Object::field_len
/// [`name_at`]: Object::name_at
/// [`field_at`]: Object::field_at
/// [`accessor`]: Object::accessor
/// [`whitelist_field`]: Object::whitelist_field
/// [`whitelist_accessor`]: Object::whitelist_accessor
pub trait Object: Plain {
    /// Returns the number of declared fields, configuration fields included.
    fn field_len(&self) -> usize;

    /// Returns the name of the field at `index`, in declaration order.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the access state of the field at `index`.
    fn field_at(&self, index: usize) -> Option<FieldAccess<'_>>;

    /// Invokes the zero-argument accessor `name`, if this object defines
    /// one, and returns its result.
    ///
    /// The extractor looks fields up under their derived getter name; see
    /// [`accessor_name`](crate::visibility::accessor_name).
    #[inline]
    fn accessor(&self, name: &str) -> Option<Box<dyn Plain + '_>> {
        let _ = name;
        None
    }

    /// The allow-list supplied as a field named `whitelist`, if declared.
    #[inline]
    fn whitelist_field(&self) -> Option<FieldNames> {
        None
    }

    /// The allow-list supplied as a zero-argument `whitelist` accessor, if
    /// defined. When present, this overrides [`whitelist_field`].
    ///
    /// [`whitelist_field`]: Object::whitelist_field
    #[inline]
    fn whitelist_accessor(&self) -> Option<FieldNames> {
        None
    }

    /// The deny-list supplied as a field named `blacklist`, if declared.
    #[inline]
    fn blacklist_field(&self) -> Option<FieldNames> {
        None
    }

    /// The deny-list supplied as a zero-argument `blacklist` accessor, if
    /// defined. When present, this overrides [`blacklist_field`].
    ///
    /// [`blacklist_field`]: Object::blacklist_field
    #[inline]
    fn blacklist_accessor(&self) -> Option<FieldNames> {
        None
    }
}

impl<'a> dyn Object + 'a {
    /// Returns an iterator over `(name, access)` pairs in declaration order.
    ///
    /// Configuration fields are not filtered here; this is raw enumeration.
    /// Use [`extract`](crate::extract()) for the visibility-resolved view.
    #[inline]
    pub fn iter_fields(&self) -> ObjectFieldIter<'_> {
        ObjectFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Object Field Iterator

/// An iterator over the declared fields of an [`Object`].
///
/// Yields `(name, access)` pairs, from index 0 to `field_len() - 1`.
pub struct ObjectFieldIter<'a> {
    object: &'a dyn Object,
    index: usize,
}

impl<'a> ObjectFieldIter<'a> {
    /// Creates a new iterator for the given object.
    #[inline(always)]
    pub const fn new(object: &'a dyn Object) -> Self {
        ObjectFieldIter { object, index: 0 }
    }
}

impl<'a> Iterator for ObjectFieldIter<'a> {
    type Item = (&'a str, FieldAccess<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.object.name_at(self.index)?;
        let access = self.object.field_at(self.index)?;
        self.index += 1;
        Some((name, access))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.object.field_len();
        (size - self.index, Some(size - self.index))
    }
}

impl ExactSizeIterator for ObjectFieldIter<'_> {}

// -----------------------------------------------------------------------------
// Dynamic Object

/// A named-field object assembled at runtime.
///
/// `DynamicObject` is the dynamic counterpart of a
/// [derived](crate::derive::Plain) object: fields are appended with
/// [`extend`] / [`extend_boxed`], can be left [unset](Self::extend_unset),
/// and the visibility configuration is plain data attached with
/// [`set_whitelist`] / [`set_blacklist`].
///
/// Field order is insertion order; extending an existing name overwrites
/// the value in place without moving the field.
///
/// A field extended under the name `whitelist` or `blacklist` is treated as
/// configuration by the extractor and skipped, like on any other object;
/// the attached configuration lists are independent of that rule.
///
/// # Examples
///
/// ```
/// use plainview::ToPlain;
/// use plainview::ops::DynamicObject;
/// use plainview::visibility::FieldNames;
///
/// let mut object = DynamicObject::new();
/// object.extend("id", 1_i64);
/// object.extend("name", "a");
/// object.extend("secret", "x");
/// object.set_blacklist(Some(FieldNames::from_iter(["secret"])));
///
/// let plain = object.to_plain();
/// assert_eq!(plain.len(), 2);
/// assert!(plain.get("secret").is_none());
/// ```
///
/// [`extend`]: DynamicObject::extend
/// [`extend_boxed`]: DynamicObject::extend_boxed
/// [`set_whitelist`]: DynamicObject::set_whitelist
/// [`set_blacklist`]: DynamicObject::set_blacklist
#[derive(Default)]
pub struct DynamicObject {
    names: Vec<Cow<'static, str>>,
    fields: Vec<Option<Box<dyn Plain>>>,
    indices: BTreeMap<Cow<'static, str>, usize>,
    whitelist: Option<FieldNames>,
    blacklist: Option<FieldNames>,
}

impl DynamicObject {
    /// Creates an empty `DynamicObject`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            fields: Vec::new(),
            indices: BTreeMap::new(),
            whitelist: None,
            blacklist: None,
        }
    }

    /// Creates an empty `DynamicObject` with at least the given field
    /// capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            fields: Vec::with_capacity(capacity),
            indices: BTreeMap::new(),
            whitelist: None,
            blacklist: None,
        }
    }

    /// Appends a boxed value as a field, overwriting a same-named field in
    /// place.
    pub fn extend_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Plain>) {
        self.put(name.into(), Some(value));
    }

    /// Appends a value as a field, overwriting a same-named field in place.
    #[inline]
    pub fn extend<T: Plain + 'static>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.extend_boxed(name, Box::new(value));
    }

    /// Appends a declared-but-uninitialized field, which extracts as null.
    #[inline]
    pub fn extend_unset(&mut self, name: impl Into<Cow<'static, str>>) {
        self.put(name.into(), None);
    }

    fn put(&mut self, name: Cow<'static, str>, value: Option<Box<dyn Plain>>) {
        if let Some(&index) = self.indices.get(&name) {
            self.fields[index] = value;
        } else {
            self.fields.push(value);
            self.indices.insert(name.clone(), self.fields.len() - 1);
            self.names.push(name);
        }
    }

    /// Sets or clears the attached allow-list.
    #[inline]
    pub fn set_whitelist(&mut self, names: Option<FieldNames>) {
        self.whitelist = names;
    }

    /// Sets or clears the attached deny-list.
    #[inline]
    pub fn set_blacklist(&mut self, names: Option<FieldNames>) {
        self.blacklist = names;
    }

    /// Gets the index of the field with the given name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }
}

impl Plain for DynamicObject {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        PlainRef::Object(self)
    }
}

impl Object for DynamicObject {
    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(AsRef::as_ref)
    }

    fn field_at(&self, index: usize) -> Option<FieldAccess<'_>> {
        self.fields.get(index).map(|slot| match slot {
            Some(value) => FieldAccess::Public(&**value),
            None => FieldAccess::Unset,
        })
    }

    #[inline]
    fn whitelist_field(&self) -> Option<FieldNames> {
        self.whitelist.clone()
    }

    #[inline]
    fn blacklist_field(&self) -> Option<FieldNames> {
        self.blacklist.clone()
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Plain>)> for DynamicObject {
    fn from_iter<T: IntoIterator<Item = (N, Box<dyn Plain>)>>(fields: T) -> Self {
        let mut object = DynamicObject::new();
        for (name, value) in fields {
            object.extend_boxed(name, value);
        }
        object
    }
}

impl<'a> IntoIterator for &'a DynamicObject {
    type Item = (&'a str, FieldAccess<'a>);
    type IntoIter = ObjectFieldIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ObjectFieldIter::new(self)
    }
}

impl fmt::Debug for DynamicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicObject(")?;
        fmt::Debug::fmt(self as &dyn Plain, f)?;
        write!(f, ")")
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_and_overwrite() {
        let mut object = DynamicObject::new();
        object.extend("a", 1_i64);
        object.extend("b", 2_i64);
        object.extend("a", 10_i64);

        assert_eq!(object.field_len(), 2);
        assert_eq!(object.index_of("a"), Some(0));
        assert_eq!(object.name_at(1), Some("b"));
    }

    #[test]
    fn unset_fields() {
        let mut object = DynamicObject::new();
        object.extend_unset("pending");

        assert!(matches!(object.field_at(0), Some(FieldAccess::Unset)));
        assert!(object.field_at(1).is_none());
    }

    #[test]
    fn field_iteration() {
        let mut object = DynamicObject::new();
        object.extend("a", 1_i64);
        object.extend_unset("b");

        let object: &dyn Object = &object;
        let names: Vec<_> = object.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
