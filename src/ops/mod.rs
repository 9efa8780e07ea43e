//! Capability traits for type-erased access to composite values.
//!
//! ## Menu
//!
//! The following are the subtraits of [`Plain`], one per composite
//! [kind](crate::PlainKind):
//!
//! - [`Object`]: for named-field objects (e.g. `struct Account { .. }`).
//! - [`List`]: for indexable sequences (e.g. `Vec<i32>`, `[i32; 5]`).
//! - [`Map`]: for keyed collections (e.g. `BTreeMap<String, i32>`).
//! - [`Enumerated`]: for backed enumerations (unit enums with an underlying
//!   scalar).
//!
//! [`DynamicObject`] is the runtime-assembled counterpart of a derived
//! [`Object`]: fields can be added, left unset, and the visibility
//! configuration is ordinary data.
//!
//! [`Plain`]: crate::Plain

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod list_ops;
mod map_ops;
mod object_ops;

// -----------------------------------------------------------------------------
// Exports

pub use enum_ops::{Backing, Enumerated};
pub use list_ops::{List, ListItemIter};
pub use map_ops::{AsMapKey, Map, MapEntryIter, MapKey};
pub use object_ops::{DynamicObject, FieldAccess, Object, ObjectFieldIter};
