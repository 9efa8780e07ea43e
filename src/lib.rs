#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro spells paths as `plainview::...`; this alias lets the
// crate's own tests and doc examples use the derive too.
extern crate self as plainview;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod extract;
mod impls;
mod kind;
mod plain;

pub mod ops;
pub mod serde;
pub mod value;
pub mod visibility;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use extract::{ToPlain, extract, normalize};
pub use kind::{PlainKind, PlainRef, Primitive};
pub use plain::Plain;
pub use serde::{to_json, to_json_pretty};

pub use plainview_derive as derive;
