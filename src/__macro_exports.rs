//! Re-exports used by the code `#[derive(Plain)]` generates.
//!
//! Not public API; there are no stability guarantees here.

#![doc(hidden)]

pub use alloc::boxed::Box;
pub use core::option::Option;
