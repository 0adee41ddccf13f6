//! Small building blocks shared by the `bt_*` crates.
//!
//! ## Menu
//!
//! - [`hash`]: fixed-seed and pass-through hashers, `hashbrown` map aliases.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
