//! Traits for the container shapes of [`MarshalRef`](crate::MarshalRef).
//!
//! ## Menu
//!
//! - [`Struct`]: field access by declared name.
//! - [`List`]: indexed access to an ordered sequence.
//! - [`Map`]: iteration over string-keyed entries, with [`MapKey`].
//! - [`UnitEnum`]: unit enums written as their variant name.

// -----------------------------------------------------------------------------
// Modules

mod list;
mod map;
mod structs;
mod unit_enum;

// -----------------------------------------------------------------------------
// Exports

pub use list::{List, ListIter};
pub use map::{Map, MapKey};
pub use structs::Struct;
pub use unit_enum::UnitEnum;
