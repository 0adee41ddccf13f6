//! Static descriptions of marshalled types.
//!
//! Instead of inspecting values at runtime, every derived type carries a
//! table of its fields (or unit variants) built once on first use.
//!
//! ## Menu
//!
//! - [`Typed`]: access to the `'static` [`TypeInfo`] of a type.
//! - [`StructInfo`] / [`NamedField`]: ordered field tables with wire-name overrides.
//! - [`EnumInfo`]: variant names of a unit enum.
//! - [`NonGenericTypeInfoCell`] / [`GenericTypeInfoCell`]: storage for the above.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod enum_info;
mod field_info;
mod struct_info;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
pub use enum_info::EnumInfo;
pub use field_info::NamedField;
pub use struct_info::StructInfo;
pub use type_info::{TypeInfo, Typed, enum_info_of, struct_info_of};
