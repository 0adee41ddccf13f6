//! Field naming: converters, policies and the wire-name cache.
//!
//! ## Menu
//!
//! - [`NamingConverter`]: a pure `&str -> String` transform.
//! - [`separate_camel_case`]: the separator-inserting primitive.
//! - [`LowerCaseWithDash`]: the default converter, `startLine` -> `start-line`.
//! - [`NamingPolicy`]: a converter plus its [`FieldNameCache`].

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod converter;
mod policy;

// -----------------------------------------------------------------------------
// Exports

pub use cache::FieldNameCache;
pub use converter::{Identity, LowerCaseWithDash, NamingConverter, separate_camel_case};
pub use policy::NamingPolicy;
