//! A policy-driven marshalling engine between Rust values and JSON trees.
//!
//! Types describe their fields once through a static table emitted by
//! [`derive::Marshal`]; the engine walks that table in both directions:
//!
//! - [`ser`] turns any [`Marshal`] value into a [`serde_json::Value`],
//!   naming fields through a [`NamingPolicy`](naming::NamingPolicy).
//! - [`de`] rebuilds a value from JSON, coercing scalars where it can.
//!
//! ## Menu
//!
//! - [`naming`]: naming converters, policies and the wire-name cache.
//! - [`info`]: static field tables and [`Typed`](info::Typed).
//! - [`ops`]: the shape traits ([`Struct`](ops::Struct), [`List`](ops::List), ...).
//! - [`fault`]: [`ReportableError`](fault::ReportableError), errors as payload data.
//! - [`MarshalConfig`] and [`Marshaller`]: knobs and a bundled entry point.
//!
//! # Examples
//!
//! ```
//! use bt_marshal::{derive::Marshal, naming::NamingPolicy};
//! use serde_json::json;
//!
//! #[derive(Marshal, Default, Debug, PartialEq)]
//! struct Frame {
//!     method_name: String,
//!     line_number: u32,
//! }
//!
//! let frame = Frame { method_name: "run".into(), line_number: 12 };
//! let json = bt_marshal::serialize(&NamingPolicy::default(), &frame).unwrap();
//! assert_eq!(json, json!({ "method-name": "run", "line-number": 12 }));
//!
//! let back: Frame = bt_marshal::deserialize(&json).unwrap();
//! assert_eq!(back, frame);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Derived impls name this crate as `::bt_marshal`, including the ones inside it.
extern crate self as bt_marshal;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;
mod marshal;
mod marshaller;

pub mod de;
pub mod fault;
pub mod impls;
pub mod info;
pub mod naming;
pub mod ops;
pub mod ser;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use bt_marshal_derive as derive;

pub use config::{FieldErrorPolicy, MarshalConfig, ScalarStyle};
pub use de::{deserialize, deserialize_with};
pub use error::{CoercionError, DeserializeError, JsonKind, MarshalError};
pub use error::{NamingError, SerializeError};
pub use marshal::{Marshal, MarshalKind, MarshalRef, Scalar};
pub use marshaller::Marshaller;
pub use ser::serialize;

pub use serde_json;
