//! Deserialization: JSON trees into [`Marshal`](crate::Marshal) values.
//!
//! A target starts from its `Default` value. For every declared field the
//! wire name is resolved, looked up, and if present coerced into the field:
//!
//! - scalars accept their JSON form and, where it parses, a string;
//! - sequences and maps are rebuilt element by element;
//! - nested structs recurse.
//!
//! Missing keys keep the default. A field that cannot be coerced is
//! reported as [`DeserializeError::Field`](crate::DeserializeError::Field)
//! naming the field and its wire name; [`FieldErrorPolicy`](crate::FieldErrorPolicy)
//! decides whether that aborts the call.

// -----------------------------------------------------------------------------
// Modules

mod driver;
mod unit_enum;

pub(crate) mod coerce;

// -----------------------------------------------------------------------------
// Exports

pub use driver::DeserializeDriver;
pub use unit_enum::{apply_unit_enum, parse_unit_enum};

use serde_json::Value;

use crate::naming::NamingPolicy;
use crate::{DeserializeError, Marshal, MarshalConfig};

/// Deserializes a `T` with the shared policy and the default configuration.
#[inline]
pub fn deserialize<T: Marshal + Default>(value: &Value) -> Result<T, DeserializeError> {
    deserialize_with(NamingPolicy::shared(), value)
}

/// Deserializes a `T` with `policy` and the default configuration.
#[inline]
pub fn deserialize_with<T: Marshal + Default>(
    policy: &NamingPolicy,
    value: &Value,
) -> Result<T, DeserializeError> {
    DeserializeDriver::new(policy, MarshalConfig::default_ref()).deserialize(value)
}
