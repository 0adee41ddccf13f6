//! Serialization: [`Marshal`](crate::Marshal) values into JSON trees.
//!
//! Values are classified through [`MarshalRef`](crate::MarshalRef) and
//! written shape by shape:
//!
//! | shape | output |
//! |---|---|
//! | `Null` | `null` |
//! | `Scalar` | native or stringified, see [`ScalarStyle`](crate::ScalarStyle) |
//! | `Json` | the same structure, scalars kept native |
//! | `List` | array in original order |
//! | `Map` | object, keys as they are |
//! | `Fault` | `{detailMessage, stackTrace, suppressedExceptions}` through the policy |
//! | `Struct` | object keyed by cached wire names, declaration order |
//!
//! Serialization only reads the value graph.

// -----------------------------------------------------------------------------
// Modules

mod driver;

// -----------------------------------------------------------------------------
// Exports

pub use driver::SerializeDriver;

use serde_json::Value;

use crate::naming::NamingPolicy;
use crate::{Marshal, MarshalConfig, SerializeError};

/// Serializes `value` with `policy` and the default [`MarshalConfig`].
#[inline]
pub fn serialize(policy: &NamingPolicy, value: &dyn Marshal) -> Result<Value, SerializeError> {
    SerializeDriver::new(policy, MarshalConfig::default_ref()).serialize(value)
}
