//! [`Marshal`](crate::Marshal) impls for std and `serde_json` types.
//!
//! | type | shape |
//! |---|---|
//! | `bool`, `char`, integers, floats, `String` | scalar |
//! | `Option<T>`, `Box<T>` | `Null` or the shape of `T` |
//! | `serde_json::Value` | pre-built JSON |
//! | `Vec<T>` | list |
//! | `BTreeMap<K, V>`, `HashMap<K, V, S>` (std and hashbrown) | map |

// -----------------------------------------------------------------------------
// Modules

mod json;
mod list;
mod map;
mod scalar;
mod wrappers;
