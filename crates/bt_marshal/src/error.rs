use alloc::sync::Arc;
use core::fmt::{self, Write};

use serde_json::Value;
use thiserror::Error;

// -----------------------------------------------------------------------------
// JsonKind

/// The shape of a raw JSON value, reported by coercion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the kind of `value`.
    #[inline]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("null"),
            Self::Bool => f.pad("boolean"),
            Self::Number => f.pad("number"),
            Self::String => f.pad("string"),
            Self::Array => f.pad("array"),
            Self::Object => f.pad("object"),
        }
    }
}

// -----------------------------------------------------------------------------
// NamingError

/// A wire name could not be resolved.
///
/// Always a programming error: the field table of a type and its accessors
/// disagree, or a caller asked for a field the type does not declare.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NamingError {
    #[error("type `{type_path}` declares no marshalled field `{field}`")]
    UnknownField {
        type_path: &'static str,
        field: String,
    },
}

// -----------------------------------------------------------------------------
// CoercionError

/// A JSON value cannot be converted into the declared shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoercionError {
    #[error("expected {expected}, found JSON {found}")]
    Mismatch {
        expected: &'static str,
        found: JsonKind,
    },
    #[error("`{raw}` cannot be parsed as {expected}")]
    Unparsable { expected: &'static str, raw: String },
    #[error("{value} is out of range for {expected}")]
    OutOfRange {
        expected: &'static str,
        value: String,
    },
    #[error("`{raw}` is not a variant of `{type_path}`")]
    UnknownVariant { type_path: &'static str, raw: String },
    #[error("malformed {expected}: {detail}")]
    Shape {
        expected: &'static str,
        detail: String,
    },
}

impl CoercionError {
    /// Shorthand for [`CoercionError::Mismatch`] against `found`.
    #[inline]
    pub const fn mismatch(expected: &'static str, found: &Value) -> Self {
        Self::Mismatch {
            expected,
            found: JsonKind::of(found),
        }
    }
}

// -----------------------------------------------------------------------------
// SerializeError

/// Failure of a serialization call. No partial tree is returned with it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SerializeError {
    #[error("serialization configuration error: {0}")]
    Naming(#[from] NamingError),
}

// -----------------------------------------------------------------------------
// DeserializeError

/// Failure of a deserialization call.
///
/// Nested variants keep the path that led to the failing value, see
/// [`DeserializeError::wire_path`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeserializeError {
    #[error(transparent)]
    Naming(#[from] NamingError),
    #[error(transparent)]
    Coercion(#[from] CoercionError),
    #[error("field `{type_path}.{field}` (wire name `{wire_name}`): {source}")]
    Field {
        type_path: &'static str,
        field: &'static str,
        wire_name: Arc<str>,
        source: Box<DeserializeError>,
    },
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<DeserializeError>,
    },
    #[error("entry `{key}`: {source}")]
    Entry {
        key: String,
        source: Box<DeserializeError>,
    },
}

impl DeserializeError {
    /// Wraps `self` as the failure of element `index`.
    #[inline]
    pub fn in_element(self, index: usize) -> Self {
        Self::Element {
            index,
            source: Box::new(self),
        }
    }

    /// Wraps `self` as the failure of map entry `key`.
    #[inline]
    pub fn in_entry(self, key: &str) -> Self {
        Self::Entry {
            key: key.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, past every field, element and entry wrapper.
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Field { source, .. }
        | Self::Element { source, .. }
        | Self::Entry { source, .. } = current
        {
            current = &**source;
        }
        current
    }

    /// The wire location of the failing value, e.g. `stack-trace[2].line-number`.
    ///
    /// Empty when the failure is at the root.
    pub fn wire_path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            match current {
                Self::Field {
                    wire_name, source, ..
                } => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(wire_name);
                    current = &**source;
                }
                Self::Element { index, source } => {
                    let _ = write!(path, "[{index}]");
                    current = &**source;
                }
                Self::Entry { key, source } => {
                    let _ = write!(path, "[{key:?}]");
                    current = &**source;
                }
                Self::Naming(_) | Self::Coercion(_) => return path,
            }
        }
    }
}

// -----------------------------------------------------------------------------
// MarshalError

/// Failure of the string-level entry points of [`Marshaller`](crate::Marshaller).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MarshalError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use serde_json::json;

    use super::{CoercionError, DeserializeError, JsonKind};

    fn leaf() -> DeserializeError {
        CoercionError::mismatch("i32", &json!("abc")).into()
    }

    #[test]
    fn json_kind_display() {
        assert_eq!(JsonKind::of(&json!(null)).to_string(), "null");
        assert_eq!(JsonKind::of(&json!([1])).to_string(), "array");
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn wire_path_follows_nesting() {
        let inner = DeserializeError::Field {
            type_path: "Frame",
            field: "lineNumber",
            wire_name: Arc::from("line-number"),
            source: Box::new(leaf()),
        };
        let outer = DeserializeError::Field {
            type_path: "Fault",
            field: "stackTrace",
            wire_name: Arc::from("stack-trace"),
            source: Box::new(inner.in_element(2)),
        };
        assert_eq!(outer.wire_path(), "stack-trace[2].line-number");
        assert_eq!(outer.root_cause(), &leaf());
        assert_eq!(leaf().wire_path(), "");
    }

    #[test]
    fn field_error_names_field_and_wire_name() {
        let error = DeserializeError::Field {
            type_path: "Frame",
            field: "lineNumber",
            wire_name: Arc::from("line-number"),
            source: Box::new(leaf()),
        };
        assert_eq!(
            error.to_string(),
            "field `Frame.lineNumber` (wire name `line-number`): expected i32, found JSON string"
        );
    }
}
