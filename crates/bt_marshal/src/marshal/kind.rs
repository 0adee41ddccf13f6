use core::fmt;

use serde_json::Value;

use crate::Scalar;
use crate::fault::ReportableError;
use crate::ops::{List, Map, Struct};

// -----------------------------------------------------------------------------
// MarshalKind

/// The serialization shapes, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarshalKind {
    Null,
    Scalar,
    Json,
    List,
    Map,
    Fault,
    Struct,
}

impl fmt::Display for MarshalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("Null"),
            Self::Scalar => f.pad("Scalar"),
            Self::Json => f.pad("Json"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Fault => f.pad("Fault"),
            Self::Struct => f.pad("Struct"),
        }
    }
}

// -----------------------------------------------------------------------------
// MarshalRef

/// A borrowed, classified view of a value.
///
/// Each impl of [`Marshal`](crate::Marshal) returns exactly one variant.
/// Wrapper types resolve to what they wrap, so an absent `Option` is
/// `Null` before it could be anything else and a pre-built JSON array is
/// `Json` rather than `List`.
#[derive(Clone, Copy)]
pub enum MarshalRef<'a> {
    /// Absent value.
    Null,
    /// Boolean, number, character or string.
    Scalar(Scalar<'a>),
    /// A pre-built JSON value, passed through structurally.
    Json(&'a Value),
    /// Ordered sequence.
    List(&'a dyn List),
    /// String-keyed mapping; keys are never renamed.
    Map(&'a dyn Map),
    /// Error data with the fixed three-key shape.
    Fault(&'a ReportableError),
    /// A plain structured object described by a field table.
    Struct(&'a dyn Struct),
}

impl MarshalRef<'_> {
    #[inline]
    pub const fn kind(&self) -> MarshalKind {
        match self {
            Self::Null => MarshalKind::Null,
            Self::Scalar(_) => MarshalKind::Scalar,
            Self::Json(_) => MarshalKind::Json,
            Self::List(_) => MarshalKind::List,
            Self::Map(_) => MarshalKind::Map,
            Self::Fault(_) => MarshalKind::Fault,
            Self::Struct(_) => MarshalKind::Struct,
        }
    }
}

impl fmt::Debug for MarshalRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Fault(fault) => f.debug_tuple("Fault").field(fault).finish(),
            Self::List(_) | Self::Map(_) | Self::Struct(_) => fmt::Display::fmt(&self.kind(), f),
        }
    }
}
