use bt_marshal::JsonKind;
use thiserror::Error;

use super::CoronerError;

/// Failure of a single attribute access on a
/// [`CoronerResponse`](super::CoronerResponse).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResponseError {
    #[error("group index {index} is out of range, the response has {count} groups")]
    GroupOutOfRange { index: usize, count: usize },
    #[error("attribute `{name}` not found in the column descriptors")]
    AttributeNotFound { name: String },
    #[error("cannot read attribute `{attribute}` at column {index}: {reason}")]
    Processing {
        attribute: String,
        index: usize,
        reason: CellError,
    },
}

/// Why a cell could not be read as the expected type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CellError {
    #[error("the group has no cell at this position")]
    Missing,
    #[error("the cell is not wrapped in an array")]
    NotWrapped,
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: JsonKind,
    },
}

/// Failure of a whole query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    #[error("query failed with code {}: {}", .0.code, .0.message)]
    Server(CoronerError),
    #[error("the envelope carries neither a response nor an error")]
    MissingResponse,
}
