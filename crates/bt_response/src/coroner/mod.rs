//! Column-grouped query responses.
//!
//! The query backend folds results into positional groups; the column
//! descriptors of each response are the only mapping from attribute name
//! to position:
//!
//! ```text
//! {
//!   "error": null,
//!   "response": {
//!     "columns_desc": [{ "name": "guid" }, { "name": "error.message" }],
//!     "values": [["*", [["1f0e"], ["boom"]], 1]]
//!   }
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use bt_response::coroner::{CoronerApiResponse, ResponseError};
//!
//! let body = r#"{
//!     "error": null,
//!     "response": {
//!         "columns_desc": [{ "name": "guid" }, { "name": "error.message" }],
//!         "values": [["*", [["1f0e"], ["boom"]], 1]]
//!     }
//! }"#;
//!
//! let response = CoronerApiResponse::from_json_str(body).unwrap().into_response().unwrap();
//! let message: String = response.get_attribute(0, "error.message").unwrap();
//! assert_eq!(message, "boom");
//!
//! assert!(matches!(
//!     response.get_attribute::<String>(0, "missing"),
//!     Err(ResponseError::AttributeNotFound { .. })
//! ));
//! ```

mod cell;
mod envelope;
mod error;
mod group;
mod response;

pub use cell::CellValue;
pub use envelope::{CoronerApiResponse, CoronerError};
pub use error::{CellError, QueryError, ResponseError};
pub use group::ResponseGroup;
pub use response::{ColumnDesc, CoronerResponse};
