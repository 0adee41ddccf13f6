//! The result of submitting a report.
//!
//! The submission endpoint answers with `{"_rxid": "...", "response": "ok"}`;
//! [`SubmissionResult`] is what the sender hands back to its caller.

use core::fmt;
use core::str::FromStr;

use bt_marshal::de::parse_unit_enum;
use bt_marshal::derive::Marshal;
use bt_marshal::ops::UnitEnum;
use thiserror::Error;

// -----------------------------------------------------------------------------
// ResultStatus

/// Outcome of a submission. Parsed case-insensitively.
///
/// # Examples
///
/// ```
/// use bt_response::submission::ResultStatus;
///
/// assert_eq!("ok".parse::<ResultStatus>(), Ok(ResultStatus::Ok));
/// assert_eq!("SERVERERROR".parse::<ResultStatus>(), Ok(ResultStatus::ServerError));
/// assert!("unsupported-value".parse::<ResultStatus>().is_err());
/// ```
#[derive(Marshal, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[marshal(ignore_case)]
pub enum ResultStatus {
    /// Sending failed.
    ServerError,
    /// The backend accepted the data.
    #[default]
    Ok,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatusError {
    #[error("unrecognized result status `{0}`")]
    Unrecognized(String),
}

impl FromStr for ResultStatus {
    type Err = StatusError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_unit_enum(raw).map_err(|_| StatusError::Unrecognized(raw.into()))
    }
}

impl fmt::Display for ResultStatus {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}

// -----------------------------------------------------------------------------
// ApiResult

/// The raw answer of the submission endpoint.
#[derive(Marshal, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResult {
    #[marshal(rename = "_rxid")]
    pub rx_id: Option<String>,
    pub response: Option<String>,
}

impl ApiResult {
    pub fn new(rx_id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            rx_id: Some(rx_id.into()),
            response: Some(response.into()),
        }
    }
}

// -----------------------------------------------------------------------------
// SubmissionResult

/// The result of one submission.
///
/// # Examples
///
/// ```
/// use bt_response::submission::{ApiResult, ResultStatus, SubmissionResult};
///
/// let result = SubmissionResult::try_from(ApiResult::new("95000000-eb43", "ok")).unwrap();
///
/// assert_eq!(result.rx_id.as_deref(), Some("95000000-eb43"));
/// assert_eq!(result.status, ResultStatus::Ok);
/// ```
#[derive(Marshal, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionResult {
    #[marshal(rename = "_rxid")]
    pub rx_id: Option<String>,
    pub message: Option<String>,
    pub status: ResultStatus,
}

impl SubmissionResult {
    /// A successful submission acknowledged as `rx_id`.
    pub fn ok(rx_id: impl Into<String>) -> Self {
        Self {
            rx_id: Some(rx_id.into()),
            message: None,
            status: ResultStatus::Ok,
        }
    }

    /// A failed submission.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            rx_id: None,
            message: Some(message.into()),
            status: ResultStatus::ServerError,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == ResultStatus::Ok
    }
}

impl TryFrom<ApiResult> for SubmissionResult {
    type Error = StatusError;

    /// A missing `response` counts as [`ResultStatus::ServerError`]: error
    /// bodies carry no status. An unrecognized one fails.
    fn try_from(api: ApiResult) -> Result<Self, Self::Error> {
        let status = match api.response.as_deref() {
            Some(raw) => raw.parse()?,
            None => ResultStatus::ServerError,
        };
        Ok(Self {
            rx_id: api.rx_id,
            message: None,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ApiResult, ResultStatus, StatusError, SubmissionResult};

    const RX_ID: &str = "95000000-eb43-390b-0000-000000000000";

    #[test]
    fn status_is_case_insensitive() {
        for raw in ["ok", "Ok", "OK", "oK"] {
            assert_eq!(raw.parse::<ResultStatus>(), Ok(ResultStatus::Ok), "{raw}");
        }
        for raw in ["servererror", "ServerError", "SERVERERROR"] {
            assert_eq!(raw.parse::<ResultStatus>(), Ok(ResultStatus::ServerError), "{raw}");
        }
    }

    #[test]
    fn unrecognized_status_fails() {
        assert_eq!(
            "unsupported-value".parse::<ResultStatus>(),
            Err(StatusError::Unrecognized("unsupported-value".into()))
        );
        assert!("".parse::<ResultStatus>().is_err());
        assert!(" ok".parse::<ResultStatus>().is_err());
    }

    #[test]
    fn status_display() {
        assert_eq!(ResultStatus::Ok.to_string(), "Ok");
        assert_eq!(ResultStatus::ServerError.to_string(), "ServerError");
    }

    #[test]
    fn from_api_result() {
        let result = SubmissionResult::try_from(ApiResult::new(RX_ID, "OK")).unwrap();
        assert_eq!(result, SubmissionResult::ok(RX_ID));

        assert!(SubmissionResult::try_from(ApiResult::new(RX_ID, "accepted")).is_err());
    }

    #[test]
    fn error_body_is_a_server_error() {
        for body in [
            r#"{ "error": { "code": 6, "message": "invalid token" } }"#,
            r#"{ "error": { "code": 401, "message": "unauthorized" } }"#,
        ] {
            let api: ApiResult = crate::marshaller().from_json_str(body).unwrap();
            assert_eq!(api.response, None);

            let result = SubmissionResult::try_from(api).unwrap();
            assert_eq!(result.status, ResultStatus::ServerError, "{body}");
            assert!(!result.is_ok());
        }
    }

    #[test]
    fn wire_shape() {
        let marshaller = crate::marshaller();

        let json = marshaller.serialize(&SubmissionResult::ok(RX_ID)).unwrap();
        assert_eq!(json, json!({ "_rxid": RX_ID, "message": null, "status": "Ok" }));

        let back: SubmissionResult = marshaller.deserialize(&json).unwrap();
        assert_eq!(back, SubmissionResult::ok(RX_ID));

        let failed: SubmissionResult = marshaller
            .deserialize(&json!({ "message": "timeout", "status": "servererror" }))
            .unwrap();
        assert_eq!(failed, SubmissionResult::server_error("timeout"));
        assert!(!failed.is_ok());
    }

    #[test]
    fn api_result_from_wire() {
        let api: ApiResult = crate::marshaller()
            .from_json_str(&format!(r#"{{ "_rxid": "{RX_ID}", "response": "ok" }}"#))
            .unwrap();
        assert_eq!(api, ApiResult::new(RX_ID, "ok"));
    }
}
