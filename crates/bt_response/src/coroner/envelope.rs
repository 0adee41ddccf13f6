use bt_marshal::MarshalError;
use bt_marshal::derive::Marshal;

use super::{CoronerResponse, QueryError};

/// Error reported by the query backend.
#[derive(Marshal, Debug, Clone, Default, PartialEq, Eq)]
pub struct CoronerError {
    pub message: String,
    pub code: i64,
}

/// The envelope of every query response: either a response or an error.
#[derive(Marshal, Debug, Clone, Default, PartialEq)]
pub struct CoronerApiResponse {
    pub error: Option<CoronerError>,
    pub response: Option<CoronerResponse>,
}

impl CoronerApiResponse {
    /// Decodes an envelope from the body of a query response.
    pub fn from_json_str(body: &str) -> Result<Self, MarshalError> {
        crate::marshaller().from_json_str(body)
    }

    /// The response, or the error the backend reported instead.
    pub fn into_response(self) -> Result<CoronerResponse, QueryError> {
        if let Some(error) = self.error {
            log::error!("query backend returned error {}: {}", error.code, error.message);
            return Err(QueryError::Server(error));
        }
        self.response.ok_or(QueryError::MissingResponse)
    }
}

#[cfg(test)]
mod tests {
    use bt_marshal::MarshalError;

    use super::{CoronerApiResponse, CoronerError};
    use crate::coroner::QueryError;

    #[test]
    fn server_error_envelope() {
        let envelope = CoronerApiResponse::from_json_str(
            r#"{ "error": { "message": "invalid token", "code": 6 }, "response": null }"#,
        )
        .unwrap();
        assert_eq!(
            envelope.into_response(),
            Err(QueryError::Server(CoronerError {
                message: "invalid token".into(),
                code: 6,
            }))
        );
    }

    #[test]
    fn empty_envelope() {
        let envelope = CoronerApiResponse::from_json_str("{}").unwrap();
        assert_eq!(envelope.into_response(), Err(QueryError::MissingResponse));
    }

    #[test]
    fn response_envelope() {
        let response = CoronerApiResponse::from_json_str(
            r#"{
                "error": null,
                "response": {
                    "columns_desc": [
                        { "name": "guid", "format": "uuid", "type": "uuid", "op": "head" },
                        { "name": "error.message", "format": "none", "type": "dictionary", "op": "head" }
                    ],
                    "values": [["*", [["1f0e"], ["boom"]], 1]]
                }
            }"#,
        )
        .unwrap()
        .into_response()
        .unwrap();

        assert_eq!(response.columns_desc[0].kind.as_deref(), Some("uuid"));
        assert_eq!(response.get_attribute::<String>(0, "guid"), Ok("1f0e".into()));
    }

    #[test]
    fn malformed_group_fails() {
        let result = CoronerApiResponse::from_json_str(
            r#"{ "response": { "columns_desc": [], "values": [[]] } }"#,
        );
        let Err(MarshalError::Deserialize(err)) = result else {
            panic!("unexpected result: {result:?}");
        };
        assert_eq!(err.wire_path(), "response.values[0]");
    }
}
