//! Decoding of the service's uniform response envelope.
//!
//! Every operation funnels its raw `(status, body)` pair through
//! [`parse_response`], so all of them share identical failure semantics: no
//! operation interprets statuses or envelopes on its own.

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::TicketingError;

/// JSON wrapper every 200-status response follows.
#[derive(Debug, Deserialize)]
struct ServiceEnvelope {
    #[serde(deserialize_with = "numeric_error_code")]
    error: i64,
    #[serde(default)]
    result: Value,
    #[serde(rename = "errorDescription", default)]
    error_description: Option<String>,
}

/// The service has been observed emitting both `0` and `"0"` in the `error`
/// field; accept either form and compare numerically.
fn numeric_error_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(code) => Ok(code),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Turn a raw `(status, body)` pair into the operation's result.
pub(crate) fn parse_response(status: StatusCode, body: &str) -> Result<Value, TicketingError> {
    match status.as_u16() {
        200 => {
            let mut deserializer = serde_json::Deserializer::from_str(body);
            let envelope: ServiceEnvelope = serde_path_to_error::deserialize(&mut deserializer)
                .map_err(|e| TicketingError::MalformedResponse(e.to_string()))?;

            if envelope.error == 0 {
                Ok(envelope.result)
            } else {
                Err(TicketingError::Service {
                    description: envelope.error_description.unwrap_or_default(),
                })
            }
        }
        401 => Err(TicketingError::Unauthorized),
        403 => Err(TicketingError::Forbidden),
        _ => Err(TicketingError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_returns_the_result_field_verbatim() {
        let body = r#"{"error": 0, "result": {"id": 42, "tags": ["a", "b"]}}"#;
        let result = parse_response(StatusCode::OK, body).unwrap();
        assert_eq!(result, json!({"id": 42, "tags": ["a", "b"]}));
    }

    #[test]
    fn success_without_result_field_yields_null() {
        let result = parse_response(StatusCode::OK, r#"{"error": 0}"#).unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn quoted_zero_error_code_counts_as_success() {
        let body = r#"{"error": "0", "result": true}"#;
        let result = parse_response(StatusCode::OK, body).unwrap();
        assert_eq!(result, json!(true));
    }

    #[test]
    fn nonzero_error_code_carries_the_service_description() {
        let body = r#"{"error": 12, "errorDescription": "No such ticket."}"#;
        let err = parse_response(StatusCode::OK, body).unwrap_err();
        match err {
            TicketingError::Service { description } => {
                assert_eq!(description, "No such ticket.")
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn quoted_nonzero_error_code_is_a_failure_too() {
        let body = r#"{"error": "7", "errorDescription": "Bad filter."}"#;
        let err = parse_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, TicketingError::Service { .. }));
    }

    #[test]
    fn nonzero_error_without_description_yields_empty_description() {
        let err = parse_response(StatusCode::OK, r#"{"error": 1}"#).unwrap_err();
        match err {
            TicketingError::Service { description } => assert_eq!(description, ""),
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn status_401_is_unauthorized_regardless_of_body() {
        let err = parse_response(StatusCode::UNAUTHORIZED, r#"{"error": 0}"#).unwrap_err();
        assert!(matches!(err, TicketingError::Unauthorized));
        assert_eq!(err.to_string(), "You are Unauthorized.");
    }

    #[test]
    fn status_403_is_forbidden() {
        let err = parse_response(StatusCode::FORBIDDEN, "").unwrap_err();
        assert!(matches!(err, TicketingError::Forbidden));
        assert_eq!(err.to_string(), "You are Forbidden.");
    }

    #[test]
    fn other_statuses_are_unknown_errors() {
        for code in [204, 301, 404, 418, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = parse_response(status, "").unwrap_err();
            assert!(matches!(err, TicketingError::Unknown), "status {code}");
            assert_eq!(err.to_string(), "An error has occurred.");
        }
    }

    #[test]
    fn malformed_body_on_200_is_reported_not_panicked() {
        let err = parse_response(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, TicketingError::MalformedResponse(_)));
    }

    #[test]
    fn non_numeric_error_field_is_malformed() {
        let err = parse_response(StatusCode::OK, r#"{"error": "sideways"}"#).unwrap_err();
        assert!(matches!(err, TicketingError::MalformedResponse(_)));
    }

    #[test]
    fn missing_error_field_is_malformed() {
        let err = parse_response(StatusCode::OK, r#"{"result": true}"#).unwrap_err();
        assert!(matches!(err, TicketingError::MalformedResponse(_)));
    }
}
