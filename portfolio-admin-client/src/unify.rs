//! Failure unification
//!
//! The API reports failures two ways: through the transport (network errors,
//! non-2xx statuses) and inside a 2xx body (`isSuccess: false`). This module
//! folds the second kind into the first so callers see one error channel.

use serde_json::Value;

use crate::error::{ApiError, DEFAULT_BUSINESS_MESSAGE, DEFAULT_BUSINESS_STATUS};

/// Outcome of inspecting a 2xx response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// Not a failure envelope. Hand the body to the caller unchanged.
    PassThrough,
    /// Envelope with `isSuccess == false`.
    BusinessFailure {
        /// `statusCode` of the envelope, or [`DEFAULT_BUSINESS_STATUS`].
        status_code: u16,
        /// `message` of the envelope, or [`DEFAULT_BUSINESS_MESSAGE`].
        message: String,
    },
}

/// Inspect a decoded 2xx body.
///
/// Only an object whose `isSuccess` is the boolean `false` is a failure.
/// Arrays, scalars, objects without `isSuccess`, and objects whose
/// `isSuccess` is not a boolean all pass through.
#[must_use]
pub fn inspect_body(body: &Value) -> Inspection {
    let Some(obj) = body.as_object() else {
        return Inspection::PassThrough;
    };

    match obj.get("isSuccess") {
        Some(Value::Bool(false)) => {
            let status_code = obj
                .get("statusCode")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or(DEFAULT_BUSINESS_STATUS);
            // Only a missing or null message falls back; an empty one is kept.
            let message = obj
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_BUSINESS_MESSAGE)
                .to_string();
            Inspection::BusinessFailure {
                status_code,
                message,
            }
        }
        _ => Inspection::PassThrough,
    }
}

/// `message` field of a (possibly non-JSON) response body.
#[must_use]
pub fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|msg| !msg.trim().is_empty())
        .map(str::to_string)
}

/// Turn a raw HTTP outcome into `Ok(())` (pass through) or the unified error.
///
/// Bodies that are not valid JSON pass through here; decoding them into the
/// caller's type reports the problem.
pub fn check_response(endpoint: &str, status: u16, body: &str) -> Result<(), ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::HttpStatus {
            endpoint: endpoint.to_string(),
            status,
            raw_message: body_message(body),
        });
    }

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return Ok(());
    };

    match inspect_body(&value) {
        Inspection::PassThrough => Ok(()),
        Inspection::BusinessFailure {
            status_code,
            message,
        } => Err(ApiError::Business {
            endpoint: endpoint.to_string(),
            status_code,
            message,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_envelope_detected() {
        let body = json!({"isSuccess": false, "statusCode": 409, "message": "Nombre duplicado", "data": null});
        assert_eq!(
            inspect_body(&body),
            Inspection::BusinessFailure {
                status_code: 409,
                message: "Nombre duplicado".to_string()
            }
        );
    }

    #[test]
    fn failure_envelope_defaults() {
        let body = json!({"isSuccess": false});
        assert_eq!(
            inspect_body(&body),
            Inspection::BusinessFailure {
                status_code: 400,
                message: DEFAULT_BUSINESS_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn failure_envelope_keeps_blank_message() {
        let body = json!({"isSuccess": false, "statusCode": 400, "message": "  "});
        assert_eq!(
            inspect_body(&body),
            Inspection::BusinessFailure {
                status_code: 400,
                message: "  ".to_string()
            }
        );

        let body = json!({"isSuccess": false, "message": null});
        assert!(matches!(
            inspect_body(&body),
            Inspection::BusinessFailure { message, .. } if message == DEFAULT_BUSINESS_MESSAGE
        ));
    }

    #[test]
    fn success_envelope_passes() {
        let body = json!({"isSuccess": true, "statusCode": 200, "data": []});
        assert_eq!(inspect_body(&body), Inspection::PassThrough);
    }

    #[test]
    fn bare_array_passes() {
        let body = json!([{"name": "p1"}, {"name": "p2"}]);
        assert_eq!(inspect_body(&body), Inspection::PassThrough);
    }

    #[test]
    fn missing_flag_passes() {
        let body = json!({"statusCode": 500, "message": "x"});
        assert_eq!(inspect_body(&body), Inspection::PassThrough);
    }

    #[test]
    fn non_boolean_flag_passes() {
        assert_eq!(inspect_body(&json!({"isSuccess": "false"})), Inspection::PassThrough);
        assert_eq!(inspect_body(&json!({"isSuccess": 0})), Inspection::PassThrough);
        assert_eq!(inspect_body(&json!({"isSuccess": null})), Inspection::PassThrough);
    }

    #[test]
    fn non_2xx_keeps_body_message() {
        let result = check_response("portfolio/urls", 500, r#"{"message":"Fallo interno"}"#);
        assert_eq!(
            result,
            Err(ApiError::HttpStatus {
                endpoint: "portfolio/urls".to_string(),
                status: 500,
                raw_message: Some("Fallo interno".to_string()),
            })
        );
    }

    #[test]
    fn non_2xx_without_json_body() {
        let result = check_response("portfolio/urls", 502, "<html>Bad Gateway</html>");
        assert!(matches!(
            result,
            Err(ApiError::HttpStatus {
                status: 502,
                raw_message: None,
                ..
            })
        ));
    }

    #[test]
    fn ok_status_non_json_passes() {
        assert_eq!(check_response("x", 200, "not json"), Ok(()));
    }

    #[test]
    fn ok_status_failure_envelope_is_business() {
        let result = check_response("portfolio/url-grps", 200, r#"{"isSuccess":false,"statusCode":404}"#);
        assert!(matches!(
            result,
            Err(ApiError::Business {
                status_code: 404,
                ..
            })
        ));
    }
}
