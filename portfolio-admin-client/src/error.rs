use serde::{Deserialize, Serialize};

/// Fallback text when a business failure envelope carries no `message`.
pub const DEFAULT_BUSINESS_MESSAGE: &str = "Error al procesar la solicitud";

/// Fallback text for transport failures that expose no message at all.
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión";

/// Fallback text for failures that are neither transport nor business errors.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Error inesperado";

/// Status used when a failure envelope omits `statusCode` (HTTP 400).
pub const DEFAULT_BUSINESS_STATUS: u16 = 400;

/// Unified error type for every API call.
///
/// Transport failures (network, non-2xx, undecodable bodies) and business
/// failures (`isSuccess: false` inside a 2xx envelope) share this one type, so
/// callers only ever handle a single error channel.
///
/// Each variant names the `endpoint` it came from. All variants are
/// serializable for structured error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS failure, refused
    /// connection, TLS error, ...).
    NetworkError {
        /// Endpoint the request targeted.
        endpoint: String,
        /// Error details reported by the transport.
        detail: String,
    },

    /// The server answered with a non-2xx status.
    HttpStatus {
        /// Endpoint the request targeted.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// `message` field of the response body, when the body had one.
        raw_message: Option<String>,
    },

    /// The server answered 2xx with an envelope whose `isSuccess` is `false`.
    Business {
        /// Endpoint the request targeted.
        endpoint: String,
        /// The envelope's `statusCode`, or [`DEFAULT_BUSINESS_STATUS`].
        status_code: u16,
        /// The envelope's `message`, or [`DEFAULT_BUSINESS_MESSAGE`].
        message: String,
    },

    /// A 2xx body could not be decoded into the expected type.
    ParseError {
        /// Endpoint the request targeted.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be serialized.
    SerializationError {
        /// Endpoint the request targeted.
        endpoint: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client configuration is unusable (empty base URL, bad scheme...).
    InvalidConfig {
        /// Description of what's wrong.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（业务失败、4xx 等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Business { .. } | Self::InvalidConfig { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// HTTP-level or envelope-level status code, if the failure has one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Business { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Message suitable for the notification dialog and inline form errors.
    ///
    /// Prefers the message sent by the server, then the transport's own
    /// description, then a generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Business { message, .. } => message.clone(),
            Self::HttpStatus {
                status,
                raw_message,
                ..
            } => match raw_message.as_deref() {
                Some(msg) if !msg.is_empty() => msg.to_string(),
                _ => format!("HTTP {status}"),
            },
            Self::NetworkError { detail, .. } => non_empty_or(detail, CONNECTION_ERROR_MESSAGE),
            Self::ParseError { detail, .. } | Self::SerializationError { detail, .. } => {
                non_empty_or(detail, UNEXPECTED_ERROR_MESSAGE)
            }
            Self::InvalidConfig { detail } => detail.clone(),
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::HttpStatus {
                endpoint,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{endpoint}] HTTP {status}")
                }
            }
            Self::Business {
                endpoint,
                status_code,
                message,
            } => {
                write!(f, "[{endpoint}] Request rejected ({status_code}): {message}")
            }
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::SerializationError { endpoint, detail } => {
                write!(f, "[{endpoint}] Serialization error: {detail}")
            }
            Self::InvalidConfig { detail } => {
                write!(f, "Invalid client configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            endpoint: "portfolio/urls".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[portfolio/urls] Network error: connection refused");
    }

    #[test]
    fn display_http_status_with_message() {
        let e = ApiError::HttpStatus {
            endpoint: "portfolio/url-grps".to_string(),
            status: 401,
            raw_message: Some("ApiKey inválida".to_string()),
        };
        assert_eq!(e.to_string(), "[portfolio/url-grps] HTTP 401: ApiKey inválida");
    }

    #[test]
    fn display_business() {
        let e = ApiError::Business {
            endpoint: "portfolio/urls".to_string(),
            status_code: 409,
            message: "Duplicado".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[portfolio/urls] Request rejected (409): Duplicado"
        );
    }

    #[test]
    fn user_message_prefers_server_message() {
        let e = ApiError::HttpStatus {
            endpoint: "x".to_string(),
            status: 500,
            raw_message: Some("Boom".to_string()),
        };
        assert_eq!(e.user_message(), "Boom");
    }

    #[test]
    fn user_message_falls_back_to_transport_text() {
        let e = ApiError::HttpStatus {
            endpoint: "x".to_string(),
            status: 503,
            raw_message: None,
        };
        assert_eq!(e.user_message(), "HTTP 503");
    }

    #[test]
    fn user_message_generic_connection_fallback() {
        let e = ApiError::NetworkError {
            endpoint: "x".to_string(),
            detail: "  ".to_string(),
        };
        assert_eq!(e.user_message(), CONNECTION_ERROR_MESSAGE);
    }

    #[test]
    fn user_message_parse_fallback() {
        let e = ApiError::ParseError {
            endpoint: "x".to_string(),
            detail: String::new(),
        };
        assert_eq!(e.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn expected_classification() {
        let business = ApiError::Business {
            endpoint: "x".to_string(),
            status_code: 400,
            message: "m".to_string(),
        };
        let not_found = ApiError::HttpStatus {
            endpoint: "x".to_string(),
            status: 404,
            raw_message: None,
        };
        let server = ApiError::HttpStatus {
            endpoint: "x".to_string(),
            status: 500,
            raw_message: None,
        };
        assert!(business.is_expected());
        assert!(not_found.is_expected());
        assert!(!server.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ApiError::Business {
            endpoint: "portfolio/urls".to_string(),
            status_code: 400,
            message: "m".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "Business");
        assert_eq!(json["status_code"], 400);
    }
}
