//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use portfolio_admin_client::ApiError;

/// Inline message shown on a form when a submit fails without a server message.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Error de conexión. Intenta de nuevo.";

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Local form validation failed. Never sent to the global notification.
    #[error("Validation error on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// A submit was requested while another one is still in flight
    #[error("A submission is already in progress")]
    SubmitInProgress,

    /// API error (transport or business, converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, business rejection, 4xx) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::SubmitInProgress => true,
            Self::Api(e) => e.is_expected(),
        }
    }

    /// Text for inline page errors.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => (*message).to_string(),
            Self::SubmitInProgress => self.to_string(),
            Self::Api(e) => e.user_message(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
