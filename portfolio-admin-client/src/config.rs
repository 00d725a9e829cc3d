//! Client configuration

use crate::error::ApiError;
use crate::utils::log_sanitizer::mask_secret;

/// Base URL and static API key used for every request.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
}

impl ClientConfig {
    /// Validate and build a configuration.
    ///
    /// The base URL must be non-empty and use `http://` or `https://`.
    /// Trailing slashes are removed so endpoints can be appended with `/`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');

        if base_url.is_empty() {
            return Err(ApiError::InvalidConfig {
                detail: "base URL is empty".to_string(),
            });
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidConfig {
                detail: format!("base URL must start with http:// or https://, got '{base_url}'"),
            });
        }

        Ok(Self {
            base_url: base_url.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `ApiKey` header.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `{base}/{endpoint}` or `{base}/{endpoint}/{id}`.
    #[must_use]
    pub fn url_for(&self, endpoint: &str, id: Option<i64>) -> String {
        let endpoint = endpoint.trim_matches('/');
        match id {
            Some(id) => format!("{}/{endpoint}/{id}", self.base_url),
            None => format!("{}/{endpoint}", self.base_url),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &mask_secret(&self.api_key))
            .finish()
    }
}
