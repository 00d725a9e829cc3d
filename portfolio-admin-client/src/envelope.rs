//! Response envelope shared by every administration endpoint

use serde::{Deserialize, Serialize};

/// `{ isSuccess, statusCode, message, data }` wrapper returned by the API.
///
/// When `is_success` is `false` the payload must be treated as absent, which
/// is why `data` is optional: failure envelopes usually carry `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Business-level success flag
    pub is_success: bool,
    /// Status code chosen by the API (mirrors HTTP semantics)
    #[serde(default)]
    pub status_code: u16,
    /// Optional human readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// 创建成功响应
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            is_success: true,
            status_code: 200,
            message: None,
            data: Some(data),
        }
    }

    /// 创建失败响应
    #[must_use]
    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            status_code,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Payload of a successful envelope; `None` for failures.
    pub fn into_data(self) -> Option<T> {
        if self.is_success { self.data } else { None }
    }
}

impl<T: Default> Envelope<T> {
    /// Payload of a successful envelope, or `T::default()`.
    pub fn data_or_default(self) -> T {
        self.into_data().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"isSuccess":true,"statusCode":200,"message":"ok","data":[1,2]}"#)
                .unwrap();
        assert!(env.is_success);
        assert_eq!(env.status_code, 200);
        assert_eq!(env.message.as_deref(), Some("ok"));
        assert_eq!(env.data, Some(vec![1, 2]));
    }

    #[test]
    fn failure_with_null_data_decodes() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"isSuccess":false,"statusCode":404,"data":null}"#).unwrap();
        assert!(!env.is_success);
        assert_eq!(env.message, None);
        assert_eq!(env.data_or_default(), Vec::<u32>::new());
    }

    #[test]
    fn failure_hides_payload() {
        let env = Envelope {
            is_success: false,
            status_code: 400,
            message: None,
            data: Some(7),
        };
        assert_eq!(env.into_data(), None);
    }
}
