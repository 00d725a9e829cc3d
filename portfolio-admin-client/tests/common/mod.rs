//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_admin_client::{
    ApiClient, ApiError, ApiRequest, ClientConfig, HttpTransport, NotificationSink, RawResponse,
};

pub const BASE_URL: &str = "http://localhost:5000/api";
pub const API_KEY: &str = "test-api-key-0001";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// Transport that replays canned responses and records every request.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let endpoint = request.endpoint.clone();
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::NetworkError {
                    endpoint,
                    detail: "no canned response".to_string(),
                })
            })
    }
}

/// Notification sink that keeps every message it receives.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(message.to_string());
    }
}

pub struct TestContext {
    pub client: ApiClient,
    pub transport: Arc<StubTransport>,
    pub sink: Arc<RecordingSink>,
}

impl TestContext {
    pub fn new() -> Option<Self> {
        let config = ClientConfig::new(BASE_URL, API_KEY).ok()?;
        let transport = StubTransport::new();
        let sink = Arc::new(RecordingSink::default());
        let client = ApiClient::with_transport(config, transport.clone(), sink.clone());
        Some(Self {
            client,
            transport,
            sink,
        })
    }
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}
