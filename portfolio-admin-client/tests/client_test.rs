//! `ApiClient` 集成测试（基于 stub transport，无需网络）
//!
//! 运行方式:
//! ```bash
//! cargo test -p portfolio-admin-client --test client_test
//! ```

mod common;

use common::{API_KEY, BASE_URL, TestContext};
use portfolio_admin_client::{
    ApiError, DEFAULT_BUSINESS_MESSAGE, Envelope, HttpMethod, CONNECTION_ERROR_MESSAGE,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Group {
    id: i64,
    name: String,
    is_enable: bool,
}

// ============ 请求构造 ============

#[tokio::test]
async fn test_get_all_builds_collection_url_and_headers() {
    let ctx = require_some!(TestContext::new());
    ctx.transport.respond(
        200,
        r#"{"isSuccess":true,"statusCode":200,"data":[{"id":1,"name":"Redes","isEnable":true}]}"#,
    );

    let env: Envelope<Vec<Group>> = require_ok!(ctx.client.get_all("portfolio/url-grps").await);
    assert_eq!(env.data_or_default().len(), 1);

    let requests = ctx.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].url, format!("{BASE_URL}/portfolio/url-grps"));
    assert_eq!(requests[0].api_key, API_KEY);
    assert_eq!(requests[0].body, None);
    assert!(ctx.sink.messages().is_empty());
}

#[tokio::test]
async fn test_get_by_id_and_delete_append_id() {
    let ctx = require_some!(TestContext::new());
    ctx.transport
        .respond(200, r#"{"isSuccess":true,"statusCode":200,"data":{"id":3,"name":"a","isEnable":false}}"#);
    ctx.transport
        .respond(200, r#"{"isSuccess":true,"statusCode":200,"data":true}"#);

    let _: Envelope<Group> = require_ok!(ctx.client.get_by_id("portfolio/url-grps", 3).await);
    let _: Envelope<bool> = require_ok!(ctx.client.delete("portfolio/url-grps", 3).await);

    let requests = ctx.transport.requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}/portfolio/url-grps/3"));
    assert_eq!(requests[1].method, HttpMethod::Delete);
    assert_eq!(requests[1].url, format!("{BASE_URL}/portfolio/url-grps/3"));
}

#[tokio::test]
async fn test_update_puts_entity_to_collection_path() {
    let ctx = require_some!(TestContext::new());
    ctx.transport
        .respond(200, r#"{"isSuccess":true,"statusCode":200,"data":{"id":5,"name":"B","isEnable":true}}"#);

    let group = Group {
        id: 5,
        name: "B".to_string(),
        is_enable: true,
    };
    let env: Envelope<Group> = require_ok!(ctx.client.update("portfolio/url-grps", &group).await);
    assert_eq!(env.into_data(), Some(group));

    let requests = ctx.transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Put);
    assert_eq!(requests[0].url, format!("{BASE_URL}/portfolio/url-grps"));
    let body: Value = require_ok!(serde_json::from_str(
        requests[0].body.as_deref().unwrap_or_default()
    ));
    assert_eq!(body["id"], 5);
    assert_eq!(body["isEnable"], true);
}

// ============ 失败统一 ============

#[tokio::test]
async fn test_business_failure_notifies_once() {
    let ctx = require_some!(TestContext::new());
    ctx.transport.respond(
        200,
        r#"{"isSuccess":false,"statusCode":409,"message":"El grupo ya existe","data":null}"#,
    );

    let group = Group {
        id: 0,
        name: "A".to_string(),
        is_enable: true,
    };
    let result: Result<Envelope<Group>, ApiError> =
        ctx.client.create("portfolio/url-grps", &group).await;
    let err = require_err!(result);

    assert_eq!(
        err,
        ApiError::Business {
            endpoint: "portfolio/url-grps".to_string(),
            status_code: 409,
            message: "El grupo ya existe".to_string(),
        }
    );
    assert_eq!(ctx.sink.messages(), vec!["El grupo ya existe".to_string()]);
}

#[tokio::test]
async fn test_business_failure_defaults() {
    let ctx = require_some!(TestContext::new());
    ctx.transport.respond(200, r#"{"isSuccess":false}"#);

    let result: Result<Envelope<Vec<Group>>, ApiError> = ctx.client.get_all("portfolio/url-grps").await;
    let err = require_err!(result);

    assert_eq!(err.status_code(), Some(400));
    assert_eq!(ctx.sink.messages(), vec![DEFAULT_BUSINESS_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_http_error_uses_body_message() {
    let ctx = require_some!(TestContext::new());
    ctx.transport
        .respond(401, r#"{"isSuccess":false,"statusCode":401,"message":"ApiKey inválida"}"#);

    let result: Result<Envelope<Vec<Group>>, ApiError> = ctx.client.get_all("portfolio/urls").await;
    let err = require_err!(result);

    assert!(matches!(err, ApiError::HttpStatus { status: 401, .. }));
    assert_eq!(ctx.sink.messages(), vec!["ApiKey inválida".to_string()]);
}

#[tokio::test]
async fn test_network_error_notifies_once() {
    let ctx = require_some!(TestContext::new());
    ctx.transport.fail(ApiError::NetworkError {
        endpoint: "portfolio/urls".to_string(),
        detail: String::new(),
    });

    let result: Result<Envelope<Vec<Group>>, ApiError> = ctx.client.get_all("portfolio/urls").await;
    let _ = require_err!(result);

    assert_eq!(ctx.sink.messages(), vec![CONNECTION_ERROR_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_bare_array_passes_through() {
    let ctx = require_some!(TestContext::new());
    ctx.transport
        .respond(200, r#"[{"name":"Portfolio"},{"name":"Blog"}]"#);

    let projects: Vec<Value> = require_ok!(ctx.client.get_all("portfolio/public-projects").await);
    assert_eq!(projects.len(), 2);
    assert!(ctx.sink.messages().is_empty());
}

#[tokio::test]
async fn test_object_without_flag_passes_through() {
    let ctx = require_some!(TestContext::new());
    ctx.transport.respond(200, r#"{"statusCode":500,"message":"raro"}"#);

    let value: Value = require_ok!(ctx.client.get_all("portfolio/urls").await);
    assert_eq!(value["message"], "raro");
    assert!(ctx.sink.messages().is_empty());
}

#[tokio::test]
async fn test_undecodable_body_is_parse_error() {
    let ctx = require_some!(TestContext::new());
    ctx.transport.respond(200, "<html>oops</html>");

    let result: Result<Envelope<Vec<Group>>, ApiError> = ctx.client.get_all("portfolio/urls").await;
    let err = require_err!(result);

    assert!(matches!(err, ApiError::ParseError { .. }));
    assert_eq!(ctx.sink.messages().len(), 1);
}
