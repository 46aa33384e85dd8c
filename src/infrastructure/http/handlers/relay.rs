//! Relay Handler
//!
//! GET /api/voices?urlString=<上游 URL>
//!
//! 目标通过校验后附带密钥转发，上游状态码与 JSON 原样返回。

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::RelayError;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// relay 查询参数
#[derive(Debug, Deserialize)]
pub struct RelayParams {
    #[serde(rename = "urlString")]
    pub url_string: Option<String>,
}

/// 转发共享音色请求
///
/// 查询串无法解析（如重复的 urlString）同样按非法调用处理
pub async fn relay_voices(
    State(state): State<Arc<AppState>>,
    params: Result<Query<RelayParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| {
        tracing::debug!(error = %e, "Malformed relay query");
        ApiError::from(RelayError::InvalidTarget)
    })?;

    let upstream = state
        .relay_handler
        .handle(params.url_string.as_deref())
        .await?;

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(upstream.body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        HostMatch, RelayPolicy, UpstreamError, UpstreamPort, UpstreamResponse,
    };
    use crate::infrastructure::http::routes::create_routes;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request, Router};
    use std::sync::Mutex;
    use tower::util::ServiceExt;
    use url::Url;

    /// 记录请求并返回固定响应的上游
    struct FakeUpstream {
        response: Result<UpstreamResponse, fn() -> UpstreamError>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeUpstream {
        fn ok(status: u16, body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(UpstreamResponse { status, body }),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                response: Err(|| UpstreamError::NetworkError("connection refused".into())),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UpstreamPort for FakeUpstream {
        async fn fetch_json(&self, url: &Url) -> Result<UpstreamResponse, UpstreamError> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.response {
                Ok(response) => Ok(response.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn app(upstream: Arc<FakeUpstream>, host_match: HostMatch) -> Router {
        let policy = RelayPolicy {
            host_match,
            ..Default::default()
        };
        create_routes().with_state(Arc::new(AppState::new(upstream, policy)))
    }

    fn relay_request(target: &str) -> Request<Body> {
        let mut url = Url::parse("http://relay.local/api/voices").unwrap();
        url.query_pairs_mut().append_pair("urlString", target);
        Request::builder()
            .uri(format!("/api/voices?{}", url.query().unwrap()))
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_forwards_trusted_target() {
        let upstream = FakeUpstream::ok(200, serde_json::json!({ "voices": [] }));
        let target = "https://api.elevenlabs.io/v1/shared-voices?page_size=1&language=en";

        let response = app(upstream.clone(), HostMatch::Contains)
            .oneshot(relay_request(target))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "voices": [] }));
        assert_eq!(upstream.requested(), vec![target.to_string()]);
    }

    #[tokio::test]
    async fn test_upstream_status_passes_through() {
        let upstream = FakeUpstream::ok(
            401,
            serde_json::json!({ "detail": { "status": "invalid_api_key" } }),
        );

        let response = app(upstream, HostMatch::Contains)
            .oneshot(relay_request("https://api.elevenlabs.io/v1/shared-voices"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["detail"]["status"], "invalid_api_key");
    }

    #[tokio::test]
    async fn test_missing_url_string_is_bad_request() {
        let upstream = FakeUpstream::ok(200, serde_json::json!({}));
        let request = Request::builder()
            .uri("/api/voices")
            .body(Body::empty())
            .unwrap();

        let response = app(upstream.clone(), HostMatch::Contains)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Invalid API call" })
        );
        assert!(upstream.requested().is_empty());
    }

    #[tokio::test]
    async fn test_untrusted_host_is_bad_request() {
        let upstream = FakeUpstream::ok(200, serde_json::json!({}));

        let response = app(upstream.clone(), HostMatch::Contains)
            .oneshot(relay_request("https://example.com/v1/shared-voices"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(upstream.requested().is_empty());
    }

    #[tokio::test]
    async fn test_exact_mode_rejects_embedded_host() {
        let upstream = FakeUpstream::ok(200, serde_json::json!({}));

        let response = app(upstream.clone(), HostMatch::Exact)
            .oneshot(relay_request("https://evil.example.com/?h=api.elevenlabs.io"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(upstream.requested().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_url_string_is_json_bad_request() {
        let upstream = FakeUpstream::ok(200, serde_json::json!({}));
        let request = Request::builder()
            .uri("/api/voices?urlString=a&urlString=b")
            .body(Body::empty())
            .unwrap();

        let response = app(upstream.clone(), HostMatch::Contains)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Invalid API call" })
        );
        assert!(upstream.requested().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_trusted_target_is_internal_error() {
        let upstream = FakeUpstream::ok(200, serde_json::json!({}));

        let response = app(upstream.clone(), HostMatch::Contains)
            .oneshot(relay_request("api.elevenlabs.io/v1/shared-voices"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid URL api.elevenlabs.io/v1/shared-voices"));
        assert!(upstream.requested().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_internal_error() {
        let response = app(FakeUpstream::failing(), HostMatch::Contains)
            .oneshot(relay_request("https://api.elevenlabs.io/v1/shared-voices"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "connection refused" })
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();

        let response = app(FakeUpstream::failing(), HostMatch::Contains)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}
