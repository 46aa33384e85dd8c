//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::Level;

/// 需要记录的状态码对应的日志级别
fn status_level(status: StatusCode) -> Option<Level> {
    if status.is_server_error() {
        Some(Level::ERROR)
    } else if status.is_client_error() {
        Some(Level::WARN)
    } else {
        None
    }
}

/// HTTP 状态码错误日志中间件
///
/// 4xx 记 warn，5xx 记 error。只记录路径，urlString 查询参数不进日志；
/// 上游透传的错误状态（如 401）同样会被记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    match status_level(status) {
        Some(Level::ERROR) => tracing::error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "Relay server error"
        ),
        Some(_) => tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "Relay client error"
        ),
        None => {}
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{RelayPolicy, UpstreamError, UpstreamPort, UpstreamResponse};
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::http::state::AppState;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request as HttpRequest, Router};
    use std::sync::Arc;
    use tower::util::ServiceExt;
    use url::Url;

    /// 固定返回某个状态码的上游
    struct StatusUpstream(u16);

    #[async_trait]
    impl UpstreamPort for StatusUpstream {
        async fn fetch_json(&self, _url: &Url) -> Result<UpstreamResponse, UpstreamError> {
            Ok(UpstreamResponse {
                status: self.0,
                body: serde_json::json!({}),
            })
        }
    }

    fn relay(upstream_status: u16) -> Router {
        let state = AppState::new(Arc::new(StatusUpstream(upstream_status)), RelayPolicy::default());
        create_routes()
            .layer(axum::middleware::from_fn(error_logging_middleware))
            .with_state(Arc::new(state))
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    const TRUSTED: &str = "/api/voices?urlString=https%3A%2F%2Fapi.elevenlabs.io%2Fv1%2Fshared-voices";

    #[test]
    fn test_status_level() {
        assert_eq!(status_level(StatusCode::OK), None);
        assert_eq!(status_level(StatusCode::UNAUTHORIZED), Some(Level::WARN));
        assert_eq!(status_level(StatusCode::BAD_GATEWAY), Some(Level::ERROR));
    }

    #[tokio::test]
    async fn test_middleware_keeps_relay_responses() {
        assert_eq!(status_of(relay(200), "/api/ping").await, StatusCode::OK);
        assert_eq!(status_of(relay(200), TRUSTED).await, StatusCode::OK);
        assert_eq!(
            status_of(relay(200), "/api/voices").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_middleware_keeps_passthrough_errors() {
        assert_eq!(status_of(relay(401), TRUSTED).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(relay(503), TRUSTED).await, StatusCode::SERVICE_UNAVAILABLE);
    }
}
