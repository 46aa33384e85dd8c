//! Upstream Port - relay 转发目标抽象
//!
//! relay 只负责校验与转发，真正的 HTTP 调用（附带密钥）由适配器实现

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// 上游调用错误
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 上游响应（状态码与 JSON 原样透传）
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Upstream Port
#[async_trait]
pub trait UpstreamPort: Send + Sync {
    /// 对目标 URL 发起 GET，附带密钥头，返回 JSON 响应
    async fn fetch_json(&self, url: &Url) -> Result<UpstreamResponse, UpstreamError>;
}
