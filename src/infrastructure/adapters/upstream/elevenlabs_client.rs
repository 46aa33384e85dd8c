//! ElevenLabs Upstream Client - relay 的转发实现
//!
//! 实现 UpstreamPort trait：对已通过校验的 URL 发起 GET，附带
//! `xi-api-key` 密钥头，响应状态码与 JSON 原样返回。

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::application::ports::{UpstreamError, UpstreamPort, UpstreamResponse};

/// 密钥请求头
pub const API_KEY_HEADER: &str = "xi-api-key";

/// API 密钥，Debug 输出时隐藏内容
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// 从环境变量读取，空值视为未设置
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 上游客户端配置
#[derive(Debug, Clone, Default)]
pub struct ElevenLabsClientConfig {
    pub api_key: Option<ApiKey>,
    /// 请求超时（秒），None 表示使用传输层默认值
    pub timeout_secs: Option<u64>,
}

/// ElevenLabs 上游客户端
pub struct ElevenLabsClient {
    client: Client,
    api_key: Option<ApiKey>,
}

impl ElevenLabsClient {
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl UpstreamPort for ElevenLabsClient {
    async fn fetch_json(&self, url: &Url) -> Result<UpstreamResponse, UpstreamError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.expose());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::NetworkError(format!("Upstream request timed out: {}", e))
            } else {
                UpstreamError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;

        tracing::debug!(url = %url, status = status, "Upstream request completed");

        Ok(UpstreamResponse { status, body })
    }
}
