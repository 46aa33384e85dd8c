//! Relay - 带密钥的上游转发
//!
//! relay 是唯一持有密钥的组件。目标 URL 必须指向受信任的上游主机，
//! 否则拒绝，防止 relay 被当作开放代理使用。

use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::application::ports::{UpstreamError, UpstreamPort, UpstreamResponse};

/// 默认受信任上游主机
pub const DEFAULT_UPSTREAM_HOST: &str = "api.elevenlabs.io";

/// 主机匹配方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMatch {
    /// 目标 URL 字符串包含受信任主机即可（宽松：主机名出现在路径或查询中也会通过）
    #[default]
    Contains,
    /// https 且主机名完全相等
    Exact,
}

/// relay 错误
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid API call")]
    InvalidTarget,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// 目标 URL 校验策略
#[derive(Debug, Clone)]
pub struct RelayPolicy {
    pub trusted_host: String,
    pub host_match: HostMatch,
}

impl Default for RelayPolicy {
    fn default() -> Self {
        Self {
            trusted_host: DEFAULT_UPSTREAM_HOST.to_string(),
            host_match: HostMatch::default(),
        }
    }
}

impl RelayPolicy {
    /// 校验目标 URL，通过则返回解析后的 URL
    ///
    /// `Contains` 模式下，包含受信任主机但无法解析的目标视为转发失败
    /// （映射为 500），而不是非法调用。
    pub fn validate(&self, target: Option<&str>) -> Result<Url, RelayError> {
        let raw = target
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(RelayError::InvalidTarget)?;

        match self.host_match {
            HostMatch::Contains => {
                if !raw.contains(self.trusted_host.as_str()) {
                    return Err(RelayError::InvalidTarget);
                }
                Url::parse(raw).map_err(|e| {
                    RelayError::from(UpstreamError::NetworkError(format!(
                        "Invalid URL {}: {}",
                        raw, e
                    )))
                })
            }
            HostMatch::Exact => {
                let url = Url::parse(raw).map_err(|_| RelayError::InvalidTarget)?;
                if url.scheme() == "https" && url.host_str() == Some(self.trusted_host.as_str()) {
                    Ok(url)
                } else {
                    Err(RelayError::InvalidTarget)
                }
            }
        }
    }
}

/// Relay Handler
pub struct RelayHandler {
    upstream: Arc<dyn UpstreamPort>,
    policy: RelayPolicy,
}

impl RelayHandler {
    pub fn new(upstream: Arc<dyn UpstreamPort>, policy: RelayPolicy) -> Self {
        Self { upstream, policy }
    }

    /// 校验并转发
    pub async fn handle(&self, target: Option<&str>) -> Result<UpstreamResponse, RelayError> {
        let url = self.policy.validate(target)?;
        let response = self.upstream.fetch_json(&url).await?;

        tracing::info!(
            host = url.host_str().unwrap_or_default(),
            path = url.path(),
            status = response.status,
            "Relayed upstream request"
        );

        Ok(response)
    }
}
