//! Relay Catalog Client - 经 relay 查询共享音色
//!
//! 实现 VoiceCatalogPort trait。客户端不持有密钥，只把完整的上游 URL
//! 交给 relay：
//!
//! GET {relay_url}?urlString=<percent-encoded {base_url}/shared-voices?...>
//! Response: 上游 JSON `{"voices": [...]}`，或 relay 的 `{"error": "..."}`

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::application::ports::{CatalogError, SharedVoicesQuery, VoiceCatalogPort};
use crate::domain::Voice;

/// 上游 `shared-voices` 响应
#[derive(Debug, Deserialize)]
struct SharedVoicesResponse {
    #[serde(default)]
    voices: Option<Vec<Voice>>,
}

/// relay 错误响应
#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: String,
}

/// Relay 客户端配置
#[derive(Debug, Clone)]
pub struct RelayCatalogClientConfig {
    /// relay 端点，如 `http://localhost:5060/api/voices`
    pub relay_url: String,
    /// 上游 API 基础 URL
    pub base_url: String,
    /// 请求超时（秒），None 表示使用传输层默认值
    pub timeout_secs: Option<u64>,
}

impl Default for RelayCatalogClientConfig {
    fn default() -> Self {
        Self {
            relay_url: "http://localhost:5060/api/voices".to_string(),
            base_url: "https://api.elevenlabs.io/v1".to_string(),
            timeout_secs: None,
        }
    }
}

impl RelayCatalogClientConfig {
    pub fn new(relay_url: impl Into<String>) -> Self {
        Self {
            relay_url: relay_url.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Relay 目录客户端
pub struct RelayCatalogClient {
    client: Client,
    relay_url: Url,
    base_url: String,
}

impl RelayCatalogClient {
    /// 创建新的客户端
    pub fn new(config: RelayCatalogClientConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        let relay_url = Url::parse(&config.relay_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", config.relay_url, e)))?;

        Ok(Self {
            client,
            relay_url,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 构造上游 URL
    pub fn upstream_url(&self, query: &SharedVoicesQuery) -> Result<Url, CatalogError> {
        let raw = format!("{}/shared-voices", self.base_url);
        let mut url =
            Url::parse(&raw).map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", raw, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page_size", &query.page_size.to_string());
            if let Some(page) = query.page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(language) = &query.language {
                pairs.append_pair("language", language);
            }
            if let Some(accent) = &query.accent {
                pairs.append_pair("accent", accent);
            }
        }

        Ok(url)
    }

    /// 构造 relay URL（上游 URL 作为 urlString 参数）
    pub fn relay_request_url(&self, upstream: &Url) -> Url {
        let mut url = self.relay_url.clone();
        url.query_pairs_mut()
            .append_pair("urlString", upstream.as_str());
        url
    }
}

#[async_trait]
impl VoiceCatalogPort for RelayCatalogClient {
    async fn shared_voices(&self, query: &SharedVoicesQuery) -> Result<Vec<Voice>, CatalogError> {
        let upstream = self.upstream_url(query)?;
        let request_url = self.relay_request_url(&upstream);

        tracing::debug!(upstream = %upstream, "Sending catalog request via relay");

        let response = self
            .client
            .get(request_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    CatalogError::NetworkError(format!("Cannot connect to relay: {}", e))
                } else {
                    CatalogError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RelayErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(CatalogError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: SharedVoicesResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        Ok(body.voices.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> RelayCatalogClient {
        RelayCatalogClient::new(RelayCatalogClientConfig::new(format!(
            "{}/api/voices",
            server.uri()
        )))
        .unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = RelayCatalogClientConfig::default();
        assert_eq!(config.base_url, "https://api.elevenlabs.io/v1");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_upstream_url() {
        let client = RelayCatalogClient::new(
            RelayCatalogClientConfig::new("http://localhost:5060/api/voices")
                .with_base_url("https://api.elevenlabs.io/v1/"),
        )
        .unwrap();

        let probe = client
            .upstream_url(&SharedVoicesQuery::accent_probe("en-GB", 1))
            .unwrap();
        assert_eq!(
            probe.as_str(),
            "https://api.elevenlabs.io/v1/shared-voices?page_size=1&accent=en-GB"
        );

        let page = client
            .upstream_url(&SharedVoicesQuery::first_page("en", Some("en-US"), 100))
            .unwrap();
        assert_eq!(
            page.as_str(),
            "https://api.elevenlabs.io/v1/shared-voices?page_size=100&page=0&language=en&accent=en-US"
        );
    }

    #[tokio::test]
    async fn test_voices_through_relay() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/voices"))
            .and(query_param(
                "urlString",
                "https://api.elevenlabs.io/v1/shared-voices?page_size=1&language=en",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "voices": [{ "voice_id": "v1", "name": "Rachel" }],
                "has_more": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let voices = client(&server)
            .shared_voices(&SharedVoicesQuery::language_probe("en", 1))
            .await
            .unwrap();

        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].id, "v1");
    }

    #[tokio::test]
    async fn test_missing_voices_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let voices = client(&server)
            .shared_voices(&SharedVoicesQuery::language_probe("xx", 1))
            .await
            .unwrap();
        assert!(voices.is_empty());
    }

    #[tokio::test]
    async fn test_relay_rejection_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "Invalid API call" })),
            )
            .mount(&server)
            .await;

        let result = client(&server)
            .shared_voices(&SharedVoicesQuery::language_probe("en", 1))
            .await;

        match result {
            Err(CatalogError::Rejected { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid API call");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
