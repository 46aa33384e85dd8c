//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::application::queries::handlers::{
    DEFAULT_LANGUAGES, DEFAULT_PAGE_SIZE, DEFAULT_REGIONS,
};
use crate::application::relay::DEFAULT_UPSTREAM_HOST;
use crate::application::{BrowserConfig, DiscoveryConfig, HostMatch, RelayPolicy};
use crate::infrastructure::adapters::RelayCatalogClientConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// relay 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// relay 转发配置
    #[serde(default)]
    pub relay: RelayConfig,

    /// 目录浏览配置
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// relay 转发配置
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// 受信任的上游主机
    #[serde(default = "default_upstream_host")]
    pub upstream_host: String,

    /// 存放密钥的环境变量名（密钥本身不进配置文件）
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// 主机匹配方式: contains / exact
    #[serde(default)]
    pub host_match: HostMatch,
}

fn default_upstream_host() -> String {
    DEFAULT_UPSTREAM_HOST.to_string()
}

fn default_api_key_env() -> String {
    "ELEVENLABS_API_KEY".to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_host: default_upstream_host(),
            api_key_env: default_api_key_env(),
            host_match: HostMatch::default(),
        }
    }
}

impl RelayConfig {
    pub fn policy(&self) -> RelayPolicy {
        RelayPolicy {
            trusted_host: self.upstream_host.clone(),
            host_match: self.host_match,
        }
    }
}

/// 目录浏览配置
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// relay 端点
    #[serde(default = "default_relay_url")]
    pub relay_url: String,

    /// 上游 API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 探测查询的 page_size
    #[serde(default = "default_probe_page_size")]
    pub probe_page_size: u32,

    /// 音色列表单页数量
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// 语言候选集
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// 地区候选集
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,

    /// 搜索防抖（毫秒）
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// 请求超时（秒），不设置则使用传输层默认值
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_relay_url() -> String {
    "http://localhost:5060/api/voices".to_string()
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io/v1".to_string()
}

fn default_probe_page_size() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

fn default_regions() -> Vec<String> {
    DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect()
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
            base_url: default_base_url(),
            probe_page_size: default_probe_page_size(),
            page_size: default_page_size(),
            languages: default_languages(),
            regions: default_regions(),
            search_debounce_ms: default_search_debounce_ms(),
            timeout_secs: None,
        }
    }
}

impl CatalogConfig {
    pub fn discovery(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            languages: self.languages.clone(),
            regions: self.regions.clone(),
            probe_page_size: self.probe_page_size,
        }
    }

    pub fn browser(&self) -> BrowserConfig {
        BrowserConfig {
            discovery: self.discovery(),
            page_size: self.page_size,
        }
    }

    pub fn client(&self) -> RelayCatalogClientConfig {
        let client = RelayCatalogClientConfig::new(self.relay_url.clone())
            .with_base_url(self.base_url.clone());
        match self.timeout_secs {
            Some(secs) => client.with_timeout(secs),
            None => client,
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// EnvFilter 指令
    pub fn filter_directive(&self) -> String {
        format!("{},vocalog={},tower_http=debug", self.level, self.level)
    }
}
