//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "VOCALOG";

/// 加载应用配置
///
/// # 环境变量示例
/// - `VOCALOG_SERVER__PORT=8080`
/// - `VOCALOG_RELAY__HOST_MATCH=exact`
/// - `VOCALOG_CATALOG__RELAY_URL=http://relay:5060/api/voices`
/// - `VOCALOG_CATALOG__LANGUAGES=en,fr,de`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值由 serde default 提供

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），候选列表以逗号分隔
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("catalog.languages")
            .with_list_parse_key("catalog.regions"),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::ValidationError(msg.to_string())
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(invalid("Server port cannot be 0"));
    }
    if config.server.host.trim().is_empty() {
        return Err(invalid("Server host cannot be empty"));
    }

    if config.relay.upstream_host.trim().is_empty() {
        return Err(invalid("Relay upstream host cannot be empty"));
    }
    if config.relay.api_key_env.trim().is_empty() {
        return Err(invalid("Relay API key variable name cannot be empty"));
    }

    let catalog = &config.catalog;
    if catalog.relay_url.trim().is_empty() {
        return Err(invalid("Catalog relay URL cannot be empty"));
    }
    if catalog.base_url.trim().is_empty() {
        return Err(invalid("Catalog base URL cannot be empty"));
    }
    if catalog.page_size == 0 || catalog.probe_page_size == 0 {
        return Err(invalid("Catalog page sizes cannot be 0"));
    }
    if catalog.languages.is_empty() {
        return Err(invalid("Catalog language candidates cannot be empty"));
    }
    if catalog.regions.is_empty() {
        return Err(invalid("Catalog region candidates cannot be empty"));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，不包含密钥）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Relay Upstream Host: {}", config.relay.upstream_host);
    tracing::info!("Relay Host Match: {:?}", config.relay.host_match);
    tracing::info!("Relay API Key Variable: {}", config.relay.api_key_env);
    tracing::info!("Catalog Relay URL: {}", config.catalog.relay_url);
    tracing::info!("Catalog Base URL: {}", config.catalog.base_url);
    tracing::info!(
        "Catalog Candidates: {} languages, {} regions",
        config.catalog.languages.len(),
        config.catalog.regions.len()
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
