//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 环境变量（最高优先级，前缀 `VOCALOG_`）
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）
//!
//! 以及两个二进制共用的日志初始化。

mod loader;
mod logging;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, validate_config, ConfigError};
pub use logging::init_tracing;
pub use types::{AppConfig, CatalogConfig, LogConfig, RelayConfig, ServerConfig};
