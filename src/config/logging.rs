//! 日志初始化
//!
//! `RUST_LOG` 优先，否则使用 `log.level` 生成的过滤指令

use tracing_subscriber::EnvFilter;

use super::types::LogConfig;

/// 初始化全局 tracing subscriber
pub fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log.filter_directive()));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
