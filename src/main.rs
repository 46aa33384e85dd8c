//! Vocalog Relay - 共享音色目录的密钥转发服务
//!
//! 浏览端不持有 ElevenLabs 密钥，所有上游请求都经由本服务附加
//! `xi-api-key` 后转发。

use std::sync::Arc;

use vocalog::application::HostMatch;
use vocalog::config::{init_tracing, load_config, print_config};
use vocalog::infrastructure::adapters::{ApiKey, ElevenLabsClient, ElevenLabsClientConfig};
use vocalog::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Vocalog Relay");
    print_config(&config);

    if config.relay.host_match == HostMatch::Contains {
        tracing::warn!(
            upstream_host = %config.relay.upstream_host,
            "Relay host check uses substring matching; set relay.host_match = \"exact\" to require an exact https host"
        );
    }

    // 密钥只从环境变量读取
    let upstream = Arc::new(ElevenLabsClient::new(ElevenLabsClientConfig {
        api_key: ApiKey::from_env(&config.relay.api_key_env),
        timeout_secs: config.catalog.timeout_secs,
    })?);
    if !upstream.has_api_key() {
        tracing::warn!(
            variable = %config.relay.api_key_env,
            "API key not set, upstream requests will be sent without credentials"
        );
    }

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(upstream, config.relay.policy());
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
