//! Vocalog - ElevenLabs 共享音色目录浏览器
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalog: 语言、口音、音色及其显示规则
//! - Selection / Playback: 筛选状态与试听状态机
//!
//! 应用层 (application/):
//! - Ports: VoiceCatalog, Upstream, CatalogCache, PreviewPlayer
//! - Queries: 语言 / 口音发现与音色加载
//! - Browser: 浏览会话与视图投影
//! - Relay: 目标校验与带密钥转发
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: relay 服务（axum）
//! - Memory: 目录缓存
//! - Adapters: relay 目录客户端、上游客户端、媒体播放器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
