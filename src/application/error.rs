//! 应用层错误定义
//!
//! 统一的查询 / 会话操作错误类型

use thiserror::Error;

use crate::application::ports::{CatalogError, PlayerError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 状态无效
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// 全部探测失败
    #[error("Discovery failed: {0}")]
    DiscoveryFailed(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 播放错误
    #[error("Playback error: {0}")]
    PlaybackError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建状态无效错误
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(err: CatalogError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<PlayerError> for ApplicationError {
    fn from(err: PlayerError) -> Self {
        Self::PlaybackError(err.to_string())
    }
}
