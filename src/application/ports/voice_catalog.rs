//! Voice Catalog Port - 共享音色库查询抽象
//!
//! 客户端经由 relay 访问上游，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Voice;

/// 目录查询错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// `shared-voices` 查询参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedVoicesQuery {
    pub page_size: u32,
    pub page: Option<u32>,
    pub language: Option<String>,
    pub accent: Option<String>,
}

impl SharedVoicesQuery {
    /// 探测某语言是否存在音色
    pub fn language_probe(language: &str, page_size: u32) -> Self {
        Self {
            page_size,
            page: None,
            language: Some(language.to_string()),
            accent: None,
        }
    }

    /// 探测某口音是否存在音色
    pub fn accent_probe(accent: &str, page_size: u32) -> Self {
        Self {
            page_size,
            page: None,
            language: None,
            accent: Some(accent.to_string()),
        }
    }

    /// 加载首页音色
    pub fn first_page(language: &str, accent: Option<&str>, page_size: u32) -> Self {
        Self {
            page_size,
            page: Some(0),
            language: Some(language.to_string()),
            accent: accent.map(str::to_string),
        }
    }
}

/// Voice Catalog Port
#[async_trait]
pub trait VoiceCatalogPort: Send + Sync {
    /// 查询共享音色，返回上游 `voices` 数组（缺省为空）
    async fn shared_voices(&self, query: &SharedVoicesQuery) -> Result<Vec<Voice>, CatalogError>;
}
