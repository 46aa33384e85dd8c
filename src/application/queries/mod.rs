//! 应用层 - 查询（读操作）
//!
//! 目录发现与音色加载，结果写入会话缓存

mod catalog_queries;
mod voice_queries;

pub mod handlers;

pub use catalog_queries::*;
pub use voice_queries::*;
