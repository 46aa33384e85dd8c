//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod catalog_cache;
mod preview_player;
mod upstream;
mod voice_catalog;

pub use catalog_cache::{AccentMap, CatalogCachePort};
pub use preview_player::{PlayerError, PreviewPlayerPort};
pub use upstream::{UpstreamError, UpstreamPort, UpstreamResponse};
pub use voice_catalog::{CatalogError, SharedVoicesQuery, VoiceCatalogPort};
