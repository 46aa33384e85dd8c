//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（VoiceCatalog、Upstream、CatalogCache、PreviewPlayer）
//! - queries: 目录发现与音色加载查询及处理器
//! - browser: 浏览会话（筛选、搜索、试听）
//! - playback: 试听播放控制器
//! - relay: 带密钥的上游转发
//! - views: 视图投影
//! - error: 应用层错误定义

pub mod browser;
pub mod error;
pub mod playback;
pub mod ports;
pub mod queries;
pub mod relay;
pub mod search;
pub mod views;

// Re-exports
pub use browser::{BrowserConfig, CatalogBrowser};
pub use error::ApplicationError;
pub use playback::PlaybackController;
pub use relay::{HostMatch, RelayError, RelayHandler, RelayPolicy};
pub use search::SearchDebouncer;

pub use ports::{
    AccentMap, CatalogCachePort, CatalogError, PlayerError, PreviewPlayerPort, SharedVoicesQuery,
    UpstreamError, UpstreamPort, UpstreamResponse, VoiceCatalogPort,
};

pub use queries::{
    handlers::{
        DiscoverAccentsHandler, DiscoverLanguagesHandler, DiscoveryConfig, LoadVoicesHandler,
    },
    DiscoverAccents, DiscoverLanguages, LoadVoices,
};
