//! Application State
//!
//! relay 服务的共享状态：上游端口与转发处理器

use std::sync::Arc;

use crate::application::{RelayHandler, RelayPolicy, UpstreamPort};

/// 应用状态
pub struct AppState {
    pub relay_handler: RelayHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(upstream: Arc<dyn UpstreamPort>, policy: RelayPolicy) -> Self {
        Self {
            relay_handler: RelayHandler::new(upstream, policy),
        }
    }
}
