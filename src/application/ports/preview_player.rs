//! Preview Player Port - 试听媒体抽象
//!
//! 每个音色对应一个媒体元素；互斥由 PlaybackController 保证，
//! 播放器本身不做任何协调。

use thiserror::Error;

/// 播放器错误
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Media unavailable: {0}")]
    MediaUnavailable(String),
}

/// Preview Player Port
pub trait PreviewPlayerPort: Send + Sync {
    /// 从起点开始播放某音色的试听
    fn start(&self, voice_id: &str, url: &str) -> Result<(), PlayerError>;

    /// 暂停并回到起点
    fn stop(&self, voice_id: &str);
}
