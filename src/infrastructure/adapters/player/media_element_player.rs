//! Media Element Player
//!
//! 每个音色一个媒体元素（src / paused / position），与浏览器中的
//! `<audio>` 元素对应。本身不保证互斥，互斥由 PlaybackController 负责。

use dashmap::DashMap;
use url::Url;

use crate::application::ports::{PlayerError, PreviewPlayerPort};

/// 媒体元素状态
#[derive(Debug, Clone, PartialEq)]
pub struct MediaElement {
    pub src: String,
    pub paused: bool,
    /// 当前播放位置（秒）
    pub position: f64,
    pub ended: bool,
}

/// 内存媒体元素播放器
#[derive(Default)]
pub struct MediaElementPlayer {
    elements: DashMap<String, MediaElement>,
}

impl MediaElementPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 某音色的媒体元素快照
    pub fn element(&self, voice_id: &str) -> Option<MediaElement> {
        self.elements.get(voice_id).map(|e| e.value().clone())
    }

    /// 正在播放的媒体数
    pub fn playing_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.value().paused).count()
    }

    /// 播放推进（仅对播放中的媒体生效）
    pub fn advance(&self, voice_id: &str, secs: f64) {
        if let Some(mut element) = self.elements.get_mut(voice_id) {
            if !element.paused {
                element.position += secs;
            }
        }
    }

    /// 媒体自然播放结束
    pub fn finish(&self, voice_id: &str) {
        if let Some(mut element) = self.elements.get_mut(voice_id) {
            element.paused = true;
            element.ended = true;
        }
    }
}

impl PreviewPlayerPort for MediaElementPlayer {
    fn start(&self, voice_id: &str, url: &str) -> Result<(), PlayerError> {
        Url::parse(url).map_err(|e| PlayerError::MediaUnavailable(format!("{}: {}", url, e)))?;

        let mut element = self
            .elements
            .entry(voice_id.to_string())
            .or_insert_with(|| MediaElement {
                src: url.to_string(),
                paused: true,
                position: 0.0,
                ended: false,
            });
        element.src = url.to_string();
        element.paused = false;
        element.position = 0.0;
        element.ended = false;

        tracing::debug!(voice_id = %voice_id, src = %url, "Media playing");
        Ok(())
    }

    fn stop(&self, voice_id: &str) {
        if let Some(mut element) = self.elements.get_mut(voice_id) {
            element.paused = true;
            element.position = 0.0;
        }
    }
}
