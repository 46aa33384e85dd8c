//! Playback Controller
//!
//! 将 [`PlaybackState`] 状态机绑定到试听媒体：状态转换产出的副作用
//! 依次作用到 [`PreviewPlayerPort`] 上。

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::PreviewPlayerPort;
use crate::domain::{PlaybackEffect, PlaybackEvent, PlaybackState};

/// 试听播放控制器
pub struct PlaybackController {
    state: PlaybackState,
    player: Arc<dyn PreviewPlayerPort>,
}

impl PlaybackController {
    pub fn new(player: Arc<dyn PreviewPlayerPort>) -> Self {
        Self {
            state: PlaybackState::Idle,
            player,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// 点击播放 / 暂停
    pub fn toggle(
        &mut self,
        voice_id: &str,
        preview_url: Option<&str>,
    ) -> Result<&PlaybackState, ApplicationError> {
        self.dispatch(PlaybackEvent::Play {
            voice_id: voice_id.to_string(),
            preview_url: preview_url.map(str::to_string),
        })
    }

    /// 媒体自然结束
    pub fn ended(&mut self, voice_id: &str) -> &PlaybackState {
        // Ended 不产生副作用，不会失败
        let _ = self.dispatch(PlaybackEvent::Ended {
            voice_id: voice_id.to_string(),
        });
        &self.state
    }

    fn dispatch(&mut self, event: PlaybackEvent) -> Result<&PlaybackState, ApplicationError> {
        let (next, effects) = self.state.transition(event);

        for effect in effects {
            match effect {
                PlaybackEffect::Stop(voice_id) => {
                    self.player.stop(&voice_id);
                    tracing::debug!(voice_id = %voice_id, "Preview stopped");
                }
                PlaybackEffect::Start { voice_id, url } => {
                    if let Err(e) = self.player.start(&voice_id, &url) {
                        // 之前的媒体已停止，回到 Idle 以保持状态与媒体一致
                        self.state = PlaybackState::Idle;
                        return Err(e.into());
                    }
                    tracing::debug!(voice_id = %voice_id, "Preview started");
                }
            }
        }

        self.state = next;
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::MediaElementPlayer;

    fn controller() -> (PlaybackController, Arc<MediaElementPlayer>) {
        let player = Arc::new(MediaElementPlayer::new());
        (PlaybackController::new(player.clone()), player)
    }

    #[test]
    fn test_switching_voice_resets_previous_media() {
        let (mut controller, player) = controller();

        controller.toggle("a", Some("https://cdn.example.com/a.mp3")).unwrap();
        player.advance("a", 1.5);
        controller.toggle("b", Some("https://cdn.example.com/b.mp3")).unwrap();

        assert_eq!(controller.state(), &PlaybackState::Playing("b".to_string()));
        let a = player.element("a").unwrap();
        assert!(a.paused);
        assert_eq!(a.position, 0.0);
        assert!(!player.element("b").unwrap().paused);
        assert_eq!(player.playing_count(), 1);
    }

    #[test]
    fn test_toggle_same_voice_stops() {
        let (mut controller, player) = controller();

        controller.toggle("a", Some("https://cdn.example.com/a.mp3")).unwrap();
        controller.toggle("a", Some("https://cdn.example.com/a.mp3")).unwrap();

        assert_eq!(controller.state(), &PlaybackState::Idle);
        assert!(player.element("a").unwrap().paused);
        assert_eq!(player.playing_count(), 0);
    }

    #[test]
    fn test_no_preview_has_no_effect() {
        let (mut controller, player) = controller();

        controller.toggle("a", None).unwrap();

        assert_eq!(controller.state(), &PlaybackState::Idle);
        assert!(player.element("a").is_none());
    }

    #[test]
    fn test_ended_returns_to_idle() {
        let (mut controller, player) = controller();

        controller.toggle("a", Some("https://cdn.example.com/a.mp3")).unwrap();
        player.finish("a");
        assert_eq!(controller.ended("a"), &PlaybackState::Idle);
    }

    #[test]
    fn test_failed_start_leaves_idle() {
        let (mut controller, player) = controller();

        controller.toggle("a", Some("https://cdn.example.com/a.mp3")).unwrap();
        let result = controller.toggle("b", Some("not a url"));

        assert!(matches!(result, Err(ApplicationError::PlaybackError(_))));
        assert_eq!(controller.state(), &PlaybackState::Idle);
        assert_eq!(player.playing_count(), 0);
    }
}
