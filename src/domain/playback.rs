//! Playback - 试听播放状态机
//!
//! 同一时刻最多只有一个音色处于播放状态。所有状态变化都经由
//! [`PlaybackState::transition`]，由它产出需要作用到媒体上的副作用。

/// 播放状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(String),
}

/// 输入事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// 点击某音色的播放按钮
    Play {
        voice_id: String,
        preview_url: Option<String>,
    },
    /// 媒体自然播放结束
    Ended { voice_id: String },
}

/// 需要作用到媒体元素上的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEffect {
    /// 暂停并回到起点
    Stop(String),
    /// 从起点开始播放
    Start { voice_id: String, url: String },
}

impl PlaybackState {
    /// 唯一的状态转换函数
    pub fn transition(&self, event: PlaybackEvent) -> (PlaybackState, Vec<PlaybackEffect>) {
        match event {
            PlaybackEvent::Play { preview_url: None, .. } => (self.clone(), Vec::new()),
            PlaybackEvent::Play {
                voice_id,
                preview_url: Some(url),
            } => match self {
                PlaybackState::Playing(current) if *current == voice_id => {
                    (PlaybackState::Idle, vec![PlaybackEffect::Stop(voice_id)])
                }
                PlaybackState::Playing(current) => (
                    PlaybackState::Playing(voice_id.clone()),
                    vec![
                        PlaybackEffect::Stop(current.clone()),
                        PlaybackEffect::Start { voice_id, url },
                    ],
                ),
                PlaybackState::Idle => (
                    PlaybackState::Playing(voice_id.clone()),
                    vec![PlaybackEffect::Start { voice_id, url }],
                ),
            },
            PlaybackEvent::Ended { .. } => (PlaybackState::Idle, Vec::new()),
        }
    }

    pub fn active_voice(&self) -> Option<&str> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(id) => Some(id),
        }
    }

    pub fn is_playing(&self, voice_id: &str) -> bool {
        self.active_voice() == Some(voice_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(id: &str) -> PlaybackEvent {
        PlaybackEvent::Play {
            voice_id: id.to_string(),
            preview_url: Some(format!("https://cdn.example.com/{}.mp3", id)),
        }
    }

    #[test]
    fn test_play_from_idle() {
        let (state, effects) = PlaybackState::Idle.transition(play("a"));
        assert_eq!(state, PlaybackState::Playing("a".to_string()));
        assert_eq!(
            effects,
            vec![PlaybackEffect::Start {
                voice_id: "a".to_string(),
                url: "https://cdn.example.com/a.mp3".to_string(),
            }]
        );
    }

    #[test]
    fn test_play_same_voice_stops() {
        let state = PlaybackState::Playing("a".to_string());
        let (state, effects) = state.transition(play("a"));
        assert_eq!(state, PlaybackState::Idle);
        assert_eq!(effects, vec![PlaybackEffect::Stop("a".to_string())]);
    }

    #[test]
    fn test_play_other_voice_switches() {
        let state = PlaybackState::Playing("a".to_string());
        let (state, effects) = state.transition(play("b"));
        assert_eq!(state.active_voice(), Some("b"));
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], PlaybackEffect::Stop("a".to_string()));
        assert!(matches!(&effects[1], PlaybackEffect::Start { voice_id, .. } if voice_id == "b"));
    }

    #[test]
    fn test_play_without_preview_is_noop() {
        let state = PlaybackState::Playing("a".to_string());
        let (next, effects) = state.transition(PlaybackEvent::Play {
            voice_id: "b".to_string(),
            preview_url: None,
        });
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_ended_returns_to_idle() {
        let state = PlaybackState::Playing("a".to_string());
        let (state, effects) = state.transition(PlaybackEvent::Ended {
            voice_id: "other".to_string(),
        });
        assert_eq!(state, PlaybackState::Idle);
        assert!(effects.is_empty());
    }
}
