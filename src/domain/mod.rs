//! Domain Layer - 领域层
//!
//! 包含:
//! - Catalog Context: 语言 / 口音 / 音色目录
//! - Selection: 当前筛选状态
//! - Playback: 试听播放状态机

pub mod catalog;
pub mod playback;
pub mod selection;

pub use catalog::{
    accent_code, collate, flag_glyph, language_display_name, region_display_name, Accent,
    Language, Voice, VoiceFilter, VoiceLabels, GLOBE_GLYPH,
};
pub use playback::{PlaybackEffect, PlaybackEvent, PlaybackState};
pub use selection::SelectionState;
