//! Catalog Context - 音色目录限界上下文
//!
//! 职责:
//! - Language / Accent 值对象（由探测结果创建，不可变）
//! - Voice 实体（上游原样返回）
//! - 显示名称、国旗字形与本地化排序

mod locale;
mod value_objects;
mod voice;

pub use locale::{collate, language_display_name, region_display_name};
pub use value_objects::{accent_code, flag_glyph, Accent, Language, GLOBE_GLYPH};
pub use voice::{Voice, VoiceFilter, VoiceLabels};
