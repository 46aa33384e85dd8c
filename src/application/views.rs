//! View Models
//!
//! 将缓存、筛选状态和播放状态投影为展示列表。全部为纯函数，
//! 不发起请求也不修改状态。

use serde::Serialize;

use crate::application::ports::AccentMap;
use crate::domain::{collate, Accent, Language, PlaybackState, Voice};

// ============================================================================
// 筛选面板
// ============================================================================

/// 语言 / 口音列表项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterItem {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub selected: bool,
}

/// 口音面板，所选语言没有口音时隐藏
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccentPanel {
    pub visible: bool,
    pub items: Vec<FilterItem>,
}

/// 面包屑节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub flag: String,
    pub name: String,
}

/// 语言列表：按显示名称做大小写不敏感的子串筛选，再按本地化顺序排序
pub fn language_list(languages: &[Language], search: &str, selected: Option<&str>) -> Vec<FilterItem> {
    let needle = search.to_lowercase();

    let mut matched: Vec<&Language> = languages
        .iter()
        .filter(|lang| lang.display_name().to_lowercase().contains(&needle))
        .collect();
    matched.sort_by(|a, b| collate(a.display_name(), b.display_name()));

    matched
        .into_iter()
        .map(|lang| FilterItem {
            code: lang.code().to_string(),
            name: lang.display_name().to_string(),
            flag: lang.flag().to_string(),
            selected: selected == Some(lang.code()),
        })
        .collect()
}

/// 口音面板
pub fn accent_panel(accents: Option<&AccentMap>, selected: Option<&str>) -> AccentPanel {
    let Some(accents) = accents.filter(|a| !a.is_empty()) else {
        return AccentPanel::default();
    };

    let mut sorted: Vec<&Accent> = accents.values().collect();
    sorted.sort_by(|a, b| collate(a.display_name(), b.display_name()));

    AccentPanel {
        visible: true,
        items: sorted
            .into_iter()
            .map(|accent| FilterItem {
                code: accent.code().to_string(),
                name: accent.display_name().to_string(),
                flag: accent.flag().to_string(),
                selected: selected == Some(accent.code()),
            })
            .collect(),
    }
}

/// 面包屑：`语言` 或 `语言 › 口音`
pub fn breadcrumb(language: &Language, accent: Option<&Accent>) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        flag: language.flag().to_string(),
        name: language.display_name().to_string(),
    }];
    if let Some(accent) = accent {
        crumbs.push(Crumb {
            flag: accent.flag().to_string(),
            name: accent.display_name().to_string(),
        });
    }
    crumbs
}

pub const CRUMB_SEPARATOR: &str = " › ";

/// 面包屑的单行文本
pub fn breadcrumb_text(crumbs: &[Crumb]) -> String {
    crumbs
        .iter()
        .map(|crumb| format!("{} {}", crumb.flag, crumb.name))
        .collect::<Vec<_>>()
        .join(CRUMB_SEPARATOR)
}

/// 内容区标题
pub fn content_title(language: &Language, accent: Option<&Accent>) -> String {
    match accent {
        Some(accent) => format!("{} ({})", language.display_name(), accent.display_name()),
        None => format!("{} Voices", language.display_name()),
    }
}

// ============================================================================
// 音色网格
// ============================================================================

pub const PLAY_ICON: &str = "▶";
pub const PAUSE_ICON: &str = "⏸";
pub const PLAY_LABEL: &str = "Play Preview";
pub const PLAYING_LABEL: &str = "Playing...";
pub const NO_PREVIEW_LABEL: &str = "No Preview";

/// 播放按钮
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayControl {
    pub icon: &'static str,
    pub label: &'static str,
    pub enabled: bool,
    pub playing: bool,
}

impl PlayControl {
    fn for_voice(voice: &Voice, playback: &PlaybackState) -> Self {
        if !voice.has_preview() {
            return Self {
                icon: PLAY_ICON,
                label: NO_PREVIEW_LABEL,
                enabled: false,
                playing: false,
            };
        }
        if playback.is_playing(&voice.id) {
            Self {
                icon: PAUSE_ICON,
                label: PLAYING_LABEL,
                enabled: true,
                playing: true,
            }
        } else {
            Self {
                icon: PLAY_ICON,
                label: PLAY_LABEL,
                enabled: true,
                playing: false,
            }
        }
    }
}

/// 音色卡片
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceCard {
    pub id: String,
    pub name: String,
    pub initial: String,
    pub tags: Vec<String>,
    pub preview_url: Option<String>,
    pub control: PlayControl,
}

impl VoiceCard {
    pub fn project(voice: &Voice, playback: &PlaybackState) -> Self {
        let name = voice
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Unnamed".to_string());
        let initial = name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default();
        let tags = [
            voice.category.as_ref(),
            voice.labels.gender.as_ref(),
            voice.labels.age.as_ref(),
            voice.labels.accent.as_ref(),
        ]
        .into_iter()
        .flatten()
        .filter(|tag| !tag.is_empty())
        .cloned()
        .collect();

        Self {
            id: voice.id.clone(),
            name,
            initial,
            tags,
            preview_url: voice.preview_url.clone(),
            control: PlayControl::for_voice(voice, playback),
        }
    }
}

/// 音色网格状态，整体替换，不存在部分渲染
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum VoiceGrid {
    /// 尚未选择语言
    NoSelection,
    Loading,
    Empty,
    Error(String),
    Cards(Vec<VoiceCard>),
}

pub const EMPTY_TITLE: &str = "No voices found";
pub const EMPTY_HINT: &str = "Try selecting a different filter";

/// 音色网格
pub fn voice_grid(voices: &[Voice], playback: &PlaybackState) -> VoiceGrid {
    if voices.is_empty() {
        return VoiceGrid::Empty;
    }
    VoiceGrid::Cards(
        voices
            .iter()
            .map(|voice| VoiceCard::project(voice, playback))
            .collect(),
    )
}

// ============================================================================
// 整页
// ============================================================================

/// 整个目录页面
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub languages: Vec<FilterItem>,
    pub accents: AccentPanel,
    pub breadcrumb: Vec<Crumb>,
    pub title: String,
    pub subtitle: String,
    pub grid: VoiceGrid,
}
