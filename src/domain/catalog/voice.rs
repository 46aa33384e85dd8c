//! Catalog Context - Voice

use serde::{Deserialize, Serialize};

/// 音色标签
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// 上游原始音色结构，ID 可能出现在 `voice_id` 或 `id`
#[derive(Debug, Deserialize)]
struct RawVoice {
    #[serde(default)]
    voice_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    labels: Option<VoiceLabels>,
    #[serde(default)]
    preview_url: Option<String>,
}

/// 音色（上游共享音色库条目）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawVoice")]
pub struct Voice {
    #[serde(rename = "voice_id")]
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub labels: VoiceLabels,
    pub preview_url: Option<String>,
}

impl From<RawVoice> for Voice {
    fn from(raw: RawVoice) -> Self {
        Self {
            id: raw.voice_id.or(raw.id).unwrap_or_default(),
            name: raw.name,
            category: raw.category,
            labels: raw.labels.unwrap_or_default(),
            preview_url: raw.preview_url.filter(|url| !url.is_empty()),
        }
    }
}

impl Voice {
    /// 是否可试听
    pub fn has_preview(&self) -> bool {
        self.preview_url.is_some()
    }
}

/// 音色筛选条件，同时作为音色缓存的键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoiceFilter {
    pub language: String,
    pub accent: Option<String>,
}

impl VoiceFilter {
    pub fn new(language: impl Into<String>, accent: Option<String>) -> Self {
        Self {
            language: language.into(),
            accent,
        }
    }

    /// 仅按语言筛选
    pub fn language(language: impl Into<String>) -> Self {
        Self::new(language, None)
    }

    /// 缓存键 `<language>-<accent|all>`
    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}",
            self.language,
            self.accent.as_deref().unwrap_or("all")
        )
    }
}

impl std::fmt::Display for VoiceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cache_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_id_falls_back_to_id() {
        let voice: Voice = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "name": "Rachel",
            "labels": { "gender": "female", "use_case": "narration" }
        }))
        .unwrap();

        assert_eq!(voice.id, "abc");
        assert_eq!(voice.labels.gender.as_deref(), Some("female"));
        assert!(!voice.has_preview());
    }

    #[test]
    fn test_voice_id_prefers_voice_id() {
        let voice: Voice = serde_json::from_value(serde_json::json!({
            "voice_id": "v1",
            "id": "other",
            "labels": null,
            "preview_url": "https://example.com/a.mp3"
        }))
        .unwrap();

        assert_eq!(voice.id, "v1");
        assert_eq!(voice.labels, VoiceLabels::default());
        assert!(voice.has_preview());
    }

    #[test]
    fn test_empty_preview_url_is_no_preview() {
        let voice: Voice =
            serde_json::from_value(serde_json::json!({ "voice_id": "v1", "preview_url": "" }))
                .unwrap();
        assert!(!voice.has_preview());
    }

    #[test]
    fn test_filter_cache_key() {
        assert_eq!(VoiceFilter::language("en").cache_key(), "en-all");
        assert_eq!(
            VoiceFilter::new("en", Some("en-GB".to_string())).cache_key(),
            "en-en-GB"
        );
    }
}
