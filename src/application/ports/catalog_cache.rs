//! Catalog Cache Port - 发现结果缓存
//!
//! 会话级缓存：语言、各语言的口音、各筛选条件的音色列表。
//! 条目一经写入不再失效；并发未命中时后写者覆盖。

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Accent, Language, Voice, VoiceFilter};

/// 口音表，键为完整口音代码（`en-US`）
pub type AccentMap = HashMap<String, Accent>;

/// Catalog Cache Port
pub trait CatalogCachePort: Send + Sync {
    /// 是否已缓存语言
    fn has_languages(&self) -> bool;

    /// 全部已知语言（无序）
    fn languages(&self) -> Vec<Language>;

    /// 按代码查找语言
    fn language(&self, code: &str) -> Option<Language>;

    /// 写入语言（按 code 去重）
    fn put_languages(&self, languages: Vec<Language>);

    /// 某语言的口音表
    fn accents(&self, language: &str) -> Option<Arc<AccentMap>>;

    /// 写入某语言的口音表（允许为空）
    fn put_accents(&self, language: &str, accents: Arc<AccentMap>);

    /// 某筛选条件的音色列表
    fn voices(&self, filter: &VoiceFilter) -> Option<Arc<Vec<Voice>>>;

    /// 写入某筛选条件的音色列表
    fn put_voices(&self, filter: VoiceFilter, voices: Arc<Vec<Voice>>);
}
