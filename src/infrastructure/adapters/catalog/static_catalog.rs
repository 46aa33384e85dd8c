//! Static Voice Catalog - 内存中的固定音色库
//!
//! 不访问网络，按语言 / 口音筛选预置的音色。用于离线演示和测试，
//! 可指定某些语言或口音代码的查询始终失败。

use async_trait::async_trait;
use dashmap::DashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{CatalogError, SharedVoicesQuery, VoiceCatalogPort};
use crate::domain::Voice;

#[derive(Debug, Clone)]
struct StaticEntry {
    language: String,
    accent: Option<String>,
    voice: Voice,
}

/// 固定音色库
#[derive(Default)]
pub struct StaticVoiceCatalog {
    entries: Vec<StaticEntry>,
    /// 查询会失败的语言 / 口音代码
    failing: DashSet<String>,
    requests: AtomicUsize,
}

impl StaticVoiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个音色
    pub fn with_voice(mut self, language: &str, accent: Option<&str>, voice: Voice) -> Self {
        self.entries.push(StaticEntry {
            language: language.to_string(),
            accent: accent.map(str::to_string),
            voice,
        });
        self
    }

    /// 针对某代码的查询始终失败
    pub fn failing(self, code: &str) -> Self {
        self.set_failing(code);
        self
    }

    pub fn set_failing(&self, code: &str) {
        self.failing.insert(code.to_string());
    }

    /// 已处理的请求数
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn matches(entry: &StaticEntry, query: &SharedVoicesQuery) -> bool {
        let language_ok = query
            .language
            .as_ref()
            .map_or(true, |language| &entry.language == language);
        let accent_ok = query
            .accent
            .as_ref()
            .map_or(true, |accent| entry.accent.as_ref() == Some(accent));
        language_ok && accent_ok
    }
}

#[async_trait]
impl VoiceCatalogPort for StaticVoiceCatalog {
    async fn shared_voices(&self, query: &SharedVoicesQuery) -> Result<Vec<Voice>, CatalogError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let failing = [&query.language, &query.accent]
            .into_iter()
            .flatten()
            .find(|code| self.failing.contains(code.as_str()));
        if let Some(code) = failing {
            return Err(CatalogError::NetworkError(format!(
                "simulated failure for {}",
                code
            )));
        }

        let page_size = query.page_size as usize;
        let skip = query.page.unwrap_or(0) as usize * page_size;

        Ok(self
            .entries
            .iter()
            .filter(|entry| Self::matches(entry, query))
            .skip(skip)
            .take(page_size)
            .map(|entry| entry.voice.clone())
            .collect())
    }
}
