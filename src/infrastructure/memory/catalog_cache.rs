//! In-Memory Catalog Cache Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{AccentMap, CatalogCachePort};
use crate::domain::{Language, Voice, VoiceFilter};

/// 内存目录缓存
pub struct InMemoryCatalogCache {
    /// code -> Language
    languages: DashMap<String, Language>,
    /// language -> accents
    accents: DashMap<String, Arc<AccentMap>>,
    /// filter -> voices
    voices: DashMap<VoiceFilter, Arc<Vec<Voice>>>,
}

impl InMemoryCatalogCache {
    pub fn new() -> Self {
        Self {
            languages: DashMap::new(),
            accents: DashMap::new(),
            voices: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryCatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogCachePort for InMemoryCatalogCache {
    fn has_languages(&self) -> bool {
        !self.languages.is_empty()
    }

    fn languages(&self) -> Vec<Language> {
        self.languages.iter().map(|e| e.value().clone()).collect()
    }

    fn language(&self, code: &str) -> Option<Language> {
        self.languages.get(code).map(|e| e.value().clone())
    }

    fn put_languages(&self, languages: Vec<Language>) {
        for language in languages {
            self.languages.insert(language.code().to_string(), language);
        }
        tracing::debug!(count = self.languages.len(), "Languages cached");
    }

    fn accents(&self, language: &str) -> Option<Arc<AccentMap>> {
        self.accents.get(language).map(|e| e.value().clone())
    }

    fn put_accents(&self, language: &str, accents: Arc<AccentMap>) {
        tracing::debug!(language = %language, count = accents.len(), "Accents cached");
        self.accents.insert(language.to_string(), accents);
    }

    fn voices(&self, filter: &VoiceFilter) -> Option<Arc<Vec<Voice>>> {
        self.voices.get(filter).map(|e| e.value().clone())
    }

    fn put_voices(&self, filter: VoiceFilter, voices: Arc<Vec<Voice>>) {
        tracing::debug!(filter = %filter, count = voices.len(), "Voices cached");
        self.voices.insert(filter, voices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Accent;

    #[test]
    fn test_languages_deduplicated_by_code() {
        let cache = InMemoryCatalogCache::new();
        assert!(!cache.has_languages());

        cache.put_languages(vec![Language::from_code("en"), Language::from_code("fr")]);
        cache.put_languages(vec![Language::from_code("en")]);

        assert!(cache.has_languages());
        assert_eq!(cache.languages().len(), 2);
        assert_eq!(cache.language("en").unwrap().display_name(), "English");
        assert!(cache.language("de").is_none());
    }

    #[test]
    fn test_accents_lifecycle() {
        let cache = InMemoryCatalogCache::new();
        assert!(cache.accents("en").is_none());

        let mut accents = AccentMap::new();
        accents.insert("en-US".to_string(), Accent::from_code("en-US"));
        cache.put_accents("en", Arc::new(accents));

        assert!(cache.accents("en").unwrap().contains_key("en-US"));
    }

    #[test]
    fn test_voices_keyed_by_filter() {
        let cache = InMemoryCatalogCache::new();
        let voices = Arc::new(Vec::new());
        cache.put_voices(VoiceFilter::language("en"), voices.clone());

        let cached = cache.voices(&VoiceFilter::language("en")).unwrap();
        assert!(Arc::ptr_eq(&cached, &voices));
        assert!(cache
            .voices(&VoiceFilter::new("en", Some("en-GB".to_string())))
            .is_none());
    }
}
