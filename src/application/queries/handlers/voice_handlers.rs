//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CatalogCachePort, SharedVoicesQuery, VoiceCatalogPort};
use crate::application::queries::LoadVoices;
use crate::domain::{Voice, VoiceFilter};

/// 单页音色数量上限（不翻页）
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// LoadVoices Handler
pub struct LoadVoicesHandler {
    catalog: Arc<dyn VoiceCatalogPort>,
    cache: Arc<dyn CatalogCachePort>,
    page_size: u32,
}

impl LoadVoicesHandler {
    pub fn new(
        catalog: Arc<dyn VoiceCatalogPort>,
        cache: Arc<dyn CatalogCachePort>,
        page_size: u32,
    ) -> Self {
        Self {
            catalog,
            cache,
            page_size,
        }
    }

    /// 加载音色；同一筛选条件只请求一次，之后返回同一份缓存
    pub async fn handle(&self, query: LoadVoices) -> Result<Arc<Vec<Voice>>, ApplicationError> {
        if query.language.is_empty() {
            return Err(ApplicationError::validation("language must not be empty"));
        }

        let filter = VoiceFilter::new(query.language, query.accent);
        if let Some(voices) = self.cache.voices(&filter) {
            return Ok(voices);
        }

        let request = SharedVoicesQuery::first_page(
            &filter.language,
            filter.accent.as_deref(),
            self.page_size,
        );
        let voices = Arc::new(self.catalog.shared_voices(&request).await?);

        tracing::debug!(filter = %filter, count = voices.len(), "Voices loaded");

        self.cache.put_voices(filter, voices.clone());
        Ok(voices)
    }
}
