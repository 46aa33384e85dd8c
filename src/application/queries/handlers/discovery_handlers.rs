//! Discovery Query Handlers
//!
//! 上游没有“列出支持的语言 / 口音”接口，只能用固定候选集逐个探测：
//! 每个候选发一个 page_size=1 的查询，返回至少一个音色即视为存在。
//! 同一批探测并发发出，全部结束（成功或失败）后才汇总，单个失败不影响其他候选。

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AccentMap, CatalogCachePort, CatalogError, SharedVoicesQuery, VoiceCatalogPort,
};
use crate::application::queries::{DiscoverAccents, DiscoverLanguages};
use crate::domain::{accent_code, Accent, Language};

/// 默认语言候选集
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "en", "ar", "zh", "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "hi", "tr", "nl", "pl",
    "sv", "da", "fi", "cs", "el", "hu", "ro", "bg", "uk", "id", "vi", "th", "ta", "te", "bn",
    "ur", "fa", "he", "af", "fil",
];

/// 默认地区候选集
pub const DEFAULT_REGIONS: &[&str] = &[
    "US", "GB", "AU", "CA", "IN", "SA", "AE", "EG", "BH", "JO", "KW", "IQ", "DZ", "MA", "ES",
    "MX", "AR", "BR", "PT", "FR", "CN", "DE", "AT",
];

/// 发现配置
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// 语言候选集
    pub languages: Vec<String>,
    /// 地区候选集
    pub regions: Vec<String>,
    /// 探测查询的 page_size
    pub probe_page_size: u32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            regions: DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect(),
            probe_page_size: 1,
        }
    }
}

/// 单个候选的探测结果
struct ProbeOutcome {
    code: String,
    result: Result<bool, CatalogError>,
}

/// 并发探测一批查询，等待全部结束
async fn probe_all(
    catalog: &dyn VoiceCatalogPort,
    probes: Vec<(String, SharedVoicesQuery)>,
) -> Vec<ProbeOutcome> {
    let futures = probes.into_iter().map(|(code, query)| async move {
        let result = catalog
            .shared_voices(&query)
            .await
            .map(|voices| !voices.is_empty());
        ProbeOutcome { code, result }
    });

    join_all(futures).await
}

fn dedup(codes: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    codes
        .into_iter()
        .filter(|code| seen.insert(code.clone()))
        .collect()
}

/// DiscoverLanguages Handler
pub struct DiscoverLanguagesHandler {
    catalog: Arc<dyn VoiceCatalogPort>,
    cache: Arc<dyn CatalogCachePort>,
    config: Arc<DiscoveryConfig>,
}

impl DiscoverLanguagesHandler {
    pub fn new(
        catalog: Arc<dyn VoiceCatalogPort>,
        cache: Arc<dyn CatalogCachePort>,
        config: Arc<DiscoveryConfig>,
    ) -> Self {
        Self {
            catalog,
            cache,
            config,
        }
    }

    /// 发现语言；缓存非空时直接返回缓存
    pub async fn handle(&self, _query: DiscoverLanguages) -> Result<Vec<Language>, ApplicationError> {
        if self.cache.has_languages() {
            return Ok(self.cache.languages());
        }

        let candidates = dedup(self.config.languages.iter().cloned());
        let probes = candidates
            .into_iter()
            .map(|code| {
                let query = SharedVoicesQuery::language_probe(&code, self.config.probe_page_size);
                (code, query)
            })
            .collect::<Vec<_>>();
        let total = probes.len();

        let outcomes = probe_all(self.catalog.as_ref(), probes).await;

        let mut settled = 0;
        let mut admitted = Vec::new();
        for outcome in outcomes {
            match outcome.result {
                Ok(has_voices) => {
                    settled += 1;
                    if has_voices {
                        admitted.push(Language::from_code(outcome.code));
                    }
                }
                Err(e) => {
                    tracing::debug!(language = %outcome.code, error = %e, "Language probe failed");
                }
            }
        }

        if total > 0 && settled == 0 {
            return Err(ApplicationError::DiscoveryFailed(format!(
                "all {} language probes failed",
                total
            )));
        }

        tracing::info!(
            candidates = total,
            failed = total - settled,
            admitted = admitted.len(),
            "Language discovery completed"
        );

        self.cache.put_languages(admitted);
        Ok(self.cache.languages())
    }
}

/// DiscoverAccents Handler
pub struct DiscoverAccentsHandler {
    catalog: Arc<dyn VoiceCatalogPort>,
    cache: Arc<dyn CatalogCachePort>,
    config: Arc<DiscoveryConfig>,
}

impl DiscoverAccentsHandler {
    pub fn new(
        catalog: Arc<dyn VoiceCatalogPort>,
        cache: Arc<dyn CatalogCachePort>,
        config: Arc<DiscoveryConfig>,
    ) -> Self {
        Self {
            catalog,
            cache,
            config,
        }
    }

    /// 发现口音；每种语言只探测一次（空结果同样缓存）
    pub async fn handle(&self, query: DiscoverAccents) -> Result<Arc<AccentMap>, ApplicationError> {
        if query.language.is_empty() {
            return Err(ApplicationError::validation("language must not be empty"));
        }

        if let Some(accents) = self.cache.accents(&query.language) {
            return Ok(accents);
        }

        let candidates = dedup(
            self.config
                .regions
                .iter()
                .map(|region| accent_code(&query.language, region)),
        );
        let probes = candidates
            .into_iter()
            .map(|code| {
                let probe = SharedVoicesQuery::accent_probe(&code, self.config.probe_page_size);
                (code, probe)
            })
            .collect::<Vec<_>>();

        let outcomes = probe_all(self.catalog.as_ref(), probes).await;

        let mut accents = AccentMap::new();
        for outcome in outcomes {
            match outcome.result {
                Ok(true) => {
                    accents.insert(outcome.code.clone(), Accent::from_code(outcome.code));
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(accent = %outcome.code, error = %e, "Accent probe failed");
                }
            }
        }

        tracing::info!(
            language = %query.language,
            admitted = accents.len(),
            "Accent discovery completed"
        );

        let accents = Arc::new(accents);
        self.cache.put_accents(&query.language, accents.clone());
        Ok(accents)
    }
}
