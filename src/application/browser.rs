//! Catalog Browser - 浏览会话
//!
//! 一个浏览会话拥有自己的缓存、筛选状态和播放控制器，所有用户操作
//! （选择语言 / 口音、搜索、试听）都经过这里，操作完成后返回最新视图。

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::playback::PlaybackController;
use crate::application::ports::{CatalogCachePort, PreviewPlayerPort, VoiceCatalogPort};
use crate::application::queries::handlers::{
    DiscoverAccentsHandler, DiscoverLanguagesHandler, DiscoveryConfig, LoadVoicesHandler,
};
use crate::application::queries::{DiscoverAccents, DiscoverLanguages, LoadVoices};
use crate::application::views::{self, AccentPanel, CatalogView, VoiceGrid};
use crate::domain::{Language, PlaybackState, SelectionState};

pub const DEFAULT_TITLE: &str = "Voice Library";
pub const SELECT_PROMPT: &str = "Select a language to browse voices";
pub const LOADING_SUBTITLE: &str = "Loading accents and voices...";
pub const ERROR_SUBTITLE: &str = "Failed to load voices";

/// 浏览会话配置
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub discovery: DiscoveryConfig,
    /// 音色列表单页数量
    pub page_size: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            discovery: DiscoveryConfig::default(),
            page_size: crate::application::queries::handlers::DEFAULT_PAGE_SIZE,
        }
    }
}

/// 目录浏览会话
pub struct CatalogBrowser {
    cache: Arc<dyn CatalogCachePort>,
    discover_languages_handler: DiscoverLanguagesHandler,
    discover_accents_handler: DiscoverAccentsHandler,
    load_voices_handler: LoadVoicesHandler,
    selection: SelectionState,
    playback: PlaybackController,
    search: String,
    last_error: Option<String>,
}

impl CatalogBrowser {
    pub fn new(
        catalog: Arc<dyn VoiceCatalogPort>,
        cache: Arc<dyn CatalogCachePort>,
        player: Arc<dyn PreviewPlayerPort>,
        config: BrowserConfig,
    ) -> Self {
        let discovery = Arc::new(config.discovery);
        Self {
            discover_languages_handler: DiscoverLanguagesHandler::new(
                catalog.clone(),
                cache.clone(),
                discovery.clone(),
            ),
            discover_accents_handler: DiscoverAccentsHandler::new(
                catalog.clone(),
                cache.clone(),
                discovery,
            ),
            load_voices_handler: LoadVoicesHandler::new(catalog, cache.clone(), config.page_size),
            cache,
            selection: SelectionState::new(),
            playback: PlaybackController::new(player),
            search: String::new(),
            last_error: None,
        }
    }

    /// 初始化：发现语言，返回语言数量
    pub async fn init(&mut self) -> Result<usize, ApplicationError> {
        let languages = self.discover_languages_handler.handle(DiscoverLanguages).await?;
        tracing::info!(languages = languages.len(), "Catalog browser ready");
        Ok(languages.len())
    }

    /// 选择语言：清除口音，并发发现口音与加载音色
    pub async fn select_language(&mut self, code: &str) -> Result<CatalogView, ApplicationError> {
        if self.cache.language(code).is_none() {
            return Err(ApplicationError::not_found("Language", code));
        }
        if !self.selection.select_language(code) {
            return Ok(self.render());
        }
        self.last_error = None;

        let accents_query = DiscoverAccents {
            language: code.to_string(),
        };
        let voices_query = LoadVoices {
            language: code.to_string(),
            accent: None,
        };
        let (accents, voices) = tokio::join!(
            self.discover_accents_handler.handle(accents_query),
            self.load_voices_handler.handle(voices_query),
        );

        if let Err(e) = accents {
            tracing::warn!(language = %code, error = %e, "Accent discovery failed");
        }
        if let Err(e) = voices {
            self.last_error = Some(e.to_string());
            return Err(e);
        }

        Ok(self.render())
    }

    /// 选择口音：再次选择同一口音时回到仅按语言筛选
    pub async fn select_accent(&mut self, code: &str) -> Result<CatalogView, ApplicationError> {
        let language = self
            .selection
            .language()
            .map(str::to_string)
            .ok_or_else(|| ApplicationError::invalid_state("no language selected"))?;

        let known = self
            .cache
            .accents(&language)
            .map(|accents| accents.contains_key(code))
            .unwrap_or(false);
        if !known {
            return Err(ApplicationError::not_found("Accent", code));
        }

        let accent = self
            .selection
            .toggle_accent(code)
            .map_err(ApplicationError::invalid_state)?
            .map(str::to_string);
        self.last_error = None;

        let query = LoadVoices { language, accent };
        if let Err(e) = self.load_voices_handler.handle(query).await {
            self.last_error = Some(e.to_string());
            return Err(e);
        }

        Ok(self.render())
    }

    /// 设置语言列表的搜索词（只筛选已缓存的语言）
    pub fn set_search(&mut self, term: impl Into<String>) -> CatalogView {
        self.search = term.into();
        self.render()
    }

    /// 回到未选择语言的初始页面，缓存保留
    pub fn clear_language(&mut self) -> CatalogView {
        self.selection.clear_language();
        self.last_error = None;
        self.render()
    }

    /// 试听 / 停止当前筛选结果中的某个音色
    pub fn play(&mut self, voice_id: &str) -> Result<CatalogView, ApplicationError> {
        let filter = self
            .selection
            .filter()
            .ok_or_else(|| ApplicationError::invalid_state("no language selected"))?;
        let voices = self
            .cache
            .voices(&filter)
            .ok_or_else(|| ApplicationError::invalid_state("voices are still loading"))?;
        let voice = voices
            .iter()
            .find(|v| v.id == voice_id)
            .ok_or_else(|| ApplicationError::not_found("Voice", voice_id))?;

        self.playback
            .toggle(&voice.id, voice.preview_url.as_deref())?;
        Ok(self.render())
    }

    /// 试听自然结束
    pub fn preview_ended(&mut self, voice_id: &str) -> CatalogView {
        self.playback.ended(voice_id);
        self.render()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn playback_state(&self) -> &PlaybackState {
        self.playback.state()
    }

    /// 投影当前页面
    pub fn render(&self) -> CatalogView {
        let languages: Vec<Language> = self.cache.languages();
        let language_items =
            views::language_list(&languages, &self.search, self.selection.language());

        let Some(language) = self
            .selection
            .language()
            .and_then(|code| self.cache.language(code))
        else {
            return CatalogView {
                languages: language_items,
                accents: AccentPanel::default(),
                breadcrumb: Vec::new(),
                title: DEFAULT_TITLE.to_string(),
                subtitle: SELECT_PROMPT.to_string(),
                grid: VoiceGrid::NoSelection,
            };
        };

        let accents = self.cache.accents(language.code());
        let accent = self
            .selection
            .accent()
            .and_then(|code| accents.as_ref().and_then(|a| a.get(code)));

        let (grid, subtitle) = match (&self.last_error, self.selection.filter()) {
            (Some(error), _) => (VoiceGrid::Error(error.clone()), ERROR_SUBTITLE.to_string()),
            (None, Some(filter)) => match self.cache.voices(&filter) {
                Some(voices) => (
                    views::voice_grid(&voices, self.playback.state()),
                    format!("{} voices available", voices.len()),
                ),
                None => (VoiceGrid::Loading, LOADING_SUBTITLE.to_string()),
            },
            (None, None) => (VoiceGrid::Loading, LOADING_SUBTITLE.to_string()),
        };

        CatalogView {
            languages: language_items,
            accents: views::accent_panel(accents.as_deref(), self.selection.accent()),
            breadcrumb: views::breadcrumb(&language, accent),
            title: views::content_title(&language, accent),
            subtitle,
            grid,
        }
    }
}
