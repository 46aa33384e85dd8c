//! Voice Queries

/// 加载某筛选条件下的首页音色
#[derive(Debug, Clone)]
pub struct LoadVoices {
    pub language: String,
    pub accent: Option<String>,
}
