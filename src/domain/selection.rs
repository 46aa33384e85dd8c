//! Selection - 当前语言 / 口音筛选状态

use super::catalog::VoiceFilter;

/// 筛选状态
///
/// 不变量:
/// - 仅在已选择语言时才可能存在口音
/// - 切换或清除语言时口音随之清除
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    language: Option<String>,
    accent: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择语言，已选中时返回 false（无操作）
    pub fn select_language(&mut self, code: &str) -> bool {
        if self.language.as_deref() == Some(code) {
            return false;
        }
        self.language = Some(code.to_string());
        self.accent = None;
        true
    }

    /// 切换口音：再次选择同一口音时清除，回到仅按语言筛选
    pub fn toggle_accent(&mut self, code: &str) -> Result<Option<&str>, &'static str> {
        if self.language.is_none() {
            return Err("选择口音前必须先选择语言");
        }
        if self.accent.as_deref() == Some(code) {
            self.accent = None;
        } else {
            self.accent = Some(code.to_string());
        }
        Ok(self.accent.as_deref())
    }

    /// 清除语言（口音一并清除）
    pub fn clear_language(&mut self) {
        self.language = None;
        self.accent = None;
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn accent(&self) -> Option<&str> {
        self.accent.as_deref()
    }

    /// 当前选择对应的音色筛选条件
    pub fn filter(&self) -> Option<VoiceFilter> {
        self.language
            .as_ref()
            .map(|language| VoiceFilter::new(language.clone(), self.accent.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_language_clears_accent() {
        let mut state = SelectionState::new();
        assert!(state.select_language("en"));
        state.toggle_accent("en-GB").unwrap();
        assert_eq!(state.accent(), Some("en-GB"));

        assert!(state.select_language("fr"));
        assert_eq!(state.language(), Some("fr"));
        assert_eq!(state.accent(), None);
    }

    #[test]
    fn test_reselecting_language_is_noop() {
        let mut state = SelectionState::new();
        state.select_language("en");
        state.toggle_accent("en-US").unwrap();

        assert!(!state.select_language("en"));
        assert_eq!(state.accent(), Some("en-US"));
    }

    #[test]
    fn test_toggle_accent_twice_clears() {
        let mut state = SelectionState::new();
        state.select_language("en");

        assert_eq!(state.toggle_accent("en-US").unwrap(), Some("en-US"));
        assert_eq!(state.toggle_accent("en-US").unwrap(), None);
        assert_eq!(state.filter(), Some(VoiceFilter::language("en")));
    }

    #[test]
    fn test_toggle_accent_requires_language() {
        let mut state = SelectionState::new();
        assert!(state.toggle_accent("en-US").is_err());
    }

    #[test]
    fn test_clear_language() {
        let mut state = SelectionState::new();
        state.select_language("en");
        state.toggle_accent("en-AU").unwrap();
        state.clear_language();

        assert_eq!(state, SelectionState::default());
        assert!(state.filter().is_none());
    }
}
