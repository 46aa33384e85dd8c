//! Catalog Context - Value Objects

use serde::{Deserialize, Serialize};

use super::locale::{language_display_name, region_display_name};

/// 无地区后缀时使用的通用字形
pub const GLOBE_GLYPH: &str = "🌐";

/// 区域指示符号 'A' 的码位
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// 由语言 / 口音代码推导国旗字形
///
/// - `fil` 特例：无字形
/// - 两字母地区后缀（`xx-YY`）：对应的区域指示符号对
/// - 其余：地球字形
pub fn flag_glyph(code: &str) -> String {
    if code == "fil" {
        return String::new();
    }

    match code.split_once('-') {
        Some((_, region))
            if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            region
                .to_ascii_uppercase()
                .chars()
                .map(|c| char::from_u32(REGIONAL_INDICATOR_A + (c as u32 - 'A' as u32)))
                .collect::<Option<String>>()
                .unwrap_or_else(|| GLOBE_GLYPH.to_string())
        }
        _ => GLOBE_GLYPH.to_string(),
    }
}

/// 拼接口音代码 `<lang>-<REGION>`
pub fn accent_code(language: &str, region: &str) -> String {
    format!("{}-{}", language, region.to_ascii_uppercase())
}

/// 语言
///
/// 不变量:
/// - 仅在探测到至少一个音色时创建
/// - 创建后不可变，按 code 缓存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    code: String,
    display_name: String,
    flag: String,
}

impl Language {
    /// 由代码创建，显示名称与字形自动推导
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            display_name: language_display_name(&code),
            flag: flag_glyph(&code),
            code,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }
}

/// 口音（某语言下的地区变体）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accent {
    code: String,
    display_name: String,
    flag: String,
}

impl Accent {
    /// 由完整口音代码（`en-US`）创建
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            display_name: region_display_name(&code),
            flag: flag_glyph(&code),
            code,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// 所属语言代码
    pub fn language(&self) -> &str {
        self.code
            .split_once('-')
            .map(|(lang, _)| lang)
            .unwrap_or(&self.code)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }
}
