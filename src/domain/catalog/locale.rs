//! Catalog Context - 显示名称与排序
//!
//! 英文显示名称表，覆盖默认探测候选集及常见补充代码；
//! 未收录的代码原样返回。

use std::cmp::Ordering;

/// 语言显示名称（按基础语言代码查找，忽略地区后缀）
pub fn language_display_name(code: &str) -> String {
    let base = code.split('-').next().unwrap_or(code).to_ascii_lowercase();

    let name = match base.as_str() {
        "af" => "Afrikaans",
        "ar" => "Arabic",
        "bg" => "Bulgarian",
        "bn" => "Bangla",
        "ca" => "Catalan",
        "cs" => "Czech",
        "da" => "Danish",
        "de" => "German",
        "el" => "Greek",
        "en" => "English",
        "es" => "Spanish",
        "fa" => "Persian",
        "fi" => "Finnish",
        "fil" => "Filipino",
        "fr" => "French",
        "he" => "Hebrew",
        "hi" => "Hindi",
        "hr" => "Croatian",
        "hu" => "Hungarian",
        "id" => "Indonesian",
        "it" => "Italian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "ms" => "Malay",
        "nl" => "Dutch",
        "no" => "Norwegian",
        "pl" => "Polish",
        "pt" => "Portuguese",
        "ro" => "Romanian",
        "ru" => "Russian",
        "sk" => "Slovak",
        "sv" => "Swedish",
        "ta" => "Tamil",
        "te" => "Telugu",
        "th" => "Thai",
        "tr" => "Turkish",
        "uk" => "Ukrainian",
        "ur" => "Urdu",
        "vi" => "Vietnamese",
        "zh" => "Chinese",
        _ => return code.to_string(),
    };

    name.to_string()
}

/// 地区显示名称（`en-US` -> `United States`）
pub fn region_display_name(code: &str) -> String {
    let region = match code.split('-').nth(1) {
        Some(region) if region.len() == 2 => region.to_ascii_uppercase(),
        _ => return code.to_string(),
    };

    let name = match region.as_str() {
        "AE" => "United Arab Emirates",
        "AR" => "Argentina",
        "AT" => "Austria",
        "AU" => "Australia",
        "BE" => "Belgium",
        "BH" => "Bahrain",
        "BR" => "Brazil",
        "CA" => "Canada",
        "CH" => "Switzerland",
        "CN" => "China",
        "DE" => "Germany",
        "DZ" => "Algeria",
        "EG" => "Egypt",
        "ES" => "Spain",
        "FR" => "France",
        "GB" => "United Kingdom",
        "HK" => "Hong Kong",
        "IE" => "Ireland",
        "IN" => "India",
        "IQ" => "Iraq",
        "JO" => "Jordan",
        "KW" => "Kuwait",
        "MA" => "Morocco",
        "MX" => "Mexico",
        "NZ" => "New Zealand",
        "PT" => "Portugal",
        "SA" => "Saudi Arabia",
        "TW" => "Taiwan",
        "US" => "United States",
        "ZA" => "South Africa",
        _ => return code.to_string(),
    };

    name.to_string()
}

/// 本地化比较：先按折叠后的字母（忽略大小写和变音符）比较，再按原文打破平局
pub fn collate(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.chars().map(fold_char).collect::<String>();
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold_char(c: char) -> char {
    match c.to_lowercase().next().unwrap_or(c) {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        lower => lower,
    }
}
