//! Catalog Queries - 语言 / 口音发现

/// 发现所有存在音色的语言
#[derive(Debug, Clone)]
pub struct DiscoverLanguages;

/// 发现某语言下存在音色的口音
#[derive(Debug, Clone)]
pub struct DiscoverAccents {
    pub language: String,
}
