//! In-Memory Implementations
//!
//! 会话级内存实现：发现结果缓存

mod catalog_cache;

pub use catalog_cache::InMemoryCatalogCache;
