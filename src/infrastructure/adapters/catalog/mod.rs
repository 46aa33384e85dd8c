//! Catalog Adapter - 经 relay 访问共享音色库

mod relay_catalog_client;
mod static_catalog;

pub use relay_catalog_client::{RelayCatalogClient, RelayCatalogClientConfig};
pub use static_catalog::StaticVoiceCatalog;
