//! Query Handlers

mod discovery_handlers;
mod voice_handlers;

pub use discovery_handlers::{
    DiscoverAccentsHandler, DiscoverLanguagesHandler, DiscoveryConfig, DEFAULT_LANGUAGES,
    DEFAULT_REGIONS,
};
pub use voice_handlers::{LoadVoicesHandler, DEFAULT_PAGE_SIZE};
