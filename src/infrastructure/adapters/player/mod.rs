//! Player Adapter - 试听媒体

mod media_element_player;

pub use media_element_player::{MediaElement, MediaElementPlayer};
