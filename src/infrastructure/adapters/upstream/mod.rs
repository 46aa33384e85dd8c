//! Upstream Adapter - relay 转发目标

mod elevenlabs_client;

pub use elevenlabs_client::*;
