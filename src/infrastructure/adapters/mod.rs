//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod catalog;
pub mod player;
pub mod upstream;

pub use catalog::*;
pub use player::*;
pub use upstream::*;
