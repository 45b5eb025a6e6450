//! Data models

pub mod prediction;
pub mod weight;

pub use prediction::*;
pub use weight::*;
