pub mod candidate;
pub mod config;
pub mod discover;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod probe;
pub mod render;
pub mod sku;
