//! CLI command handlers, one per file.

mod config;
mod normalize;
mod view;

pub use config::run_config;
pub use normalize::run_normalize;
pub use view::run_view;
