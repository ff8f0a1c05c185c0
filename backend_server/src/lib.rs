pub mod domain;
pub mod frameworks;
pub mod interface_adapters;

pub use frameworks::config::{ConfigError, Settings};
pub use frameworks::server::{run, run_with_config};
pub use interface_adapters::routes::app;
