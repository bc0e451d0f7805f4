//! Configuration: file format, defaults and loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, HttpConfig, UiConfig, DEFAULT_ENDPOINT};
