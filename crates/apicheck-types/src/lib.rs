pub mod config;
pub mod status;

pub use config::{CheckConfig, ConfigError};
