//! Application error types.

use crate::config::ConfigError;

/// Anything that can stop the frontend. The simulation itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
