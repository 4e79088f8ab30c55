use thiserror::Error;

/// Raised when a grid or body cannot be set up from the given parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
