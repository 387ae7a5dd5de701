//! Error types for BhramanNav

use thiserror::Error;

/// BhramanNav error type
#[derive(Error, Debug)]
pub enum BhramanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Maze error: {0}")]
    Maze(String),
}

impl From<toml::de::Error> for BhramanError {
    fn from(e: toml::de::Error) -> Self {
        BhramanError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BhramanError>;
