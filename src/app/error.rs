use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum BgateError {
    #[error("No content found")]
    NoContentFound,

    #[error("Invalid layout: width {width} leaves no room for text with padding {padding}")]
    InvalidLayout { width: usize, padding: usize },

    #[error("Could not determine terminal size: {0}")]
    TerminalQueryFailed(#[source] std::io::Error),

    #[error("Terminal display error: {0}")]
    DisplaySurface(#[source] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, BgateError>;
