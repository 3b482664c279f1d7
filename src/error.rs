/// Errors raised at the edges of the crate (config, options, I/O)
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("margin tier must be an integer from 0 to 6, got `{0}`")]
    InvalidMargin(String),

    #[error("unknown {kind} `{value}`")]
    UnknownTag { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
