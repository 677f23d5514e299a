//! Error types for the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by configuration loading and page rendering.
///
/// Failures of page content producers are not represented here: they are
/// returned to the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
