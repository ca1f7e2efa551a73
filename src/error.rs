/*
 * Error Module
 *
 * Startup failures: unreadable or malformed parameter files, parameter sets
 * the movement rule cannot run with, and a drawing window that cannot be
 * created. Ticks themselves never fail.
 */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid simulation parameters: {0}")]
    InvalidParams(String),

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}

pub type SimResult<T> = Result<T, SimError>;

// Shorthand for validation failures
pub fn invalid(reason: impl Into<String>) -> SimError {
    SimError::InvalidParams(reason.into())
}
