//! Errors surfaced by effect drawing and preset loading.

use thiserror::Error;

/// Errors that can occur while drawing effects or loading their configuration.
#[derive(Error, Debug)]
pub enum FxError {
    /// The drawing backend rejected a call (e.g. a detached canvas or a bad image).
    #[error("surface error: {0}")]
    Surface(String),

    /// A preset document could not be parsed.
    #[error("invalid effect config: {0}")]
    Config(#[from] serde_json::Error),

    /// A preset name was requested that the preset table does not contain.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

impl FxError {
    /// Wrap any displayable backend error as a surface error.
    pub fn surface(err: impl std::fmt::Display) -> Self {
        FxError::Surface(err.to_string())
    }
}
