//! Startup and configuration errors
//!
//! Gameplay never fails: a lethal collision is the `GameOver` phase, not an
//! error. These variants cover the things that can go wrong before the first
//! frame runs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A DOM hook the HUD depends on is absent from the page
    #[error("required element #{0} not found in the document")]
    MissingElement(String),

    /// An element exists but is not the expected type
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    /// No window/document/2d context available
    #[error("{0} unavailable")]
    ContextUnavailable(&'static str),

    /// An image failed to load or decode
    #[error("failed to load asset {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    /// Tuning JSON could not be parsed
    #[error("invalid tuning: {0}")]
    InvalidTuning(#[from] serde_json::Error),

    /// Tuning parsed but a value would break the simulation
    #[error("tuning field {field} {reason}")]
    TuningOutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
