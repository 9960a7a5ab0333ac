//! Error taxonomy for the progression core.
//!
//! Every failure a caller can observe is a variant of [`ProgressionError`].
//! Benign outcomes such as re-claiming an already-claimed tier are still
//! variants so request handlers can branch on them, but [`user_message`]
//! maps them to neutral wording instead of an error banner.

use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressionError {
    /// The tier was claimed earlier; no XP was awarded again.
    #[error("achievement tier already claimed")]
    AlreadyClaimed,

    /// The entity's stat value has not reached the tier threshold.
    #[error("stat value {current} is below the required threshold {required}")]
    ThresholdNotMet { current: f64, required: f64 },

    /// Unknown entity, achievement or tier.
    #[error("not found: {0}")]
    NotFound(String),

    /// Admin-only operation attempted without an elevated role.
    #[error("caller does not hold an elevated role")]
    Unauthorized,

    /// The underlying store was unavailable. No mutation occurred and the
    /// same call can be retried as-is.
    #[error("store unavailable: {0}")]
    TransientStore(#[from] anyhow::Error),

    /// Malformed definitions or stat data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Snapshot data could not be decoded.
    #[error("corrupted snapshot data")]
    CorruptedSnapshot,
}

impl ProgressionError {
    /// Benign no-ops that must not be presented as failures.
    pub fn is_benign(&self) -> bool {
        matches!(self, ProgressionError::AlreadyClaimed)
    }

    /// Whether retrying the same call can succeed without any other change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProgressionError::TransientStore(_))
    }
}

impl From<DecodeError> for ProgressionError {
    fn from(_: DecodeError) -> Self {
        // A decode failure on snapshot data means the bytes themselves are bad
        ProgressionError::CorruptedSnapshot
    }
}

impl From<EncodeError> for ProgressionError {
    fn from(err: EncodeError) -> Self {
        ProgressionError::InvalidInput(err.to_string())
    }
}

/// Convert a progression error into the message shown to the player.
pub fn user_message(error: &ProgressionError) -> String {
    match error {
        ProgressionError::AlreadyClaimed => "You already claimed this achievement.".to_string(),
        ProgressionError::ThresholdNotMet { current, required } => {
            format!("Not there yet: {current} of {required} required.")
        }
        ProgressionError::Unauthorized => "You do not have permission to do that.".to_string(),
        ProgressionError::TransientStore(_) => {
            "The server is temporarily unavailable. Please try again.".to_string()
        }
        ProgressionError::NotFound(what) => format!("Could not find {what}."),
        _ => error.to_string(),
    }
}
