//! Claim state machine per `(entity, tier)`.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use store::UnlockedAchievement;

/// `Locked → Reached → Claimed`.
///
/// Reached is a computed predicate, re-derived from current stats on every
/// evaluation. Claimed is the only persisted transition; it is
/// one-directional and terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum TierState {
    Locked,
    Reached,
    Claimed,
}

impl TierState {
    /// Derive the state from the current stat value and the persisted row.
    ///
    /// A claimed row wins even if the stat has since dropped below the
    /// threshold: claims are permanent.
    pub fn derive(current_value: f64, threshold: f64, row: Option<&UnlockedAchievement>) -> Self {
        if row.is_some_and(|r| r.is_claimed) {
            TierState::Claimed
        } else if current_value >= threshold {
            TierState::Reached
        } else {
            TierState::Locked
        }
    }
}
