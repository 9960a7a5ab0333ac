//! Tiered achievements with one-time XP claims.
//!
//! Evaluation derives a `Locked | Reached | Claimed` state for every
//! `(entity, tier)` pair from current stats and the persisted unlocked rows.
//! [`engine::AchievementEngine::claim`] performs the single one-directional
//! transition that awards XP, backed by the store's conditional write so a
//! racing duplicate can never double-award.

pub mod definition;
pub mod engine;
pub mod state;


pub use definition::{
    AchievementDefinition, AchievementDefinitionSource, AchievementTier, BuiltinAchievements,
    definitions_from_json, find_tier, nordics_achievements,
};
pub use engine::{AchievementEngine, Actor, ClaimReceipt, ClaimableTier, Role};
pub use state::TierState;
