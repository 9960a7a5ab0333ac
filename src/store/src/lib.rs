//! Persistence boundary for the progression core.
//!
//! The engine only ever talks to the traits defined here. [`MemoryStore`]
//! is the reference implementation used by tests, demos and single-process
//! deployments; a production deployment implements the same traits against
//! its database.

pub mod cache;
pub mod memory;
pub mod snapshot;
pub mod stats;

pub use cache::CachedStatsSource;
pub use memory::MemoryStore;
pub use snapshot::StoreSnapshot;
pub use stats::StatMap;

use bincode::{Decode, Encode};
use error::ProgressionError;
use leveling::CurveKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// Identity of the entity that owns XP and achievements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum EntityId {
    Player(String),
    Town(String),
}

impl EntityId {
    pub fn player(name: impl Into<String>) -> Self {
        EntityId::Player(name.into())
    }

    pub fn town(name: impl Into<String>) -> Self {
        EntityId::Town(name.into())
    }

    /// Which level curve applies to this entity.
    pub fn curve_kind(&self) -> CurveKind {
        match self {
            EntityId::Player(_) => CurveKind::Player,
            EntityId::Town(_) => CurveKind::Town,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EntityId::Player(name) | EntityId::Town(name) => name,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Player(name) => write!(f, "player:{name}"),
            EntityId::Town(name) => write!(f, "town:{name}"),
        }
    }
}

/// Persisted record for one `(entity, tier)` pair.
///
/// A row appears the moment the tier is reached and is never deleted.
/// `is_claimed` flips to true exactly once; the row never reverts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct UnlockedAchievement {
    pub tier_id: String,
    pub unlocked_at: SystemTime,
    pub claimed_at: Option<SystemTime>,
    pub is_claimed: bool,
    /// Admin who performed the claim on the entity's behalf, if any.
    pub claimed_by: Option<String>,
}

impl UnlockedAchievement {
    pub fn reached(tier_id: impl Into<String>) -> Self {
        Self {
            tier_id: tier_id.into(),
            unlocked_at: SystemTime::now(),
            claimed_at: None,
            is_claimed: false,
            claimed_by: None,
        }
    }
}

/// Outcome of the conditional claim write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimWrite {
    pub already_claimed: bool,
    pub new_total_xp: u32,
}

/// Read-only source of raw entity statistics.
pub trait StatsSource: Send + Sync {
    fn stats(&self, entity: &EntityId) -> Result<StatMap, ProgressionError>;
}

/// Achievement and XP persistence.
///
/// Every method is a single atomic step against the backing store.
/// `claim_tier_atomic` is the conditional write that serializes racing
/// claims on the same `(entity, tier)`: exactly one caller observes
/// `already_claimed == false`.
pub trait ProgressionStore: Send + Sync {
    fn find_unlocked(
        &self,
        entity: &EntityId,
        tier_id: &str,
    ) -> Result<Option<UnlockedAchievement>, ProgressionError>;

    /// Upsert the reached-unclaimed row. Idempotent, and never downgrades a
    /// claimed row.
    fn mark_reached(&self, entity: &EntityId, tier_id: &str) -> Result<(), ProgressionError>;

    /// Mark the row claimed and award `points` in one conditional write.
    fn claim_tier_atomic(
        &self,
        entity: &EntityId,
        tier_id: &str,
        points: u32,
        claimed_by: Option<&str>,
    ) -> Result<ClaimWrite, ProgressionError>;

    /// Atomic XP increment; returns the new total.
    fn add_xp(&self, entity: &EntityId, amount: u32) -> Result<u32, ProgressionError>;

    fn total_xp(&self, entity: &EntityId) -> Result<u32, ProgressionError>;
}
