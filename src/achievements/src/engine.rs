//! Evaluation and claiming.

use crate::definition::{AchievementDefinition, AchievementTier, find_tier};
use crate::state::TierState;
use error::ProgressionError;
use leveling::{CurveKind, LevelCurve, LevelInfo};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use store::{EntityId, ProgressionStore, StatMap, StatsSource};
use tracing::{debug, info, warn};

/// Evaluation result for one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimableTier {
    pub achievement_id: String,
    pub tier_id: String,
    pub tier_number: u32,
    pub current_value: f64,
    pub threshold: f64,
    pub state: TierState,
    pub claimable: bool,
}

/// Result of a successful claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    pub achievement_name: String,
    pub tier_name: String,
    pub xp_awarded: u32,
    pub new_total_xp: u32,
    pub new_level: u32,
    pub level_info: LevelInfo,
    /// Set when an admin claimed on the entity's behalf.
    pub claimed_by: Option<String>,
}

/// Caller identity for the admin claim path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Member,
    Moderator,
    Admin,
}

impl Role {
    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Moderator | Role::Admin)
    }
}

/// Evaluates stats against tiered thresholds and performs claim transitions.
///
/// The engine holds the immutable definition set and both level curves; all
/// mutable state lives behind the injected [`ProgressionStore`]. Claiming is
/// safe under concurrent duplicate requests because the store's conditional
/// write admits exactly one winner per `(entity, tier)`.
pub struct AchievementEngine {
    definitions: Vec<AchievementDefinition>,
    player_curve: LevelCurve,
    town_curve: LevelCurve,
    stats: Arc<dyn StatsSource>,
    store: Arc<dyn ProgressionStore>,
}

impl AchievementEngine {
    pub fn new(
        definitions: Vec<AchievementDefinition>,
        player_curve: LevelCurve,
        town_curve: LevelCurve,
        stats: Arc<dyn StatsSource>,
        store: Arc<dyn ProgressionStore>,
    ) -> Result<Self, ProgressionError> {
        for definition in &definitions {
            definition.validate()?;
        }
        Ok(Self {
            definitions,
            player_curve,
            town_curve,
            stats,
            store,
        })
    }

    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    pub fn curve(&self, kind: CurveKind) -> &LevelCurve {
        match kind {
            CurveKind::Player => &self.player_curve,
            CurveKind::Town => &self.town_curve,
        }
    }

    fn curve_for(&self, entity: &EntityId) -> &LevelCurve {
        self.curve(entity.curve_kind())
    }

    /// Level info for the entity's current persisted XP total.
    pub fn level_of(&self, entity: &EntityId) -> Result<LevelInfo, ProgressionError> {
        let total = self.store.total_xp(entity)?;
        Ok(self.curve_for(entity).calculate(total as f64))
    }

    /// Evaluate every tier against the entity's current stats.
    pub fn evaluate_claimable(
        &self,
        entity: &EntityId,
    ) -> Result<Vec<ClaimableTier>, ProgressionError> {
        let stats = self.stats.stats(entity)?;
        self.evaluate_with_stats(entity, &stats)
    }

    /// Evaluation with a pre-fetched stat map.
    ///
    /// Records a reached-unclaimed row for every tier whose threshold is met,
    /// so `Locked → Reached` is persisted by evaluation, not by the user.
    /// Claiming is independent per tier: a lower unclaimed tier never blocks
    /// a higher one, since thresholds are cumulative stat values.
    pub fn evaluate_with_stats(
        &self,
        entity: &EntityId,
        stats: &StatMap,
    ) -> Result<Vec<ClaimableTier>, ProgressionError> {
        let mut out = Vec::new();
        for definition in &self.definitions {
            let current = stats.value(&definition.stat);
            for tier in &definition.tiers {
                let row = self.store.find_unlocked(entity, &tier.id)?;
                let state = TierState::derive(current, tier.threshold, row.as_ref());
                if state == TierState::Reached && row.is_none() {
                    self.store.mark_reached(entity, &tier.id)?;
                }
                out.push(ClaimableTier {
                    achievement_id: definition.id.clone(),
                    tier_id: tier.id.clone(),
                    tier_number: tier.tier_number,
                    current_value: current,
                    threshold: tier.threshold,
                    state,
                    claimable: state == TierState::Reached,
                });
            }
        }
        debug!(entity = %entity, tiers = out.len(), "evaluated achievement tiers");
        Ok(out)
    }

    /// Highest tier of a definition whose threshold the stats meet, for
    /// display purposes.
    pub fn highest_reached<'a>(
        &self,
        definition: &'a AchievementDefinition,
        stats: &StatMap,
    ) -> Option<&'a AchievementTier> {
        let current = stats.value(&definition.stat);
        definition
            .tiers
            .iter()
            .rev()
            .find(|tier| current >= tier.threshold)
    }

    /// Claim a reached tier, awarding its points exactly once.
    pub fn claim(
        &self,
        entity: &EntityId,
        tier_id: &str,
    ) -> Result<ClaimReceipt, ProgressionError> {
        self.claim_inner(entity, tier_id, None)
    }

    /// Claim on the entity's behalf. Requires an elevated role; the actor is
    /// recorded on the persisted row for audit.
    pub fn claim_as_admin(
        &self,
        actor: &Actor,
        entity: &EntityId,
        tier_id: &str,
    ) -> Result<ClaimReceipt, ProgressionError> {
        if !actor.role.is_elevated() {
            warn!(actor = %actor.id, entity = %entity, tier = tier_id, "unauthorized admin claim attempt");
            return Err(ProgressionError::Unauthorized);
        }
        let receipt = self.claim_inner(entity, tier_id, Some(actor.id.as_str()))?;
        info!(actor = %actor.id, entity = %entity, tier = tier_id, "admin claim recorded");
        Ok(receipt)
    }

    fn claim_inner(
        &self,
        entity: &EntityId,
        tier_id: &str,
        claimed_by: Option<&str>,
    ) -> Result<ClaimReceipt, ProgressionError> {
        let (definition, tier) = find_tier(&self.definitions, tier_id)
            .ok_or_else(|| ProgressionError::NotFound(format!("tier {tier_id}")))?;

        let stats = self.stats.stats(entity)?;
        let current = stats.value(&definition.stat);
        if current < tier.threshold {
            return Err(ProgressionError::ThresholdNotMet {
                current,
                required: tier.threshold,
            });
        }

        let write = self
            .store
            .claim_tier_atomic(entity, tier_id, tier.points, claimed_by)?;
        if write.already_claimed {
            return Err(ProgressionError::AlreadyClaimed);
        }

        let level_info = self.curve_for(entity).calculate(write.new_total_xp as f64);
        info!(
            entity = %entity,
            tier = tier_id,
            xp = tier.points,
            level = level_info.level,
            "achievement tier claimed"
        );
        Ok(ClaimReceipt {
            achievement_name: definition.name.clone(),
            tier_name: tier.name.clone(),
            xp_awarded: tier.points,
            new_total_xp: write.new_total_xp,
            new_level: level_info.level,
            level_info,
            claimed_by: claimed_by.map(str::to_owned),
        })
    }
}
