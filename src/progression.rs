//! Facade wiring curves, definitions, stats and persistence together.

use achievements::{
    AchievementDefinition, AchievementEngine, Actor, ClaimReceipt, ClaimableTier,
    nordics_achievements,
};
use error::ProgressionError;
use leveling::{CurveKind, LevelCurve, LevelInfo};
use std::sync::Arc;
use store::{EntityId, MemoryStore, ProgressionStore, StatsSource};

/// One assembled progression subsystem for a server process.
///
/// Request handlers call straight into this; everything mutable sits behind
/// the injected store, so the facade itself is freely shareable.
pub struct Progression {
    engine: AchievementEngine,
}

impl Progression {
    /// Assemble from explicit collaborators.
    pub fn new(
        definitions: Vec<AchievementDefinition>,
        player_curve: LevelCurve,
        town_curve: LevelCurve,
        stats: Arc<dyn StatsSource>,
        store: Arc<dyn ProgressionStore>,
    ) -> Result<Self, ProgressionError> {
        Ok(Self {
            engine: AchievementEngine::new(definitions, player_curve, town_curve, stats, store)?,
        })
    }

    /// Built-in content backed by one in-memory store. The store handle is
    /// returned so callers can seed stats and XP.
    pub fn in_memory() -> Result<(Self, Arc<MemoryStore>), ProgressionError> {
        let store = Arc::new(MemoryStore::new());
        let progression = Self::new(
            nordics_achievements(),
            LevelCurve::player(),
            LevelCurve::town(),
            store.clone(),
            store.clone(),
        )?;
        Ok((progression, store))
    }

    pub fn engine(&self) -> &AchievementEngine {
        &self.engine
    }

    /// Level position for an arbitrary XP total on the given curve.
    pub fn level_for_xp(&self, kind: CurveKind, total_xp: f64) -> LevelInfo {
        self.engine.curve(kind).calculate(total_xp)
    }

    /// Level position for the entity's persisted XP total.
    pub fn level_of(&self, entity: &EntityId) -> Result<LevelInfo, ProgressionError> {
        self.engine.level_of(entity)
    }

    pub fn evaluate(&self, entity: &EntityId) -> Result<Vec<ClaimableTier>, ProgressionError> {
        self.engine.evaluate_claimable(entity)
    }

    pub fn claim(
        &self,
        entity: &EntityId,
        tier_id: &str,
    ) -> Result<ClaimReceipt, ProgressionError> {
        self.engine.claim(entity, tier_id)
    }

    pub fn claim_as_admin(
        &self,
        actor: &Actor,
        entity: &EntityId,
        tier_id: &str,
    ) -> Result<ClaimReceipt, ProgressionError> {
        self.engine.claim_as_admin(actor, entity, tier_id)
    }
}
