#![allow(dead_code)]

//! Shared fixtures for the integration suite.

use achievements::{AchievementDefinition, AchievementEngine};
use anyhow::anyhow;
use error::ProgressionError;
use leveling::LevelCurve;
use std::sync::Arc;
use store::{
    ClaimWrite, EntityId, MemoryStore, ProgressionStore, StatMap, StatsSource,
    UnlockedAchievement,
};

/// Small definition set with known thresholds and points.
pub fn test_definitions() -> Vec<AchievementDefinition> {
    vec![
        AchievementDefinition::new("mining", "Miner", "Blocks mined", "mined.total", "#b45309")
            .with_tier(1, 10.0, 25, "Prospector", "Mine 10 blocks", "pick_1")
            .with_tier(2, 100.0, 75, "Excavator", "Mine 100 blocks", "pick_2")
            .with_tier(3, 1000.0, 200, "Terraformer", "Mine 1,000 blocks", "pick_3"),
        AchievementDefinition::new(
            "playtime",
            "Dedicated",
            "Time played",
            "custom.play_time",
            "#60a5fa",
        )
        .with_tier(1, 100.0, 10, "Regular", "Stick around", "clock_1"),
    ]
}

pub struct Fixture {
    pub engine: Arc<AchievementEngine>,
    pub store: Arc<MemoryStore>,
}

/// Engine over a fresh in-memory store used for both stats and persistence.
pub fn fixture() -> Fixture {
    let store = Arc::new(MemoryStore::new());
    let engine = AchievementEngine::new(
        test_definitions(),
        LevelCurve::player(),
        LevelCurve::town(),
        store.clone(),
        store.clone(),
    )
    .expect("test definitions are valid");
    Fixture {
        engine: Arc::new(engine),
        store,
    }
}

pub fn player(name: &str) -> EntityId {
    EntityId::player(name)
}

/// Store whose every call fails, for exercising the transient-error path.
pub struct FailingStore;

impl ProgressionStore for FailingStore {
    fn find_unlocked(
        &self,
        _entity: &EntityId,
        _tier_id: &str,
    ) -> Result<Option<UnlockedAchievement>, ProgressionError> {
        Err(ProgressionError::TransientStore(anyhow!("store offline")))
    }

    fn mark_reached(&self, _entity: &EntityId, _tier_id: &str) -> Result<(), ProgressionError> {
        Err(ProgressionError::TransientStore(anyhow!("store offline")))
    }

    fn claim_tier_atomic(
        &self,
        _entity: &EntityId,
        _tier_id: &str,
        _points: u32,
        _claimed_by: Option<&str>,
    ) -> Result<ClaimWrite, ProgressionError> {
        Err(ProgressionError::TransientStore(anyhow!("store offline")))
    }

    fn add_xp(&self, _entity: &EntityId, _amount: u32) -> Result<u32, ProgressionError> {
        Err(ProgressionError::TransientStore(anyhow!("store offline")))
    }

    fn total_xp(&self, _entity: &EntityId) -> Result<u32, ProgressionError> {
        Err(ProgressionError::TransientStore(anyhow!("store offline")))
    }
}

impl StatsSource for FailingStore {
    fn stats(&self, _entity: &EntityId) -> Result<StatMap, ProgressionError> {
        Err(ProgressionError::TransientStore(anyhow!("store offline")))
    }
}
