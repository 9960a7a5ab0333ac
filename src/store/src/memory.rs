//! In-memory reference store.

use crate::stats::StatMap;
use crate::{ClaimWrite, EntityId, ProgressionStore, StatsSource, UnlockedAchievement};
use error::ProgressionError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

/// In-memory store for tests, demos and single-process deployments.
///
/// All state lives behind one mutex, so every trait method is a single
/// atomic step. The claimed-flag check inside [`claim_tier_atomic`] is what
/// serializes racing claims on the same `(entity, tier)`.
///
/// [`claim_tier_atomic`]: ProgressionStore::claim_tier_atomic
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<State>,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) xp: HashMap<EntityId, u32>,
    pub(crate) unlocked: HashMap<(EntityId, String), UnlockedAchievement>,
    pub(crate) stats: HashMap<EntityId, StatMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or overwrite one stat counter. Stand-in for the ingestion
    /// pipeline that populates counters in production.
    pub fn set_stat(&self, entity: &EntityId, path: impl Into<String>, value: f64) {
        let mut state = self.lock();
        state.stats.entry(entity.clone()).or_default().set(path, value);
    }

    pub fn set_total_xp(&self, entity: &EntityId, total: u32) {
        self.lock().xp.insert(entity.clone(), total);
    }

    pub(crate) fn from_state(state: State) -> Self {
        Self {
            inner: Mutex::new(state),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock still holds consistent state: every mutation
        // completes before the guard drops
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ProgressionStore for MemoryStore {
    fn find_unlocked(
        &self,
        entity: &EntityId,
        tier_id: &str,
    ) -> Result<Option<UnlockedAchievement>, ProgressionError> {
        let state = self.lock();
        Ok(state.unlocked.get(&(entity.clone(), tier_id.to_string())).cloned())
    }

    fn mark_reached(&self, entity: &EntityId, tier_id: &str) -> Result<(), ProgressionError> {
        let mut state = self.lock();
        state
            .unlocked
            .entry((entity.clone(), tier_id.to_string()))
            .or_insert_with(|| UnlockedAchievement::reached(tier_id));
        Ok(())
    }

    fn claim_tier_atomic(
        &self,
        entity: &EntityId,
        tier_id: &str,
        points: u32,
        claimed_by: Option<&str>,
    ) -> Result<ClaimWrite, ProgressionError> {
        let mut guard = self.lock();
        let state = &mut *guard;

        let row = state
            .unlocked
            .entry((entity.clone(), tier_id.to_string()))
            .or_insert_with(|| UnlockedAchievement::reached(tier_id));

        if row.is_claimed {
            let total = state.xp.get(entity).copied().unwrap_or(0);
            return Ok(ClaimWrite {
                already_claimed: true,
                new_total_xp: total,
            });
        }

        row.is_claimed = true;
        row.claimed_at = Some(SystemTime::now());
        row.claimed_by = claimed_by.map(str::to_owned);

        let total = state.xp.entry(entity.clone()).or_insert(0);
        *total = total.saturating_add(points);

        Ok(ClaimWrite {
            already_claimed: false,
            new_total_xp: *total,
        })
    }

    fn add_xp(&self, entity: &EntityId, amount: u32) -> Result<u32, ProgressionError> {
        let mut state = self.lock();
        let total = state.xp.entry(entity.clone()).or_insert(0);
        *total = total.saturating_add(amount);
        Ok(*total)
    }

    fn total_xp(&self, entity: &EntityId) -> Result<u32, ProgressionError> {
        Ok(self.lock().xp.get(entity).copied().unwrap_or(0))
    }
}

impl StatsSource for MemoryStore {
    fn stats(&self, entity: &EntityId) -> Result<StatMap, ProgressionError> {
        Ok(self.lock().stats.get(entity).cloned().unwrap_or_default())
    }
}
