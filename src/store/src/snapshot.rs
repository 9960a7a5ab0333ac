//! Versioned on-disk snapshot of the in-memory store.

use crate::memory::{MemoryStore, State};
use crate::stats::StatMap;
use crate::{EntityId, UnlockedAchievement};
use anyhow::Context;
use bincode::{Decode, Encode, config};
use error::ProgressionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const SNAPSHOT_VERSION: u32 = 1;

/// Serializable image of a [`MemoryStore`].
#[derive(Debug, Encode, Decode, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Version for forward compatibility.
    pub version: u32,
    pub xp: HashMap<EntityId, u32>,
    pub unlocked: Vec<(EntityId, UnlockedAchievement)>,
    pub stats: HashMap<EntityId, StatMap>,
}

impl StoreSnapshot {
    pub fn save_to(&self, path: &Path) -> Result<(), ProgressionError> {
        let bytes = bincode::encode_to_vec(self, config::standard())?;
        fs::write(path, bytes)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self, ProgressionError> {
        let bytes = fs::read(path)
            .with_context(|| format!("reading snapshot from {}", path.display()))?;
        let (snapshot, _): (StoreSnapshot, _) =
            bincode::decode_from_slice(&bytes, config::standard())?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ProgressionError::InvalidInput(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }
}

impl MemoryStore {
    /// Capture the current state as a snapshot.
    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.lock();
        StoreSnapshot {
            version: SNAPSHOT_VERSION,
            xp: state.xp.clone(),
            unlocked: state
                .unlocked
                .iter()
                .map(|((entity, _), row)| (entity.clone(), row.clone()))
                .collect(),
            stats: state.stats.clone(),
        }
    }

    /// Rebuild a store from a snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut unlocked = HashMap::new();
        for (entity, row) in snapshot.unlocked {
            unlocked.insert((entity, row.tier_id.clone()), row);
        }
        Self::from_state(State {
            xp: snapshot.xp,
            unlocked,
            stats: snapshot.stats,
        })
    }
}
