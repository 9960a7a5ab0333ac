//! Built-in level tables.
//!
//! Thresholds are configuration, not algorithm: the curve logic never
//! assumes anything about table length or spacing beyond the monotonicity
//! invariants enforced at construction.

use crate::curve::{CurveKind, LevelDefinition};
use crate::LevelDefinitionSource;
use error::ProgressionError;

/// The 15-level player table. Floors run 0 through 40,000 with superlinear
/// spacing; the level 1 → 2 band is exactly 100 XP.
pub fn player_levels() -> Vec<LevelDefinition> {
    vec![
        LevelDefinition::new(1, 0, "Newcomer", "Fresh off the boat", "#9ca3af"),
        LevelDefinition::new(2, 100, "Wanderer", "Found the spawn gates", "#a3a3a3"),
        LevelDefinition::new(3, 250, "Settler", "Laid a first foundation", "#84cc16"),
        LevelDefinition::new(4, 500, "Resident", "Moved into a town", "#65a30d"),
        LevelDefinition::new(5, 850, "Citizen", "A familiar face around town", "#22c55e"),
        LevelDefinition::new(6, 1_300, "Craftsman", "Known for good work", "#14b8a6"),
        LevelDefinition::new(7, 2_000, "Merchant", "Runs a stall on the market", "#06b6d4"),
        LevelDefinition::new(8, 3_000, "Adventurer", "Seen beyond the borders", "#0ea5e9"),
        LevelDefinition::new(9, 4_500, "Veteran", "Survived a few wars", "#3b82f6"),
        LevelDefinition::new(10, 6_500, "Elder", "Voice in the town council", "#6366f1"),
        LevelDefinition::new(11, 9_000, "Hero", "Songs are sung already", "#8b5cf6"),
        LevelDefinition::new(12, 12_500, "Champion", "Carried a nation's banner", "#a855f7"),
        LevelDefinition::new(13, 17_500, "Legend", "Statues in two capitals", "#d946ef"),
        LevelDefinition::new(14, 25_000, "Mythic", "Spoken of in whispers", "#ec4899"),
        LevelDefinition::new(15, 40_000, "Immortal", "Part of the server itself", "#f59e0b"),
    ]
}

/// The default town table. Towns grow slower and cap lower than players.
pub fn town_levels() -> Vec<LevelDefinition> {
    vec![
        LevelDefinition::new(1, 0, "Camp", "A few tents and a fire", "#9ca3af"),
        LevelDefinition::new(2, 500, "Hamlet", "First permanent houses", "#84cc16"),
        LevelDefinition::new(3, 1_500, "Village", "A market square forms", "#22c55e"),
        LevelDefinition::new(4, 3_500, "Town", "Walls and a town hall", "#14b8a6"),
        LevelDefinition::new(5, 7_000, "Large Town", "Districts and guilds", "#06b6d4"),
        LevelDefinition::new(6, 12_500, "City", "A regional trade hub", "#3b82f6"),
        LevelDefinition::new(7, 20_000, "Large City", "Known across nations", "#6366f1"),
        LevelDefinition::new(8, 32_000, "Metropolis", "The skyline never sleeps", "#8b5cf6"),
        LevelDefinition::new(9, 50_000, "Capital", "Seat of a nation", "#d946ef"),
        LevelDefinition::new(10, 75_000, "Wonder", "A landmark of the world", "#f59e0b"),
    ]
}

/// Definition source backed by the built-in tables.
pub struct BuiltinLevels;

impl LevelDefinitionSource for BuiltinLevels {
    fn level_definitions(&self, kind: CurveKind) -> Result<Vec<LevelDefinition>, ProgressionError> {
        Ok(match kind {
            CurveKind::Player => player_levels(),
            CurveKind::Town => town_levels(),
        })
    }
}
