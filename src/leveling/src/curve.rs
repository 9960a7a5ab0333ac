//! Level curve calculation.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// XP span reported for the top level band, where no next floor exists.
pub const MAX_LEVEL_XP_SPAN: u32 = 100_000;

/// Which of the two curve instantiations an entity uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum CurveKind {
    Player,
    Town,
}

/// One row of a level table: the cumulative XP floor for a level plus
/// display metadata. The metadata plays no part in the calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct LevelDefinition {
    pub level: u32,
    pub xp_required: u32,
    pub title: String,
    pub description: String,
    pub color: String,
}

impl LevelDefinition {
    pub fn new(
        level: u32,
        xp_required: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            level,
            xp_required,
            title: title.into(),
            description: description.into(),
            color: color.into(),
        }
    }
}

/// Derived level position for one XP total. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct LevelInfo {
    pub level: u32,
    pub total_xp: u32,
    /// `total_xp` minus the floor of the current level.
    pub xp_in_current_level: u32,
    /// Span of the current level band, or [`MAX_LEVEL_XP_SPAN`] at max level.
    pub xp_for_next_level: u32,
    /// Percentage through the current band, clamped to `[0, 100]` and
    /// rounded to two decimals.
    pub progress: f64,
}

/// Rejected level tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("level table is empty")]
    EmptyTable,
    #[error("first level must require 0 XP")]
    NonZeroBase,
    #[error("levels must be strictly increasing (at level {0})")]
    LevelOrder(u32),
    #[error("XP floors must be strictly increasing (at level {0})")]
    XpOrder(u32),
    #[error("failed to parse level table: {0}")]
    Parse(String),
}

/// A validated, immutable level table.
///
/// Construction enforces the invariants the calculation relies on: the table
/// is non-empty, the first floor is 0, and both `level` and `xp_required`
/// are strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct LevelCurve {
    definitions: Vec<LevelDefinition>,
}

impl LevelCurve {
    pub fn new(definitions: Vec<LevelDefinition>) -> Result<Self, CurveError> {
        let Some(first) = definitions.first() else {
            return Err(CurveError::EmptyTable);
        };
        if first.xp_required != 0 {
            return Err(CurveError::NonZeroBase);
        }
        for pair in definitions.windows(2) {
            if pair[1].level <= pair[0].level {
                return Err(CurveError::LevelOrder(pair[1].level));
            }
            if pair[1].xp_required <= pair[0].xp_required {
                return Err(CurveError::XpOrder(pair[1].level));
            }
        }
        Ok(Self { definitions })
    }

    /// The built-in 15-level player curve.
    pub fn player() -> Self {
        Self::new(crate::tables::player_levels()).expect("built-in player table is valid")
    }

    /// The built-in town curve.
    pub fn town() -> Self {
        Self::new(crate::tables::town_levels()).expect("built-in town table is valid")
    }

    /// Load a data-driven table from a JSON array of [`LevelDefinition`]s.
    pub fn from_json(json: &str) -> Result<Self, CurveError> {
        let definitions: Vec<LevelDefinition> =
            serde_json::from_str(json).map_err(|e| CurveError::Parse(e.to_string()))?;
        Self::new(definitions)
    }

    pub fn definitions(&self) -> &[LevelDefinition] {
        &self.definitions
    }

    pub fn max_level(&self) -> u32 {
        // Non-empty by construction
        self.definitions.last().map(|d| d.level).unwrap_or(1)
    }

    pub fn definition(&self, level: u32) -> Option<&LevelDefinition> {
        self.definitions.iter().find(|d| d.level == level)
    }

    /// Map an XP total to its [`LevelInfo`].
    ///
    /// Pure and infallible: negative, NaN and infinite inputs are clamped to
    /// 0 rather than rejected, because this sits on every render path and a
    /// corrupt counter must never take the page down with it.
    pub fn calculate(&self, total_xp: f64) -> LevelInfo {
        let total = if total_xp.is_finite() {
            total_xp.max(0.0) as u32
        } else {
            0
        };

        let index = self
            .definitions
            .iter()
            .rposition(|d| d.xp_required <= total)
            .unwrap_or(0);
        let current = &self.definitions[index];

        let xp_for_next_level = self
            .definitions
            .get(index + 1)
            .map(|next| next.xp_required - current.xp_required)
            .unwrap_or(MAX_LEVEL_XP_SPAN);

        let xp_in_current_level = total.saturating_sub(current.xp_required);
        let raw = xp_in_current_level as f64 / xp_for_next_level as f64 * 100.0;
        let progress = (raw.clamp(0.0, 100.0) * 100.0).round() / 100.0;

        LevelInfo {
            level: current.level,
            total_xp: total,
            xp_in_current_level,
            xp_for_next_level,
            progress,
        }
    }
}
