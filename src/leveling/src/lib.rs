//! Level curves for player and town progression.
//!
//! A [`LevelCurve`] is a monotonic step function from accumulated XP to a
//! `(level, progress-within-level)` pair. The player and town curves share
//! the same algorithm and differ only in their tables, which are
//! configuration: built-in defaults live in [`tables`] and external tables
//! load through [`LevelCurve::from_json`].

pub mod curve;
pub mod tables;

pub use curve::{CurveError, CurveKind, LevelCurve, LevelDefinition, LevelInfo, MAX_LEVEL_XP_SPAN};
pub use tables::{BuiltinLevels, player_levels, town_levels};

use error::ProgressionError;

/// Read-only source of level tables, one per curve kind.
pub trait LevelDefinitionSource: Send + Sync {
    fn level_definitions(&self, kind: CurveKind) -> Result<Vec<LevelDefinition>, ProgressionError>;
}
