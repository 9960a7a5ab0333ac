//! Achievement definitions and tiers.

use bincode::{Decode, Encode};
use error::ProgressionError;
use serde::{Deserialize, Serialize};

/// One threshold step within an achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct AchievementTier {
    /// Globally unique, `<achievement>_<tier_number>` for built-in content.
    pub id: String,
    pub tier_number: u32,
    pub threshold: f64,
    /// XP awarded when this tier is claimed.
    pub points: u32,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// A tiered achievement keyed on one stat path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct AchievementDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Dot path into the entity's stat map, e.g. `custom.play_time`.
    pub stat: String,
    pub color: String,
    pub tiers: Vec<AchievementTier>,
}

impl AchievementDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        stat: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            stat: stat.into(),
            color: color.into(),
            tiers: Vec::new(),
        }
    }

    pub fn with_tier(
        mut self,
        tier_number: u32,
        threshold: f64,
        points: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let id = format!("{}_{}", self.id, tier_number);
        self.tiers.push(AchievementTier {
            id,
            tier_number,
            threshold,
            points,
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        });
        self
    }

    /// Tiers must strictly increase in both number and threshold.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if self.tiers.is_empty() {
            return Err(ProgressionError::InvalidInput(format!(
                "achievement {} has no tiers",
                self.id
            )));
        }
        for pair in self.tiers.windows(2) {
            if pair[1].tier_number <= pair[0].tier_number {
                return Err(ProgressionError::InvalidInput(format!(
                    "achievement {}: tier numbers must be strictly increasing",
                    self.id
                )));
            }
            if pair[1].threshold <= pair[0].threshold {
                return Err(ProgressionError::InvalidInput(format!(
                    "achievement {}: thresholds must be strictly increasing",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

/// Resolve a tier id across a definition set.
pub fn find_tier<'a>(
    definitions: &'a [AchievementDefinition],
    tier_id: &str,
) -> Option<(&'a AchievementDefinition, &'a AchievementTier)> {
    definitions.iter().find_map(|def| {
        def.tiers
            .iter()
            .find(|tier| tier.id == tier_id)
            .map(|tier| (def, tier))
    })
}

/// Read-only source of achievement definitions, loaded once at startup.
pub trait AchievementDefinitionSource: Send + Sync {
    fn achievement_definitions(&self) -> Result<Vec<AchievementDefinition>, ProgressionError>;
}

/// Load and validate a definition set from JSON.
pub fn definitions_from_json(json: &str) -> Result<Vec<AchievementDefinition>, ProgressionError> {
    let definitions: Vec<AchievementDefinition> =
        serde_json::from_str(json).map_err(|e| ProgressionError::InvalidInput(e.to_string()))?;
    for definition in &definitions {
        definition.validate()?;
    }
    Ok(definitions)
}

/// The default Nordics achievement set.
///
/// Stat paths follow the Minecraft stats namespace; play time is measured
/// in ticks (72,000 ticks per hour), distance in centimetres.
pub fn nordics_achievements() -> Vec<AchievementDefinition> {
    vec![
        AchievementDefinition::new(
            "playtime",
            "Dedicated",
            "Time spent on the server",
            "custom.play_time",
            "#60a5fa",
        )
        .with_tier(1, 72_000.0, 50, "Regular", "Play for 1 hour", "clock_1")
        .with_tier(2, 720_000.0, 150, "Devoted", "Play for 10 hours", "clock_2")
        .with_tier(3, 7_200_000.0, 500, "No Life", "Play for 100 hours", "clock_3"),
        AchievementDefinition::new(
            "mining",
            "Miner",
            "Blocks mined across all worlds",
            "mined.total",
            "#b45309",
        )
        .with_tier(1, 1_000.0, 50, "Prospector", "Mine 1,000 blocks", "pick_1")
        .with_tier(2, 10_000.0, 150, "Excavator", "Mine 10,000 blocks", "pick_2")
        .with_tier(3, 100_000.0, 500, "Terraformer", "Mine 100,000 blocks", "pick_3"),
        AchievementDefinition::new(
            "combat",
            "Hunter",
            "Mobs and players defeated",
            "killed.total",
            "#dc2626",
        )
        .with_tier(1, 100.0, 50, "Scrapper", "Defeat 100 foes", "sword_1")
        .with_tier(2, 1_000.0, 150, "Warrior", "Defeat 1,000 foes", "sword_2")
        .with_tier(3, 10_000.0, 500, "Slayer", "Defeat 10,000 foes", "sword_3"),
        AchievementDefinition::new(
            "travel",
            "Wayfarer",
            "Distance walked",
            "custom.walk_one_cm",
            "#16a34a",
        )
        .with_tier(1, 1_000_000.0, 50, "Strider", "Walk 10 km", "boot_1")
        .with_tier(2, 10_000_000.0, 150, "Pathfinder", "Walk 100 km", "boot_2")
        .with_tier(3, 100_000_000.0, 500, "Globetrotter", "Walk 1,000 km", "boot_3"),
    ]
}

/// Definition source backed by the built-in set.
pub struct BuiltinAchievements;

impl AchievementDefinitionSource for BuiltinAchievements {
    fn achievement_definitions(&self) -> Result<Vec<AchievementDefinition>, ProgressionError> {
        Ok(nordics_achievements())
    }
}
