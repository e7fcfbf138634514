//! Tunable rules parameters.
//! This module exists to keep every balance constant in one serde-loadable struct.
//! It does not own content tables (monster and relic definitions live in `content`).

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{MonsterTier, ObjectKind, RegionId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectCounts {
    pub monster: usize,
    pub relic_chest: usize,
    pub bonfire: usize,
}

impl ObjectCounts {
    /// Counts in placement order.
    pub fn ordered(&self) -> [(ObjectKind, usize); 3] {
        [
            (ObjectKind::Monster, self.monster),
            (ObjectKind::RelicChest, self.relic_chest),
            (ObjectKind::Bonfire, self.bonfire),
        ]
    }
}

impl Default for ObjectCounts {
    fn default() -> Self {
        Self { monster: 5, relic_chest: 2, bonfire: 1 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerBase {
    pub max_hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spd: i32,
}

impl Default for PlayerBase {
    fn default() -> Self {
        Self { max_hp: 20, atk: 5, def: 1, spd: 5 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub region: RegionId,
    pub grid_size: usize,
    pub object_counts: ObjectCounts,
    /// Floors at which the monster tier steps up, ascending.
    pub tier_thresholds: [u32; 3],
    pub ending_floor: u32,
    pub inventory_capacity: usize,
    pub player: PlayerBase,
    /// Extra HP restored by a bonfire on top of half the player's max HP.
    pub bonfire_bonus: i32,
    /// Chance in percent that an equal-speed neighbour ambushes.
    pub ambush_tie_percent: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            region: RegionId::RuinedField,
            grid_size: 7,
            object_counts: ObjectCounts::default(),
            tier_thresholds: [10, 25, 35],
            ending_floor: 50,
            inventory_capacity: 10,
            player: PlayerBase::default(),
            bonfire_bonus: 2,
            ambush_tie_percent: 50,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "failed to read config: {error}"),
            Self::Parse(error) => write!(f, "failed to parse config: {error}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be positive".to_string()));
        }
        if !self.tier_thresholds.is_sorted() {
            return Err(ConfigError::Invalid("tier_thresholds must be ascending".to_string()));
        }
        if self.ending_floor < 2 {
            return Err(ConfigError::Invalid("ending_floor must be at least 2".to_string()));
        }
        if self.inventory_capacity == 0 {
            return Err(ConfigError::Invalid("inventory_capacity must be positive".to_string()));
        }
        if self.player.max_hp <= 0 {
            return Err(ConfigError::Invalid("player.max_hp must be positive".to_string()));
        }
        if self.ambush_tie_percent > 100 {
            return Err(ConfigError::Invalid("ambush_tie_percent must be 0..=100".to_string()));
        }
        Ok(())
    }

    /// Tier in effect on `floor`: one step per threshold already reached.
    pub fn tier_for_floor(&self, floor: u32) -> MonsterTier {
        let steps = self.tier_thresholds.iter().filter(|&&threshold| floor >= threshold).count();
        MonsterTier::from_steps(steps)
    }
}
