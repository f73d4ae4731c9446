//! Static configuration supplied to the engine at construction
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::achievements::{self, Achievement};
use crate::levels::{self, LevelDefinition};
use crate::shop::{self, ItemEffect, ShopItem};

/// Complete static configuration for one game: level plan, shop catalog,
/// and achievement catalog. The engine takes per-session deep copies;
/// this template is never mutated by play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub levels: Vec<LevelDefinition>,
    #[serde(default)]
    pub shop: Vec<ShopItem>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: levels::default_levels(),
            shop: shop::default_items(),
            achievements: achievements::default_achievements(),
        }
    }
}

impl GameConfig {
    /// Load a configuration from JSON, e.g. an alternative balance file.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid
    /// configuration shape. Semantic checks live in [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate configuration invariants. Malformed static configuration is
    /// the only true fault in this system and fails fast at construction
    /// time instead of surfacing as a gameplay message.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any catalog entry violates the documented
    /// bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_levels()?;
        self.validate_shop()?;
        self.validate_achievements()?;
        Ok(())
    }

    fn validate_levels(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::EmptyLevelPlan);
        }
        for (idx, level) in self.levels.iter().enumerate() {
            if level.target_commits == 0 {
                return Err(ConfigError::ZeroTargetCommits { level: idx });
            }
            if level.max_bugs == 0 {
                return Err(ConfigError::ZeroMaxBugs { level: idx });
            }
            if !(0.0..=1.0).contains(&level.bug_chance_base) {
                return Err(ConfigError::BugChanceOutOfRange {
                    level: idx,
                    value: level.bug_chance_base,
                });
            }
            if level.reward < 0 {
                return Err(ConfigError::NegativeReward { level: idx });
            }
        }
        Ok(())
    }

    fn validate_shop(&self) -> Result<(), ConfigError> {
        for (idx, item) in self.shop.iter().enumerate() {
            if self.shop[idx + 1..].iter().any(|other| other.id == item.id) {
                return Err(ConfigError::DuplicateShopItem {
                    id: item.id.clone(),
                });
            }
            if item.cost < 0 {
                return Err(ConfigError::NegativeCost {
                    id: item.id.clone(),
                });
            }
            if item.purchased {
                return Err(ConfigError::PrepurchasedItem {
                    id: item.id.clone(),
                });
            }
            if let ItemEffect::BugChanceReduction(amount) = item.effect {
                if !(0.0..=1.0).contains(&amount) || amount == 0.0 {
                    return Err(ConfigError::BadReduction {
                        id: item.id.clone(),
                        value: amount,
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_achievements(&self) -> Result<(), ConfigError> {
        for (idx, achievement) in self.achievements.iter().enumerate() {
            if self.achievements[idx + 1..]
                .iter()
                .any(|other| other.id == achievement.id)
            {
                return Err(ConfigError::DuplicateAchievement {
                    id: achievement.id.clone(),
                });
            }
            if achievement.unlocked {
                return Err(ConfigError::PreunlockedAchievement {
                    id: achievement.id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Construction-time configuration faults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("level plan is empty")]
    EmptyLevelPlan,
    #[error("level {level} target_commits must be at least 1")]
    ZeroTargetCommits { level: usize },
    #[error("level {level} max_bugs must be at least 1")]
    ZeroMaxBugs { level: usize },
    #[error("level {level} bug_chance_base must be between 0.00 and 1.00 (got {value:.2})")]
    BugChanceOutOfRange { level: usize, value: f32 },
    #[error("level {level} reward must not be negative")]
    NegativeReward { level: usize },
    #[error("duplicate shop item id {id}")]
    DuplicateShopItem { id: String },
    #[error("shop item {id} has a negative cost")]
    NegativeCost { id: String },
    #[error("shop item {id} is flagged purchased in the static catalog")]
    PrepurchasedItem { id: String },
    #[error("shop item {id} bug chance reduction must be within (0.00, 1.00] (got {value:.2})")]
    BadReduction { id: String, value: f32 },
    #[error("duplicate achievement id {id}")]
    DuplicateAchievement { id: String },
    #[error("achievement {id} is flagged unlocked in the static catalog")]
    PreunlockedAchievement { id: String },
}
