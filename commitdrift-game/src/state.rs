//! Session state owned by the progression engine
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::achievements::Achievement;
use crate::constants::{BUG_CHANCE_CEIL, BUG_CHANCE_FLOOR, LOG_WINDOW};
use crate::data::{ConfigError, GameConfig};
use crate::levels::LevelDefinition;
use crate::result::Classification;
use crate::shop::ShopItem;

/// Derived view of where a session stands. Both terminal phases collapse
/// onto the one `game_over` flag; the split here is computed, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line in the session journal, mirroring the virtual console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub message: String,
    pub classification: Classification,
}

/// The mutable session, created at start (or reset) and replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Index into the level plan; monotonically non-decreasing.
    pub level: usize,
    /// Working copy of the active level. Target boosts mutate this copy,
    /// never the static catalog.
    pub current_level: LevelDefinition,
    /// Commits accumulated in the current level; resets each level.
    pub commits_done: u32,
    /// Outstanding bugs in the current level; resets each level.
    pub bug_count: u32,
    /// Lifetime fix counter, never reset by level transitions.
    pub fixes_done: u32,
    /// Lifetime commit counter, never reset by level transitions.
    pub total_commits: u32,
    /// Lifetime currency balance.
    pub money: i64,
    /// Effective probability that the next commit introduces a bug.
    pub bug_chance: f32,
    /// Per-session copy of the shop catalog.
    pub shop_items: Vec<ShopItem>,
    /// Per-session copy of the achievement catalog.
    pub achievements: Vec<Achievement>,
    /// Terminal flag; once true, mutating actions are rejected.
    pub game_over: bool,
    /// Rolling journal of emitted messages.
    pub logs: VecDeque<LogLine>,
}

impl GameState {
    /// Build a pristine session from fresh copies of the static catalogs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyLevelPlan` when the configuration carries
    /// no levels.
    pub(crate) fn fresh(config: &GameConfig) -> Result<Self, ConfigError> {
        let current_level = config
            .levels
            .first()
            .cloned()
            .ok_or(ConfigError::EmptyLevelPlan)?;
        let bug_chance = current_level
            .bug_chance_base
            .clamp(BUG_CHANCE_FLOOR, BUG_CHANCE_CEIL);
        Ok(Self {
            level: 0,
            current_level,
            commits_done: 0,
            bug_count: 0,
            fixes_done: 0,
            total_commits: 0,
            money: 0,
            bug_chance,
            shop_items: config.shop.clone(),
            achievements: config.achievements.clone(),
            game_over: false,
            logs: VecDeque::new(),
        })
    }

    pub(crate) fn push_log(&mut self, message: &str, classification: Classification) {
        if self.logs.len() == LOG_WINDOW {
            self.logs.pop_front();
        }
        self.logs.push_back(LogLine {
            message: message.to_string(),
            classification,
        });
    }

    /// Number of shop items purchased this session.
    #[must_use]
    pub fn items_purchased(&self) -> usize {
        self.shop_items.iter().filter(|item| item.purchased).count()
    }

    /// Where the session stands: still playing, shipped, or collapsed.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if !self.game_over {
            GamePhase::Playing
        } else if self.bug_count >= self.current_level.max_bugs {
            GamePhase::Lost
        } else {
            GamePhase::Won
        }
    }

    /// Owned read-only view of the fields relevant for display and for
    /// achievement predicates.
    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            level: self.level,
            level_name: self.current_level.name.clone(),
            commits_done: self.commits_done,
            target_commits: self.current_level.target_commits,
            bug_count: self.bug_count,
            max_bugs: self.current_level.max_bugs,
            fixes_done: self.fixes_done,
            total_commits: self.total_commits,
            money: self.money,
            bug_chance: self.bug_chance,
            items_purchased: self.items_purchased(),
            game_over: self.game_over,
            phase: self.phase(),
        }
    }
}

/// Read-only status view handed to the presentation layer. Owns every field,
/// so a holder can never corrupt engine invariants through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub level: usize,
    pub level_name: String,
    pub commits_done: u32,
    pub target_commits: u32,
    pub bug_count: u32,
    pub max_bugs: u32,
    pub fixes_done: u32,
    pub total_commits: u32,
    pub money: i64,
    pub bug_chance: f32,
    pub items_purchased: usize,
    pub game_over: bool,
    pub phase: GamePhase,
}
