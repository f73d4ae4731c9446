//! Achievement catalog and unlock predicates
use serde::{Deserialize, Serialize};

use crate::state::StatusSnapshot;

/// Unlock predicate evaluated against a read-only status snapshot.
///
/// Conditions are plain data rather than closures so catalogs can be
/// serialized and each predicate tested in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum AchievementCondition {
    TotalCommitsAtLeast(u32),
    FixesAtLeast(u32),
    MoneyAtLeast(i64),
    LevelReached(usize),
    ItemsPurchasedAtLeast(usize),
    BugCountAtLeast(u32),
}

impl AchievementCondition {
    /// Pure predicate over the snapshot; never mutates anything.
    #[must_use]
    pub fn evaluate(self, status: &StatusSnapshot) -> bool {
        match self {
            Self::TotalCommitsAtLeast(n) => status.total_commits >= n,
            Self::FixesAtLeast(n) => status.fixes_done >= n,
            Self::MoneyAtLeast(n) => status.money >= n,
            Self::LevelReached(n) => status.level >= n,
            Self::ItemsPurchasedAtLeast(n) => status.items_purchased >= n,
            Self::BugCountAtLeast(n) => status.bug_count >= n,
        }
    }
}

/// A one-time unlock triggered by a state predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub condition: AchievementCondition,
    /// Per-session unlock flag; monotonic, flips true exactly once.
    #[serde(default)]
    pub unlocked: bool,
}

/// The canonical achievement catalog shipped with the game.
#[must_use]
pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "hello-world".to_string(),
            name: "Hello, World".to_string(),
            desc: "Land your first commit.".to_string(),
            condition: AchievementCondition::TotalCommitsAtLeast(1),
            unlocked: false,
        },
        Achievement {
            id: "bug-squasher".to_string(),
            name: "Bug Squasher".to_string(),
            desc: "Fix your first bug.".to_string(),
            condition: AchievementCondition::FixesAtLeast(1),
            unlocked: false,
        },
        Achievement {
            id: "exterminator".to_string(),
            name: "Exterminator".to_string(),
            desc: "Fix ten bugs across the project.".to_string(),
            condition: AchievementCondition::FixesAtLeast(10),
            unlocked: false,
        },
        Achievement {
            id: "seed-round".to_string(),
            name: "Seed Round".to_string(),
            desc: "Hold 50 credits at once.".to_string(),
            condition: AchievementCondition::MoneyAtLeast(50),
            unlocked: false,
        },
        Achievement {
            id: "shipping-it".to_string(),
            name: "Shipping It".to_string(),
            desc: "Clear the first milestone.".to_string(),
            condition: AchievementCondition::LevelReached(1),
            unlocked: false,
        },
        Achievement {
            id: "fully-equipped".to_string(),
            name: "Fully Equipped".to_string(),
            desc: "Buy out the entire shop.".to_string(),
            condition: AchievementCondition::ItemsPurchasedAtLeast(5),
            unlocked: false,
        },
        Achievement {
            id: "living-dangerously".to_string(),
            name: "Living Dangerously".to_string(),
            desc: "Keep committing with four bugs open.".to_string(),
            condition: AchievementCondition::BugCountAtLeast(4),
            unlocked: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GamePhase;

    fn snapshot() -> StatusSnapshot {
        StatusSnapshot {
            level: 1,
            level_name: "Alpha".to_string(),
            commits_done: 3,
            target_commits: 15,
            bug_count: 2,
            max_bugs: 5,
            fixes_done: 4,
            total_commits: 13,
            money: 21,
            bug_chance: 0.25,
            items_purchased: 1,
            game_over: false,
            phase: GamePhase::Playing,
        }
    }

    #[test]
    fn conditions_compare_against_snapshot_fields() {
        let status = snapshot();
        assert!(AchievementCondition::TotalCommitsAtLeast(13).evaluate(&status));
        assert!(!AchievementCondition::TotalCommitsAtLeast(14).evaluate(&status));
        assert!(AchievementCondition::FixesAtLeast(4).evaluate(&status));
        assert!(AchievementCondition::MoneyAtLeast(21).evaluate(&status));
        assert!(!AchievementCondition::MoneyAtLeast(22).evaluate(&status));
        assert!(AchievementCondition::LevelReached(1).evaluate(&status));
        assert!(AchievementCondition::ItemsPurchasedAtLeast(1).evaluate(&status));
        assert!(!AchievementCondition::BugCountAtLeast(3).evaluate(&status));
    }

    #[test]
    fn default_catalog_ids_are_unique_and_locked() {
        let achievements = default_achievements();
        for (idx, achievement) in achievements.iter().enumerate() {
            assert!(
                achievements[idx + 1..]
                    .iter()
                    .all(|other| other.id != achievement.id),
                "duplicate id {}",
                achievement.id
            );
            assert!(!achievement.unlocked);
        }
    }

    #[test]
    fn condition_parses_from_tagged_json() {
        let parsed: AchievementCondition =
            serde_json::from_str(r#"{"kind":"fixes_at_least","value":10}"#).unwrap();
        assert_eq!(parsed, AchievementCondition::FixesAtLeast(10));
    }
}
