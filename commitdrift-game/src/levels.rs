//! Level plan for the simulated project
use serde::{Deserialize, Serialize};

/// One stage of the project, with its own commit target, bug ceiling,
/// and completion reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Ordinal position in the level plan.
    pub id: usize,
    pub name: String,
    /// Commits required to clear the level.
    pub target_commits: u32,
    /// Bug count at which the project collapses.
    pub max_bugs: u32,
    /// Currency granted when the level is cleared.
    pub reward: i64,
    /// Baseline probability that a commit introduces a bug.
    pub bug_chance_base: f32,
}

/// The canonical level plan shipped with the game.
#[must_use]
pub fn default_levels() -> Vec<LevelDefinition> {
    vec![
        LevelDefinition {
            id: 0,
            name: "Prototype".to_string(),
            target_commits: 10,
            max_bugs: 5,
            reward: 5,
            bug_chance_base: 0.20,
        },
        LevelDefinition {
            id: 1,
            name: "Alpha".to_string(),
            target_commits: 15,
            max_bugs: 5,
            reward: 8,
            bug_chance_base: 0.25,
        },
        LevelDefinition {
            id: 2,
            name: "Beta".to_string(),
            target_commits: 20,
            max_bugs: 6,
            reward: 12,
            bug_chance_base: 0.30,
        },
        LevelDefinition {
            id: 3,
            name: "Release Candidate".to_string(),
            target_commits: 25,
            max_bugs: 6,
            reward: 18,
            bug_chance_base: 0.35,
        },
        LevelDefinition {
            id: 4,
            name: "Production Launch".to_string(),
            target_commits: 30,
            max_bugs: 7,
            reward: 25,
            bug_chance_base: 0.40,
        },
    ]
}
