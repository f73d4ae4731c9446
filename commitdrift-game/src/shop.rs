//! Shop catalog and one-time purchase effects
use serde::{Deserialize, Serialize};

/// Effect granted by a purchased item. Exactly one effect kind per item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum ItemEffect {
    /// Subtracted from the active level's baseline bug chance. Additive
    /// across purchased items, floored by the engine.
    BugChanceReduction(f32),
    /// Added to the payout of every subsequent commit.
    CommitMoneyBonus(i64),
    /// Head start applied to each newly entered level: lowers its commit
    /// target, floored at 1.
    LevelTargetBoost(u32),
}

/// A single item available in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// Price in currency units.
    pub cost: i64,
    pub effect: ItemEffect,
    /// Per-session purchase flag; flips true exactly once.
    #[serde(default)]
    pub purchased: bool,
}

/// The canonical shop catalog shipped with the game.
#[must_use]
pub fn default_items() -> Vec<ShopItem> {
    vec![
        ShopItem {
            id: "linter".to_string(),
            name: "Static Linter".to_string(),
            desc: "Catches sloppy commits before they land.".to_string(),
            cost: 10,
            effect: ItemEffect::BugChanceReduction(0.05),
            purchased: false,
        },
        ShopItem {
            id: "ci-pipeline".to_string(),
            name: "CI Pipeline".to_string(),
            desc: "Every push runs the full test suite.".to_string(),
            cost: 25,
            effect: ItemEffect::BugChanceReduction(0.10),
            purchased: false,
        },
        ShopItem {
            id: "coffee-machine".to_string(),
            name: "Coffee Machine".to_string(),
            desc: "Sharper commits, better payouts.".to_string(),
            cost: 15,
            effect: ItemEffect::CommitMoneyBonus(1),
            purchased: false,
        },
        ShopItem {
            id: "pairing-buddy".to_string(),
            name: "Pairing Buddy".to_string(),
            desc: "Two keyboards, double the commit value.".to_string(),
            cost: 40,
            effect: ItemEffect::CommitMoneyBonus(2),
            purchased: false,
        },
        ShopItem {
            id: "scaffolder".to_string(),
            name: "Project Scaffolder".to_string(),
            desc: "Boilerplate lands before the milestone clock starts.".to_string(),
            cost: 30,
            effect: ItemEffect::LevelTargetBoost(3),
            purchased: false,
        },
    ]
}
