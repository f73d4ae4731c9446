//! The progression engine: commit/bug randomness, currency economy, shop
//! effects, level advancement, termination, and achievement evaluation.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::constants::{
    BUG_CHANCE_CEIL, BUG_CHANCE_FLOOR, COMMIT_BASE_PAY, FIX_PAY, TARGET_COMMITS_FLOOR,
};
use crate::data::{ConfigError, GameConfig};
use crate::result::{ActionOutcome, Classification};
use crate::shop::ItemEffect;
use crate::state::{GameState, LogLine, StatusSnapshot};

const MSG_REPO_FROZEN: &str = "The repository is frozen. No further changes are accepted.";
const MSG_NO_BUGS: &str = "No open bugs to fix. Keep shipping commits.";
const MSG_PROJECT_FAILED: &str =
    "PROJECT COLLAPSE. Too many open bugs; the repository has been archived.";
const MSG_PROJECT_SHIPPED: &str =
    "PROJECT SHIPPED. Every milestone cleared with the codebase intact.";

/// Owns one game session and every rule that can mutate it. Generic over the
/// random source so hosts seed it and tests pin it.
#[derive(Debug, Clone)]
pub struct CommitEngine<R: Rng = ChaCha20Rng> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl CommitEngine<ChaCha20Rng> {
    /// Construct with the reproducible default random source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the static configuration is malformed.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> CommitEngine<R> {
    /// Construct with an injected random source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the static configuration is malformed.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::fresh(&config)?;
        Ok(Self { config, state, rng })
    }

    /// Full state replacement from fresh catalog copies; callable at any
    /// time, including mid-game.
    pub fn reset(&mut self) {
        // Level plan validated at construction; fresh cannot fail here.
        if let Ok(state) = GameState::fresh(&self.config) {
            self.state = state;
        }
    }

    /// The primary action: one unit of forward progress, with a chance of
    /// introducing a bug.
    pub fn make_commit(&mut self) -> ActionOutcome {
        if self.state.game_over {
            return self.rejection(MSG_REPO_FROZEN, Classification::Error);
        }

        let bonus = self.apply_item_effects();
        self.state.commits_done += 1;
        self.state.total_commits += 1;
        self.state.money += COMMIT_BASE_PAY + bonus;

        let roll = self.rng.r#gen::<f32>();
        let (mut message, mut classification) = if roll < self.state.bug_chance {
            self.state.bug_count += 1;
            (
                format!(
                    "Commit [{}] introduced a new bug.",
                    self.state.commits_done
                ),
                Classification::Warning,
            )
        } else {
            (
                format!("Commit [{}] landed clean.", self.state.commits_done),
                Classification::Info,
            )
        };
        self.state.push_log(&message, classification);

        if let Some((status_message, status_class)) = self.check_game_status() {
            self.state.push_log(&status_message, status_class);
            message = format!("{message} {status_message}");
            classification = status_class;
        }

        let unlocked = self.check_achievements();
        self.outcome(message, classification, unlocked)
    }

    /// Clear one outstanding bug for a fixed reward.
    pub fn fix_bug(&mut self) -> ActionOutcome {
        if self.state.game_over {
            return self.rejection(MSG_REPO_FROZEN, Classification::Error);
        }
        if self.state.bug_count == 0 {
            return self.rejection(MSG_NO_BUGS, Classification::Info);
        }

        self.state.bug_count -= 1;
        self.state.fixes_done += 1;
        self.state.money += FIX_PAY;
        let message = format!("Bug fixed. The codebase is cleaner. +{FIX_PAY} credits.");
        self.state.push_log(&message, Classification::Success);

        let unlocked = self.check_achievements();
        self.outcome(message, Classification::Success, unlocked)
    }

    /// Purchase a shop item by id. Rejections are normal outcomes with
    /// distinct messages, never faults.
    pub fn buy_item(&mut self, item_id: &str) -> ActionOutcome {
        if self.state.game_over {
            return self.rejection(MSG_REPO_FROZEN, Classification::Error);
        }

        let Some(item) = self
            .state
            .shop_items
            .iter()
            .find(|item| item.id == item_id)
        else {
            let message = format!("The shop has no such item: {item_id}.");
            return self.rejection(&message, Classification::Error);
        };
        if item.purchased {
            let message = format!("{} is already installed.", item.name);
            return self.rejection(&message, Classification::Warning);
        }
        if self.state.money < item.cost {
            let message = format!(
                "Not enough credits for {} ({} needed, {} on hand).",
                item.name, item.cost, self.state.money
            );
            return self.rejection(&message, Classification::Warning);
        }

        let (name, cost) = (item.name.clone(), item.cost);
        self.state.money -= cost;
        if let Some(item) = self
            .state
            .shop_items
            .iter_mut()
            .find(|item| item.id == item_id)
        {
            item.purchased = true;
        }
        // Effects apply starting with the next commit, never retroactively.
        self.apply_item_effects();

        let message = format!("Purchased {name} for {cost} credits.");
        self.state.push_log(&message, Classification::Success);
        let unlocked = self.check_achievements();
        self.outcome(message, Classification::Success, unlocked)
    }

    /// Evaluate termination and level-clear conditions. Loss takes priority
    /// over a simultaneous clear.
    pub fn check_game_status(&mut self) -> Option<(String, Classification)> {
        if self.state.game_over {
            return None;
        }
        if self.state.bug_count >= self.state.current_level.max_bugs {
            self.state.game_over = true;
            return Some((MSG_PROJECT_FAILED.to_string(), Classification::Error));
        }
        if self.state.commits_done >= self.state.current_level.target_commits {
            return Some(self.next_level());
        }
        None
    }

    /// Evaluate pending achievement predicates against a snapshot; returns
    /// ids unlocked by this pass, each surfaced exactly once.
    pub fn check_achievements(&mut self) -> Vec<String> {
        let status = self.state.snapshot();
        let mut notifications = Vec::new();
        for achievement in &mut self.state.achievements {
            if achievement.unlocked {
                continue;
            }
            if achievement.condition.evaluate(&status) {
                achievement.unlocked = true;
                notifications.push((achievement.id.clone(), achievement.name.clone()));
            }
        }
        let mut unlocked = Vec::with_capacity(notifications.len());
        for (id, name) in notifications {
            self.state
                .push_log(&format!("Achievement unlocked: {name}"), Classification::Success);
            unlocked.push(id);
        }
        unlocked
    }

    /// Read-only view of the fields relevant for display.
    #[must_use]
    pub fn status(&self) -> StatusSnapshot {
        self.state.snapshot()
    }

    /// Session shop catalog, with purchase flags, for rendering.
    #[must_use]
    pub fn shop_items(&self) -> &[crate::shop::ShopItem] {
        &self.state.shop_items
    }

    /// Session achievement catalog, with unlock flags, for rendering.
    #[must_use]
    pub fn achievements(&self) -> &[crate::achievements::Achievement] {
        &self.state.achievements
    }

    /// The session journal, oldest line first.
    pub fn journal(&self) -> impl Iterator<Item = &LogLine> {
        self.state.logs.iter()
    }

    /// Recompute `bug_chance` from the working level's base minus purchased
    /// reductions (floored), and return the summed commit money bonus. The
    /// bonus is recomputed on every commit, never stored.
    fn apply_item_effects(&mut self) -> i64 {
        let mut chance = self.state.current_level.bug_chance_base;
        let mut bonus = 0i64;
        for item in self.state.shop_items.iter().filter(|item| item.purchased) {
            match item.effect {
                ItemEffect::BugChanceReduction(amount) => chance -= amount,
                ItemEffect::CommitMoneyBonus(amount) => bonus += amount,
                // Applied on level entry, not per commit.
                ItemEffect::LevelTargetBoost(_) => {}
            }
        }
        self.state.bug_chance = chance.clamp(BUG_CHANCE_FLOOR, BUG_CHANCE_CEIL);
        bonus
    }

    /// Summed head start purchased for each newly entered level.
    fn target_boost(&self) -> u32 {
        self.state
            .shop_items
            .iter()
            .filter(|item| item.purchased)
            .map(|item| match item.effect {
                ItemEffect::LevelTargetBoost(amount) => amount,
                _ => 0,
            })
            .sum()
    }

    /// Credit the cleared level and either enter the next one or end the
    /// game in the shipped terminal state.
    fn next_level(&mut self) -> (String, Classification) {
        let cleared = self.state.current_level.clone();
        self.state.money += cleared.reward;

        let next_index = self.state.level + 1;
        let Some(definition) = self.config.levels.get(next_index).cloned() else {
            self.state.game_over = true;
            return (MSG_PROJECT_SHIPPED.to_string(), Classification::Success);
        };

        let mut working = definition;
        working.target_commits = working
            .target_commits
            .saturating_sub(self.target_boost())
            .max(TARGET_COMMITS_FLOOR);
        let message = format!(
            "{} cleared (+{} credits). Starting {}.",
            cleared.name, cleared.reward, working.name
        );

        self.state.level = next_index;
        self.state.current_level = working;
        self.state.commits_done = 0;
        self.state.bug_count = 0;
        self.apply_item_effects();

        (message, Classification::Success)
    }

    /// A rejected action: fixed message, no state mutation.
    fn rejection(&self, message: &str, classification: Classification) -> ActionOutcome {
        self.outcome(message.to_string(), classification, Vec::new())
    }

    fn outcome(
        &self,
        message: String,
        classification: Classification,
        unlocked: Vec<String>,
    ) -> ActionOutcome {
        ActionOutcome {
            message,
            classification,
            status: self.state.snapshot(),
            unlocked,
        }
    }
}
