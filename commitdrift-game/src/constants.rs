//! Centralized balance and tuning constants for Commit Drift game logic.
//!
//! These values define the deterministic math for the progression engine.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control.

// Economy tuning -----------------------------------------------------------
pub(crate) const COMMIT_BASE_PAY: i64 = 1;
pub(crate) const FIX_PAY: i64 = 2;

// Risk tuning --------------------------------------------------------------
pub(crate) const BUG_CHANCE_FLOOR: f32 = 0.05;
pub(crate) const BUG_CHANCE_CEIL: f32 = 1.0;

// Level tuning -------------------------------------------------------------
pub(crate) const TARGET_COMMITS_FLOOR: u32 = 1;

// Session journal ----------------------------------------------------------
pub(crate) const LOG_WINDOW: usize = 50;
