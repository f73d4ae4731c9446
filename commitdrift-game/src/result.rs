//! Action outcome payloads returned to the presentation layer
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::state::StatusSnapshot;

/// Severity class attached to every engine message, matching the log
/// styling classes the console front end renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl Classification {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(()),
        }
    }
}

/// Result payload for one engine action: advisory message, severity class,
/// current status, and any achievements the action just unlocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub message: String,
    pub classification: Classification,
    pub status: StatusSnapshot,
    /// Achievement ids newly unlocked by this action, surfaced exactly once.
    pub unlocked: Vec<String>,
}
