//! Round classification and the result payload handed to renderers.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

use super::{CRAPS_DICE, THRESHOLD_DICE};

/// Table variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    /// Two dice; 7 or 11 loses, even doubles win, anything else pushes.
    #[default]
    Craps,
    /// Three dice; a total of exactly 10, or 12 and above, wins.
    Threshold,
}

impl GameKind {
    pub const fn dice_count(self) -> usize {
        match self {
            GameKind::Craps => CRAPS_DICE,
            GameKind::Threshold => THRESHOLD_DICE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameKind::Craps => "craps",
            GameKind::Threshold => "threshold",
        }
    }
}

#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
#[error("unknown game variant {0:?} (expected craps or threshold)")]
pub struct GameKindParseError(pub String);

impl FromStr for GameKind {
    type Err = GameKindParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "craps" => Ok(GameKind::Craps),
            "threshold" => Ok(GameKind::Threshold),
            _ => Err(GameKindParseError(raw.to_string())),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final classification of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    /// Neither win nor lose; the wager is unchanged.
    Push,
}

impl Outcome {
    /// Short tag shown with the result. A craps loss is labelled "CRAPS".
    pub const fn label(self, game: GameKind) -> &'static str {
        match (self, game) {
            (Outcome::Win, _) => "WIN",
            (Outcome::Push, _) => "PUSH",
            (Outcome::Lose, GameKind::Craps) => "CRAPS",
            (Outcome::Lose, GameKind::Threshold) => "LOSE",
        }
    }
}

/// Credits moved by a settled round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum Settlement {
    /// Credits paid out on a win (stake included).
    Payout(f64),
    /// Credits forfeited on a loss.
    Loss(f64),
}

impl Settlement {
    pub const fn amount(self) -> f64 {
        match self {
            Settlement::Payout(amount) | Settlement::Loss(amount) => amount,
        }
    }
}

/// Structured result of one round. Carries no markup.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultPayload {
    pub game: GameKind,
    pub outcome: Outcome,
    pub label: &'static str,
    pub dice: Vec<u8>,
    pub sum: u8,
    /// `None` for a push.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement: Option<Settlement>,
}
