//! Three-dice threshold round evaluation.
//!
//! Wins on a total of exactly 10 or any total of 12 and above; 11 and everything below 10
//! lose. The gap at 11 is part of the house rules.

use quarks_types::{Outcome, ThresholdDice, THRESHOLD_EXACT_WIN, THRESHOLD_HIGH_WIN};

pub fn evaluate_threshold_round(rolls: &ThresholdDice) -> Outcome {
    let total = rolls.sum();
    if total == THRESHOLD_EXACT_WIN || total >= THRESHOLD_HIGH_WIN {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
