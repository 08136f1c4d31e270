//! Craps round evaluation.
//!
//! Rules, first match wins:
//! 1. Total of 7 or 11: lose ("CRAPS").
//! 2. Doubles showing an even face: win.
//! 3. Anything else: push.

use quarks_types::{Outcome, Roll, CRAPS_TOTALS};

pub fn evaluate_craps_round(die1: Roll, die2: Roll) -> Outcome {
    let total = die1.value() + die2.value();
    if CRAPS_TOTALS.contains(&total) {
        Outcome::Lose
    } else if die1 == die2 && die1.is_even() {
        Outcome::Win
    } else {
        Outcome::Push
    }
}
