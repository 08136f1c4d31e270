use quarks_types::{Outcome, ResultPayload, Settlement, Wager, WIN_MULTIPLIER};

use super::Throw;

/// Credits moved by `outcome`. A push moves nothing.
pub fn settlement(outcome: Outcome, wager: Wager) -> Option<Settlement> {
    match outcome {
        Outcome::Win => Some(Settlement::Payout(wager.amount() * WIN_MULTIPLIER)),
        Outcome::Lose => Some(Settlement::Loss(wager.amount())),
        Outcome::Push => None,
    }
}

/// Evaluates `throw` and builds the structured result. No markup is produced here.
pub fn format_result(throw: &Throw, wager: Wager) -> ResultPayload {
    let game = throw.game();
    let outcome = throw.evaluate();
    ResultPayload {
        game,
        outcome,
        label: outcome.label(game),
        dice: throw.dice(),
        sum: throw.sum(),
        settlement: settlement(outcome, wager),
    }
}
