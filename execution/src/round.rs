//! Single-round pipeline: validate the form input, throw, evaluate, format.
//!
//! Validation is fail-fast and happens before any dice are thrown. The wager is checked
//! before the display name, so a round with both fields bad reports the wager.

use quarks_types::{
    validate_identity, validate_wager, GameKind, PlayerIdentity, ResultPayload, ValidationError,
    Wager,
};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::casino::Throw;

/// Raw input as submitted by a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRequest<'a> {
    pub player_name: &'a str,
    pub wager: &'a str,
    pub game: GameKind,
}

/// Input that passed validation; ready to be played.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundEntry {
    pub player: PlayerIdentity,
    pub wager: Wager,
    pub game: GameKind,
}

impl RoundEntry {
    pub fn validate(request: &RoundRequest<'_>) -> Result<Self, ValidationError> {
        let wager = validate_wager(request.wager).inspect_err(|err| {
            warn!(game = %request.game, raw = request.wager, ?err, "wager rejected");
        })?;
        let player = validate_identity(request.player_name).inspect_err(|err| {
            warn!(game = %request.game, ?err, "display name rejected");
        })?;
        Ok(Self {
            player,
            wager,
            game: request.game,
        })
    }

    /// Throws the dice for this entry.
    pub fn throw<R: Rng + ?Sized>(&self, rng: &mut R) -> Throw {
        let throw = Throw::roll(self.game, rng);
        debug!(
            game = %self.game,
            dice = %throw,
            sum = throw.sum(),
            "dice thrown"
        );
        throw
    }

    /// Builds the report for a settled round played with this entry.
    pub fn report(self, result: ResultPayload) -> RoundReport {
        info!(
            player = self.player.name(),
            game = %self.game,
            wager = self.wager.amount(),
            label = result.label,
            sum = result.sum,
            "round settled"
        );
        RoundReport {
            greeting: self.player.greeting(),
            player: self.player,
            wager: self.wager,
            result,
        }
    }
}

/// Everything a display needs to show one round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundReport {
    pub player: PlayerIdentity,
    pub wager: Wager,
    pub greeting: String,
    pub result: ResultPayload,
}

/// Plays one round synchronously.
pub fn play_round<R: Rng + ?Sized>(
    request: &RoundRequest<'_>,
    rng: &mut R,
) -> Result<RoundReport, ValidationError> {
    let entry = RoundEntry::validate(request)?;
    let throw = entry.throw(rng);
    let result = throw.settle(entry.wager);
    Ok(entry.report(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::GameRng;
    use quarks_types::Outcome;

    fn request<'a>(name: &'a str, wager: &'a str, game: GameKind) -> RoundRequest<'a> {
        RoundRequest {
            player_name: name,
            wager,
            game,
        }
    }

    #[test]
    fn test_play_round_craps() {
        let mut rng = GameRng::from_seed(11);
        let report = play_round(&request(" Ana ", "5", GameKind::Craps), &mut rng).unwrap();
        assert_eq!(report.player.name(), "Ana");
        assert_eq!(report.wager.amount(), 5.0);
        assert_eq!(report.greeting, "Welcome to Quarks Casino, Ana - good luck!");
        assert_eq!(report.result.game, GameKind::Craps);
        assert_eq!(report.result.dice.len(), 2);
        assert!(report.result.dice.iter().all(|d| (1..=6).contains(d)));
        assert_eq!(
            report.result.sum,
            report.result.dice.iter().copied().sum::<u8>()
        );
    }

    #[test]
    fn test_play_round_threshold() {
        let mut rng = GameRng::from_seed(12);
        let report = play_round(&request("Quark", "1.5", GameKind::Threshold), &mut rng).unwrap();
        assert_eq!(report.result.dice.len(), 3);
        let expected = if report.result.sum == 10 || report.result.sum >= 12 {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        assert_eq!(report.result.outcome, expected);
    }

    #[test]
    fn test_validation_is_fail_fast() {
        let mut rng = GameRng::from_seed(13);
        let before = rng.clone();

        assert_eq!(
            play_round(&request("Ana", "abc", GameKind::Craps), &mut rng),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            play_round(&request("Ana", "0", GameKind::Craps), &mut rng),
            Err(ValidationError::NotPositive)
        );
        assert_eq!(
            play_round(&request("   ", "5", GameKind::Craps), &mut rng),
            Err(ValidationError::EmptyName)
        );

        // Rejected rounds never touch the dice.
        let mut untouched = before;
        assert_eq!(rng.roll_dice::<4>(), untouched.roll_dice::<4>());
    }

    #[test]
    fn test_wager_checked_before_name() {
        assert_eq!(
            RoundEntry::validate(&request("", "-1", GameKind::Craps)),
            Err(ValidationError::NotPositive)
        );
    }

    #[test]
    fn test_seeded_rounds_repeat() {
        let req = request("Ana", "5", GameKind::Craps);
        let a = play_round(&req, &mut GameRng::from_seed(99)).unwrap();
        let b = play_round(&req, &mut GameRng::from_seed(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_serializes() {
        let mut rng = GameRng::from_seed(5);
        let report = play_round(&request("Ana", "5", GameKind::Craps), &mut rng).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["player"], "Ana");
        assert_eq!(json["wager"], 5.0);
        assert_eq!(json["result"]["game"], "craps");
    }
}
