//! Dice table games.
//!
//! Each variant has a pure evaluator (`craps`, `threshold`) that maps validated dice to an
//! [`Outcome`]. [`Throw`] ties a variant to the dice rolled for it so callers can carry a round
//! around as a single `Copy` value.

mod craps;
mod payout;
mod threshold;

pub use craps::evaluate_craps_round;
pub use payout::{format_result, settlement};
pub use threshold::evaluate_threshold_round;

use quarks_types::{
    CrapsDice, GameKind, Outcome, ResultPayload, Roll, RollSet, ThresholdDice, Wager,
};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::fmt;

/// Throws one die. Always in `1..=6`.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> Roll {
    rng.gen()
}

/// Random number generator for the table.
///
/// Seeded play is reproducible: the same seed yields the same sequence of throws.
#[derive(Clone, Debug)]
pub struct GameRng(ChaCha20Rng);

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha20Rng::from_entropy())
    }

    pub fn roll_die(&mut self) -> Roll {
        roll_die(&mut self.0)
    }

    pub fn roll_dice<const N: usize>(&mut self) -> RollSet<N> {
        RollSet::new(std::array::from_fn(|_| self.roll_die()))
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Dice thrown for one round, tagged with the variant they were thrown for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Throw {
    Craps(CrapsDice),
    Threshold(ThresholdDice),
}

impl Throw {
    /// Throws the dice for `game`.
    pub fn roll<R: Rng + ?Sized>(game: GameKind, rng: &mut R) -> Self {
        match game {
            GameKind::Craps => Throw::Craps(RollSet::new([roll_die(rng), roll_die(rng)])),
            GameKind::Threshold => Throw::Threshold(RollSet::new([
                roll_die(rng),
                roll_die(rng),
                roll_die(rng),
            ])),
        }
    }

    pub const fn game(&self) -> GameKind {
        match self {
            Throw::Craps(_) => GameKind::Craps,
            Throw::Threshold(_) => GameKind::Threshold,
        }
    }

    pub fn dice(&self) -> Vec<u8> {
        match self {
            Throw::Craps(dice) => dice.values().to_vec(),
            Throw::Threshold(dice) => dice.values().to_vec(),
        }
    }

    pub fn sum(&self) -> u8 {
        match self {
            Throw::Craps(dice) => dice.sum(),
            Throw::Threshold(dice) => dice.sum(),
        }
    }

    pub fn evaluate(&self) -> Outcome {
        match self {
            Throw::Craps(dice) => {
                let [die1, die2] = *dice.rolls();
                evaluate_craps_round(die1, die2)
            }
            Throw::Threshold(dice) => evaluate_threshold_round(dice),
        }
    }

    /// Evaluates the throw and formats the payload for `wager`.
    pub fn settle(&self, wager: Wager) -> ResultPayload {
        format_result(self, wager)
    }
}

/// Comma-separated faces, e.g. `3,4`.
impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Throw::Craps(dice) => write!(f, "{dice}"),
            Throw::Threshold(dice) => write!(f, "{dice}"),
        }
    }
}
