//! Quarks Casino round evaluation.
//!
//! This crate turns validated table input into a settled round: it throws the dice, classifies
//! the outcome for the selected variant and formats the result payload handed to a renderer.
//!
//! ## Determinism requirements
//! - Outcome evaluation is a pure function of the dice; all randomness comes from [`GameRng`].
//! - A round never reads dice from another round. Deferred reveals close over a by-value
//!   snapshot taken when the round starts (see [`RoundScheduler`]).
//!
//! ## Playing a round (example)
//! ```rust
//! use quarks_execution::{play_round, GameRng, RoundRequest};
//! use quarks_types::GameKind;
//!
//! let mut rng = GameRng::from_seed(7);
//! let report = play_round(
//!     &RoundRequest {
//!         player_name: " Ana ",
//!         wager: "5",
//!         game: GameKind::Craps,
//!     },
//!     &mut rng,
//! )
//! .expect("valid input");
//! assert_eq!(report.player.name(), "Ana");
//! assert_eq!(report.result.dice.len(), 2);
//! ```

pub mod casino;
pub mod round;
pub mod round_scheduler;

pub use casino::{
    evaluate_craps_round, evaluate_threshold_round, format_result, roll_die, settlement, GameRng,
    Throw,
};
pub use round::{play_round, RoundEntry, RoundReport, RoundRequest};
pub use round_scheduler::{
    PendingReveal, RevealError, RevealedRound, RoundScheduler, RoundSnapshot, TriggerGuard,
    TriggerPermit,
};
