//! Casino domain types.
//!
//! Defines dice, wager, player and result types used by the execution layer and front ends.

mod constants;
mod dice;
mod markup;
mod outcome;
mod player;
mod validation;
mod wager;

pub use constants::*;
pub use dice::*;
pub use markup::escape_html;
pub use outcome::*;
pub use player::*;
pub use validation::*;
pub use wager::*;

#[cfg(test)]
mod tests;
