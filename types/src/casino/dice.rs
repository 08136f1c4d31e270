use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

use super::{CRAPS_DICE, DIE_FACES, MIN_FACE, THRESHOLD_DICE};

#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq)]
pub enum RollError {
    #[error("die face out of range (got={value}, min={min}, max={max})")]
    OutOfRange { value: u8, min: u8, max: u8 },
}

/// A single die face in `MIN_FACE..=DIE_FACES`.
///
/// The only way to obtain a `Roll` is through [`Roll::new`] (or `TryFrom<u8>`), so a zero or
/// out-of-range face can never reach evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Roll(u8);

impl Roll {
    pub fn new(value: u8) -> Result<Self, RollError> {
        if !(MIN_FACE..=DIE_FACES).contains(&value) {
            return Err(RollError::OutOfRange {
                value,
                min: MIN_FACE,
                max: DIE_FACES,
            });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

/// Uniform over every face; `rng.gen::<Roll>()` is the canonical die throw.
impl Distribution<Roll> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Roll {
        Roll(rng.gen_range(MIN_FACE..=DIE_FACES))
    }
}

impl TryFrom<u8> for Roll {
    type Error = RollError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered dice for one round.
///
/// Order only matters for display; sums and equality checks ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RollSet<const N: usize>([Roll; N]);

/// Two dice, as thrown in a craps round.
pub type CrapsDice = RollSet<CRAPS_DICE>;

/// Three dice, as thrown in a threshold round.
pub type ThresholdDice = RollSet<THRESHOLD_DICE>;

impl<const N: usize> RollSet<N> {
    pub const fn new(rolls: [Roll; N]) -> Self {
        Self(rolls)
    }

    pub fn rolls(&self) -> &[Roll; N] {
        &self.0
    }

    pub fn values(&self) -> [u8; N] {
        self.0.map(Roll::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = Roll> + '_ {
        self.0.iter().copied()
    }

    /// Exact integer total of all faces.
    pub fn sum(&self) -> u8 {
        self.0.iter().map(|roll| roll.value()).sum()
    }

    /// True when every die shows the same face.
    pub fn all_equal(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0] == pair[1])
    }
}

impl<const N: usize> TryFrom<[u8; N]> for RollSet<N> {
    type Error = RollError;

    fn try_from(values: [u8; N]) -> Result<Self, Self::Error> {
        let mut rolls = [Roll(MIN_FACE); N];
        for (slot, value) in rolls.iter_mut().zip(values) {
            *slot = Roll::new(value)?;
        }
        Ok(Self(rolls))
    }
}

impl<const N: usize> fmt::Display for RollSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, roll) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{roll}")?;
        }
        Ok(())
    }
}
