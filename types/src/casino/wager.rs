use serde::Serialize;
use std::{fmt, str::FromStr};

use super::{ValidationError, WIN_MULTIPLIER};

/// Credits staked on a round. Always finite and strictly positive, and small enough that a
/// winning payout is finite too.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Wager(f64);

impl Wager {
    pub fn new(amount: f64) -> Result<Self, ValidationError> {
        // NaN and the infinities are not amounts anyone can stake.
        if !amount.is_finite() {
            return Err(ValidationError::NotANumber);
        }
        if amount <= 0.0 {
            return Err(ValidationError::NotPositive);
        }
        // Nor is a stake whose payout overflows.
        if !(amount * WIN_MULTIPLIER).is_finite() {
            return Err(ValidationError::NotANumber);
        }
        Ok(Self(amount))
    }

    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl FromStr for Wager {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let amount: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotANumber)?;
        Self::new(amount)
    }
}

impl TryFrom<f64> for Wager {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
