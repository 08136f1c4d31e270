use thiserror::Error as ThisError;

use super::{PlayerIdentity, Wager};

/// Reasons a round is refused before any dice are thrown.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq)]
pub enum ValidationError {
    #[error("wager is not a number")]
    NotANumber,
    #[error("wager must be greater than zero")]
    NotPositive,
    #[error("display name is empty")]
    EmptyName,
}

impl ValidationError {
    /// Stable machine-readable code.
    pub const fn code(self) -> &'static str {
        match self {
            ValidationError::NotANumber => "not_a_number",
            ValidationError::NotPositive => "not_positive",
            ValidationError::EmptyName => "empty_name",
        }
    }
}

/// Parses a raw wager as submitted by a form.
pub fn validate_wager(raw: &str) -> Result<Wager, ValidationError> {
    raw.parse()
}

/// Trims a raw display name, rejecting blank input.
pub fn validate_identity(raw: &str) -> Result<PlayerIdentity, ValidationError> {
    PlayerIdentity::new(raw)
}
