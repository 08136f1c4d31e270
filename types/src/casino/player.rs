use serde::Serialize;
use std::{fmt, str::FromStr};

use super::{ValidationError, CASINO_NAME};

/// Display name of the player at the table, stored trimmed and never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerIdentity(String);

impl PlayerIdentity {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Plain-text welcome line. Not escaped; renderers embedding it in markup must escape it.
    pub fn greeting(&self) -> String {
        format!("Welcome to {CASINO_NAME}, {} - good luck!", self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PlayerIdentity {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl AsRef<str> for PlayerIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
