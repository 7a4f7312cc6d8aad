//! Person handles
//!
//! ID Format: `p-{sequence}` (e.g., `p-3`)
//!
//! Handles are issued by a [`Roster`](super::Roster) in increasing order and
//! are never reused, so a handle to a removed person stops resolving instead
//! of silently pointing at someone else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid person ID format: expected 'p-{{sequence}}', got '{0}'")]
    InvalidPersonId(String),
}

/// Handle to a person stored in a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(u64);

impl PersonId {
    pub(crate) fn from_sequence(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the sequence number of this handle
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p-{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("p-")
            .ok_or_else(|| IdError::InvalidPersonId(s.to_string()))?;

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::InvalidPersonId(s.to_string()));
        }

        digits
            .parse()
            .map(Self)
            .map_err(|_| IdError::InvalidPersonId(s.to_string()))
    }
}

impl TryFrom<String> for PersonId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        assert_eq!(PersonId::from_sequence(3).to_string(), "p-3");
    }

    #[test]
    fn parse_valid() {
        let id: PersonId = "p-42".parse().unwrap();
        assert_eq!(id.sequence(), 42);

        let padded: PersonId = "  p-7 ".parse().unwrap();
        assert_eq!(padded, PersonId::from_sequence(7));
    }

    #[test]
    fn parse_invalid() {
        for input in ["", "p-", "p-x1", "q-1", "p--1", "1", "p-99999999999999999999999"] {
            assert!(
                matches!(input.parse::<PersonId>(), Err(IdError::InvalidPersonId(_))),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn ordering_follows_sequence() {
        assert!(PersonId::from_sequence(1) < PersonId::from_sequence(2));
    }

    #[test]
    fn serde_uses_string_form() {
        let id = PersonId::from_sequence(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-5\"");

        let parsed: PersonId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
