//! Full-name parsing
//!
//! A full name is split on whitespace into tokens and classified by
//! token count:
//! - 1 token: first name only (`Madonna`)
//! - 2 tokens: first + last (`Madonna Cicone`)
//! - 3 tokens: first + middle + last (`Madonna Louise Cicone`)
//!
//! Longer names are handled according to a [`LongNamePolicy`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("fullName cannot be an empty string")]
    EmptyFullName,

    #[error("fullName has {count} parts; at most 3 are allowed")]
    TooManyNameParts { count: usize },
}

/// What to do with names of four or more tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LongNamePolicy {
    /// Everything between the first and last token becomes the middle name
    #[default]
    CollapseMiddle,
    /// Fail with [`ValidationError::TooManyNameParts`]
    Reject,
}

impl LongNamePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LongNamePolicy::CollapseMiddle => "collapse_middle",
            LongNamePolicy::Reject => "reject",
        }
    }
}

/// A parsed full name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedName {
    Mononym {
        first: String,
    },
    FirstLast {
        first: String,
        last: String,
    },
    Full {
        first: String,
        middle: String,
        last: String,
    },
}

impl ParsedName {
    /// Parses a full name using the default policy
    pub fn parse(full_name: &str) -> Result<Self, ValidationError> {
        Self::parse_with(full_name, LongNamePolicy::default())
    }

    /// Parses a full name, applying `policy` to names of four or more tokens
    pub fn parse_with(full_name: &str, policy: LongNamePolicy) -> Result<Self, ValidationError> {
        let tokens: Vec<&str> = full_name.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Err(ValidationError::EmptyFullName),
            [first] => Ok(ParsedName::Mononym {
                first: first.to_string(),
            }),
            [first, last] => Ok(ParsedName::FirstLast {
                first: first.to_string(),
                last: last.to_string(),
            }),
            [first, middle, last] => Ok(ParsedName::Full {
                first: first.to_string(),
                middle: middle.to_string(),
                last: last.to_string(),
            }),
            [first, middle @ .., last] => match policy {
                LongNamePolicy::CollapseMiddle => Ok(ParsedName::Full {
                    first: first.to_string(),
                    middle: middle.join(" "),
                    last: last.to_string(),
                }),
                LongNamePolicy::Reject => Err(ValidationError::TooManyNameParts {
                    count: tokens.len(),
                }),
            },
        }
    }

    pub fn first(&self) -> &str {
        match self {
            ParsedName::Mononym { first }
            | ParsedName::FirstLast { first, .. }
            | ParsedName::Full { first, .. } => first,
        }
    }

    pub fn middle(&self) -> Option<&str> {
        match self {
            ParsedName::Full { middle, .. } => Some(middle.as_str()),
            _ => None,
        }
    }

    pub fn last(&self) -> Option<&str> {
        match self {
            ParsedName::Mononym { .. } => None,
            ParsedName::FirstLast { last, .. } | ParsedName::Full { last, .. } => Some(last.as_str()),
        }
    }

    /// Number of whitespace-separated tokens in the canonical form
    pub fn token_count(&self) -> usize {
        self.to_string().split_whitespace().count()
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedName::Mononym { first } => write!(f, "{}", first),
            ParsedName::FirstLast { first, last } => write!(f, "{} {}", first, last),
            ParsedName::Full {
                first,
                middle,
                last,
            } => write!(f, "{} {} {}", first, middle, last),
        }
    }
}

impl FromStr for ParsedName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_token() {
        let name = ParsedName::parse("Madonna").unwrap();
        assert_eq!(name.first(), "Madonna");
        assert_eq!(name.middle(), None);
        assert_eq!(name.last(), None);
    }

    #[test]
    fn two_tokens() {
        let name = ParsedName::parse("Madonna Cicone").unwrap();
        assert_eq!(name.first(), "Madonna");
        assert_eq!(name.middle(), None);
        assert_eq!(name.last(), Some("Cicone"));
    }

    #[test]
    fn three_tokens() {
        let name = ParsedName::parse("Madonna Louise Cicone").unwrap();
        assert_eq!(name.first(), "Madonna");
        assert_eq!(name.middle(), Some("Louise"));
        assert_eq!(name.last(), Some("Cicone"));
    }

    #[test]
    fn empty_is_rejected_with_exact_message() {
        for input in ["", "   ", "\t\n"] {
            let err = ParsedName::parse(input).unwrap_err();
            assert_eq!(err, ValidationError::EmptyFullName);
            assert_eq!(err.to_string(), "fullName cannot be an empty string");
        }
    }

    #[test]
    fn surrounding_and_repeated_whitespace_is_ignored() {
        let name = ParsedName::parse("  Ada    Lovelace ").unwrap();
        assert_eq!(name.first(), "Ada");
        assert_eq!(name.last(), Some("Lovelace"));
        assert_eq!(name.to_string(), "Ada Lovelace");
    }

    #[test]
    fn long_name_collapses_middle() {
        let name = ParsedName::parse("Juan Carlos de Borbon").unwrap();
        assert_eq!(name.first(), "Juan");
        assert_eq!(name.middle(), Some("Carlos de"));
        assert_eq!(name.last(), Some("Borbon"));
        assert_eq!(name.token_count(), 4);
    }

    #[test]
    fn long_name_rejected_under_reject_policy() {
        let result = ParsedName::parse_with("Juan Carlos de Borbon", LongNamePolicy::Reject);
        assert_eq!(result, Err(ValidationError::TooManyNameParts { count: 4 }));

        // Short names are unaffected by the policy
        let name = ParsedName::parse_with("Madonna Louise Cicone", LongNamePolicy::Reject).unwrap();
        assert_eq!(name.middle(), Some("Louise"));
    }

    #[test]
    fn from_str() {
        let name: ParsedName = "Ada Lovelace".parse().unwrap();
        assert_eq!(name.first(), "Ada");
        assert!("".parse::<ParsedName>().is_err());
    }

    #[test]
    fn policy_serialization() {
        let json = serde_json::to_string(&LongNamePolicy::CollapseMiddle).unwrap();
        assert_eq!(json, "\"collapse_middle\"");
        let policy: LongNamePolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, LongNamePolicy::Reject);
        assert_eq!(policy.as_str(), "reject");
    }

    proptest! {
        #[test]
        fn first_name_is_first_token(tokens in prop::collection::vec("[A-Za-z]{1,8}", 1..6)) {
            let full = tokens.join(" ");
            let name = ParsedName::parse(&full).unwrap();
            prop_assert_eq!(name.first(), tokens[0].as_str());
            prop_assert_eq!(name.token_count(), tokens.len());
            prop_assert_eq!(name.last().is_some(), tokens.len() >= 2);
            prop_assert_eq!(name.middle().is_some(), tokens.len() >= 3);
        }
    }
}
