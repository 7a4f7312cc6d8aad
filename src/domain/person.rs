//! Person domain model
//!
//! A person is identified by a parsed full name. Friendships are not stored
//! on the person itself; they live in the [`Roster`](super::Roster) that owns
//! it, keyed by [`PersonId`](super::PersonId).

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::name::{LongNamePolicy, ParsedName, ValidationError};

/// An individual with an immutable parsed name
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: ParsedName,
    created_at: DateTime<Utc>,
}

impl Person {
    /// Creates a person from a full name such as `"Ada Lovelace"`
    ///
    /// Fails with [`ValidationError::EmptyFullName`] for empty or
    /// whitespace-only input.
    pub fn new(full_name: &str) -> Result<Self, ValidationError> {
        Self::with_policy(full_name, LongNamePolicy::default())
    }

    /// Creates a person, applying `policy` to names of four or more tokens
    pub fn with_policy(full_name: &str, policy: LongNamePolicy) -> Result<Self, ValidationError> {
        Ok(Self::from_name(ParsedName::parse_with(full_name, policy)?))
    }

    /// Creates a person from an already parsed name
    pub fn from_name(name: ParsedName) -> Self {
        Self {
            name,
            created_at: Utc::now(),
        }
    }

    pub fn first_name(&self) -> &str {
        self.name.first()
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.name.middle()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.name.last()
    }

    /// Canonical full name (tokens joined by single spaces)
    pub fn full_name(&self) -> String {
        self.name.to_string()
    }

    pub fn name(&self) -> &ParsedName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Serialize for Person {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let field_count = 2 + usize::from(self.middle_name().is_some())
            + usize::from(self.last_name().is_some());
        let mut state = serializer.serialize_struct("Person", field_count)?;
        state.serialize_field("first_name", self.first_name())?;
        if let Some(middle) = self.middle_name() {
            state.serialize_field("middle_name", middle)?;
        }
        if let Some(last) = self.last_name() {
            state.serialize_field("last_name", last)?;
        }
        state.serialize_field("created_at", &self.created_at)?;
        state.end()
    }
}
