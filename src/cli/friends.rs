//! Friendship command
//!
//! Builds a roster from `A=B` pairs, one person per distinct full name,
//! then applies every `--pair` followed by every `--unpair`.

use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::debug;

use super::output::Output;
use crate::domain::{ParsedName, Person, PersonId, Roster};

/// A pair of full names given as `A=B`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub left: String,
    pub right: String,
}

impl std::str::FromStr for NamePair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((left, right)) => Ok(Self {
                left: left.trim().to_string(),
                right: right.trim().to_string(),
            }),
            None => Err(format!("Expected 'NAME=NAME', got '{}'", s)),
        }
    }
}

/// Roster plus a lookup from canonical full name to handle
struct NamedRoster {
    roster: Roster,
    by_name: HashMap<String, PersonId>,
}

impl NamedRoster {
    fn new(roster: Roster) -> Self {
        Self {
            roster,
            by_name: HashMap::new(),
        }
    }

    fn resolve(&mut self, full_name: &str) -> Result<PersonId> {
        let name = ParsedName::parse_with(full_name, self.roster.policy())
            .with_context(|| format!("Invalid person '{}'", full_name))?;

        // Same canonical name means same person
        let canonical = name.to_string();
        if let Some(id) = self.by_name.get(&canonical) {
            return Ok(*id);
        }

        let id = self.roster.insert(Person::from_name(name));
        self.by_name.insert(canonical, id);
        Ok(id)
    }

    fn name_of(&self, id: PersonId) -> String {
        self.roster
            .person(id)
            .map(|p| p.full_name())
            .unwrap_or_else(|| id.to_string())
    }
}

pub fn run(output: &Output, roster: Roster, pairs: &[NamePair], unpairs: &[NamePair]) -> Result<()> {
    let mut named = NamedRoster::new(roster);

    for pair in pairs {
        let a = named.resolve(&pair.left)?;
        let b = named.resolve(&pair.right)?;
        let added = named
            .roster
            .add_friend(a, b)
            .with_context(|| format!("Cannot pair '{}' with '{}'", pair.left, pair.right))?;
        debug!(left = %pair.left, right = %pair.right, added, "pair");
    }

    for pair in unpairs {
        let a = named.resolve(&pair.left)?;
        let b = named.resolve(&pair.right)?;
        let removed = named.roster.remove_friend(a, b);
        debug!(left = %pair.left, right = %pair.right, removed, "unpair");
    }

    let roster = &named.roster;
    if output.is_json() {
        let people: Vec<_> = roster
            .iter()
            .map(|(id, person)| {
                let friends: Vec<String> =
                    roster.friends(id).into_iter().map(|f| named.name_of(f)).collect();
                serde_json::json!({
                    "id": id,
                    "name": person.full_name(),
                    "person": person,
                    "friends": friends,
                })
            })
            .collect();
        output.data(&people);
    } else if roster.is_empty() {
        output.success("No people");
    } else {
        for (id, person) in roster.iter() {
            let friends: Vec<String> =
                roster.friends(id).into_iter().map(|f| named.name_of(f)).collect();
            let friends = if friends.is_empty() {
                "-".to_string()
            } else {
                friends.join(", ")
            };
            output.row(&[id.to_string().as_str(), person.full_name().as_str(), friends.as_str()]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair() {
        let pair: NamePair = "John Lennon = Paul McCartney".parse().unwrap();
        assert_eq!(pair.left, "John Lennon");
        assert_eq!(pair.right, "Paul McCartney");
    }

    #[test]
    fn parse_pair_without_separator() {
        assert!("John Lennon".parse::<NamePair>().is_err());
    }

    #[test]
    fn resolve_reuses_canonical_names() {
        let mut named = NamedRoster::new(Roster::new());
        let a = named.resolve("John Lennon").unwrap();
        let b = named.resolve("  John   Lennon ").unwrap();
        let c = named.resolve("Paul McCartney").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(named.roster.len(), 2);
    }

    #[test]
    fn resolve_rejects_empty_name() {
        let mut named = NamedRoster::new(Roster::new());
        let err = named.resolve("").unwrap_err();
        assert!(format!("{:#}", err).contains("fullName cannot be an empty string"));
    }
}
