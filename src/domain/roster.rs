//! Roster of people and their friendships
//!
//! The roster owns every [`Person`] and hands out [`PersonId`] handles.
//! Friendship is stored as a single undirected edge per pair, so both
//! sides of the relation always agree. Uses petgraph for the adjacency
//! structure.

use chrono::{DateTime, Utc};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::{debug, trace};

use super::id::PersonId;
use super::name::{LongNamePolicy, ValidationError};
use super::person::Person;

#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("A person cannot befriend themselves: {0}")]
    SelfFriendship(PersonId),

    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
}

/// Edge weight for a friendship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Friendship {
    /// When the friendship was first established
    pub since: DateTime<Utc>,
}

/// Arena of people with a symmetric friendship relation
#[derive(Debug)]
pub struct Roster {
    /// People by handle
    people: BTreeMap<PersonId, Person>,

    /// Undirected friendship graph; node weights are person handles
    graph: UnGraph<PersonId, Friendship>,

    /// Map from PersonId to node index
    node_map: HashMap<PersonId, NodeIndex>,

    /// Next handle sequence to issue
    next_sequence: u64,

    /// Policy used by [`Roster::create_person`]
    policy: LongNamePolicy,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Creates an empty roster
    pub fn new() -> Self {
        Self::with_policy(LongNamePolicy::default())
    }

    /// Creates an empty roster that parses names with `policy`
    pub fn with_policy(policy: LongNamePolicy) -> Self {
        Self {
            people: BTreeMap::new(),
            graph: UnGraph::new_undirected(),
            node_map: HashMap::new(),
            next_sequence: 1,
            policy,
        }
    }

    pub fn policy(&self) -> LongNamePolicy {
        self.policy
    }

    /// Parses `full_name` and adds the resulting person
    pub fn create_person(&mut self, full_name: &str) -> Result<PersonId, ValidationError> {
        let person = Person::with_policy(full_name, self.policy)?;
        Ok(self.insert(person))
    }

    /// Adds an already constructed person and returns its handle
    pub fn insert(&mut self, person: Person) -> PersonId {
        let id = PersonId::from_sequence(self.next_sequence);
        self.next_sequence += 1;

        trace!(%id, name = %person.name(), "adding person");
        let idx = self.graph.add_node(id);
        self.node_map.insert(id, idx);
        self.people.insert(id, person);
        id
    }

    /// Removes a person along with all of their friendships
    pub fn remove_person(&mut self, id: PersonId) -> Option<Person> {
        let idx = self.node_map.remove(&id)?;
        self.graph.remove_node(idx);
        // petgraph moves the last node into the freed index
        self.rebuild_node_map();
        debug!(%id, "removed person");
        self.people.remove(&id)
    }

    /// Rebuilds the node map after removal
    fn rebuild_node_map(&mut self) {
        self.node_map.clear();
        for idx in self.graph.node_indices() {
            if let Some(id) = self.graph.node_weight(idx) {
                self.node_map.insert(*id, idx);
            }
        }
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.people.contains_key(&id)
    }

    /// Returns the number of people
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Returns all handles in ascending order
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.people.keys().copied()
    }

    /// Iterates over people in handle order
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.people.iter().map(|(id, person)| (*id, person))
    }

    fn node(&self, id: PersonId) -> Result<NodeIndex, RosterError> {
        self.node_map
            .get(&id)
            .copied()
            .ok_or(RosterError::PersonNotFound(id))
    }

    /// Makes `a` and `b` friends of each other
    ///
    /// Returns `Ok(false)` if they were already friends.
    pub fn add_friend(&mut self, a: PersonId, b: PersonId) -> Result<bool, RosterError> {
        if a == b {
            return Err(RosterError::SelfFriendship(a));
        }

        let a_idx = self.node(a)?;
        let b_idx = self.node(b)?;

        if self.graph.find_edge(a_idx, b_idx).is_some() {
            trace!(%a, %b, "already friends");
            return Ok(false);
        }

        self.graph
            .add_edge(a_idx, b_idx, Friendship { since: Utc::now() });
        debug!(%a, %b, "added friendship");
        Ok(true)
    }

    /// Ends the friendship between `a` and `b`
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn remove_friend(&mut self, a: PersonId, b: PersonId) -> bool {
        let (Ok(a_idx), Ok(b_idx)) = (self.node(a), self.node(b)) else {
            return false;
        };

        match self.graph.find_edge(a_idx, b_idx) {
            Some(edge) => {
                self.graph.remove_edge(edge);
                debug!(%a, %b, "removed friendship");
                true
            }
            None => false,
        }
    }

    /// Returns the friends of a person in ascending handle order
    pub fn friends(&self, id: PersonId) -> Vec<PersonId> {
        let idx = match self.node_map.get(&id) {
            Some(idx) => *idx,
            None => return vec![],
        };

        let mut friends: Vec<PersonId> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n).copied())
            .collect();
        friends.sort();
        friends
    }

    pub fn are_friends(&self, a: PersonId, b: PersonId) -> bool {
        self.friendship(a, b).is_some()
    }

    /// Returns the friendship between `a` and `b`, if any
    pub fn friendship(&self, a: PersonId, b: PersonId) -> Option<&Friendship> {
        let a_idx = *self.node_map.get(&a)?;
        let b_idx = *self.node_map.get(&b)?;
        let edge = self.graph.find_edge(a_idx, b_idx)?;
        self.graph.edge_weight(edge)
    }

    /// Returns the number of friendships (each pair counted once)
    pub fn friendship_count(&self) -> usize {
        self.graph.edge_count()
    }
}
