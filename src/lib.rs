//! crew - people, friendships and kanban status boards
//!
//! Two independent in-memory models:
//! - [`Roster`]: people with parsed names and a symmetric friendship relation
//! - [`KanbanBoard`]: a named board with an ordered, duplicate-free set of statuses

pub mod cli;
pub mod config;
pub mod domain;

pub use domain::{
    KanbanBoard, LongNamePolicy, ParsedName, Person, PersonId, Roster, RosterError,
    ValidationError,
};
