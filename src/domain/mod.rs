//! Domain models for crew
//!
//! Contains the core logic without any I/O concerns.

mod board;
mod id;
mod name;
mod person;
mod roster;

pub use board::{KanbanBoard, StatusSet, DEFAULT_STATUS};
pub use id::{IdError, PersonId};
pub use name::{LongNamePolicy, ParsedName, ValidationError};
pub use person::Person;
pub use roster::{Friendship, Roster, RosterError};
