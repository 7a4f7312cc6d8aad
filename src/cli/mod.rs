//! # Command-Line Interface
//!
//! User-facing commands over the in-memory domain model. Nothing is
//! persisted between invocations; each command builds its own roster or
//! board from its arguments.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `name` | Parse a full name |
//! | `friends` | Pair and unpair people, list friendships |
//! | `board` | Add and remove statuses on a board |
//! | `config` | Show effective configuration |
//!
//! All commands support `--format text|json` and `--verbose`.
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod board;
mod friends;
mod logging;
mod name;
mod output;

pub use app::{run, Cli, Commands};
pub use friends::NamePair;
pub use output::{Output, OutputFormat};
