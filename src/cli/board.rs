//! Board command

use anyhow::Result;
use tracing::debug;

use super::output::Output;
use crate::config::BoardConfig;

/// Seeds a board from config, applies adds then removes, and prints it
pub fn run(output: &Output, config: &BoardConfig, name: &str, add: &[String], remove: &[String]) -> Result<()> {
    let mut board = config.new_board(name);
    debug!(board = name, seeded = board.statuses().len(), "created board");

    for label in add {
        board.add_status(label.as_str());
    }
    for label in remove {
        board.remove_status(label);
    }

    if output.is_json() {
        output.data(&board);
    } else if board.statuses().is_empty() {
        output.success(&format!("{}: no statuses", board.name()));
    } else {
        for (position, status) in board.statuses().iter().enumerate() {
            output.row(&[(position + 1).to_string().as_str(), status]);
        }
    }

    Ok(())
}
