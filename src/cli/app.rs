//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use super::friends::NamePair;
use super::output::{Output, OutputFormat};
use super::{board, friends, logging, name};
use crate::config::Config;
use crate::domain::LongNamePolicy;

#[derive(Parser)]
#[command(name = "crew")]
#[command(author, version, about = "People, friendships and kanban status boards")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true, env = "CREW_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a full name into first, middle and last name
    Name {
        /// Full name, e.g. "Madonna Louise Cicone"
        full_name: String,

        /// Reject names with more than three parts
        #[arg(long)]
        reject_long: bool,
    },

    /// Build friendships between people and list them
    Friends {
        /// Make two people friends ("NAME=NAME", repeatable)
        #[arg(long = "pair", value_name = "NAME=NAME")]
        pairs: Vec<NamePair>,

        /// End a friendship, applied after all pairs ("NAME=NAME", repeatable)
        #[arg(long = "unpair", value_name = "NAME=NAME")]
        unpairs: Vec<NamePair>,
    },

    /// Build a kanban board and list its statuses
    Board {
        /// Board name
        name: String,

        /// Status to add (repeatable)
        #[arg(long, value_name = "STATUS")]
        add: Vec<String>,

        /// Status to remove, applied after all adds (repeatable)
        #[arg(long, value_name = "STATUS")]
        remove: Vec<String>,
    },

    /// Show the effective configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;
    debug!(project_root = ?config.project_root, "configuration loaded");

    let output = Output::new(cli.format.unwrap_or(config.global.default_format));

    dispatch(cli.command, &config, &output)
}

fn dispatch(command: Commands, config: &Config, output: &Output) -> Result<()> {
    match command {
        Commands::Name {
            full_name,
            reject_long,
        } => {
            let policy = if reject_long {
                LongNamePolicy::Reject
            } else {
                config.project.names.long_name_policy
            };
            name::run(output, &full_name, policy)
        }

        Commands::Friends { pairs, unpairs } => {
            friends::run(output, config.project.names.new_roster(), &pairs, &unpairs)
        }

        Commands::Board { name, add, remove } => {
            board::run(output, &config.project.board, &name, &add, &remove)
        }

        Commands::Config => {
            if output.is_json() {
                output.data(config);
            } else {
                let statuses = config.project.board.default_statuses.join(", ");
                let root = config
                    .project_root
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "-".to_string());
                output.row(&["project_root", root.as_str()]);
                output.row(&["board.default_statuses", statuses.as_str()]);
                output.row(&[
                    "names.long_name_policy",
                    config.project.names.long_name_policy.as_str(),
                ]);
            }
            Ok(())
        }
    }
}
