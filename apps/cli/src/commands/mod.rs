//! Command parsing and dispatch.
//!
//! Each command returns the text to print; logging goes to stderr.

mod backup;
mod notifications;
mod search;
mod seed;
mod summary;

use thiserror::Error;

use crate::main_lib::AppState;

pub const USAGE: &str = "\
Usage: fintrack <command>

Commands:
  seed [--force]     Write the demo dataset to the document store
  summary            Print balances, cashflow, budgets and goals
  search <query>     Search cards, goals, bills, transactions and budgets
  mark-all-read      Mark every unread notification as read
  backup <path>      Copy the database to <path>
  help               Show this message

Environment:
  FT_DB_PATH         SQLite database file (default ./data/fintrack.db)
  FT_LOG_FORMAT      text or json
  RUST_LOG           log filter (default info)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Seed { force: bool },
    Summary,
    Search { query: String },
    MarkAllRead,
    Backup { path: String },
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("No command given")]
    Missing,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Command '{command}' requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unexpected argument for '{command}': {argument}")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let (name, rest) = args.split_first().ok_or(CommandError::Missing)?;
        match name.as_str() {
            "seed" => match rest {
                [] => Ok(Command::Seed { force: false }),
                [flag] if flag == "--force" => Ok(Command::Seed { force: true }),
                [other, ..] => Err(CommandError::UnexpectedArgument {
                    command: "seed",
                    argument: other.clone(),
                }),
            },
            "summary" => no_arguments("summary", rest).map(|_| Command::Summary),
            "search" => {
                let query = rest.join(" ");
                if query.trim().is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "search",
                        argument: "a query",
                    });
                }
                Ok(Command::Search { query })
            }
            "mark-all-read" => no_arguments("mark-all-read", rest).map(|_| Command::MarkAllRead),
            "backup" => match rest {
                [path] => Ok(Command::Backup { path: path.clone() }),
                [] => Err(CommandError::MissingArgument {
                    command: "backup",
                    argument: "a destination path",
                }),
                [_, other, ..] => Err(CommandError::UnexpectedArgument {
                    command: "backup",
                    argument: other.clone(),
                }),
            },
            "help" | "--help" | "-h" => Ok(Command::Help),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn no_arguments(command: &'static str, rest: &[String]) -> Result<(), CommandError> {
    match rest.first() {
        None => Ok(()),
        Some(argument) => Err(CommandError::UnexpectedArgument {
            command,
            argument: argument.clone(),
        }),
    }
}

pub async fn run(command: &Command, state: &AppState) -> anyhow::Result<String> {
    match command {
        Command::Seed { force } => seed::run(state, *force).await,
        Command::Summary => summary::run(state).await,
        Command::Search { query } => search::run(state, query).await,
        Command::MarkAllRead => notifications::mark_all_read(state).await,
        Command::Backup { path } => backup::run(state, path),
        Command::Help => Ok(USAGE.to_string()),
    }
}
