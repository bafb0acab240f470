//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use common::Backend;
use domain::DEFAULT_TABLE;

/// recordctl - Read and write records through a repository backend
#[derive(Parser, Debug)]
#[command(name = "recordctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backing store (memory data does not outlive the process)
    #[arg(short, long, global = true, env = "STORE_BACKEND")]
    pub backend: Option<Backend>,

    /// Table (collection) to operate on
    #[arg(short, long, global = true, default_value = DEFAULT_TABLE, env = "RECORD_TABLE")]
    pub table: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Record(RecordCommand),

    /// Save, update, read back and delete a sample user
    Demo,
}

/// Commands that operate on the selected table
#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// Print a record, or null if absent
    Get {
        /// Record identifier
        id: String,
    },

    /// Print several records in order; fails if any is absent
    GetMany {
        /// Record identifiers
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Insert or overwrite a record given as a JSON object with an "id"
    Save {
        /// Record JSON
        json: String,
    },

    /// Deep-merge a partial JSON object onto the stored record
    Update {
        /// Partial record JSON (must include "id")
        json: String,
    },

    /// Delete a record (absent records are not an error)
    Delete {
        /// Record identifier
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_subcommands_parse_into_record_command() {
        let cli = Cli::try_parse_from(["recordctl", "get", "d1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Record(RecordCommand::Get { ref id }) if id == "d1"
        ));
    }

    #[test]
    fn test_demo_parses_separately() {
        let cli = Cli::try_parse_from(["recordctl", "demo"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo));
    }

    #[test]
    fn test_get_many_requires_ids() {
        assert!(Cli::try_parse_from(["recordctl", "get-many"]).is_err());
    }
}
