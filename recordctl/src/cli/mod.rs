//! CLI module - Command-line interface for the record store.

pub mod args;

pub use args::{Cli, Commands, RecordCommand};
