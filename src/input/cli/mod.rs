//! Command line input: argument parsing and the command that runs it.

pub mod args;
pub mod commands;

pub use args::{CliArgs, CliCommand, build_command, parse_args_from};
pub use commands::run_cli::{CliError, RunCliCommand};
