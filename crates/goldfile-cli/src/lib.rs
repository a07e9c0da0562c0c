//! goldfile CLI: command-line shell around goldfile-core.
//!
//! `check` compares a file (or stdin) with a golden file and prints a
//! coloured diff on mismatch, `normalize` prints text with volatile values
//! replaced, and `find` lists the volatile values a text contains.

pub mod args;
pub mod commands;
pub mod render;

use std::io;
use std::process::ExitCode;

pub use args::Cli;
pub use commands::Outcome;

/// Run a parsed [`Cli`] against stdout.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = commands::execute(cli.command, &mut out)?;
    Ok(outcome.into())
}
