// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use goldfile_core::{
    compare, normalize_bytes_with, patterns, Actual, GoldenError, PlaceholderMapping,
    VolatileKind,
};

use crate::args::{CheckArgs, Command, FindArgs, NormalizeArgs};
use crate::render;

/// How a command finished, when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Match,
    /// Only `check` produces this.
    Mismatch,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Match => ExitCode::SUCCESS,
            Outcome::Mismatch => ExitCode::FAILURE,
        }
    }
}

/// Execute a parsed [`Command`], writing results to `out`.
pub fn execute(cmd: Command, out: &mut impl Write) -> anyhow::Result<Outcome> {
    match cmd {
        Command::Check(args) => check(args, out),
        Command::Normalize(args) => normalize(args, out),
        Command::Find(args) => find(args, out),
    }
}

fn check(args: CheckArgs, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let opts = args.options();
    let input = read_input(args.input.as_deref())?;

    let result = if args.json {
        let value: serde_json::Value = serde_json::from_slice(&input)
            .context("input is not valid JSON (drop --json to compare raw text)")?;
        compare(&args.golden, Actual::structured(&value), &opts, args.update)
    } else {
        compare(&args.golden, &input, &opts, args.update)
    };

    match result {
        Ok(()) => {
            tracing::debug!(golden = %args.golden.display(), "golden file matches");
            writeln!(out, "ok: {}", args.golden.display())?;
            Ok(Outcome::Match)
        }
        Err(GoldenError::Mismatch { path, diff }) => {
            writeln!(
                out,
                "mismatch of actual output and golden-file {}:",
                path.display()
            )?;
            render::write_diff(out, &diff, render::use_color(args.color))?;
            Ok(Outcome::Mismatch)
        }
        Err(err) => Err(err.into()),
    }
}

fn normalize(args: NormalizeArgs, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let input = read_input(args.input.as_deref())?;
    let normalized = normalize_bytes_with(&input, &args.agnostic.options())?;
    out.write_all(&normalized)?;
    Ok(Outcome::Match)
}

fn find(args: FindArgs, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let input = read_input(args.input.as_deref())?;
    let kind = VolatileKind::from(args.kind);
    let found = patterns::find(&input, kind)?;
    let mapping = match kind {
        VolatileKind::Uuid => PlaceholderMapping::from_text(&input)?,
        VolatileKind::Timestamp => PlaceholderMapping::default(),
    };
    tracing::debug!(%kind, count = found.len(), "volatile values found");
    render::write_findings(out, &found, &mapping)?;
    Ok(Outcome::Match)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read(p).with_context(|| format!("reading input {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}
