//! Terminal rendering of diffs and findings.
//!
//! Colour goes through crossterm's [`Stylize`] so the same spans the core
//! renders as plain text come out green (inserted) and red (deleted).

use std::io::{self, IsTerminal, Write};

use crossterm::style::Stylize;
use goldfile_core::{DiffGranularity, DiffOp, PlaceholderMapping, TextDiff, VolatileValue};

use crate::args::ColorChoice;

/// Resolve `auto` against whether stdout is a terminal.
pub fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}

/// Write `diff` to `out`, coloured or as the core's plain rendering.
pub fn write_diff(out: &mut impl Write, diff: &TextDiff, color: bool) -> io::Result<()> {
    if !color {
        return writeln!(out, "{}", diff.render_plain());
    }
    match diff.granularity {
        DiffGranularity::Line => {
            for span in &diff.spans {
                for line in span.text.split('\n') {
                    match span.op {
                        DiffOp::Equal => writeln!(out, "  {line}")?,
                        DiffOp::Delete => writeln!(out, "{}", format!("- {line}").red())?,
                        DiffOp::Insert => writeln!(out, "{}", format!("+ {line}").green())?,
                    }
                }
            }
        }
        DiffGranularity::Word | DiffGranularity::Char => {
            let sep = diff.granularity.separator();
            for (idx, span) in diff.spans.iter().enumerate() {
                if idx > 0 {
                    write!(out, "{sep}")?;
                }
                match span.op {
                    DiffOp::Equal => write!(out, "{}", span.text)?,
                    DiffOp::Delete => write!(out, "{}", span.text.as_str().red().crossed_out())?,
                    DiffOp::Insert => write!(out, "{}", span.text.as_str().green().underlined())?,
                }
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// One line per volatile value: offset, class, text and (for UUIDs) the
/// placeholder it maps to.
pub fn write_findings(
    out: &mut impl Write,
    found: &[VolatileValue],
    mapping: &PlaceholderMapping,
) -> io::Result<()> {
    for value in found {
        match mapping.placeholder_for(&value.text) {
            Some(placeholder) => writeln!(
                out,
                "{:>8}  {:<8} {} -> {}",
                value.offset, value.class, value.text, placeholder
            )?,
            None => writeln!(out, "{:>8}  {:<8} {}", value.offset, value.class, value.text)?,
        }
    }
    Ok(())
}
