//! Command-line arguments for the `goldfile` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use goldfile_core::{CompareOptions, DiffGranularity, VolatileKind};

#[derive(Debug, Parser)]
#[command(
    name = "goldfile",
    about = "Compare output against golden files, ignoring UUIDs and timestamps"
)]
pub struct Cli {
    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare INPUT (or stdin) with a golden file.
    Check(CheckArgs),
    /// Print INPUT (or stdin) with volatile values replaced.
    Normalize(NormalizeArgs),
    /// List the volatile values found in INPUT (or stdin).
    Find(FindArgs),
}

/// Which volatile values to neutralize.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct AgnosticArgs {
    /// Replace UUIDs with sequential placeholders.
    #[arg(long)]
    pub uuid_agnostic: bool,
    /// Collapse RFC3339 / RFC7232 timestamps.
    #[arg(long)]
    pub datetime_agnostic: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Golden file to compare against.
    pub golden: PathBuf,
    /// Actual output; `-` or omitted reads stdin.
    pub input: Option<PathBuf>,
    /// Rewrite the golden file from INPUT first.
    #[arg(long)]
    pub update: bool,
    #[command(flatten)]
    pub agnostic: AgnosticArgs,
    /// Parse INPUT as JSON and compare its indented rendering.
    #[arg(long)]
    pub json: bool,
    /// Diff token size.
    #[arg(long, value_enum, default_value_t = GranularityArg::Line)]
    pub granularity: GranularityArg,
    /// When to colour the diff.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to normalize; `-` or omitted reads stdin.
    pub input: Option<PathBuf>,
    #[command(flatten)]
    pub agnostic: AgnosticArgs,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Text to scan; `-` or omitted reads stdin.
    pub input: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub kind: KindArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GranularityArg {
    Line,
    Word,
    Char,
}

impl From<GranularityArg> for DiffGranularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Line => DiffGranularity::Line,
            GranularityArg::Word => DiffGranularity::Word,
            GranularityArg::Char => DiffGranularity::Char,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Uuid,
    Timestamp,
}

impl From<KindArg> for VolatileKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Uuid => VolatileKind::Uuid,
            KindArg::Timestamp => VolatileKind::Timestamp,
        }
    }
}

impl AgnosticArgs {
    pub fn options(self) -> CompareOptions {
        CompareOptions {
            uuid_agnostic: self.uuid_agnostic,
            datetime_agnostic: self.datetime_agnostic,
            ..CompareOptions::default()
        }
    }
}

impl CheckArgs {
    pub fn options(&self) -> CompareOptions {
        CompareOptions {
            serialize_as_structured: self.json,
            granularity: Some(self.granularity.into()),
            ..self.agnostic.options()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_flags_map_to_options() {
        let cli = Cli::parse_from([
            "goldfile",
            "check",
            "a.golden",
            "out.json",
            "--json",
            "--uuid-agnostic",
            "--granularity",
            "word",
        ]);
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        let opts = args.options();
        assert!(opts.serialize_as_structured);
        assert!(opts.uuid_agnostic);
        assert!(!opts.datetime_agnostic);
        assert_eq!(opts.granularity, Some(DiffGranularity::Word));
        assert_eq!(args.color, ColorChoice::Auto);
        assert!(!args.update);
    }

    #[test]
    fn find_requires_kind() {
        assert!(Cli::try_parse_from(["goldfile", "find", "x.txt"]).is_err());
        let cli = Cli::try_parse_from(["goldfile", "--debug", "find", "--kind", "uuid"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Find(FindArgs { kind: KindArg::Uuid, input: None })));
    }
}
