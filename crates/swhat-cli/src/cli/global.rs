//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

/// Flattened into [`super::Cli`]; every field is `global = true`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show more log output (-v, -vv, -vvv)",
        long_help = "Show more log output on stderr.
    -v      info: start and end of each sync
    -vv     debug: one event per installed path
    -vvv    trace: every filesystem call
RUST_LOG overrides this."
    )]
    pub verbose: u8,

    /// Status lines only. Template bodies, listings and JSON still print.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Hide status lines"
    )]
    pub quiet: bool,

    /// Set by `--no-color` or a non-empty `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format` from config, then to TTY detection.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to render results"
    )]
    pub output_format: OutputFormat,
}

/// Rendering for command results. Also the `output.format` config value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colored status lines.
    Human,
    /// No ANSI codes.
    Plain,
    /// One JSON document on stdout.
    Json,
}
