//! `tracing` subscriber for the `swhat` binary.
//!
//! `swhat-core` and `swhat-adapters` emit spans and events but never install
//! a subscriber; `main` calls [`init_logging`] once after argument parsing.
//! Everything goes to stderr so stdout carries only command output (template
//! bodies, listings, JSON).
//!
//! Default level is `warn`. Each `-v` steps through `info`, `debug` and
//! `trace`; `-q` drops to `error`. A set `RUST_LOG` replaces the computed
//! filter entirely.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Levels reached by repeating `-v`, starting from no flag.
const VERBOSITY_LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];

/// Crates whose events pass the computed filter.
const SWHAT_TARGETS: [&str; 3] = ["swhat", "swhat_core", "swhat_adapters"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(filter_directive(level_for(args)))
            .context("Invalid log filter directive")?,
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

fn level_for(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    let step = usize::from(args.verbose).min(VERBOSITY_LEVELS.len() - 1);
    VERBOSITY_LEVELS[step]
}

/// `swhat=<level>,swhat_core=<level>,...`
fn filter_directive(level: &str) -> String {
    SWHAT_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
