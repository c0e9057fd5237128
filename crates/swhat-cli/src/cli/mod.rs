//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "swhat",
    bin_name = "swhat",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "swhat - Specification-driven development CLI",
    long_about = "swhat - Specification-driven development CLI\n\n\
                  Transform natural language feature descriptions into \
                  AI-implementable execution plans.",
    after_help = "EXAMPLES:\n\
        \x20 swhat init                 # install agent commands in the current directory\n\
        \x20 swhat template --list      # show available templates\n\
        \x20 swhat template plan        # print the plan template\n\
        \x20 swhat completions bash > /usr/share/bash-completion/completions/swhat",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Without one, help is printed.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install swhat's agent commands and skills into a project.
    #[command(
        about = "Initialize a project for swhat",
        after_help = "EXAMPLES:\n\
            \x20 swhat init               # current directory\n\
            \x20 swhat init ../other-repo # another directory (created if missing)\n\
            \x20 swhat init --dry-run     # preview without writing"
    )]
    Init(InitArgs),

    /// Print a template, or list them.
    #[command(
        about = "Print a template or list available templates",
        after_help = "EXAMPLES:\n\
            \x20 swhat template                   # list templates\n\
            \x20 swhat template specification     # print one template\n\
            \x20 swhat template PLAN > plan.md    # names are case-insensitive"
    )]
    Template(TemplateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 swhat completions bash > ~/.local/share/bash-completion/completions/swhat\n\
            \x20 swhat completions zsh  > ~/.zfunc/_swhat\n\
            \x20 swhat completions fish > ~/.config/fish/completions/swhat.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the swhat configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 swhat config show\n\
            \x20 swhat config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `swhat init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to initialise. Defaults to the current directory.
    #[arg(value_name = "DIR", help = "Target directory (default: current directory)")]
    pub dir: Option<PathBuf>,

    /// Report what would change without writing anything.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── template ──────────────────────────────────────────────────────────────────

/// Arguments for `swhat template`.
#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Template name, matched case-insensitively.
    #[arg(value_name = "NAME", help = "Template to print")]
    pub name: Option<String>,

    /// List templates even when a name is given.
    #[arg(short = 'l', long = "list", help = "List available templates")]
    pub list: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `swhat completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `swhat config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
