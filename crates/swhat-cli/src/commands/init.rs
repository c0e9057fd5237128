//! `swhat init`: install agent commands and skills into a project.

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use swhat_adapters::{DryRunFilesystem, LocalFilesystem, builtin};
use swhat_core::{
    application::{Filesystem, SyncService},
    domain::{AssetKind, BackendTarget, NodeKind, SyncReport, WriteAction, WriteResult},
    error::SwhatError,
};

use crate::{
    cli::InitArgs,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Machine-readable form of an init run.
#[derive(Debug, Serialize)]
struct InitOutput<'a> {
    root: &'a Path,
    dry_run: bool,
    created: usize,
    updated: usize,
    skipped: usize,
    results: &'a [WriteResult],
}

/// Execute the `swhat init` command.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.dir)?;
    debug!(root = %root.display(), "Target directory resolved");

    if !output.is_json() {
        output.header(&format!("Initializing swhat in {}...", root.display()))?;
    }

    let filesystem: Box<dyn Filesystem> = if args.dry_run {
        Box::new(DryRunFilesystem::new(LocalFilesystem::new()))
    } else {
        Box::new(LocalFilesystem::new())
    };
    let assets = builtin::asset_registry().map_err(SwhatError::from)?;
    let report = SyncService::new(assets, filesystem).sync(&root)?;

    if output.is_json() {
        output.json(&InitOutput {
            root: &root,
            dry_run: args.dry_run,
            created: report.created(),
            updated: report.updated(),
            skipped: report.skipped(),
            results: report.results(),
        })?;
        return Ok(());
    }

    let colored = output.supports_color();
    for result in report.results() {
        output.print(&format_result(result, colored))?;
    }

    output.print("")?;
    if args.dry_run {
        output.warning(&format!(
            "Dry run: {} (nothing was written)",
            format_summary(&report)
        ))?;
        return Ok(());
    }

    output.success(&format!("Initialization complete! {}", format_summary(&report)))?;
    output.print("")?;
    for line in installed_guide() {
        output.print(&line)?;
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn resolve_root(dir: Option<PathBuf>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().with_cli_context(|| "Failed to read current directory"),
    }
}

/// One status line, e.g. `  Created .claude/commands/swhat.plan.md`.
pub fn format_result(result: &WriteResult, colored: bool) -> String {
    let mut path = result.path.to_string();
    if result.kind == NodeKind::Directory {
        path.push('/');
    }

    let line = match result.action {
        WriteAction::Skipped => format!("{} {} (already exists)", result.action, path),
        action => format!("{} {}", action, path),
    };

    if !colored {
        return format!("  {line}");
    }
    match result.action {
        WriteAction::Created => format!("  {}", line.green()),
        WriteAction::Updated => format!("  {}", line.yellow()),
        WriteAction::Skipped => format!("  {}", line.dimmed()),
    }
}

/// `N created, M updated, K skipped`.
pub fn format_summary(report: &SyncReport) -> String {
    format!(
        "{} created, {} updated, {} skipped",
        report.created(),
        report.updated(),
        report.skipped()
    )
}

/// How to use what was just installed, per backend.
pub fn installed_guide() -> Vec<String> {
    let targets = BackendTarget::all();
    let label_width = targets
        .iter()
        .map(|t| t.backend.display_name().len() + 1)
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Commands installed:".to_string()];
    for target in &targets {
        let label = format!("{}:", target.backend.display_name());
        for (i, kind) in AssetKind::ALL
            .into_iter()
            .filter(|k| *k != AssetKind::FeatureSkill)
            .enumerate()
        {
            let hint = if kind == AssetKind::SpecifyCommand {
                " <feature description>"
            } else {
                ""
            };
            let prefix = if i == 0 { label.as_str() } else { "" };
            lines.push(format!(
                "  {prefix:<label_width$} /{}{hint}",
                target.command_name(kind)
            ));
        }
    }

    lines.push(String::new());
    lines.push("Skills installed (auto-activate on feature requests):".into());
    lines.push("  swhat-feature-workflow - guides a feature from spec to tasks".into());
    lines
}
