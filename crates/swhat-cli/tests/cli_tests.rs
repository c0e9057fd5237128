//! Integration tests for the `swhat` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PLAN_TEMPLATE: &str = include_str!("../../swhat-adapters/assets/templates/plan.md");
const SPECIFICATION_TEMPLATE: &str =
    include_str!("../../swhat-adapters/assets/templates/specification.md");

const SORTED_TEMPLATES: [&str; 4] = ["plan", "specification", "specification-checklist", "tasks"];

const DOCUMENTS: [&str; 8] = [
    ".claude/commands/swhat.specify.md",
    ".claude/commands/swhat.plan.md",
    ".claude/commands/swhat.tasks.md",
    ".claude/skills/swhat-feature-workflow/SKILL.md",
    ".roo/commands/swhat-specify.md",
    ".roo/commands/swhat-plan.md",
    ".roo/commands/swhat-tasks.md",
    ".roo/skills/swhat-feature-workflow/SKILL.md",
];

fn swhat(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("swhat").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("SWHAT_OUTPUT__FORMAT")
        .env_remove("SWHAT_OUTPUT__NO_COLOR");
    cmd
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    swhat(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Specification-driven development"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    swhat(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "swhat {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_no_subcommand_prints_help() {
    let temp = TempDir::new().unwrap();
    swhat(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let temp = TempDir::new().unwrap();
    swhat(temp.path())
        .args(["template", "--bogus"])
        .assert()
        .code(2);
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn test_init_empty_directory() {
    let temp = TempDir::new().unwrap();

    let mut assert = swhat(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initializing swhat in"))
        .stdout(predicate::str::contains("  Created .swhat/"))
        .stdout(predicate::str::contains("9 created, 0 updated, 0 skipped"))
        .stdout(predicate::str::contains("/swhat.specify <feature description>"))
        .stdout(predicate::str::contains("/swhat-specify <feature description>"));

    for doc in DOCUMENTS {
        assert = assert.stdout(predicate::str::contains(format!("  Created {doc}")));
        assert!(temp.path().join(doc).is_file(), "{doc} missing");
    }
    assert!(temp.path().join(".swhat").is_dir());
}

#[test]
fn test_init_twice_skips_marker_and_updates_documents() {
    let temp = TempDir::new().unwrap();
    swhat(temp.path()).arg("init").assert().success();

    let mut assert = swhat(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  Skipped .swhat/ (already exists)",
        ))
        .stdout(predicate::str::contains("0 created, 8 updated, 1 skipped"));

    for doc in DOCUMENTS {
        assert = assert.stdout(predicate::str::contains(format!("  Updated {doc}")));
    }
}

#[test]
fn test_init_restores_edited_document() {
    let temp = TempDir::new().unwrap();
    swhat(temp.path()).arg("init").assert().success();

    let edited = temp.path().join(".claude/commands/swhat.plan.md");
    let original = fs::read_to_string(&edited).unwrap();
    fs::write(&edited, "local changes").unwrap();

    swhat(temp.path()).arg("init").assert().success();
    assert_eq!(fs::read_to_string(&edited).unwrap(), original);
}

#[test]
fn test_init_keeps_workspace_contents() {
    let temp = TempDir::new().unwrap();
    let notes = temp.path().join(".swhat/feature/spec.md");
    fs::create_dir_all(notes.parent().unwrap()).unwrap();
    fs::write(&notes, "work in progress").unwrap();

    swhat(temp.path()).arg("init").assert().success();
    assert_eq!(fs::read_to_string(&notes).unwrap(), "work in progress");
}

#[test]
fn test_init_into_new_directory() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["init", "nested/project"])
        .assert()
        .success();

    assert!(temp.path().join("nested/project/.swhat").is_dir());
    assert!(temp.path().join("nested/project").join(DOCUMENTS[5]).is_file());
}

#[test]
fn test_init_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["init", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Created .swhat/"))
        .stdout(predicate::str::contains("Dry run"));

    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_init_quiet_still_writes() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["init", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join(DOCUMENTS[0]).is_file());
}

#[test]
fn test_init_conflict_exits_one() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".swhat"), "a file").unwrap();

    swhat(temp.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Path conflict"));

    assert!(!temp.path().join(".claude").exists());
}

#[test]
fn test_init_json_report() {
    let temp = TempDir::new().unwrap();

    let output = swhat(temp.path())
        .args(["--output-format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["created"], 9);
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["results"][0]["path"], ".swhat");
    assert_eq!(report["results"][0]["action"], "created");
    assert_eq!(report["results"][1]["origin"]["backend"], "claude");
}

// ── template ──────────────────────────────────────────────────────────────────

#[test]
fn test_template_specification_prints_stored_content() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["template", "specification"])
        .assert()
        .success()
        .stdout(predicate::eq(SPECIFICATION_TEMPLATE))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_template_prints_content_case_insensitively() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["template", "PLAN"])
        .assert()
        .success()
        .stdout(predicate::eq(PLAN_TEMPLATE));
}

#[test]
fn test_template_unknown_name() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["template", "bogus-name"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Template not found: bogus-name"))
        .stderr(predicate::str::contains("WARN").not())
        .stderr(predicate::str::contains("--verbose").not());
}

#[test]
fn test_template_unknown_name_lists_every_template_on_stderr() {
    let temp = TempDir::new().unwrap();

    let output = swhat(temp.path())
        .args(["template", "bogus-name"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let rows: Vec<&str> = stderr
        .lines()
        .skip_while(|line| line.trim() != "Available templates:")
        .skip(1)
        .take_while(|line| !line.trim().is_empty())
        .collect();
    let names: Vec<&str> = rows
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, SORTED_TEMPLATES);
    assert!(rows[0].ends_with("Implementation plan template"));
    assert!(rows[3].ends_with("Task list template for implementation"));
}

#[test]
fn test_template_list_is_sorted() {
    let temp = TempDir::new().unwrap();

    let output = swhat(temp.path())
        .args(["template", "--list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, SORTED_TEMPLATES);
    assert!(stdout.starts_with("Available templates:"));
    assert!(stdout.contains("Spec quality validation checklist"));
}

#[test]
fn test_template_without_name_lists() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available templates:"))
        .stdout(predicate::str::contains("tasks"));
}

#[test]
fn test_template_list_flag_beats_name() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["template", "plan", "-l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available templates:"));
}

#[test]
fn test_template_listing_survives_quiet() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["-q", "template", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("specification"));
}

#[test]
fn test_template_json_listing() {
    let temp = TempDir::new().unwrap();

    let output = swhat(temp.path())
        .args(["template", "--list", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(4));
    assert_eq!(rows[0]["name"], "plan");
    assert_eq!(rows[0]["description"], "Implementation plan template");
}

// ── completions / config ──────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("swhat"));
}

#[test]
fn test_config_show_reads_environment() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["config", "show"])
        .env("SWHAT_OUTPUT__NO_COLOR", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("no_color = true"));
}

#[test]
fn test_config_explicit_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    swhat(temp.path())
        .args(["--config", "missing.toml", "config", "show"])
        .assert()
        .code(1);
}
