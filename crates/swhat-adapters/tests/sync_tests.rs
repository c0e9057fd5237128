//! Sync engine against real directories with the compiled-in documents.

use std::fs;
use std::path::Path;

use swhat_adapters::{DryRunFilesystem, LocalFilesystem, MemoryFilesystem, builtin};
use swhat_core::{
    application::{ApplicationError, Filesystem, PathState, SyncService},
    domain::{AssetKind, Backend, NodeKind, SyncReport, WriteAction},
    error::SwhatError,
};
use tempfile::TempDir;

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

fn service() -> SyncService {
    SyncService::new(
        builtin::asset_registry().unwrap(),
        Box::new(LocalFilesystem::new()),
    )
}

fn actions(report: &SyncReport) -> Vec<WriteAction> {
    report.results().iter().map(|r| r.action).collect()
}

#[test]
fn empty_directory_gets_everything_created() {
    let temp = TempDir::new().unwrap();
    let report = service().sync(temp.path()).unwrap();

    assert_eq!(report.len(), 1 + DOCUMENTS.len());
    assert!(actions(&report).iter().all(|a| *a == WriteAction::Created));
    assert_eq!(report.results()[0].path.to_string(), ".swhat");
    assert_eq!(report.results()[0].kind, NodeKind::Directory);

    assert!(temp.path().join(".swhat").is_dir());
    let assets = builtin::asset_registry().unwrap();
    let mut expected = Vec::new();
    for backend in Backend::ALL {
        for kind in AssetKind::ALL {
            expected.push(assets.content(backend, kind));
        }
    }
    for (path, content) in DOCUMENTS.iter().zip(expected) {
        assert_eq!(fs::read_to_string(temp.path().join(path)).unwrap(), content);
    }
}

#[test]
fn result_paths_follow_manifest_order() {
    let temp = TempDir::new().unwrap();
    let report = service().sync(temp.path()).unwrap();

    let paths: Vec<String> = report
        .results()
        .iter()
        .skip(1)
        .map(|r| r.path.to_string())
        .collect();
    assert_eq!(paths, DOCUMENTS);
}

#[test]
fn second_run_skips_marker_and_updates_documents() {
    let temp = TempDir::new().unwrap();
    service().sync(temp.path()).unwrap();
    let report = service().sync(temp.path()).unwrap();

    assert_eq!(report.results()[0].action, WriteAction::Skipped);
    assert_eq!(report.updated(), DOCUMENTS.len());
    assert_eq!(report.created(), 0);
}

#[test]
fn repeated_runs_leave_identical_content() {
    let temp = TempDir::new().unwrap();
    service().sync(temp.path()).unwrap();
    let first: Vec<String> = DOCUMENTS
        .iter()
        .map(|p| fs::read_to_string(temp.path().join(p)).unwrap())
        .collect();

    service().sync(temp.path()).unwrap();
    let second: Vec<String> = DOCUMENTS
        .iter()
        .map(|p| fs::read_to_string(temp.path().join(p)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn local_edits_are_overwritten() {
    let temp = TempDir::new().unwrap();
    service().sync(temp.path()).unwrap();

    let edited = temp.path().join(DOCUMENTS[1]);
    fs::write(&edited, "my local edits").unwrap();

    let report = service().sync(temp.path()).unwrap();
    assert_eq!(report.results()[2].action, WriteAction::Updated);
    assert_ne!(fs::read_to_string(&edited).unwrap(), "my local edits");
}

#[test]
fn existing_workspace_contents_survive() {
    let temp = TempDir::new().unwrap();
    let notes = temp.path().join(".swhat/my-feature/spec.md");
    fs::create_dir_all(notes.parent().unwrap()).unwrap();
    fs::write(&notes, "keep me").unwrap();

    let report = service().sync(temp.path()).unwrap();

    assert_eq!(report.results()[0].action, WriteAction::Skipped);
    assert_eq!(report.created(), DOCUMENTS.len());
    assert_eq!(fs::read_to_string(&notes).unwrap(), "keep me");
}

#[test]
fn partial_install_reports_mixed_actions() {
    let temp = TempDir::new().unwrap();
    let present = temp.path().join(DOCUMENTS[4]);
    fs::create_dir_all(present.parent().unwrap()).unwrap();
    fs::write(&present, "old").unwrap();

    let report = service().sync(temp.path()).unwrap();

    assert_eq!(report.created(), 1 + DOCUMENTS.len() - 1);
    assert_eq!(report.updated(), 1);
    assert_eq!(report.results()[5].action, WriteAction::Updated);
}

#[test]
fn missing_root_is_created() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("not/yet/here");

    let report = service().sync(&root).unwrap();

    assert_eq!(report.created(), 1 + DOCUMENTS.len());
    assert!(root.join(".swhat").is_dir());
}

#[test]
fn file_in_place_of_marker_is_a_conflict() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".swhat"), "not a dir").unwrap();

    let err = service().sync(temp.path()).unwrap_err();

    assert!(matches!(
        err,
        SwhatError::Application(ApplicationError::PathConflict {
            expected: NodeKind::Directory,
            found: PathState::File,
            ..
        })
    ));
    assert!(!temp.path().join(".claude").exists());
}

#[test]
fn directory_in_place_of_document_stops_the_run() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(DOCUMENTS[0])).unwrap();

    let err = service().sync(temp.path()).unwrap_err();

    assert!(matches!(
        err,
        SwhatError::Application(ApplicationError::PathConflict {
            expected: NodeKind::File,
            found: PathState::Directory,
            ..
        })
    ));
    // Entries before the failure stay on disk; later ones were never attempted.
    assert!(temp.path().join(".swhat").is_dir());
    assert!(!temp.path().join(DOCUMENTS[1]).exists());
}

#[test]
fn sync_into_memory_filesystem() {
    let memory = MemoryFilesystem::new();
    let service = SyncService::new(
        builtin::asset_registry().unwrap(),
        Box::new(memory.clone()),
    );

    service.sync("/project").unwrap();

    assert_eq!(memory.list_files().len(), DOCUMENTS.len());
    assert_eq!(
        memory.probe(Path::new("/project/.swhat")).unwrap(),
        PathState::Directory
    );
}

#[test]
fn dry_run_reports_without_writing() {
    let temp = TempDir::new().unwrap();
    service().sync(temp.path()).unwrap();
    fs::remove_file(temp.path().join(DOCUMENTS[7])).unwrap();

    let dry = DryRunFilesystem::new(LocalFilesystem::new());
    let report = SyncService::new(builtin::asset_registry().unwrap(), Box::new(dry))
        .sync(temp.path())
        .unwrap();

    assert_eq!(report.skipped(), 1);
    assert_eq!(report.updated(), DOCUMENTS.len() - 1);
    assert_eq!(report.created(), 1);
    assert!(!temp.path().join(DOCUMENTS[7]).exists());
}

#[test]
fn dry_run_on_fresh_directory_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("fresh");

    let report = SyncService::new(
        builtin::asset_registry().unwrap(),
        Box::new(DryRunFilesystem::new(LocalFilesystem::new())),
    )
    .sync(&root)
    .unwrap();

    assert_eq!(report.created(), 1 + DOCUMENTS.len());
    assert!(!root.exists());
}
