//! Documents compiled into the binary.
//!
//! Every template and backend document lives as a markdown file under
//! `assets/` and is embedded with `include_str!`, so a release binary needs
//! nothing on disk to run. The constructors here are the only place those
//! files are named.
//!
//! ```text
//! assets/
//! ├── templates/            ← served by `swhat template <name>`
//! ├── commands/{claude,roo} ← installed by `swhat init`
//! └── skills/{claude,roo}
//! ```

use swhat_core::domain::{
    AssetKind, AssetRegistry, Backend, DomainError, TemplateName, TemplateRegistry,
};
use tracing::debug;

// ── Templates ────────────────────────────────────────────────────────────────

const SPECIFICATION: &str = include_str!("../assets/templates/specification.md");
const SPECIFICATION_CHECKLIST: &str =
    include_str!("../assets/templates/specification-checklist.md");
const PLAN: &str = include_str!("../assets/templates/plan.md");
const TASKS: &str = include_str!("../assets/templates/tasks.md");

// ── Backend documents ────────────────────────────────────────────────────────

const CLAUDE_SPECIFY: &str = include_str!("../assets/commands/claude/specify.md");
const CLAUDE_PLAN: &str = include_str!("../assets/commands/claude/plan.md");
const CLAUDE_TASKS: &str = include_str!("../assets/commands/claude/tasks.md");
const CLAUDE_FEATURE_SKILL: &str = include_str!("../assets/skills/claude/feature-workflow.md");

const ROO_SPECIFY: &str = include_str!("../assets/commands/roo/specify.md");
const ROO_PLAN: &str = include_str!("../assets/commands/roo/plan.md");
const ROO_TASKS: &str = include_str!("../assets/commands/roo/tasks.md");
const ROO_FEATURE_SKILL: &str = include_str!("../assets/skills/roo/feature-workflow.md");

/// The four templates served by `swhat template`.
pub fn template_registry() -> Result<TemplateRegistry, DomainError> {
    let registry = TemplateRegistry::builder()
        .template(
            TemplateName::Specification,
            "Feature specification template",
            SPECIFICATION,
        )
        .template(
            TemplateName::SpecificationChecklist,
            "Spec quality validation checklist",
            SPECIFICATION_CHECKLIST,
        )
        .template(TemplateName::Plan, "Implementation plan template", PLAN)
        .template(
            TemplateName::Tasks,
            "Task list template for implementation",
            TASKS,
        )
        .build()?;

    debug!(templates = registry.len(), "Built-in template registry ready");
    Ok(registry)
}

/// Every backend's command and skill documents.
pub fn asset_registry() -> Result<AssetRegistry, DomainError> {
    let registry = AssetRegistry::builder()
        .document(Backend::Claude, AssetKind::SpecifyCommand, CLAUDE_SPECIFY)
        .document(Backend::Claude, AssetKind::PlanCommand, CLAUDE_PLAN)
        .document(Backend::Claude, AssetKind::TasksCommand, CLAUDE_TASKS)
        .document(Backend::Claude, AssetKind::FeatureSkill, CLAUDE_FEATURE_SKILL)
        .document(Backend::Roo, AssetKind::SpecifyCommand, ROO_SPECIFY)
        .document(Backend::Roo, AssetKind::PlanCommand, ROO_PLAN)
        .document(Backend::Roo, AssetKind::TasksCommand, ROO_TASKS)
        .document(Backend::Roo, AssetKind::FeatureSkill, ROO_FEATURE_SKILL)
        .build()?;

    debug!(documents = registry.len(), "Built-in asset registry ready");
    Ok(registry)
}
