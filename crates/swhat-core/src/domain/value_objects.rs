//! Domain value objects: TemplateName, Backend, AssetKind, AssetLocation.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Every set is closed: adding a template or a backend is a new variant,
//! and the compiler points at every `match` that has to learn about it.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and extend `ALL`
//! 3. Register its content in `swhat-adapters::builtin`
//! 4. Done; the registries refuse to build until step 3 is complete

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TemplateName ─────────────────────────────────────────────────────────────

/// A document template served by `swhat template <name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateName {
    Specification,
    SpecificationChecklist,
    Plan,
    Tasks,
}

impl TemplateName {
    /// Every template, in declaration order.
    pub const ALL: [TemplateName; 4] = [
        Self::Specification,
        Self::SpecificationChecklist,
        Self::Plan,
        Self::Tasks,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Specification => "specification",
            Self::SpecificationChecklist => "specification-checklist",
            Self::Plan => "plan",
            Self::Tasks => "tasks",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    /// Case-insensitive. No trimming or other normalisation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == folded)
            .ok_or_else(|| DomainError::UnknownTemplate { name: s.to_owned() })
    }
}

// ── Backend ──────────────────────────────────────────────────────────────────

/// An agent integration that receives the bundled command and skill documents.
///
/// To add a backend: add a variant here, give it a [`BackendTarget`] in
/// `entities/backend.rs`, and register its documents in the adapters crate.
///
/// [`BackendTarget`]: crate::domain::BackendTarget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Claude,
    Roo,
}

impl Backend {
    /// Every backend, in installation order.
    pub const ALL: [Backend; 2] = [Self::Claude, Self::Roo];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Roo => "roo",
        }
    }

    /// Human-facing product name, used in the post-install guide.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Claude => "Claude Code",
            Self::Roo => "Roo Code",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AssetKind ────────────────────────────────────────────────────────────────

/// One of the documents installed into every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    SpecifyCommand,
    PlanCommand,
    TasksCommand,
    FeatureSkill,
}

impl AssetKind {
    /// Every bundled document, in per-backend write order.
    pub const ALL: [AssetKind; 4] = [
        Self::SpecifyCommand,
        Self::PlanCommand,
        Self::TasksCommand,
        Self::FeatureSkill,
    ];

    /// Short identifier shared by all backends' file names.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::SpecifyCommand => "specify",
            Self::PlanCommand => "plan",
            Self::TasksCommand => "tasks",
            Self::FeatureSkill => "feature-workflow",
        }
    }

    pub const fn location(&self) -> AssetLocation {
        match self {
            Self::SpecifyCommand | Self::PlanCommand | Self::TasksCommand => {
                AssetLocation::Commands
            }
            Self::FeatureSkill => AssetLocation::Skills,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location() {
            AssetLocation::Commands => write!(f, "{} command", self.slug()),
            AssetLocation::Skills => write!(f, "{} skill", self.slug()),
        }
    }
}

// ── AssetLocation ────────────────────────────────────────────────────────────

/// Which of a backend's two directories a document lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetLocation {
    Commands,
    Skills,
}

impl AssetLocation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Commands => "commands",
            Self::Skills => "skills",
        }
    }
}

impl fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
