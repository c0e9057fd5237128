//! Static mapping from each [`Backend`] to where its documents live.

use crate::domain::{
    entities::common::RelativePath,
    value_objects::{AssetKind, AssetLocation, Backend},
};

/// Directory name shared by every backend's feature skill.
const FEATURE_SKILL_DIR: &str = "swhat-feature-workflow";
const SKILL_FILE: &str = "SKILL.md";

/// Where one backend keeps its command and skill documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendTarget {
    pub backend: Backend,
    pub commands_dir: RelativePath,
    pub skills_dir: RelativePath,
}

impl BackendTarget {
    /// Every supported backend's target, in declaration order.
    pub fn all() -> Vec<BackendTarget> {
        Backend::ALL.into_iter().map(Backend::target).collect()
    }

    /// Directory a document kind is installed under.
    pub fn dir_for(&self, location: AssetLocation) -> &RelativePath {
        match location {
            AssetLocation::Commands => &self.commands_dir,
            AssetLocation::Skills => &self.skills_dir,
        }
    }

    /// Full relative path of a document, using this backend's naming rules.
    pub fn asset_path(&self, kind: AssetKind) -> RelativePath {
        let dir = self.dir_for(kind.location()).as_path();
        let relative = match kind.location() {
            AssetLocation::Commands => dir.join(self.command_file_name(kind)),
            AssetLocation::Skills => dir.join(FEATURE_SKILL_DIR).join(SKILL_FILE),
        };
        RelativePath::new(relative)
    }

    /// The slash command an agent user types to run `kind`.
    pub fn command_name(&self, kind: AssetKind) -> String {
        match self.backend {
            Backend::Claude => format!("swhat.{}", kind.slug()),
            Backend::Roo => format!("swhat-{}", kind.slug()),
        }
    }

    fn command_file_name(&self, kind: AssetKind) -> String {
        format!("{}.md", self.command_name(kind))
    }
}

impl Backend {
    /// Resolve this backend's fixed directory convention.
    pub fn target(self) -> BackendTarget {
        let root = match self {
            Self::Claude => ".claude",
            Self::Roo => ".roo",
        };
        BackendTarget {
            backend: self,
            commands_dir: RelativePath::new(format!("{root}/commands")),
            skills_dir: RelativePath::new(format!("{root}/skills")),
        }
    }
}
