//! Immutable registries of compiled-in documents.
//!
//! Both registries are built once at startup through a builder that refuses
//! to produce an incomplete or ambiguous table, then handed by value to the
//! services that read them. There is no mutation API.

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{AssetKind, Backend, TemplateName},
};

// ── Templates ────────────────────────────────────────────────────────────────

/// A named template's body plus its one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: TemplateName,
    pub content: &'static str,
    pub description: &'static str,
}

/// One row of the template listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub name: TemplateName,
    pub description: &'static str,
}

/// `Available templates:` followed by one row per template, names padded to
/// the longest one. Shared by the listing and the not-found hint.
pub fn listing_lines(rows: &[TemplateSummary]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|r| r.name.as_str().len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push("Available templates:".to_string());
    lines.extend(
        rows.iter()
            .map(|r| format!("  {:<width$}  {}", r.name.as_str(), r.description)),
    );
    lines
}

/// Read-only table of every [`TemplateName`].
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    /// Indexed by `TemplateName as usize`.
    entries: Vec<TemplateEntry>,
    /// Names sorted by their string form.
    sorted: Vec<TemplateName>,
}

impl TemplateRegistry {
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::default()
    }

    /// Fetch by typed name. Cannot fail: the builder guarantees completeness.
    pub fn get(&self, name: TemplateName) -> &TemplateEntry {
        &self.entries[name as usize]
    }

    /// Case-insensitive lookup by string.
    pub fn lookup(&self, name: &str) -> Result<&TemplateEntry, DomainError> {
        let name: TemplateName = name.parse()?;
        Ok(self.get(name))
    }

    /// `(name, description)` pairs, ascending by name.
    pub fn list_all(&self) -> Vec<TemplateSummary> {
        self.sorted
            .iter()
            .map(|&name| TemplateSummary {
                name,
                description: self.get(name).description,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects template registrations and validates them into a [`TemplateRegistry`].
#[derive(Debug, Default)]
pub struct TemplateRegistryBuilder {
    slots: [Option<TemplateEntry>; TemplateName::ALL.len()],
    duplicate: Option<TemplateName>,
}

impl TemplateRegistryBuilder {
    pub fn template(
        mut self,
        name: TemplateName,
        description: &'static str,
        content: &'static str,
    ) -> Self {
        let slot = &mut self.slots[name as usize];
        if slot.is_some() {
            self.duplicate.get_or_insert(name);
        }
        *slot = Some(TemplateEntry {
            name,
            content,
            description,
        });
        self
    }

    pub fn build(self) -> Result<TemplateRegistry, DomainError> {
        if let Some(name) = self.duplicate {
            return Err(DomainError::DuplicateTemplate { name });
        }

        let mut entries = Vec::with_capacity(TemplateName::ALL.len());
        for (name, slot) in TemplateName::ALL.into_iter().zip(self.slots) {
            entries.push(slot.ok_or(DomainError::MissingTemplate { name })?);
        }

        let mut sorted = TemplateName::ALL.to_vec();
        sorted.sort_by_key(|name| name.as_str());

        Ok(TemplateRegistry { entries, sorted })
    }
}

// ── Backend assets ───────────────────────────────────────────────────────────

/// Read-only table of every (backend, document) body.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    /// Row-major: `backend as usize * AssetKind::ALL.len() + kind as usize`.
    contents: Vec<&'static str>,
}

impl AssetRegistry {
    pub fn builder() -> AssetRegistryBuilder {
        AssetRegistryBuilder::default()
    }

    /// Cannot fail: the builder guarantees every pair is present.
    pub fn content(&self, backend: Backend, kind: AssetKind) -> &'static str {
        self.contents[slot_index(backend, kind)]
    }

    /// A backend's documents in write order.
    pub fn documents(&self, backend: Backend) -> impl Iterator<Item = (AssetKind, &'static str)> {
        AssetKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.content(backend, kind)))
    }

    /// Total number of documents across all backends.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

const ASSET_SLOTS: usize = Backend::ALL.len() * AssetKind::ALL.len();

fn slot_index(backend: Backend, kind: AssetKind) -> usize {
    backend as usize * AssetKind::ALL.len() + kind as usize
}

/// Collects backend documents and validates them into an [`AssetRegistry`].
#[derive(Debug)]
pub struct AssetRegistryBuilder {
    slots: [Option<&'static str>; ASSET_SLOTS],
    duplicate: Option<(Backend, AssetKind)>,
}

impl Default for AssetRegistryBuilder {
    fn default() -> Self {
        Self {
            slots: [None; ASSET_SLOTS],
            duplicate: None,
        }
    }
}

impl AssetRegistryBuilder {
    pub fn document(mut self, backend: Backend, kind: AssetKind, content: &'static str) -> Self {
        let slot = &mut self.slots[slot_index(backend, kind)];
        if slot.is_some() {
            self.duplicate.get_or_insert((backend, kind));
        }
        *slot = Some(content);
        self
    }

    pub fn build(self) -> Result<AssetRegistry, DomainError> {
        if let Some((backend, kind)) = self.duplicate {
            return Err(DomainError::DuplicateAsset { backend, kind });
        }

        let mut contents = Vec::with_capacity(ASSET_SLOTS);
        for backend in Backend::ALL {
            for kind in AssetKind::ALL {
                let content = self.slots[slot_index(backend, kind)]
                    .ok_or(DomainError::MissingAsset { backend, kind })?;
                contents.push(content);
            }
        }

        Ok(AssetRegistry { contents })
    }
}
