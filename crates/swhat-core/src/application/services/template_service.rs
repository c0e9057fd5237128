//! Template Service - read-only template queries.
//!
//! Answers "list the templates" and "print template X". Separated from
//! SyncService since it never touches the filesystem.

use tracing::{debug, instrument};

use crate::{
    application::ApplicationError,
    domain::{DomainError, TemplateName, TemplateRegistry, TemplateSummary},
    error::SwhatResult,
};

/// Outcome of a successful template lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateLookup {
    /// Every template, sorted by name.
    Listing(Vec<TemplateSummary>),
    /// The raw body of one template.
    Content {
        name: TemplateName,
        content: &'static str,
    },
}

/// Service for template operations.
pub struct TemplateService {
    registry: TemplateRegistry,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// All templates, ascending by name.
    pub fn list(&self) -> Vec<TemplateSummary> {
        self.registry.list_all()
    }

    /// Decide between listing and printing.
    ///
    /// The listing wins when `list` is set or `name` is absent or blank.
    /// Otherwise the name is matched case-insensitively as given, and a miss
    /// carries the listing in the error.
    #[instrument(skip(self))]
    pub fn resolve(&self, name: Option<&str>, list: bool) -> SwhatResult<TemplateLookup> {
        let name = match name {
            Some(name) if !list && !name.trim().is_empty() => name,
            _ => {
                debug!("Listing templates");
                return Ok(TemplateLookup::Listing(self.list()));
            }
        };

        match self.registry.lookup(name) {
            Ok(entry) => Ok(TemplateLookup::Content {
                name: entry.name,
                content: entry.content,
            }),
            Err(DomainError::UnknownTemplate { name }) => {
                debug!(requested = %name, "No template matched");
                Err(ApplicationError::TemplateNotFound {
                    requested: name,
                    available: self.list(),
                }
                .into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwhatError;

    fn service() -> TemplateService {
        let registry = TemplateRegistry::builder()
            .template(TemplateName::Specification, "Spec", "# Spec\n")
            .template(TemplateName::SpecificationChecklist, "Checklist", "# Checklist\n")
            .template(TemplateName::Plan, "Plan", "# Plan\n")
            .template(TemplateName::Tasks, "Tasks", "# Tasks\n")
            .build()
            .unwrap();
        TemplateService::new(registry)
    }

    fn names(lookup: TemplateLookup) -> Vec<&'static str> {
        match lookup {
            TemplateLookup::Listing(rows) => rows.iter().map(|r| r.name.as_str()).collect(),
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn absent_name_lists() {
        let listed = names(service().resolve(None, false).unwrap());
        assert_eq!(
            listed,
            ["plan", "specification", "specification-checklist", "tasks"]
        );
    }

    #[test]
    fn blank_name_lists() {
        assert!(matches!(
            service().resolve(Some("   "), false).unwrap(),
            TemplateLookup::Listing(_)
        ));
    }

    #[test]
    fn list_flag_beats_name() {
        assert!(matches!(
            service().resolve(Some("plan"), true).unwrap(),
            TemplateLookup::Listing(_)
        ));
    }

    #[test]
    fn name_matches_case_insensitively() {
        assert_eq!(
            service().resolve(Some("PLAN"), false).unwrap(),
            TemplateLookup::Content {
                name: TemplateName::Plan,
                content: "# Plan\n",
            }
        );
    }

    #[test]
    fn unknown_name_carries_listing() {
        let err = service().resolve(Some("bogus-name"), false).unwrap_err();
        match err {
            SwhatError::Application(ApplicationError::TemplateNotFound {
                requested,
                available,
            }) => {
                assert_eq!(requested, "bogus-name");
                assert_eq!(available.len(), 4);
            }
            other => panic!("expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn not_found_suggestions_render_listing() {
        let err = service().resolve(Some("nope"), false).unwrap_err();
        let suggestions = err.suggestions();
        assert_eq!(suggestions[0], "Available templates:");
        assert!(suggestions.iter().any(|s| s.starts_with("  plan ")));
        assert_eq!(suggestions.len(), 5);
    }
}
