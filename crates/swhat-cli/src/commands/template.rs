//! `swhat template`: print one template or list them all.

use serde::Serialize;
use tracing::instrument;

use swhat_adapters::builtin;
use swhat_core::{
    application::{TemplateLookup, TemplateService},
    domain::{TemplateName, listing_lines},
    error::SwhatError,
};

use crate::{cli::TemplateArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct TemplateOutput<'a> {
    name: TemplateName,
    content: &'a str,
}

/// Execute the `swhat template` command.
///
/// A name that matches nothing surfaces as an error whose suggestions carry
/// the listing, so it ends up on stderr with exit code 1.
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or(""), list = args.list))]
pub fn execute(args: TemplateArgs, output: OutputManager) -> CliResult<()> {
    let registry = builtin::template_registry().map_err(SwhatError::from)?;
    let service = TemplateService::new(registry);

    match service.resolve(args.name.as_deref(), args.list)? {
        TemplateLookup::Listing(rows) => {
            if output.is_json() {
                output.json(&rows)?;
            } else {
                for line in listing_lines(&rows) {
                    output.data(&line)?;
                }
            }
        }
        TemplateLookup::Content { name, content } => {
            if output.is_json() {
                output.json(&TemplateOutput { name, content })?;
            } else {
                output.raw(content)?;
            }
        }
    }

    Ok(())
}
