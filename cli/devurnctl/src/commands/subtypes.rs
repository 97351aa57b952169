//! `devurn subtypes`

use std::process::ExitCode;

use anyhow::Result;
use devurn_urn::SubtypeDescriptor;
use serde::Serialize;
use tabled::Tabled;

use super::CommandContext;
use crate::output::print_output;

#[derive(Debug, Serialize, Tabled)]
struct SubtypeRow {
    #[tabled(rename = "Subtype")]
    subtype: &'static str,

    #[tabled(rename = "Name")]
    name: &'static str,

    #[tabled(rename = "Format")]
    format: &'static str,

    #[tabled(rename = "Example")]
    example: &'static str,

    #[tabled(skip)]
    description: &'static str,
}

impl From<&'static SubtypeDescriptor> for SubtypeRow {
    fn from(d: &'static SubtypeDescriptor) -> Self {
        Self {
            subtype: d.key,
            name: d.name,
            format: d.format,
            example: d.example,
            description: d.description,
        }
    }
}

pub fn run(ctx: &CommandContext) -> Result<ExitCode> {
    let rows: Vec<SubtypeRow> = devurn_urn::list_subtypes().iter().map(Into::into).collect();
    print_output(&rows, ctx.format);
    Ok(ExitCode::SUCCESS)
}
