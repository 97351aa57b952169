//! `devurn breakdown <urn>`

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use devurn_urn::UrnBreakdown;

use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_record, FieldRow};

#[derive(Debug, Args)]
pub struct BreakdownArgs {
    /// DEV URN, e.g. `urn:dev:mac:021b44fffe113ab7`.
    urn: String,
}

pub fn run(ctx: &CommandContext, args: BreakdownArgs) -> Result<ExitCode> {
    let breakdown = devurn_urn::breakdown(&args.urn).map_err(CliError::from)?;
    print_record(&breakdown, &breakdown_rows(&breakdown), ctx.format);
    Ok(ExitCode::SUCCESS)
}

pub(super) fn breakdown_rows(breakdown: &UrnBreakdown) -> Vec<FieldRow> {
    vec![
        FieldRow::new("URN", breakdown.urn.as_str()),
        FieldRow::new("Namespace", breakdown.namespace),
        FieldRow::new("Subtype", breakdown.subtype.key()),
        FieldRow::new("Identifier", breakdown.identifier.as_str()),
        FieldRow::new("Description", breakdown.description),
        FieldRow::new("Format", breakdown.format),
    ]
}
