//! `devurn generate [--subtype <key>] <input>`

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use devurn_urn::{DevUrn, Subtype, UrnBreakdown};
use serde::Serialize;

use super::breakdown::breakdown_rows;
use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_info, print_record, print_success, OutputFormat};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Subtype key. Detected from the input when omitted.
    #[arg(long, short)]
    subtype: Option<Subtype>,

    /// Raw identifier.
    input: String,
}

#[derive(Debug, Serialize)]
struct GenerateOutput {
    urn: DevUrn,
    subtype: Subtype,
    detected: bool,
    input: String,
    breakdown: UrnBreakdown,
}

pub fn run(ctx: &CommandContext, args: GenerateArgs) -> Result<ExitCode> {
    let (subtype, detected) = match args.subtype {
        Some(subtype) => (subtype, false),
        None => {
            let subtype = ctx
                .detector()
                .detect(&args.input)
                .ok_or_else(|| CliError::NoMatch(args.input.trim().to_string()))?;
            (subtype, true)
        }
    };

    devurn_urn::validate(subtype.key(), &args.input)
        .into_result()
        .map_err(CliError::from)?;
    let urn = DevUrn::generate(subtype, &args.input).map_err(CliError::from)?;
    let breakdown = devurn_urn::breakdown(&urn.to_string()).map_err(CliError::from)?;

    if ctx.format == OutputFormat::Table {
        if detected {
            print_info(&format!("Detected subtype: {subtype}"));
        }
        print_success(&urn.to_string());
    }

    let rows = breakdown_rows(&breakdown);
    print_record(
        &GenerateOutput {
            urn,
            subtype,
            detected,
            input: args.input.trim().to_string(),
            breakdown,
        },
        &rows,
        ctx.format,
    );

    Ok(ExitCode::SUCCESS)
}
