//! `devurn validate <subtype> <input>`

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use devurn_urn::Subtype;
use serde::Serialize;

use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_failure, print_info, print_single, print_success, OutputFormat};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Subtype key (mac, ow, org, os, ops).
    subtype: String,

    /// Raw identifier.
    input: String,
}

#[derive(Debug, Serialize)]
struct ValidateOutput<'a> {
    subtype: Subtype,
    input: &'a str,
    valid: bool,
    error: Option<String>,
    code: Option<&'static str>,
}

pub fn run(ctx: &CommandContext, args: ValidateArgs) -> Result<ExitCode> {
    let subtype: Subtype = args.subtype.parse().map_err(CliError::from)?;
    let result = devurn_urn::validate(subtype.key(), &args.input);

    match ctx.format {
        OutputFormat::Json => print_single(&ValidateOutput {
            subtype,
            input: &args.input,
            valid: result.is_valid,
            error: result.error.as_ref().map(|e| e.to_string()),
            code: result.error.as_ref().map(|e| e.code()),
        }),
        OutputFormat::Table => match &result.error {
            None => print_success(&format!("Valid {subtype} identifier")),
            Some(err) => {
                print_failure(&err.to_string());
                print_info(&format!("Expected format: {}", subtype.descriptor().format));
            }
        },
    }

    Ok(if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
