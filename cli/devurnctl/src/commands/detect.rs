//! `devurn detect <input>`

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use devurn_urn::Subtype;
use serde::Serialize;

use super::CommandContext;
use crate::output::{print_info, print_single, print_success, OutputFormat};

#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Raw identifier, e.g. a MAC address or `PEN:identifier`.
    input: String,
}

#[derive(Debug, Serialize)]
struct DetectOutput<'a> {
    input: &'a str,
    detected_subtype: Option<Subtype>,
    name: Option<&'static str>,
}

pub fn run(ctx: &CommandContext, args: DetectArgs) -> Result<ExitCode> {
    let detected = ctx.detector().detect(&args.input);

    match ctx.format {
        OutputFormat::Json => print_single(&DetectOutput {
            input: &args.input,
            detected_subtype: detected,
            name: detected.map(|s| s.descriptor().name),
        }),
        OutputFormat::Table => match detected {
            Some(subtype) => print_success(&format!(
                "Detected {} ({})",
                subtype,
                subtype.descriptor().name
            )),
            None => print_info("No subtype matches this input"),
        },
    }

    Ok(if detected.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
