//! `devurn config show|set`

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};
use devurn_urn::{HexTieBreak, PenPairTieBreak};

use super::CommandContext;
use crate::config::config_path;
use crate::output::{print_record, print_success, FieldRow, OutputFormat};

#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the saved settings.
    Show,

    /// Change saved settings. Unspecified settings are kept.
    Set(SetArgs),
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Default output format.
    #[arg(long = "default-format")]
    default_format: Option<OutputFormat>,

    /// Default subtype for a bare 16-hex-digit input.
    #[arg(long = "default-hex16")]
    default_hex16: Option<HexTieBreak>,

    /// Default subtype for a two-segment PEN input.
    #[arg(long = "default-pen-pair")]
    default_pen_pair: Option<PenPairTieBreak>,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<ExitCode> {
        match self.command {
            ConfigSubcommand::Show => show(&ctx),
            ConfigSubcommand::Set(args) => set(ctx, args),
        }
    }
}

fn show(ctx: &CommandContext) -> Result<ExitCode> {
    let rows = vec![
        FieldRow::new("Path", config_path()?.display().to_string()),
        FieldRow::new("Format", ctx.config.format.to_string()),
        FieldRow::new("Hex16", ctx.config.detect.bare_hex16.to_string()),
        FieldRow::new("PenPair", ctx.config.detect.pen_pair.to_string()),
    ];
    print_record(&ctx.config, &rows, ctx.format);
    Ok(ExitCode::SUCCESS)
}

fn set(ctx: CommandContext, args: SetArgs) -> Result<ExitCode> {
    let mut config = ctx.config;
    if let Some(format) = args.default_format {
        config.format = format;
    }
    if let Some(hex16) = args.default_hex16 {
        config.detect.bare_hex16 = hex16;
    }
    if let Some(pen_pair) = args.default_pen_pair {
        config.detect.pen_pair = pen_pair;
    }

    let path = config.save()?;
    if ctx.format == OutputFormat::Table {
        print_success(&format!("Saved settings to {}", path.display()));
    } else {
        crate::output::print_single(&config);
    }
    Ok(ExitCode::SUCCESS)
}
