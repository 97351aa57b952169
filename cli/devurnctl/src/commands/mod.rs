//! CLI commands.

mod breakdown;
mod config;
mod detect;
mod generate;
mod subtypes;
mod validate;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devurn_urn::{DetectPolicy, Detector, HexTieBreak, PenPairTieBreak};

use crate::config::Config;
use crate::output::OutputFormat;

/// devurn - Generate, validate and decode RFC 9039 device URNs.
#[derive(Debug, Parser)]
#[command(name = "devurn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to the saved config.
    #[arg(long, global = true, env = "DEVURN_FORMAT")]
    format: Option<OutputFormat>,

    /// Subtype reported for a bare 16-hex-digit input (mac or ow).
    #[arg(long, global = true)]
    hex16: Option<HexTieBreak>,

    /// Subtype reported for a two-segment PEN input (org or os).
    #[arg(long, global = true)]
    pen_pair: Option<PenPairTieBreak>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the supported subtypes.
    Subtypes,

    /// Guess the subtype of a raw identifier.
    Detect(detect::DetectArgs),

    /// Check a raw identifier against a subtype.
    Validate(validate::ValidateArgs),

    /// Generate a DEV URN from a raw identifier.
    Generate(generate::GenerateArgs),

    /// Split a DEV URN into its components.
    Breakdown(breakdown::BreakdownArgs),

    /// Show or change saved CLI settings.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<ExitCode> {
        let config = Config::load()?;

        // Flags win over the saved config.
        let ctx = CommandContext {
            format: self.format.unwrap_or(config.format),
            policy: DetectPolicy {
                bare_hex16: self.hex16.unwrap_or(config.detect.bare_hex16),
                pen_pair: self.pen_pair.unwrap_or(config.detect.pen_pair),
            },
            config,
        };

        match self.command {
            Commands::Subtypes => subtypes::run(&ctx),
            Commands::Detect(args) => detect::run(&ctx, args),
            Commands::Validate(args) => validate::run(&ctx, args),
            Commands::Generate(args) => generate::run(&ctx, args),
            Commands::Breakdown(args) => breakdown::run(&ctx, args),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("devurn {}", env!("CARGO_PKG_VERSION"));
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Resolved settings shared by all commands.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub policy: DetectPolicy,
}

impl CommandContext {
    pub fn detector(&self) -> Detector {
        Detector::new(self.policy)
    }
}
