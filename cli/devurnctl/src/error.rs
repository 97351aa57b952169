//! Error handling and display for the CLI.

use colored::Colorize;
use devurn_urn::UrnError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Urn(#[from] UrnError),

    #[error("Could not detect a subtype for '{0}'")]
    NoMatch(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let hint = match err.downcast_ref::<CliError>() {
        Some(cli_err) => hint_for(cli_err),
        None => err.downcast_ref::<UrnError>().and_then(urn_hint),
    };
    if let Some(hint) = hint {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint_for(err: &CliError) -> Option<String> {
    match err {
        CliError::Urn(urn_err) => urn_hint(urn_err),
        CliError::NoMatch(_) => {
            Some("Hint: Pass `--subtype <key>` to choose the subtype explicitly.".to_string())
        }
    }
}

fn urn_hint(err: &UrnError) -> Option<String> {
    match err {
        UrnError::UnknownSubtype(_) => {
            Some("Hint: Run `devurn subtypes` to list the supported subtypes.".to_string())
        }
        UrnError::MalformedUrn(_) => {
            Some("Hint: A DEV URN looks like `urn:dev:<subtype>:<identifier>`.".to_string())
        }
        UrnError::InvalidLength { subtype, .. } | UrnError::InvalidCharacter { subtype } => Some(
            format!("Hint: Expected format is {}.", subtype.descriptor().format),
        ),
        UrnError::InvalidFormat { .. } | UrnError::InvalidPen { .. } => Some(
            "Hint: Organization identifiers start with a Private Enterprise Number, e.g. `32473:foo`."
                .to_string(),
        ),
        UrnError::EmptyInput | UrnError::EmptyIdentifier { .. } => None,
    }
}
