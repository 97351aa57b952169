//! Per-subtype structural validation.
//!
//! Validation is an interactive probe: [`validate`] always returns a
//! [`ValidationResult`] and never an `Err`, so it can drive live feedback.
//! Each failure reason comes from one named grammar predicate below.

use serde::Serialize;

use crate::normalize::{is_hex_of_length, normalize_hex};
use crate::{Subtype, UrnError};

/// Length in hex digits of a MAC-48 / EUI-48 address.
pub const EUI48_HEX_LEN: usize = 12;

/// Length in hex digits of an EUI-64 address or a 1-Wire identifier.
pub const EUI64_HEX_LEN: usize = 16;

/// Outcome of validating raw input against a subtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<UrnError>,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    #[must_use]
    pub fn invalid(error: UrnError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }

    /// Converts into a `Result`, for callers that want to fail fast.
    pub fn into_result(self) -> Result<(), UrnError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl From<Result<(), UrnError>> for ValidationResult {
    fn from(result: Result<(), UrnError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(err) => Self::invalid(err),
        }
    }
}

/// Validates `raw` against the subtype named by `subtype_key`.
///
/// An unknown key is reported in the result as [`UrnError::UnknownSubtype`].
pub fn validate(subtype_key: &str, raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult::invalid(UrnError::EmptyInput);
    }
    match subtype_key.parse::<Subtype>() {
        Ok(subtype) => check(subtype, raw).into(),
        Err(err) => ValidationResult::invalid(err),
    }
}

/// Typed validation used by the encoder.
pub fn check(subtype: Subtype, raw: &str) -> Result<(), UrnError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrnError::EmptyInput);
    }

    match subtype {
        Subtype::Mac => check_hex(subtype, trimmed, &[EUI48_HEX_LEN, EUI64_HEX_LEN]),
        Subtype::Ow => check_hex(subtype, trimmed, &[EUI64_HEX_LEN]),
        Subtype::Org => check_pen_segments(trimmed, "PEN:identifier", &["Identifier"]),
        Subtype::Os => check_pen_segments(trimmed, "PEN:serial", &["Serial number"]),
        Subtype::Ops => check_pen_segments(
            trimmed,
            "PEN:product:serial",
            &["Product class", "Serial number"],
        ),
    }
}

// =============================================================================
// Grammar predicates
// =============================================================================

/// Hex identifiers: the normalized length must be one of `allowed`, and the
/// normalized string must be pure hex.
fn check_hex(subtype: Subtype, input: &str, allowed: &[usize]) -> Result<(), UrnError> {
    let hex = normalize_hex(input);
    if !allowed.contains(&hex.len()) {
        return Err(UrnError::InvalidLength {
            subtype,
            actual: hex.len(),
        });
    }
    if !is_hex_of_length(input, Some(hex.len())) {
        return Err(UrnError::InvalidCharacter { subtype });
    }
    Ok(())
}

/// PEN-prefixed identifiers: exactly `1 + fields.len()` colon-delimited
/// segments, a well-formed PEN first, and every following segment non-empty.
fn check_pen_segments(
    input: &str,
    expected: &'static str,
    fields: &[&'static str],
) -> Result<(), UrnError> {
    let segments = split_segments(input);
    if segments.len() != fields.len() + 1 {
        return Err(UrnError::InvalidFormat { expected });
    }
    if !is_valid_pen(segments[0]) {
        return Err(UrnError::InvalidPen {
            pen: segments[0].to_string(),
        });
    }
    for (segment, field) in segments[1..].iter().zip(fields.iter().copied()) {
        if segment.is_empty() {
            return Err(UrnError::EmptyIdentifier { field });
        }
    }
    Ok(())
}

/// Splits on every `:`, keeping empty segments.
pub fn split_segments(input: &str) -> Vec<&str> {
    input.split(':').collect()
}

/// A Private Enterprise Number: ASCII decimal digits in minimal form, strictly
/// positive. `0`, `01` and the empty string are rejected. The number is never
/// parsed, so arbitrarily long PENs are accepted.
pub fn is_valid_pen(pen: &str) -> bool {
    !pen.is_empty() && pen.bytes().all(|b| b.is_ascii_digit()) && !pen.starts_with('0')
}
