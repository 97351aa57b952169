//! Error types for DEV URN validation, encoding and decoding.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::Subtype;

/// Errors that can occur when validating, generating or decoding a DEV URN.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrnError {
    /// The input was empty after trimming.
    #[error("Input cannot be empty")]
    EmptyInput,

    /// The normalized hex string has the wrong number of digits.
    #[error("{}", length_message(.subtype))]
    InvalidLength { subtype: Subtype, actual: usize },

    /// The normalized hex string contains something other than hex digits.
    #[error("{} must contain only hexadecimal characters", hex_label(.subtype))]
    InvalidCharacter { subtype: Subtype },

    /// The input does not split into the expected number of segments.
    #[error("Format must be {expected}")]
    InvalidFormat { expected: &'static str },

    /// The Private Enterprise Number is not a positive integer in minimal form.
    #[error("PEN must be a positive integer without leading zeros")]
    InvalidPen { pen: String },

    /// A required segment after the PEN is empty.
    #[error("{field} cannot be empty")]
    EmptyIdentifier { field: &'static str },

    /// The subtype key is outside the closed set.
    #[error("Unknown subtype: {0}")]
    UnknownSubtype(String),

    /// The string is not shaped like `urn:dev:<subtype>:<identifier>`.
    #[error("Invalid DEV URN format: {0}")]
    MalformedUrn(String),
}

/// Fieldless discriminant of [`UrnError`], for matching without the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidLength,
    InvalidCharacter,
    InvalidFormat,
    InvalidPen,
    EmptyIdentifier,
    UnknownSubtype,
    MalformedUrn,
}

impl UrnError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UrnError::EmptyInput => ErrorKind::EmptyInput,
            UrnError::InvalidLength { .. } => ErrorKind::InvalidLength,
            UrnError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            UrnError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            UrnError::InvalidPen { .. } => ErrorKind::InvalidPen,
            UrnError::EmptyIdentifier { .. } => ErrorKind::EmptyIdentifier,
            UrnError::UnknownSubtype(_) => ErrorKind::UnknownSubtype,
            UrnError::MalformedUrn(_) => ErrorKind::MalformedUrn,
        }
    }

    /// Stable machine-readable code, used by adapters in error bodies.
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns true if the error describes bad identifier input, as opposed to
    /// an unknown subtype or a malformed URN.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            UrnError::UnknownSubtype(_) | UrnError::MalformedUrn(_)
        )
    }

    /// Returns true if this error indicates an unrecognized subtype key.
    pub fn is_unknown_subtype(&self) -> bool {
        matches!(self, UrnError::UnknownSubtype(_))
    }
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::InvalidLength => "invalid_length",
            ErrorKind::InvalidCharacter => "invalid_character",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::InvalidPen => "invalid_pen",
            ErrorKind::EmptyIdentifier => "empty_identifier",
            ErrorKind::UnknownSubtype => "unknown_subtype",
            ErrorKind::MalformedUrn => "malformed_urn",
        }
    }
}

impl Serialize for UrnError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

fn length_message(subtype: &Subtype) -> &'static str {
    match subtype {
        Subtype::Mac => {
            "MAC address must be 12 hex characters (MAC-48/EUI-48) or 16 hex characters (EUI-64)"
        }
        Subtype::Ow => "1-Wire identifier must be exactly 16 hexadecimal characters",
        _ => "Identifier has an invalid length",
    }
}

fn hex_label(subtype: &Subtype) -> &'static str {
    match subtype {
        Subtype::Mac => "MAC address",
        Subtype::Ow => "1-Wire identifier",
        _ => "Identifier",
    }
}
