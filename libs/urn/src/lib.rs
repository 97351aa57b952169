//! # devurn-urn
//!
//! Device identifier URNs in the `urn:dev` namespace (RFC 9039).
//!
//! ## Operations
//!
//! - [`list_subtypes`]: the closed set of identifier classes
//! - [`detect`]: guess the subtype of raw, undeclared input
//! - [`validate`]: check raw input against a subtype, never fails
//! - [`generate`]: build the canonical URN, fails on invalid input
//! - [`breakdown`]: split a canonical URN back into its parts
//!
//! ## URN Format
//!
//! `urn:dev:<subtype>:<identifier>`
//!
//! Examples:
//! - `urn:dev:mac:021b44fffe113ab7` (MAC-48 `00:1B:44:11:3A:B7`, expanded to EUI-64)
//! - `urn:dev:ow:10e2073a01080063`
//! - `urn:dev:ops:32473:switch:12345`
//!
//! All operations are pure functions over `&str`. The registry is static and
//! immutable, so everything here is safe to call from any number of threads.

mod decode;
mod detect;
mod encode;
mod error;
mod normalize;
mod subtype;
mod urn;
mod validate;

#[cfg(test)]
mod proptests;

pub use decode::{breakdown, UrnBreakdown};
pub use detect::{detect, DetectPolicy, Detector, HexTieBreak, PenPairTieBreak};
pub use encode::{generate, mac_to_eui64};
pub use error::{ErrorKind, UrnError};
pub use normalize::{is_hex_of_length, normalize_hex};
pub use subtype::{entries, keys, list_subtypes, lookup, Subtype, SubtypeDescriptor};
pub use urn::{DevUrn, NAMESPACE, SCHEME};
pub use validate::{is_valid_pen, split_segments, validate, ValidationResult};
