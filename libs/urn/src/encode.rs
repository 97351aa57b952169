//! Canonical encoding of validated input into a DEV URN.

use tracing::trace;

use crate::normalize::normalize_hex;
use crate::validate::check;
use crate::{DevUrn, Subtype, UrnError};

/// Universal/local bit of the first octet.
const UL_BIT: u8 = 0x02;

/// Fixed pattern inserted between the OUI and the device part of a MAC-48.
const EUI48_FILLER: [u8; 2] = [0xff, 0xfe];

impl DevUrn {
    /// Validates `raw` against `subtype` and builds the canonical URN.
    ///
    /// - `mac`: expanded to EUI-64 with the U/L bit flipped.
    /// - `ow`: normalized to 16 lower-case hex digits, no bit manipulation.
    /// - `org`/`os`/`ops`: the trimmed input, unchanged.
    pub fn generate(subtype: Subtype, raw: &str) -> Result<Self, UrnError> {
        check(subtype, raw)?;
        let trimmed = raw.trim();

        let identifier = match subtype {
            Subtype::Mac => mac_to_eui64(trimmed)?,
            Subtype::Ow => normalize_hex(trimmed),
            Subtype::Org | Subtype::Os | Subtype::Ops => trimmed.to_string(),
        };
        trace!(%subtype, %identifier, "generated dev urn");

        Ok(Self::from_parts(subtype, identifier))
    }
}

/// Generates the canonical URN string for `raw` under `subtype_key`.
///
/// Unlike [`crate::validate`], this fails on any invalid input or unknown key.
pub fn generate(subtype_key: &str, raw: &str) -> Result<String, UrnError> {
    let subtype: Subtype = subtype_key.parse()?;
    DevUrn::generate(subtype, raw).map(|urn| urn.to_string())
}

/// Converts a MAC-48/EUI-48 or EUI-64 address into the identifier segment of
/// a `mac` URN.
///
/// Six octets get `FF:FE` inserted after the OUI; eight octets are kept as is.
/// In both cases the universal/local bit of the first octet is flipped.
pub fn mac_to_eui64(raw: &str) -> Result<String, UrnError> {
    let digits = normalize_hex(raw);
    let invalid_length = || UrnError::InvalidLength {
        subtype: Subtype::Mac,
        actual: digits.len(),
    };
    let octets = hex::decode(&digits).map_err(|_| invalid_length())?;

    let mut eui64 = match octets.len() {
        6 => {
            let mut expanded = Vec::with_capacity(8);
            expanded.extend_from_slice(&octets[..3]);
            expanded.extend_from_slice(&EUI48_FILLER);
            expanded.extend_from_slice(&octets[3..]);
            expanded
        }
        8 => octets,
        _ => return Err(invalid_length()),
    };
    eui64[0] ^= UL_BIT;

    Ok(hex::encode(eui64))
}
