//! Decomposition of canonical DEV URN strings.

use serde::Serialize;

use crate::urn::{NAMESPACE, SCHEME};
use crate::{DevUrn, Subtype, UrnError};

/// A read view of a URN plus the descriptive metadata of its subtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrnBreakdown {
    pub urn: String,
    pub namespace: &'static str,
    pub subtype: Subtype,
    pub identifier: String,
    pub description: &'static str,
    pub format: &'static str,
}

/// Splits `urn` into its components.
///
/// The string must have at least four colon-separated segments, start with
/// `urn:dev:` (exact, case-sensitive) and name a known subtype. Everything
/// after the subtype segment is the identifier, embedded colons included.
/// The identifier itself is not re-validated against the subtype grammar.
pub fn breakdown(urn: &str) -> Result<UrnBreakdown, UrnError> {
    let parsed = parse(urn)?;
    let descriptor = parsed.subtype().descriptor();

    Ok(UrnBreakdown {
        urn: urn.to_string(),
        namespace: NAMESPACE,
        subtype: parsed.subtype(),
        identifier: parsed.identifier().to_string(),
        description: descriptor.description,
        format: descriptor.format,
    })
}

pub(crate) fn parse(urn: &str) -> Result<DevUrn, UrnError> {
    let mut segments = urn.splitn(4, ':');
    let (Some(scheme), Some(namespace), Some(subtype), Some(identifier)) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(UrnError::MalformedUrn(urn.to_string()));
    };

    if scheme != SCHEME || namespace != NAMESPACE {
        return Err(UrnError::MalformedUrn(urn.to_string()));
    }

    let subtype: Subtype = subtype.parse()?;
    Ok(DevUrn::from_parts(subtype, identifier.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;
    use rstest::rstest;

    #[test]
    fn test_breakdown_mac() {
        let b = breakdown("urn:dev:mac:021b44fffe113ab7").unwrap();
        assert_eq!(b.urn, "urn:dev:mac:021b44fffe113ab7");
        assert_eq!(b.namespace, "dev");
        assert_eq!(b.subtype, Subtype::Mac);
        assert_eq!(b.identifier, "021b44fffe113ab7");
        assert_eq!(b.description, "MAC-48, EUI-48, or EUI-64 address");
        assert_eq!(b.format, Subtype::Mac.descriptor().format);
    }

    #[test]
    fn test_breakdown_preserves_embedded_colons() {
        let b = breakdown("urn:dev:org:32473:a:b").unwrap();
        assert_eq!(b.subtype, Subtype::Org);
        assert_eq!(b.identifier, "32473:a:b");
    }

    #[rstest]
    #[case("notaurn:dev:mac:xyz")]
    #[case("urn:device:mac:xyz")]
    #[case("URN:DEV:mac:xyz")]
    #[case("urn:dev:mac")]
    #[case("urn:dev")]
    #[case("")]
    fn test_breakdown_malformed(#[case] urn: &str) {
        assert_eq!(
            breakdown(urn).unwrap_err(),
            UrnError::MalformedUrn(urn.to_string())
        );
    }

    #[test]
    fn test_breakdown_unknown_subtype() {
        assert_eq!(
            breakdown("urn:dev:uuid:1234").unwrap_err(),
            UrnError::UnknownSubtype("uuid".to_string())
        );
    }

    #[test]
    fn test_breakdown_accepts_empty_identifier() {
        let b = breakdown("urn:dev:os:").unwrap();
        assert_eq!(b.identifier, "");
    }

    #[test]
    fn test_roundtrip_recovers_canonical_hex() {
        let urn = generate("ow", "10:E2:07:3A:01:08:00:63").unwrap();
        assert_eq!(breakdown(&urn).unwrap().identifier, "10e2073a01080063");
    }

    #[test]
    fn test_breakdown_serializes() {
        let json = serde_json::to_value(breakdown("urn:dev:ops:1:a:b").unwrap()).unwrap();
        assert_eq!(json["subtype"], "ops");
        assert_eq!(json["identifier"], "1:a:b");
        assert_eq!(json["namespace"], "dev");
        assert_eq!(json["format"], "PEN:product:serial");
    }
}
