//! Property-based tests for the URN engine.
//!
//! - Validation is total: any input yields a result, never a panic
//! - PEN-based URNs round-trip through breakdown to the trimmed input
//! - MAC canonicalization always yields 16 lower-case hex digits with the
//!   universal/local bit flipped
//! - Delimited MAC addresses are always detected as `mac`

use proptest::prelude::*;

use crate::{breakdown, detect, generate, mac_to_eui64, validate, Subtype};

fn pen_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,9}"
}

fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._-]{1,16}"
}

proptest! {
    #[test]
    fn validate_is_total(subtype in "[a-z]{0,4}", raw in any::<String>()) {
        let result = validate(&subtype, &raw);
        prop_assert_eq!(result.is_valid, result.error.is_none());
    }

    #[test]
    fn org_roundtrip(pen in pen_strategy(), id in segment_strategy(), pad in " {0,3}") {
        let raw = format!("{pad}{pen}:{id}{pad}");
        for subtype in ["org", "os"] {
            let urn = generate(subtype, &raw).unwrap();
            let b = breakdown(&urn).unwrap();
            prop_assert_eq!(b.identifier, raw.trim());
            prop_assert_eq!(b.subtype.key(), subtype);
        }
    }

    #[test]
    fn ops_roundtrip(pen in pen_strategy(), product in segment_strategy(), serial in segment_strategy()) {
        let raw = format!("{pen}:{product}:{serial}");
        let urn = generate("ops", &raw).unwrap();
        prop_assert_eq!(breakdown(&urn).unwrap().identifier, raw);
    }

    #[test]
    fn leading_zero_pen_rejected(pen in "0[0-9]{0,6}", id in segment_strategy()) {
        let result = validate("org", &format!("{pen}:{id}"));
        prop_assert_eq!(result.error.map(|e| e.code()), Some("invalid_pen"));
    }

    #[test]
    fn mac48_expands_and_flips(octets in prop::array::uniform6(any::<u8>()), sep in "[:-]") {
        let raw = octets
            .iter()
            .map(|o| format!("{o:02X}"))
            .collect::<Vec<_>>()
            .join(sep.as_str());

        let id = mac_to_eui64(&raw).unwrap();
        prop_assert_eq!(id.len(), 16);
        prop_assert!(id.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        prop_assert_eq!(&id[6..10], "fffe");

        let first = u8::from_str_radix(&id[..2], 16).unwrap();
        prop_assert_eq!(first ^ octets[0], 0x02);

        prop_assert_eq!(detect(&raw), Some(Subtype::Mac));
        prop_assert_eq!(
            breakdown(&generate("mac", &raw).unwrap()).unwrap().identifier,
            id
        );
    }

    #[test]
    fn eui64_flips_only(octets in prop::array::uniform8(any::<u8>())) {
        let raw = hex::encode(octets);
        let id = mac_to_eui64(&raw).unwrap();
        prop_assert_eq!(&id[2..], &raw[2..]);
        let first = u8::from_str_radix(&id[..2], 16).unwrap();
        prop_assert_eq!(first, octets[0] ^ 0x02);
    }

    #[test]
    fn ow_is_normalized_not_flipped(octets in prop::array::uniform8(any::<u8>())) {
        let raw = hex::encode_upper(octets);
        let urn = generate("ow", &raw).unwrap();
        prop_assert_eq!(urn, format!("urn:dev:ow:{}", raw.to_lowercase()));
    }
}
