//! Heuristic subtype detection for undeclared input.
//!
//! Rules, first match wins:
//!
//! 1. Six or eight hex octets delimited by `:` or `-`, or a bare string of 12
//!    or 16 hex digits, is a hardware address.
//! 2. Digits, a colon, then at least one more character is PEN-based: two
//!    segments or three segments.
//! 3. Anything else is not detected.
//!
//! Two inputs are ambiguous by construction. A bare 16-hex string is a valid
//! EUI-64 and a valid 1-Wire identifier, and a two-segment PEN string fits
//! both `org` and `os`. [`DetectPolicy`] names the tie-break for each; the
//! default reports `mac` and `org`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::validate::{EUI48_HEX_LEN, EUI64_HEX_LEN};
use crate::{Subtype, UrnError};

/// What a bare 16-hex-digit string is classified as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexTieBreak {
    #[default]
    Mac,
    Ow,
}

/// What a two-segment `PEN:value` string is classified as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenPairTieBreak {
    #[default]
    Org,
    Os,
}

impl From<HexTieBreak> for Subtype {
    fn from(value: HexTieBreak) -> Self {
        match value {
            HexTieBreak::Mac => Subtype::Mac,
            HexTieBreak::Ow => Subtype::Ow,
        }
    }
}

impl From<PenPairTieBreak> for Subtype {
    fn from(value: PenPairTieBreak) -> Self {
        match value {
            PenPairTieBreak::Org => Subtype::Org,
            PenPairTieBreak::Os => Subtype::Os,
        }
    }
}

impl std::str::FromStr for HexTieBreak {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mac" => Ok(Self::Mac),
            "ow" => Ok(Self::Ow),
            other => Err(UrnError::UnknownSubtype(other.to_string())),
        }
    }
}

impl std::str::FromStr for PenPairTieBreak {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "org" => Ok(Self::Org),
            "os" => Ok(Self::Os),
            other => Err(UrnError::UnknownSubtype(other.to_string())),
        }
    }
}

impl std::fmt::Display for HexTieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Subtype::from(*self), f)
    }
}

impl std::fmt::Display for PenPairTieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Subtype::from(*self), f)
    }
}

/// Tie-break policy for ambiguous inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectPolicy {
    #[serde(default)]
    pub bare_hex16: HexTieBreak,
    #[serde(default)]
    pub pen_pair: PenPairTieBreak,
}

/// Pattern-based subtype detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detector {
    policy: DetectPolicy,
}

impl Detector {
    #[must_use]
    pub const fn new(policy: DetectPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> DetectPolicy {
        self.policy
    }

    /// Guesses the subtype of `raw`, or `None` when no rule matches.
    pub fn detect(&self, raw: &str) -> Option<Subtype> {
        let input = raw.trim();

        let detected = if is_delimited_octets(input, 6)
            || is_delimited_octets(input, 8)
            || is_bare_hex(input, EUI48_HEX_LEN)
        {
            Some(Subtype::Mac)
        } else if is_bare_hex(input, EUI64_HEX_LEN) {
            Some(self.policy.bare_hex16.into())
        } else if looks_pen_prefixed(input) {
            match input.split(':').count() {
                2 => Some(self.policy.pen_pair.into()),
                3 => Some(Subtype::Ops),
                _ => None,
            }
        } else {
            None
        };

        trace!(detected = ?detected, "subtype detection");
        detected
    }
}

/// Detects with the default policy.
pub fn detect(raw: &str) -> Option<Subtype> {
    Detector::default().detect(raw)
}

/// `XX:XX:...` or `XX-XX-...` with exactly `octets` groups. Separators may be
/// mixed.
fn is_delimited_octets(input: &str, octets: usize) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != octets * 3 - 1 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| {
        if i % 3 == 2 {
            matches!(b, b':' | b'-')
        } else {
            b.is_ascii_hexdigit()
        }
    })
}

fn is_bare_hex(input: &str, len: usize) -> bool {
    input.len() == len && input.bytes().all(|b| b.is_ascii_hexdigit())
}

/// One or more ASCII digits, a colon, then at least one character that is not
/// a line terminator.
fn looks_pen_prefixed(input: &str) -> bool {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let mut rest = input[digits..].chars();
    rest.next() == Some(':')
        && rest
            .next()
            .is_some_and(|c| !matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("00:1B:44:11:3A:B7", Some(Subtype::Mac))]
    #[case("00-1b-44-11-3a-b7", Some(Subtype::Mac))]
    #[case("00:1b-44:11-3a:b7", Some(Subtype::Mac))]
    #[case("00:1B:44:FF:FE:11:3A:B7", Some(Subtype::Mac))]
    #[case("001B44113AB7", Some(Subtype::Mac))]
    #[case("1000008F12AA", Some(Subtype::Mac))]
    #[case("10E2073A01080063", Some(Subtype::Mac))]
    #[case("  001b44113ab7  ", Some(Subtype::Mac))]
    #[case("32473:foo", Some(Subtype::Org))]
    #[case("32473:12345", Some(Subtype::Org))]
    #[case("32473:switch:12345", Some(Subtype::Ops))]
    #[case("032473:foo", Some(Subtype::Org))]
    #[case("1:a:b:c", None)]
    #[case("32473:", None)]
    #[case("abc:foo", None)]
    #[case("001B.4411.3AB7", None)]
    #[case("00:1B:44:11:3A", None)]
    #[case("0:1B:44:11:3A:B7", None)]
    #[case("", None)]
    #[case("hello world", None)]
    fn test_detect_default_policy(#[case] raw: &str, #[case] expected: Option<Subtype>) {
        assert_eq!(detect(raw), expected);
    }

    #[test]
    fn test_pen_rule_needs_non_newline_after_colon() {
        assert_eq!(detect("32473:\nfoo"), None);
        assert_eq!(detect("32473: foo"), Some(Subtype::Org));
    }

    #[test]
    fn test_policy_overrides_ambiguous_cases() {
        let detector = Detector::new(DetectPolicy {
            bare_hex16: HexTieBreak::Ow,
            pen_pair: PenPairTieBreak::Os,
        });
        assert_eq!(detector.detect("10E2073A01080063"), Some(Subtype::Ow));
        assert_eq!(detector.detect("32473:12345"), Some(Subtype::Os));
        // Unambiguous inputs are unaffected.
        assert_eq!(
            detector.detect("10:E2:07:3A:01:08:00:63"),
            Some(Subtype::Mac)
        );
        assert_eq!(detector.detect("001B44113AB7"), Some(Subtype::Mac));
        assert_eq!(detector.detect("32473:switch:1"), Some(Subtype::Ops));
    }

    #[test]
    fn test_detected_keys_are_registry_keys() {
        let policies = [
            DetectPolicy::default(),
            DetectPolicy {
                bare_hex16: HexTieBreak::Ow,
                pen_pair: PenPairTieBreak::Os,
            },
        ];
        for policy in policies {
            for input in ["00:1B:44:11:3A:B7", "10E2073A01080063", "1:a", "1:a:b"] {
                let subtype = Detector::new(policy).detect(input).unwrap();
                assert!(crate::lookup(subtype.key()).is_some());
            }
        }
    }

    #[test]
    fn test_tie_break_parsing() {
        assert_eq!("ow".parse::<HexTieBreak>().unwrap(), HexTieBreak::Ow);
        assert_eq!("org".parse::<PenPairTieBreak>().unwrap(), PenPairTieBreak::Org);
        assert!("ops".parse::<PenPairTieBreak>().is_err());
        assert!("org".parse::<HexTieBreak>().is_err());
    }

    #[test]
    fn test_policy_deserializes_with_defaults() {
        let policy: DetectPolicy = serde_json::from_str(r#"{"bare_hex16":"ow"}"#).unwrap();
        assert_eq!(policy.bare_hex16, HexTieBreak::Ow);
        assert_eq!(policy.pen_pair, PenPairTieBreak::Org);
    }
}
