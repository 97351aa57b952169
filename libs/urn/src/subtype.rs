//! The closed set of DEV URN subtypes and their descriptors.
//!
//! The registry is a `static` table built at compile time. Entries are handed
//! out as `&'static` references, so no caller can mutate them, and there is no
//! way to register or remove a subtype at runtime.

use serde::{Deserialize, Serialize};

use crate::UrnError;

/// An identifier class under the `urn:dev` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subtype {
    /// MAC-48, EUI-48 or EUI-64 address.
    Mac,
    /// 1-Wire device identifier.
    Ow,
    /// Organization-defined identifier, `PEN:identifier`.
    Org,
    /// Organization serial number, `PEN:serial`.
    Os,
    /// Organization product class and serial, `PEN:product:serial`.
    Ops,
}

/// Static metadata describing a subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubtypeDescriptor {
    #[serde(rename = "subtype")]
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub format: &'static str,
    pub example: &'static str,
}

static DESCRIPTORS: [SubtypeDescriptor; 5] = [
    SubtypeDescriptor {
        key: "mac",
        name: "MAC/EUI Address",
        description: "MAC-48, EUI-48, or EUI-64 address",
        format: "XX:XX:XX:XX:XX:XX or XX-XX-XX-XX-XX-XX or XXXXXXXXXXXX",
        example: "00:1B:44:11:3A:B7",
    },
    SubtypeDescriptor {
        key: "ow",
        name: "1-Wire Device",
        description: "1-Wire device identifier (64-bit)",
        format: "16 hexadecimal characters",
        example: "10E2073A01080063",
    },
    SubtypeDescriptor {
        key: "org",
        name: "Organization Defined",
        description: "Organization-specific identifier using PEN",
        format: "PEN:identifier",
        example: "32473:foo",
    },
    SubtypeDescriptor {
        key: "os",
        name: "Organization Serial",
        description: "Organization serial number using PEN",
        format: "PEN:serial",
        example: "32473:12345",
    },
    SubtypeDescriptor {
        key: "ops",
        name: "Organization Product+Serial",
        description: "Organization product class and serial using PEN",
        format: "PEN:product:serial",
        example: "32473:switch:12345",
    },
];

impl Subtype {
    /// All subtypes in declaration order.
    pub const ALL: [Subtype; 5] = [
        Subtype::Mac,
        Subtype::Ow,
        Subtype::Org,
        Subtype::Os,
        Subtype::Ops,
    ];

    /// Returns the lower-case key used in URNs (`mac`, `ow`, ...).
    #[must_use]
    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    /// Returns the static descriptor for this subtype.
    #[must_use]
    pub fn descriptor(self) -> &'static SubtypeDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Looks up a subtype by its exact key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Returns true for the PEN-prefixed, organization-defined subtypes.
    #[must_use]
    pub const fn is_pen_based(self) -> bool {
        matches!(self, Subtype::Org | Subtype::Os | Subtype::Ops)
    }
}

impl std::fmt::Display for Subtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Subtype {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UrnError::UnknownSubtype(s.to_string()))
    }
}

impl Serialize for Subtype {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Subtype {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Looks up the descriptor for a subtype key.
pub fn lookup(key: &str) -> Option<&'static SubtypeDescriptor> {
    Subtype::from_key(key).map(Subtype::descriptor)
}

/// The five subtype keys, in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    DESCRIPTORS.iter().map(|d| d.key)
}

/// `(key, descriptor)` pairs, in declaration order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static SubtypeDescriptor)> {
    DESCRIPTORS.iter().map(|d| (d.key, d))
}

/// All descriptors, in declaration order.
pub fn list_subtypes() -> &'static [SubtypeDescriptor] {
    &DESCRIPTORS
}
