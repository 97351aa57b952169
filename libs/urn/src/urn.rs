//! The typed canonical identifier, `urn:dev:<subtype>:<identifier>`.

use crate::{Subtype, UrnError};

/// URN scheme token.
pub const SCHEME: &str = "urn";

/// Namespace identifier reserved for device URNs.
pub const NAMESPACE: &str = "dev";

/// A canonical DEV URN.
///
/// Values are produced by [`DevUrn::generate`] (validated input) or by parsing
/// an existing URN string. The identifier segment may itself contain colons
/// for the PEN-based subtypes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DevUrn {
    subtype: Subtype,
    identifier: String,
}

impl DevUrn {
    pub(crate) fn from_parts(subtype: Subtype, identifier: String) -> Self {
        Self {
            subtype,
            identifier,
        }
    }

    /// Returns the subtype.
    #[must_use]
    pub const fn subtype(&self) -> Subtype {
        self.subtype
    }

    /// Returns the identifier segment, everything after `urn:dev:<subtype>:`.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Parses a URN string. See [`crate::breakdown`] for the accepted shape.
    pub fn parse(s: &str) -> Result<Self, UrnError> {
        crate::decode::parse(s)
    }
}

impl std::fmt::Display for DevUrn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{SCHEME}:{NAMESPACE}:{}:{}",
            self.subtype, self.identifier
        )
    }
}

impl std::str::FromStr for DevUrn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for DevUrn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DevUrn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
