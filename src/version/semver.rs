use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// A semantic version: `major.minor.patch[-qualifier][+metadata]`.
///
/// Equality is textual: two versions are equal when they render to the same
/// string, so build metadata makes versions unequal. Ordering is precedence
/// (see [`Version::cmp_precedence`]) and ignores metadata, which is why
/// `Version` implements neither `PartialOrd` nor `Ord`.
#[derive(Debug, Clone, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    qualifier: String,
    metadata: String,
}

impl Version {
    /// Create a release version with no qualifier and no metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            ..Default::default()
        }
    }

    /// Create a version from all five parts. Absent labels become empty.
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        qualifier: Option<&str>,
        metadata: Option<&str>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: qualifier.unwrap_or_default().to_string(),
            metadata: metadata.unwrap_or_default().to_string(),
        }
    }

    /// Return a copy of this version carrying the given prerelease qualifier.
    pub fn with_qualifier(self, qualifier: impl Into<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            ..self
        }
    }

    /// Return a copy of this version carrying the given build metadata.
    pub fn with_metadata(self, metadata: impl Into<String>) -> Self {
        Self {
            metadata: metadata.into(),
            ..self
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease qualifier, e.g. `rc.1` in `1.0.0-rc.1`
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// Alias of [`Version::qualifier`]
    pub fn prerelease(&self) -> &str {
        &self.qualifier
    }

    /// The build metadata, e.g. `build.5` in `1.0.0+build.5`
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    pub fn is_prerelease(&self) -> bool {
        !self.qualifier.is_empty()
    }

    /// Parse a version string, never failing.
    ///
    /// The input is trimmed, then split into a numeric core, a qualifier
    /// (after the first `-`) and metadata (after the first `+`). Numeric
    /// fields that are missing or malformed become 0.
    ///
    /// Examples:
    /// - "1" -> 1.0.0
    /// - "1.0.0-rc.1" -> 1.0.0 with qualifier "rc.1"
    /// - "1.0.0-beta.2+build.5" -> qualifier "beta.2", metadata "build.5"
    /// - "x.2" -> 0.2.0
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        let (rest, metadata) = text.split_once('+').unwrap_or((text, ""));
        let (core, qualifier) = rest.split_once('-').unwrap_or((rest, ""));

        let mut fields = core.split('.').map(parse_field);
        let major = fields.next().unwrap_or_default();
        let minor = fields.next().unwrap_or_default();
        let patch = fields.next().unwrap_or_default();

        Self {
            major,
            minor,
            patch,
            qualifier: qualifier.to_string(),
            metadata: metadata.to_string(),
        }
    }
}

/// Parse one numeric field, falling back to 0
fn parse_field(field: &str) -> u64 {
    field.parse().unwrap_or_else(|e| {
        if !field.is_empty() {
            debug!("Invalid numeric version field '{}': {}", field, e);
        }
        0
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.qualifier.is_empty() {
            write!(f, "-{}", self.qualifier)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        // "1.0.0-a+b" renders the same from ("a", "b") and ("a+b", "")
        self.to_string() == other.to_string()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<String> for Version {
    fn eq(&self, other: &String) -> bool {
        self.to_string() == *other
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.11.100", 1, 11, 100, "", "")]
    #[case("2.1111.994-beta1", 2, 1111, 994, "beta1", "")]
    #[case("2.1111.994+build1", 2, 1111, 994, "", "build1")]
    #[case("2.1111.994-beta2+build16", 2, 1111, 994, "beta2", "build16")]
    #[case("1.0.0-rc.1", 1, 0, 0, "rc.1", "")]
    #[case("1.0.0-beta.2+build.5", 1, 0, 0, "beta.2", "build.5")]
    #[case("1.0.0-beta-2", 1, 0, 0, "beta-2", "")]
    #[case("1.0.0+build-5", 1, 0, 0, "", "build-5")]
    #[case("  3.4.5  ", 3, 4, 5, "", "")]
    #[case("7", 7, 0, 0, "", "")]
    #[case("7.8", 7, 8, 0, "", "")]
    #[case("1.2.3.4", 1, 2, 3, "", "")]
    #[case("x.2.y", 0, 2, 0, "", "")]
    #[case("", 0, 0, 0, "", "")]
    #[case("99999999999999999999.1.1", 0, 1, 1, "", "")] // overflow
    fn parse_splits_core_qualifier_and_metadata(
        #[case] input: &str,
        #[case] major: u64,
        #[case] minor: u64,
        #[case] patch: u64,
        #[case] qualifier: &str,
        #[case] metadata: &str,
    ) {
        let version = Version::parse(input);

        assert_eq!(version.major(), major);
        assert_eq!(version.minor(), minor);
        assert_eq!(version.patch(), patch);
        assert_eq!(version.qualifier(), qualifier);
        assert_eq!(version.metadata(), metadata);
    }

    #[rstest]
    #[case(Version::default(), "0.0.0")]
    #[case(Version::new(1, 2, 3), "1.2.3")]
    #[case(Version::new(1, 2, 3).with_qualifier("alpha"), "1.2.3-alpha")]
    #[case(Version::new(1, 2, 3).with_metadata("sha.5114f85"), "1.2.3+sha.5114f85")]
    #[case(Version::from_parts(1, 2, 3, Some("rc.1"), Some("b7")), "1.2.3-rc.1+b7")]
    #[case(Version::from_parts(1, 2, 3, None, None), "1.2.3")]
    fn display_renders_canonical_form(#[case] version: Version, #[case] expected: &str) {
        assert_eq!(version.to_string(), expected);
    }

    #[test]
    fn equality_is_textual() {
        let version = Version::parse("2.1111.994+build1");

        assert_eq!(version, Version::from_parts(2, 1111, 994, Some(""), Some("build1")));
        assert_ne!(version, Version::from_parts(2, 1111, 994, None, Some("build0")));
        assert_ne!(version, Version::new(2, 1111, 994));
        assert!(version == "2.1111.994+build1");
        assert!(version != "2.1111.994");
        assert!(version != " 2.1111.994+build1");
    }

    #[test]
    fn equality_follows_rendering_not_fields() {
        let split = Version::from_parts(1, 0, 0, Some("a"), Some("b"));
        let joined = Version::from_parts(1, 0, 0, Some("a+b"), None);

        assert_eq!(split, joined);
    }

    #[test]
    fn string_equality_does_not_reparse() {
        let version = Version::new(1, 2, 0);

        assert!(version == "1.2.0");
        assert!(version != "1.2");
        assert!(version != "01.2.0");
    }

    #[test]
    fn serde_uses_canonical_string() {
        let version = Version::parse("1.0.0-beta.2+build.5");

        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"1.0.0-beta.2+build.5\"");

        let decoded: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, version);
    }
}
