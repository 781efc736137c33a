//! Precedence comparison per semver.org
//!
//! Precedence is computed from the numeric core and the prerelease qualifier.
//! Build metadata never takes part.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::version::semver::Version;

/// Anything that can stand in for a [`Version`] in a comparison.
///
/// Strings are parsed first, then compared structurally, so there is only one
/// comparison path.
pub trait AsVersion {
    fn as_version(&self) -> Cow<'_, Version>;
}

impl AsVersion for Version {
    fn as_version(&self) -> Cow<'_, Version> {
        Cow::Borrowed(self)
    }
}

impl AsVersion for str {
    fn as_version(&self) -> Cow<'_, Version> {
        Cow::Owned(Version::parse(self))
    }
}

impl AsVersion for String {
    fn as_version(&self) -> Cow<'_, Version> {
        self.as_str().as_version()
    }
}

/// One dot-separated prerelease identifier
#[derive(Debug, Clone, Copy)]
pub enum Identifier<'a> {
    /// All ASCII digits, kept as text so arbitrarily long numbers compare correctly
    Numeric(&'a str),
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn new(s: &'a str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(s)
        } else {
            Identifier::Alphanumeric(s)
        }
    }
}

impl PartialEq for Identifier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier<'_> {}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Numeric identifiers always have lower precedence than alphanumeric ones
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => compare_numeric(a, b),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two digit strings by integer value
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Split a qualifier into its identifiers
pub fn identifiers(qualifier: &str) -> impl Iterator<Item = Identifier<'_>> {
    qualifier.split('.').map(Identifier::new)
}

/// Compare two non-empty qualifiers identifier by identifier.
///
/// When one is a prefix of the other, the longer one wins. `Iterator::cmp`
/// already orders that way.
fn compare_qualifiers(a: &str, b: &str) -> Ordering {
    identifiers(a).cmp(identifiers(b))
}

impl Version {
    /// Compare by semver precedence, ignoring build metadata.
    ///
    /// A release outranks any prerelease of the same numeric core.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major()
            .cmp(&other.major())
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
            .then_with(|| {
                match (self.qualifier().is_empty(), other.qualifier().is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => compare_qualifiers(self.qualifier(), other.qualifier()),
                }
            })
    }

    /// Compare against a version or a version string
    pub fn compare<V: AsVersion + ?Sized>(&self, other: &V) -> Ordering {
        self.cmp_precedence(&other.as_version())
    }

    pub fn is_greater<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn is_lesser<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Return whichever of the two has higher precedence; ties go to `a`
    pub fn greater<'a>(a: &'a Version, b: &'a Version) -> &'a Version {
        if b.is_greater(a) { b } else { a }
    }

    /// Return whichever of the two has lower precedence; ties go to `a`
    pub fn lesser<'a>(a: &'a Version, b: &'a Version) -> &'a Version {
        if b.is_lesser(a) { b } else { a }
    }
}
