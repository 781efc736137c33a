//! Properties to version parser

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::properties::error::PropertiesError;
use crate::properties::format;
use crate::properties::types::{MAJOR, METADATA, MINOR, PATCH, PRERELEASE, Properties, QUALIFIER};
use crate::version::Version;

/// Reads versions from their properties representation.
///
/// Every input is reduced to a canonical version string and handed to
/// [`Version::parse`], so the string parser's fallbacks apply here too.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Build a version from a properties snapshot.
    ///
    /// Each field is looked up by its bare key, then by `version.{key}`. The
    /// qualifier additionally falls back to `prerelease`. Missing numeric
    /// fields default to 0, missing labels to empty.
    pub fn parse_properties(&self, properties: &Properties) -> Version {
        let field = |key: &str, default: &'static str| {
            properties.get_with_prefix(key).unwrap_or(default).to_string()
        };

        let qualifier = properties
            .get_with_prefix(QUALIFIER)
            .or_else(|| properties.get_with_prefix(PRERELEASE))
            .unwrap_or_default();

        let mut text = format!("{}.{}.{}", field(MAJOR, "0"), field(MINOR, "0"), field(PATCH, "0"));
        if !qualifier.is_empty() {
            text.push('-');
            text.push_str(qualifier);
        }
        let metadata = field(METADATA, "");
        if !metadata.is_empty() {
            text.push('+');
            text.push_str(&metadata);
        }

        Version::parse(&text)
    }

    /// Parse properties text. Malformed lines are ignored.
    pub fn parse_str(&self, text: &str) -> Version {
        self.parse_properties(&format::parse(text))
    }

    /// Parse a properties stream. Only read failures are reported.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Version, PropertiesError> {
        let properties = format::read(reader)?;
        Ok(self.parse_properties(&properties))
    }

    /// Parse a properties file. Failing to open or read it is reported.
    pub fn parse_file(&self, path: &Path) -> Result<Version, PropertiesError> {
        info!("Loading version properties from {:?}", path);

        let file = File::open(path).map_err(|source| PropertiesError::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_reader(BufReader::new(file))
    }
}
