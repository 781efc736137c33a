//! Version to properties serializer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::properties::error::PropertiesError;
use crate::properties::format;
use crate::properties::types::{MAJOR, METADATA, MINOR, PATCH, PRERELEASE, Properties, QUALIFIER};
use crate::version::Version;

/// Writes versions in their properties representation
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer;

impl Serializer {
    pub fn new() -> Self {
        Self
    }

    /// Snapshot of the version's fields.
    ///
    /// Numeric fields are always present. Metadata is written only when set.
    /// A qualifier is written under both `qualifier` and `prerelease` so that
    /// readers using either key find it.
    pub fn properties(&self, version: &Version) -> Properties {
        let mut entries = vec![
            (MAJOR, version.major().to_string()),
            (MINOR, version.minor().to_string()),
            (PATCH, version.patch().to_string()),
        ];

        if !version.metadata().is_empty() {
            entries.push((METADATA, version.metadata().to_string()));
        }

        if !version.qualifier().is_empty() {
            entries.push((QUALIFIER, version.qualifier().to_string()));
            entries.push((PRERELEASE, version.qualifier().to_string()));
        }

        entries.into_iter().collect()
    }

    /// Render the version as properties text
    pub fn serialize(&self, version: &Version) -> String {
        format::to_string(&self.properties(version))
    }

    pub fn serialize_to<W: Write>(&self, version: &Version, writer: W) -> Result<(), PropertiesError> {
        format::write(&self.properties(version), writer)
    }

    /// Write the version to a properties file, replacing any existing content
    pub fn serialize_to_file(&self, version: &Version, path: &Path) -> Result<(), PropertiesError> {
        info!("Writing version {} to {:?}", version, path);

        let file = File::create(path).map_err(|source| PropertiesError::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.serialize_to(version, BufWriter::new(file))
    }
}
