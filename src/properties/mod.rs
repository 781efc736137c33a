//! Properties codec for versions
//!
//! ```text
//! Version ──Serializer──▶ Properties ──format::write──▶ key=value lines
//! Version ◀──Parser────── Properties ◀──format::read─── key=value lines
//! ```
//!
//! # Modules
//!
//! - [`types`]: the `Properties` snapshot and the recognised keys
//! - [`format`]: the line-oriented text format
//! - [`parser`]: properties to `Version`
//! - [`serializer`]: `Version` to properties
//! - [`error`]: I/O error type

pub mod error;
pub mod format;
pub mod parser;
pub mod serializer;
pub mod types;

use std::io::{Read, Write};

pub use error::PropertiesError;
pub use parser::Parser;
pub use serializer::Serializer;
pub use types::Properties;

use crate::version::Version;

impl Version {
    /// Properties snapshot of this version, see [`Serializer::properties`]
    pub fn properties(&self) -> Properties {
        Serializer::new().properties(self)
    }

    /// Build a version from a properties snapshot, see [`Parser::parse_properties`]
    pub fn from_properties(properties: &Properties) -> Self {
        Parser::new().parse_properties(properties)
    }

    /// Read a version from a properties stream
    pub fn load<R: Read>(reader: R) -> Result<Self, PropertiesError> {
        Parser::new().parse_reader(reader)
    }

    /// Write this version to a properties stream
    pub fn store<W: Write>(&self, writer: W) -> Result<(), PropertiesError> {
        Serializer::new().serialize_to(self, writer)
    }
}
