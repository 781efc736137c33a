//! Semantic versions with semver.org precedence and a properties codec.
//!
//! # Modules
//!
//! - [`version`]: the `Version` value, its parser and precedence comparator
//! - [`properties`]: conversion between versions, key-value snapshots and text streams
//! - [`config`]: CLI configuration and data directory resolution
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod logging;
pub mod properties;
pub mod version;

pub use properties::{Parser, Properties, PropertiesError, Serializer};
pub use version::{AsVersion, Version};
