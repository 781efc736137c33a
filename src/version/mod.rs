//! Semantic version value and precedence rules
//!
//! ```text
//! "1.0.0-rc.1+b5" ──parse──▶ Version ──Display──▶ "1.0.0-rc.1+b5"
//!                               │
//!                               ▼
//!                        cmp_precedence
//!                   (core, then qualifier identifiers)
//! ```
//!
//! # Modules
//!
//! - [`semver`]: the `Version` type, construction, parsing, rendering and equality
//! - [`compare`]: precedence comparison and prerelease identifiers

pub mod compare;
pub mod semver;

pub use self::compare::{AsVersion, Identifier};
pub use self::semver::Version;
