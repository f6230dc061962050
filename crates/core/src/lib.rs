//! Core engine for versioned record entities
//!
//! This crate defines the generic machinery for evolving a single record
//! type across an append-only chain of schema versions:
//! - VersionId: identifier of one historical schema version
//! - VersionModule: validator + upgrader capability set, one per version
//! - VersionedEntity: registry, version detector, migration chain, and the
//!   parse facade built on top of them
//! - Error: typed failure surface (unknown version, schema mismatch,
//!   upgrade contract violations)
//!
//! The crate knows nothing about any concrete record shape; domain crates
//! supply the version modules and the current record type.
//!
//! # Quick Start
//!
//! ```ignore
//! use relic_core::VersionedEntity;
//!
//! let entity: VersionedEntity<MyRecord> = VersionedEntity::new(modules)?;
//!
//! // Detect + migrate an arbitrary stored value
//! let record = entity.safe_parse(&raw)?;
//!
//! // Cheap checks without producing a record
//! assert!(entity.is_latest(&raw) || entity.is(&raw));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod entity;
pub mod error;
pub mod module;
pub mod version;

// Re-export commonly used types and traits
pub use entity::VersionedEntity;
pub use error::{EntityError, Result, SchemaError};
pub use module::{validate_as, VersionModule};
pub use version::{VersionId, VERSION_TAG_FIELD};
