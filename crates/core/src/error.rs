//! Error types for the versioned-entity engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::version::VersionId;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T, E = EntityError> = std::result::Result<T, E>;

/// Validation failure local to a single version module
///
/// Version modules report these; the engine wraps them into [`EntityError`]
/// with the version context attached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Value does not deserialize into the version's shape
    #[error("value does not match the expected shape: {0}")]
    Shape(String),

    /// A version tag was present but not the one this module validates
    #[error("version tag {found:?} where {expected:?} was expected")]
    TagMismatch {
        /// The tag this module requires
        expected: String,
        /// The tag found on the value (empty when missing or non-string)
        found: String,
    },

    /// Upgrade requested into a version that has no predecessor
    #[error("version {0} has no upgrade path")]
    NoUpgrade(VersionId),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Shape(e.to_string())
    }
}

/// Error types for entity parsing and migration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// No registered schema version matches the value
    ///
    /// `version` carries the claimed tag when the value had one; `None`
    /// means structural detection failed on an untagged value.
    #[error("no registered schema version matches the value")]
    UnknownVersion {
        /// The claimed version, if the value carried a parseable tag
        version: Option<VersionId>,
    },

    /// Value claims a version but fails that version's validation
    #[error("value does not conform to the version {version} schema: {reason}")]
    SchemaMismatch {
        /// The version the value was validated against
        version: VersionId,
        /// The module's validation failure
        reason: String,
    },

    /// An upgrade step produced a value the next version rejects
    ///
    /// This is an internal consistency bug in a version module, not a
    /// caller error. The upgrade contract is enforced by module tests,
    /// so seeing this at runtime means a module shipped broken.
    #[error("upgrade from version {from} to version {to} violated the schema contract: {reason}")]
    UpgradeInvariant {
        /// The version the value was upgraded from
        from: VersionId,
        /// The version whose upgrade step failed
        to: VersionId,
        /// The failure reported by the upgrade step
        reason: String,
    },

    /// The module list handed to the entity is malformed
    #[error("invalid version registry: {reason}")]
    Registry {
        /// What the bootstrap check rejected
        reason: String,
    },
}

impl EntityError {
    /// Wrap a module validation failure with its version context
    pub(crate) fn schema_mismatch(version: VersionId, err: SchemaError) -> Self {
        EntityError::SchemaMismatch {
            version,
            reason: err.to_string(),
        }
    }

    /// Wrap a failed upgrade step with the versions on either side
    pub(crate) fn upgrade_invariant(from: VersionId, to: VersionId, err: SchemaError) -> Self {
        EntityError::UpgradeInvariant {
            from,
            to,
            reason: err.to_string(),
        }
    }
}
