//! The capability set one historical schema version exposes
//!
//! A [`VersionModule`] bundles a validator and, for every version past the
//! oldest, an upgrader from the immediately preceding version's shape. The
//! registry is a uniform mapping from version number to this interface, so
//! adding a schema version means appending one module and bumping nothing
//! else.

use crate::error::SchemaError;
use crate::version::VersionId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// One historical schema version: validator plus optional upgrader
///
/// ## Contract
///
/// `upgrade` for version `k` accepts exactly the validated shape of
/// version `k - 1` and must return a value that validates against version
/// `k`'s own schema. The engine does not re-check this at runtime; each
/// module's tests enforce it.
///
/// Modules are immutable and registered once; they must be safe to share
/// across threads.
pub trait VersionModule: Send + Sync {
    /// The version this module validates
    fn version(&self) -> VersionId;

    /// Validate a raw value against this version's shape
    ///
    /// Returns the canonical form of the value on success: unknown fields
    /// stripped, declared defaults filled in. The input is never mutated.
    fn validate(&self, raw: &Value) -> Result<Value, SchemaError>;

    /// Upgrade the validated previous-version value into this version's shape
    ///
    /// Never called for the oldest version; the default body reports the
    /// missing upgrade path.
    fn upgrade(&self, prev: Value) -> Result<Value, SchemaError> {
        let _ = prev;
        Err(SchemaError::NoUpgrade(self.version()))
    }
}

/// Validate a raw value by round-tripping it through a typed shape
///
/// Deserializes the value into `T` and re-serializes it, producing the
/// canonical form: unknown fields are stripped and declared defaults
/// filled in, matching the historical parser behavior for stored records.
pub fn validate_as<T>(raw: &Value) -> Result<Value, SchemaError>
where
    T: DeserializeOwned + Serialize,
{
    let typed: T = serde_json::from_value(raw.clone())?;
    Ok(serde_json::to_value(typed)?)
}
