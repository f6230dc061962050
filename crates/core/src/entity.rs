//! Versioned entity: detection, migration chain, and parse facade
//!
//! ## Data flow
//!
//! ```text
//! raw value ── detect ──▶ (version, raw) ── migrate ──▶ current record
//! ```
//!
//! - Detection trusts the decimal-digit version tag when one is present;
//!   untagged values are checked structurally against the oldest schema
//!   only, because that format predates the tagging convention.
//! - Migration is a strict left-fold over the version range: validate at
//!   the start version, then apply every upgrade in ascending order with
//!   no skipping. Either every step succeeds or the whole operation fails
//!   without partial results.
//!
//! All operations are synchronous and pure; the registry is read-only
//! after construction and safe for unsynchronized concurrent reads.

use crate::error::{EntityError, Result};
use crate::module::VersionModule;
use crate::version::{VersionId, VERSION_TAG_FIELD};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// A versioned record entity
///
/// Combines a registry of [`VersionModule`]s with the record type `T`
/// produced by the latest version. The registry is an ordered list indexed
/// by version number, so density over `[0, latest]` is structural.
///
/// Extending the chain means appending one module; nothing else changes.
pub struct VersionedEntity<T> {
    modules: Vec<Box<dyn VersionModule>>,
    _record: PhantomData<fn() -> T>,
}

impl<T> VersionedEntity<T> {
    /// Build an entity from its ordered version modules
    ///
    /// The vector index is the version number. Construction fails if the
    /// registry is empty or a module's declared version disagrees with its
    /// position.
    pub fn new(modules: Vec<Box<dyn VersionModule>>) -> Result<Self> {
        if modules.is_empty() {
            return Err(EntityError::Registry {
                reason: "registry holds no version modules".to_string(),
            });
        }
        for (index, module) in modules.iter().enumerate() {
            if module.version().as_usize() != index {
                return Err(EntityError::Registry {
                    reason: format!(
                        "module at index {index} declares version {}",
                        module.version()
                    ),
                });
            }
        }
        Ok(VersionedEntity {
            modules,
            _record: PhantomData,
        })
    }

    /// The latest registered version
    pub fn latest_version(&self) -> VersionId {
        VersionId::new((self.modules.len() - 1) as u32)
    }

    fn module(&self, version: VersionId) -> Option<&dyn VersionModule> {
        self.modules.get(version.as_usize()).map(|m| m.as_ref())
    }

    /// Detect which registered version a raw value belongs to
    ///
    /// A decimal-digit tag commits the value to the tag path: a tag naming
    /// no registered version still returns that version (the chain rejects
    /// it), and a tag too large to parse yields `None` without any
    /// structural fallback. Only values with no usable tag are checked
    /// against the oldest schema.
    pub fn detect(&self, raw: &Value) -> Option<VersionId> {
        if let Some(tag) = decimal_tag(raw) {
            return VersionId::from_tag(tag);
        }
        match self.modules[0].validate(raw) {
            Ok(_) => Some(VersionId::ZERO),
            Err(_) => None,
        }
    }

    /// Validate a raw value at a version, then fold upgrades to the latest
    ///
    /// `start == latest` validates without upgrading. Fails atomically: on
    /// any error no partial result escapes and the caller's value is
    /// untouched.
    pub fn migrate(&self, raw: &Value, start: VersionId) -> Result<Value> {
        let module = self.module(start).ok_or(EntityError::UnknownVersion {
            version: Some(start),
        })?;
        let mut value = module
            .validate(raw)
            .map_err(|e| EntityError::schema_mismatch(start, e))?;

        for step in &self.modules[start.as_usize() + 1..] {
            let to = step.version();
            trace!(target: "relic::entity", %to, "applying upgrade step");
            value = step.upgrade(value).map_err(|e| {
                debug!(target: "relic::entity", %to, error = %e, "upgrade step failed");
                EntityError::upgrade_invariant(VersionId::new(to.as_u32() - 1), to, e)
            })?;
        }
        Ok(value)
    }

    /// Whether a value already validates against the latest schema
    ///
    /// No migration is performed.
    pub fn is_latest(&self, raw: &Value) -> bool {
        self.modules[self.modules.len() - 1].validate(raw).is_ok()
    }

    /// Whether a value can be detected and migrated to the latest version
    ///
    /// A full detect-plus-migrate dry run; the produced record is dropped.
    pub fn is(&self, raw: &Value) -> bool {
        match self.detect(raw) {
            Some(version) => self.migrate(raw, version).is_ok(),
            None => false,
        }
    }
}

impl<T> VersionedEntity<T>
where
    T: DeserializeOwned,
{
    /// Parse anything into a current record, reporting failure as a value
    ///
    /// Never panics. Failure kinds: [`EntityError::UnknownVersion`] when
    /// detection finds nothing, [`EntityError::SchemaMismatch`] when the
    /// value fails its claimed version, [`EntityError::UpgradeInvariant`]
    /// when a module breaks the upgrade contract.
    pub fn safe_parse(&self, raw: &Value) -> Result<T> {
        let version = self
            .detect(raw)
            .ok_or(EntityError::UnknownVersion { version: None })?;
        let migrated = self.migrate(raw, version)?;
        serde_json::from_value(migrated).map_err(|e| EntityError::Registry {
            reason: format!("latest module output does not deserialize into the record type: {e}"),
        })
    }

    /// Parse, treating malformed input as a programming error
    ///
    /// # Panics
    ///
    /// Panics whenever [`safe_parse`](Self::safe_parse) would report a
    /// failure. Reserve for call sites where the value is known valid by
    /// construction; recoverable inputs go through `safe_parse`.
    pub fn parse_or_panic(&self, raw: &Value) -> T {
        match self.safe_parse(raw) {
            Ok(record) => record,
            Err(err) => panic!("value failed versioned parse: {err}"),
        }
    }
}

/// The value of the version-tag field, when it is a decimal-digit string
fn decimal_tag(raw: &Value) -> Option<&str> {
    let tag = raw.get(VERSION_TAG_FIELD)?.as_str()?;
    (!tag.is_empty() && tag.bytes().all(|b| b.is_ascii_digit())).then_some(tag)
}

// ============================================================================
// Tests
// ============================================================================
