//! Version identifiers for the linear schema chain
//!
//! A [`VersionId`] names one historical schema version. Versions are
//! non-negative integers, totally ordered, and dense: a registry whose
//! latest version is `n` holds a module for every integer in `[0, n]`.
//!
//! ## Wire encoding
//!
//! Persisted records carry their version as a decimal-digit string under
//! the [`VERSION_TAG_FIELD`] field. The oldest format predates the tagging
//! convention, so untagged values are detected structurally instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field name that carries the version tag on persisted records
///
/// The detector's tag-reading step and the per-version schemas must agree
/// on this name; if a future version renames the tag field, both sides
/// change in lockstep.
pub const VERSION_TAG_FIELD: &str = "v";

/// Identifier of one historical schema version
///
/// ## Invariants
///
/// - Versions are dense from 0 to the registry's latest
/// - Ordering matches migration order: upgrades run strictly ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionId(u32);

impl VersionId {
    /// The oldest version, predating the tagging convention
    pub const ZERO: VersionId = VersionId(0);

    /// Create a version identifier
    pub const fn new(n: u32) -> Self {
        VersionId(n)
    }

    /// Numeric value
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Registry index (versions index the module list directly)
    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Whether this is the oldest version
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The next version in the chain
    pub const fn next(&self) -> Self {
        VersionId(self.0 + 1)
    }

    /// Wire tag for this version (decimal-digit string)
    pub fn tag(&self) -> String {
        self.0.to_string()
    }

    /// Parse a wire tag into a version identifier
    ///
    /// Accepts only non-empty strings of ASCII decimal digits. Returns
    /// `None` for anything else, including digit strings too large for
    /// the version range.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        tag.parse().ok().map(VersionId)
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VersionId {
    fn from(n: u32) -> Self {
        VersionId(n)
    }
}

// ============================================================================
// Tests
// ============================================================================
