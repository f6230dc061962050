//! The request schema history, one module per version
//!
//! Each submodule carries the typed shapes of one schema version, the
//! upgrade from its predecessor, and the `VersionModule` implementation
//! the registry is built from. The chain is append-only: a new schema
//! version means a new file here plus one entry in [`version_modules`].
//!
//! Types introduced by one version and unchanged since are re-used by
//! later versions rather than redeclared, so the file that first names a
//! type is the one that owns it (`KeyValueEntry` in v1, `GrantTypeInfo`
//! in v3, `Auth` in v5, `RequestBody` in v6).

use relic_core::{SchemaError, VersionModule, VERSION_TAG_FIELD};
use serde_json::Value;

pub mod v0;
pub mod v1;
pub mod v2;
pub mod v3;
pub mod v4;
pub mod v5;
pub mod v6;
pub mod v7;

/// The ordered module list the request registry is built from
///
/// The position in this list is the version number.
pub(crate) fn version_modules() -> Vec<Box<dyn VersionModule>> {
    vec![
        Box::new(v0::V0),
        Box::new(v1::V1),
        Box::new(v2::V2),
        Box::new(v3::V3),
        Box::new(v4::V4),
        Box::new(v5::V5),
        Box::new(v6::V6),
        Box::new(v7::V7),
    ]
}

/// Require the wire tag of a specific version before shape validation
fn expect_tag(raw: &Value, expected: &str) -> Result<(), SchemaError> {
    match raw.get(VERSION_TAG_FIELD).and_then(Value::as_str) {
        Some(tag) if tag == expected => Ok(()),
        other => Err(SchemaError::TagMismatch {
            expected: expected.to_string(),
            found: other.unwrap_or_default().to_string(),
        }),
    }
}
