//! Version 0: the untagged legacy export format
//!
//! Predates the version-tag convention, so the detector recognizes this
//! shape structurally. The split `url`/`path` endpoint and the
//! display-label auth kinds are the main differences from every later
//! version; most fields were optional in the old exporter and default
//! here accordingly.

use relic_core::{validate_as, SchemaError, VersionId, VersionModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One header or parameter row in the legacy export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct V0Entry {
    pub key: String,
    pub value: String,
    /// Rows exported before the active flag existed default to enabled
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Auth kinds the legacy exporter wrote, as display labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum V0AuthKind {
    #[default]
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Basic Auth")]
    Basic,
    #[serde(rename = "Bearer Token")]
    Bearer,
}

/// The untagged legacy request shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V0Request {
    pub url: String,
    #[serde(default)]
    pub path: String,
    pub method: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub headers: Vec<V0Entry>,
    #[serde(default)]
    pub params: Vec<V0Entry>,
    #[serde(default)]
    pub auth: V0AuthKind,
    #[serde(default)]
    pub http_user: String,
    #[serde(default)]
    pub http_password: String,
    #[serde(default)]
    pub bearer_token: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub raw_params: Option<String>,
    #[serde(default)]
    pub pre_request_script: String,
    #[serde(default)]
    pub test_script: String,
}

fn default_name() -> String {
    "Untitled".to_string()
}

/// Version 0 module
pub(crate) struct V0;

impl VersionModule for V0 {
    fn version(&self) -> VersionId {
        VersionId::ZERO
    }

    fn validate(&self, raw: &Value) -> Result<Value, SchemaError> {
        validate_as::<V0Request>(raw)
    }
}
