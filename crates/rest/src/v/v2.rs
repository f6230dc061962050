//! Version 2: request variables
//!
//! Adds the `requestVariables` rows used for per-request substitution.
//! Nothing else changes; upgraded records start with no variables.

use super::{expect_tag, v1::KeyValueEntry, v1::V1Auth, v1::V1Body, v1::V1Request};
use relic_core::{validate_as, SchemaError, VersionId, VersionModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The version 2 request shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V2Request {
    pub v: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub endpoint: String,
    pub name: String,
    pub method: String,
    pub headers: Vec<KeyValueEntry>,
    pub params: Vec<KeyValueEntry>,
    pub pre_request_script: String,
    pub test_script: String,
    pub auth: V1Auth,
    pub body: V1Body,
    pub request_variables: Vec<KeyValueEntry>,
}

impl From<V1Request> for V2Request {
    fn from(old: V1Request) -> Self {
        V2Request {
            v: "2".to_string(),
            id: old.id,
            endpoint: old.endpoint,
            name: old.name,
            method: old.method,
            headers: old.headers,
            params: old.params,
            pre_request_script: old.pre_request_script,
            test_script: old.test_script,
            auth: old.auth,
            body: old.body,
            request_variables: Vec::new(),
        }
    }
}

/// Version 2 module
pub(crate) struct V2;

impl VersionModule for V2 {
    fn version(&self) -> VersionId {
        VersionId::new(2)
    }

    fn validate(&self, raw: &Value) -> Result<Value, SchemaError> {
        expect_tag(raw, "2")?;
        validate_as::<V2Request>(raw)
    }

    fn upgrade(&self, prev: Value) -> Result<Value, SchemaError> {
        let prev: V1Request = serde_json::from_value(prev)?;
        Ok(serde_json::to_value(V2Request::from(prev))?)
    }
}
