//! Version 7: reference identifiers
//!
//! Adds the optional `_ref_id` reference identifier, a process-assigned
//! token that distinguishes otherwise-identical records (duplicates in a
//! collection). Upgrades never mint one, so migration stays deterministic;
//! records from older vintages carry none until the default-record
//! factory or an editor flow assigns it.
//!
//! This file owns [`Request`], the current record shape.

use super::{expect_tag, v1::KeyValueEntry, v5::Auth, v6::RequestBody, v6::V6Request};
use relic_core::{validate_as, SchemaError, VersionId, VersionModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The current request record (version 7)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Version tag, a decimal-digit string
    pub v: String,
    /// Collection-assigned identifier, absent on standalone records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Reference identifier; see the module docs
    #[serde(rename = "_ref_id", default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    pub endpoint: String,
    pub name: String,
    pub method: String,
    pub headers: Vec<KeyValueEntry>,
    pub params: Vec<KeyValueEntry>,
    pub pre_request_script: String,
    pub test_script: String,
    pub auth: Auth,
    pub body: RequestBody,
    pub request_variables: Vec<KeyValueEntry>,
}

impl From<V6Request> for Request {
    fn from(old: V6Request) -> Self {
        Request {
            v: "7".to_string(),
            id: old.id,
            ref_id: None,
            endpoint: old.endpoint,
            name: old.name,
            method: old.method,
            headers: old.headers,
            params: old.params,
            pre_request_script: old.pre_request_script,
            test_script: old.test_script,
            auth: old.auth,
            body: old.body,
            request_variables: old.request_variables,
        }
    }
}

/// Version 7 module
pub(crate) struct V7;

impl VersionModule for V7 {
    fn version(&self) -> VersionId {
        VersionId::new(7)
    }

    fn validate(&self, raw: &Value) -> Result<Value, SchemaError> {
        expect_tag(raw, "7")?;
        validate_as::<Request>(raw)
    }

    fn upgrade(&self, prev: Value) -> Result<Value, SchemaError> {
        let prev: V6Request = serde_json::from_value(prev)?;
        Ok(serde_json::to_value(Request::from(prev))?)
    }
}
