//! Version 4: API-key auth
//!
//! Adds the API-key strategy (sent as a header or a query parameter).
//! Nothing existing changes shape; the upgrade re-tags.

use super::{expect_tag, v1::KeyValueEntry, v1::V1Body, v3::GrantTypeInfo, v3::V3Auth, v3::V3Request};
use relic_core::{validate_as, SchemaError, VersionId, VersionModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where an API key is injected into the outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiKeyLocation {
    #[serde(rename = "HEADERS")]
    Headers,
    #[serde(rename = "QUERY_PARAMS")]
    QueryParams,
}

/// Authentication strategies as of version 4
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "authType")]
pub enum V4Auth {
    #[serde(rename = "none", rename_all = "camelCase")]
    None { auth_active: bool },
    #[serde(rename = "basic", rename_all = "camelCase")]
    Basic {
        auth_active: bool,
        username: String,
        password: String,
    },
    #[serde(rename = "bearer", rename_all = "camelCase")]
    Bearer { auth_active: bool, token: String },
    #[serde(rename = "oauth-2", rename_all = "camelCase")]
    OAuth2 {
        auth_active: bool,
        grant_type_info: GrantTypeInfo,
    },
    #[serde(rename = "api-key", rename_all = "camelCase")]
    ApiKey {
        auth_active: bool,
        add_to: ApiKeyLocation,
        key: String,
        value: String,
    },
}

impl From<V3Auth> for V4Auth {
    fn from(old: V3Auth) -> Self {
        match old {
            V3Auth::None { auth_active } => V4Auth::None { auth_active },
            V3Auth::Basic {
                auth_active,
                username,
                password,
            } => V4Auth::Basic {
                auth_active,
                username,
                password,
            },
            V3Auth::Bearer { auth_active, token } => V4Auth::Bearer { auth_active, token },
            V3Auth::OAuth2 {
                auth_active,
                grant_type_info,
            } => V4Auth::OAuth2 {
                auth_active,
                grant_type_info,
            },
        }
    }
}

/// The version 4 request shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V4Request {
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
    pub auth: V4Auth,
    pub body: V1Body,
    pub request_variables: Vec<KeyValueEntry>,
}

impl From<V3Request> for V4Request {
    fn from(old: V3Request) -> Self {
        V4Request {
            v: "4".to_string(),
            id: old.id,
            endpoint: old.endpoint,
            name: old.name,
            method: old.method,
            headers: old.headers,
            params: old.params,
            pre_request_script: old.pre_request_script,
            test_script: old.test_script,
            auth: old.auth.into(),
            body: old.body,
            request_variables: old.request_variables,
        }
    }
}

/// Version 4 module
pub(crate) struct V4;

impl VersionModule for V4 {
    fn version(&self) -> VersionId {
        VersionId::new(4)
    }

    fn validate(&self, raw: &Value) -> Result<Value, SchemaError> {
        expect_tag(raw, "4")?;
        validate_as::<V4Request>(raw)
    }

    fn upgrade(&self, prev: Value) -> Result<Value, SchemaError> {
        let prev: V3Request = serde_json::from_value(prev)?;
        Ok(serde_json::to_value(V4Request::from(prev))?)
    }
}
