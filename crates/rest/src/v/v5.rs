//! Version 5: inherited auth
//!
//! Adds the inherit strategy, which defers to the enclosing collection's
//! auth at send time. This file owns [`Auth`], the strategy set still in
//! use by the current schema.

use super::{expect_tag, v1::KeyValueEntry, v1::V1Body, v3::GrantTypeInfo, v4::ApiKeyLocation, v4::V4Auth, v4::V4Request};
use relic_core::{validate_as, SchemaError, VersionId, VersionModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authentication strategies as of version 5 (current)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "authType")]
pub enum Auth {
    #[serde(rename = "none", rename_all = "camelCase")]
    None { auth_active: bool },
    /// Defer to the enclosing collection's auth at send time
    #[serde(rename = "inherit", rename_all = "camelCase")]
    Inherit { auth_active: bool },
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

impl From<V4Auth> for Auth {
    fn from(old: V4Auth) -> Self {
        match old {
            V4Auth::None { auth_active } => Auth::None { auth_active },
            V4Auth::Basic {
                auth_active,
                username,
                password,
            } => Auth::Basic {
                auth_active,
                username,
                password,
            },
            V4Auth::Bearer { auth_active, token } => Auth::Bearer { auth_active, token },
            V4Auth::OAuth2 {
                auth_active,
                grant_type_info,
            } => Auth::OAuth2 {
                auth_active,
                grant_type_info,
            },
            V4Auth::ApiKey {
                auth_active,
                add_to,
                key,
                value,
            } => Auth::ApiKey {
                auth_active,
                add_to,
                key,
                value,
            },
        }
    }
}

/// The version 5 request shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V5Request {
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
    pub auth: Auth,
    pub body: V1Body,
    pub request_variables: Vec<KeyValueEntry>,
}

impl From<V4Request> for V5Request {
    fn from(old: V4Request) -> Self {
        V5Request {
            v: "5".to_string(),
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

/// Version 5 module
pub(crate) struct V5;

impl VersionModule for V5 {
    fn version(&self) -> VersionId {
        VersionId::new(5)
    }

    fn validate(&self, raw: &Value) -> Result<Value, SchemaError> {
        expect_tag(raw, "5")?;
        validate_as::<V5Request>(raw)
    }

    fn upgrade(&self, prev: Value) -> Result<Value, SchemaError> {
        let prev: V4Request = serde_json::from_value(prev)?;
        Ok(serde_json::to_value(V5Request::from(prev))?)
    }
}
