//! Version 3: grant-type OAuth 2
//!
//! Replaces the flat OAuth 2 auth of v1/v2 with an explicit grant-type
//! configuration. Existing OAuth records are mapped onto the
//! authorization-code grant, which is what the flat fields encoded; the
//! OIDC discovery URL has no slot in the new shape and is dropped.

use super::{expect_tag, v1::KeyValueEntry, v1::V1Auth, v1::V1Body, v2::V2Request};
use relic_core::{validate_as, SchemaError, VersionId, VersionModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OAuth 2 grant-type configuration introduced in version 3
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "grantType")]
pub enum GrantTypeInfo {
    #[serde(rename = "AUTHORIZATION_CODE", rename_all = "camelCase")]
    AuthorizationCode {
        auth_endpoint: String,
        token_endpoint: String,
        #[serde(rename = "clientID")]
        client_id: String,
        client_secret: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scopes: Option<String>,
        #[serde(default)]
        token: String,
    },
    #[serde(rename = "CLIENT_CREDENTIALS", rename_all = "camelCase")]
    ClientCredentials {
        auth_endpoint: String,
        #[serde(rename = "clientID")]
        client_id: String,
        client_secret: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scopes: Option<String>,
        #[serde(default)]
        token: String,
    },
    #[serde(rename = "PASSWORD", rename_all = "camelCase")]
    Password {
        auth_endpoint: String,
        username: String,
        password: String,
        #[serde(rename = "clientID")]
        client_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scopes: Option<String>,
        #[serde(default)]
        token: String,
    },
    #[serde(rename = "IMPLICIT", rename_all = "camelCase")]
    Implicit {
        auth_endpoint: String,
        #[serde(rename = "clientID")]
        client_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scopes: Option<String>,
        #[serde(default)]
        token: String,
    },
}

/// Authentication strategies as of version 3
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "authType")]
pub enum V3Auth {
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
}

impl From<V1Auth> for V3Auth {
    fn from(old: V1Auth) -> Self {
        match old {
            V1Auth::None { auth_active } => V3Auth::None { auth_active },
            V1Auth::Basic {
                auth_active,
                username,
                password,
            } => V3Auth::Basic {
                auth_active,
                username,
                password,
            },
            V1Auth::Bearer { auth_active, token } => V3Auth::Bearer { auth_active, token },
            V1Auth::OAuth2 {
                auth_active,
                token,
                auth_url,
                access_token_url,
                client_id,
                scope,
                ..
            } => V3Auth::OAuth2 {
                auth_active,
                grant_type_info: GrantTypeInfo::AuthorizationCode {
                    auth_endpoint: auth_url,
                    token_endpoint: access_token_url,
                    client_id,
                    client_secret: String::new(),
                    scopes: if scope.is_empty() { None } else { Some(scope) },
                    token,
                },
            },
        }
    }
}

/// The version 3 request shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V3Request {
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
    pub auth: V3Auth,
    pub body: V1Body,
    pub request_variables: Vec<KeyValueEntry>,
}

impl From<V2Request> for V3Request {
    fn from(old: V2Request) -> Self {
        V3Request {
            v: "3".to_string(),
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

/// Version 3 module
pub(crate) struct V3;

impl VersionModule for V3 {
    fn version(&self) -> VersionId {
        VersionId::new(3)
    }

    fn validate(&self, raw: &Value) -> Result<Value, SchemaError> {
        expect_tag(raw, "3")?;
        validate_as::<V3Request>(raw)
    }

    fn upgrade(&self, prev: Value) -> Result<Value, SchemaError> {
        let prev: V2Request = serde_json::from_value(prev)?;
        Ok(serde_json::to_value(V3Request::from(prev))?)
    }
}
