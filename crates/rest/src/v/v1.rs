//! Version 1: first tagged schema
//!
//! Introduces the version tag, merges the split `url`/`path` into a single
//! `endpoint`, and replaces the legacy display-label auth with structured
//! auth objects. Owns the row and body types every later version re-uses:
//! [`KeyValueEntry`], [`FormDataBody`], and the v1 inline body.

use super::{expect_tag, v0::V0AuthKind, v0::V0Entry, v0::V0Request};
use relic_core::{validate_as, SchemaError, VersionId, VersionModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One key/value row (header, parameter, or request variable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
    pub active: bool,
}

impl From<V0Entry> for KeyValueEntry {
    fn from(old: V0Entry) -> Self {
        KeyValueEntry {
            key: old.key,
            value: old.value,
            active: old.active,
        }
    }
}

/// Authentication strategies as of version 1
///
/// The OAuth 2 variant is flat; version 3 restructures it around grant
/// types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "authType")]
pub enum V1Auth {
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
        #[serde(default)]
        token: String,
        #[serde(rename = "oidcDiscoveryURL", default)]
        oidc_discovery_url: String,
        #[serde(rename = "authURL", default)]
        auth_url: String,
        #[serde(rename = "accessTokenURL", default)]
        access_token_url: String,
        #[serde(rename = "clientID", default)]
        client_id: String,
        #[serde(default)]
        scope: String,
    },
}

/// One multipart form row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDataEntry {
    pub key: String,
    pub value: String,
    pub active: bool,
    pub is_file: bool,
}

/// The `multipart/form-data` content-type literal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormDataMime {
    #[default]
    #[serde(rename = "multipart/form-data")]
    MultipartFormData,
}

/// Multipart body: the content type is pinned to the form-data literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDataBody {
    pub content_type: FormDataMime,
    pub body: Vec<FormDataEntry>,
}

/// Inline body as of version 1: free-form content type, textual payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1InlineBody {
    pub content_type: Option<String>,
    pub body: String,
}

/// Request body as of version 1: multipart rows or an inline payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum V1Body {
    FormData(FormDataBody),
    Inline(V1InlineBody),
}

/// The version 1 request shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1Request {
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
}

impl From<V0Request> for V1Request {
    fn from(old: V0Request) -> Self {
        let auth = match old.auth {
            V0AuthKind::None => V1Auth::None { auth_active: true },
            V0AuthKind::Basic => V1Auth::Basic {
                auth_active: true,
                username: old.http_user,
                password: old.http_password,
            },
            V0AuthKind::Bearer => V1Auth::Bearer {
                auth_active: true,
                token: old.bearer_token,
            },
        };
        V1Request {
            v: "1".to_string(),
            id: None,
            endpoint: format!("{}{}", old.url, old.path),
            name: old.name,
            method: old.method,
            headers: old.headers.into_iter().map(KeyValueEntry::from).collect(),
            params: old.params.into_iter().map(KeyValueEntry::from).collect(),
            pre_request_script: old.pre_request_script,
            test_script: old.test_script,
            auth,
            body: V1Body::Inline(V1InlineBody {
                content_type: old.content_type,
                body: old.raw_params.unwrap_or_default(),
            }),
        }
    }
}

/// Version 1 module
pub(crate) struct V1;

impl VersionModule for V1 {
    fn version(&self) -> VersionId {
        VersionId::new(1)
    }

    fn validate(&self, raw: &Value) -> Result<Value, SchemaError> {
        expect_tag(raw, "1")?;
        validate_as::<V1Request>(raw)
    }

    fn upgrade(&self, prev: Value) -> Result<Value, SchemaError> {
        let prev: V0Request = serde_json::from_value(prev)?;
        Ok(serde_json::to_value(V1Request::from(prev))?)
    }
}
