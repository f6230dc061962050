//! Version 6: validated, nullable body content types
//!
//! The inline body's free-form content-type string becomes the validated
//! [`ContentType`] set (gaining `application/octet-stream` for binary
//! payloads), and both the content type and the payload are nullable: a
//! request with no body is `{contentType: null, body: null}` instead of an
//! empty string under an arbitrary mime. The upgrade drops payloads whose
//! declared content type is not in the validated set.

use super::{expect_tag, v1::FormDataBody, v1::KeyValueEntry, v1::V1Body, v5::Auth, v5::V5Request};
use crate::content_type::ContentType;
use relic_core::{validate_as, SchemaError, VersionId, VersionModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inline body as of version 6: validated content type, nullable payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineBody {
    pub content_type: Option<ContentType>,
    pub body: Option<String>,
}

/// Request body as of version 6 (current)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestBody {
    FormData(FormDataBody),
    Inline(InlineBody),
}

impl From<V1Body> for RequestBody {
    fn from(old: V1Body) -> Self {
        match old {
            V1Body::FormData(form) => RequestBody::FormData(form),
            V1Body::Inline(inline) => {
                match inline.content_type.as_deref().and_then(ContentType::from_mime) {
                    Some(content_type) => RequestBody::Inline(InlineBody {
                        content_type: Some(content_type),
                        body: Some(inline.body),
                    }),
                    None => RequestBody::Inline(InlineBody {
                        content_type: None,
                        body: None,
                    }),
                }
            }
        }
    }
}

/// The version 6 request shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V6Request {
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
    pub body: RequestBody,
    pub request_variables: Vec<KeyValueEntry>,
}

impl From<V5Request> for V6Request {
    fn from(old: V5Request) -> Self {
        V6Request {
            v: "6".to_string(),
            id: old.id,
            endpoint: old.endpoint,
            name: old.name,
            method: old.method,
            headers: old.headers,
            params: old.params,
            pre_request_script: old.pre_request_script,
            test_script: old.test_script,
            auth: old.auth,
            body: old.body.into(),
            request_variables: old.request_variables,
        }
    }
}

/// Version 6 module
pub(crate) struct V6;

impl VersionModule for V6 {
    fn version(&self) -> VersionId {
        VersionId::new(6)
    }

    fn validate(&self, raw: &Value) -> Result<Value, SchemaError> {
        expect_tag(raw, "6")?;
        validate_as::<V6Request>(raw)
    }

    fn upgrade(&self, prev: Value) -> Result<Value, SchemaError> {
        let prev: V5Request = serde_json::from_value(prev)?;
        Ok(serde_json::to_value(V6Request::from(prev))?)
    }
}
