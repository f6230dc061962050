//! Best-effort recovery of request data from unrecognized values
//!
//! The degraded compatibility path for data the migration chain cannot
//! place: no usable version tag and no match against the oldest schema.
//! Where the chain is all-or-nothing, extraction is field-by-field and
//! never fails: it salvages what it recognizes and silently keeps the
//! default for the rest. Callers should prefer the strict path wherever
//! the input may still be a versioned record.

use crate::v::v1::KeyValueEntry;
use crate::v::v5::Auth;
use crate::v::v6::RequestBody;
use crate::v::v7::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

/// Copy a field out of `x` when it independently validates as `T`
fn field_as<T: DeserializeOwned>(x: &Value, field: &str) -> Option<T> {
    let candidate = x.get(field)?;
    match serde_json::from_value(candidate.clone()) {
        Ok(value) => Some(value),
        Err(error) => {
            trace!(target: "relic::extract", field, %error, "field failed validation, keeping default");
            None
        }
    }
}

/// Salvage recognized fields from an arbitrary value
///
/// Starts from a copy of `default` and overwrites each top-level field
/// only when the value's same-named field independently validates against
/// the current shape. Field failures are independent: one bad field never
/// affects the others. The reference identifier is never extracted; the
/// default's freshly assigned one stays.
#[deprecated(note = "degraded legacy path; run values through safe_parse where possible")]
pub fn safely_extract_request(x: &Value, default: &Request) -> Request {
    let mut req = default.clone();

    if x.is_object() {
        if let Some(id) = field_as::<String>(x, "id") {
            req.id = Some(id);
        }
        if let Some(name) = field_as::<String>(x, "name") {
            req.name = name;
        }
        if let Some(method) = field_as::<String>(x, "method") {
            req.method = method;
        }
        if let Some(endpoint) = field_as::<String>(x, "endpoint") {
            req.endpoint = endpoint;
        }
        if let Some(script) = field_as::<String>(x, "preRequestScript") {
            req.pre_request_script = script;
        }
        if let Some(script) = field_as::<String>(x, "testScript") {
            req.test_script = script;
        }
        if let Some(body) = field_as::<RequestBody>(x, "body") {
            req.body = body;
        }
        if let Some(auth) = field_as::<Auth>(x, "auth") {
            req.auth = auth;
        }
        if let Some(params) = field_as::<Vec<KeyValueEntry>>(x, "params") {
            req.params = params;
        }
        if let Some(headers) = field_as::<Vec<KeyValueEntry>>(x, "headers") {
            req.headers = headers;
        }
        if let Some(vars) = field_as::<Vec<KeyValueEntry>>(x, "requestVariables") {
            req.request_variables = vars;
        }
    }

    req
}
