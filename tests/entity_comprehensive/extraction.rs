//! Legacy extraction behavior through the public surface
//!
//! The extractor is the degraded path for values the chain cannot place;
//! these tests pin the policy difference between the two: extraction
//! recovers field-by-field and never fails, the chain is all-or-nothing.

#![allow(deprecated)]

use relic::{default_request, request_entity, safely_extract_request, Auth};
use serde_json::json;

#[test]
fn recognized_fields_are_copied_over_defaults() {
    let default = default_request();
    let req = safely_extract_request(
        &json!({"endpoint": "https://x", "method": "POST", "unknownField": 123}),
        &default,
    );

    assert_eq!(req.endpoint, "https://x");
    assert_eq!(req.method, "POST");
    assert_eq!(req.name, default.name);
    assert_eq!(req.auth, default.auth);
    assert_eq!(req.body, default.body);
    assert_eq!(req.headers, default.headers);
    assert_eq!(req.params, default.params);
    assert_eq!(req.request_variables, default.request_variables);
    assert_eq!(req.ref_id, default.ref_id);
}

#[test]
fn extraction_succeeds_where_the_chain_fails() {
    // No tag, not the legacy shape: safe_parse refuses, extraction salvages
    let stray = json!({"endpoint": "https://x", "testScript": "pw.expect(1)"});
    assert!(request_entity().safe_parse(&stray).is_err());

    let req = safely_extract_request(&stray, &default_request());
    assert_eq!(req.endpoint, "https://x");
    assert_eq!(req.test_script, "pw.expect(1)");
}

#[test]
fn extracted_records_are_valid_current_records() {
    let req = safely_extract_request(
        &json!({
            "endpoint": "https://x",
            "auth": {"authType": "bearer", "authActive": true, "token": "b"},
            "headers": [{"key": "X-Team", "value": "ops", "active": true}]
        }),
        &default_request(),
    );

    let value = serde_json::to_value(&req).unwrap();
    assert!(request_entity().is_latest(&value));
    assert_eq!(
        req.auth,
        Auth::Bearer {
            auth_active: true,
            token: "b".to_string()
        }
    );
}

#[test]
fn invalid_fields_fall_back_independently() {
    let default = default_request();
    let req = safely_extract_request(
        &json!({
            "endpoint": "https://x",
            "method": {"verb": "POST"},
            "headers": "not-rows",
            "auth": {"authType": "bespoke"}
        }),
        &default,
    );

    assert_eq!(req.endpoint, "https://x");
    assert_eq!(req.method, default.method);
    assert_eq!(req.headers, default.headers);
    assert_eq!(req.auth, default.auth);
}

#[test]
fn non_object_input_yields_the_default() {
    let default = default_request();
    for garbage in [json!(null), json!("x"), json!(42), json!([1, 2])] {
        assert_eq!(safely_extract_request(&garbage, &default), default);
    }
}
