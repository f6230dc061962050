//! Full migration journeys across every registered vintage
//!
//! Each journey feeds a realistic stored value into `safe_parse` and
//! checks the record that comes out the far end of the chain.

use relic::{
    request_entity, Auth, ContentType, EntityError, GrantTypeInfo, InlineBody, RequestBody,
    VersionId, REQUEST_SCHEMA_VERSION,
};
use serde_json::json;

// ============================================================================
// Version 0 → current
// ============================================================================

#[test]
fn legacy_export_migrates_to_current() {
    let legacy = json!({
        "url": "https://api.example.com",
        "path": "/v2/items",
        "method": "POST",
        "name": "Create item",
        "headers": [{"key": "X-Team", "value": "ops"}],
        "params": [{"key": "dry", "value": "1", "active": false}],
        "auth": "Basic Auth",
        "httpUser": "alice",
        "httpPassword": "hunter2",
        "contentType": "application/json",
        "rawParams": "{\"size\": 3}"
    });

    let record = request_entity().safe_parse(&legacy).unwrap();

    assert_eq!(record.v, REQUEST_SCHEMA_VERSION);
    assert_eq!(record.endpoint, "https://api.example.com/v2/items");
    assert_eq!(record.method, "POST");
    assert_eq!(record.name, "Create item");
    assert_eq!(
        record.auth,
        Auth::Basic {
            auth_active: true,
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        }
    );
    assert_eq!(
        record.body,
        RequestBody::Inline(InlineBody {
            content_type: Some(ContentType::Json),
            body: Some("{\"size\": 3}".to_string()),
        })
    );
    // Rows exported before the active flag existed come through enabled
    assert!(record.headers[0].active);
    assert!(!record.params[0].active);
    // Fields that did not exist yet arrive at their introduction defaults
    assert!(record.request_variables.is_empty());
    assert_eq!(record.id, None);
    assert_eq!(record.ref_id, None);
}

#[test]
fn minimal_legacy_export_migrates_to_current() {
    let record = request_entity()
        .safe_parse(&json!({"url": "https://a", "method": "GET"}))
        .unwrap();

    assert_eq!(record.v, "7");
    assert_eq!(record.endpoint, "https://a");
    assert_eq!(record.name, "Untitled");
    assert_eq!(record.auth, Auth::None { auth_active: true });
    assert_eq!(
        record.body,
        RequestBody::Inline(InlineBody {
            content_type: None,
            body: None,
        })
    );
}

// ============================================================================
// Tagged vintages → current
// ============================================================================

#[test]
fn v1_oauth_record_gains_grant_type_info() {
    let v1 = json!({
        "v": "1",
        "endpoint": "https://api.example.com",
        "name": "Login",
        "method": "POST",
        "headers": [],
        "params": [],
        "preRequestScript": "",
        "testScript": "",
        "auth": {
            "authType": "oauth-2",
            "authActive": true,
            "token": "t0",
            "oidcDiscoveryURL": "",
            "authURL": "https://idp.example.com/authorize",
            "accessTokenURL": "https://idp.example.com/token",
            "clientID": "client-1",
            "scope": "read"
        },
        "body": {"contentType": null, "body": ""}
    });

    let record = request_entity().safe_parse(&v1).unwrap();

    match record.auth {
        Auth::OAuth2 {
            auth_active,
            grant_type_info:
                GrantTypeInfo::AuthorizationCode {
                    auth_endpoint,
                    token_endpoint,
                    client_id,
                    scopes,
                    token,
                    ..
                },
        } => {
            assert!(auth_active);
            assert_eq!(auth_endpoint, "https://idp.example.com/authorize");
            assert_eq!(token_endpoint, "https://idp.example.com/token");
            assert_eq!(client_id, "client-1");
            assert_eq!(scopes.as_deref(), Some("read"));
            assert_eq!(token, "t0");
        }
        other => panic!("expected an authorization-code grant, got {other:?}"),
    }
}

#[test]
fn v2_request_variables_survive_the_chain() {
    let v2 = json!({
        "v": "2",
        "endpoint": "https://api.example.com",
        "name": "Untitled",
        "method": "GET",
        "headers": [],
        "params": [],
        "preRequestScript": "",
        "testScript": "",
        "auth": {"authType": "none", "authActive": true},
        "body": {"contentType": null, "body": ""},
        "requestVariables": [{"key": "env", "value": "prod", "active": true}]
    });

    let record = request_entity().safe_parse(&v2).unwrap();
    assert_eq!(record.request_variables.len(), 1);
    assert_eq!(record.request_variables[0].key, "env");
}

#[test]
fn v4_api_key_auth_survives_the_chain() {
    let v4 = json!({
        "v": "4",
        "endpoint": "https://api.example.com",
        "name": "Untitled",
        "method": "GET",
        "headers": [],
        "params": [],
        "preRequestScript": "",
        "testScript": "",
        "auth": {
            "authType": "api-key",
            "authActive": true,
            "addTo": "HEADERS",
            "key": "X-Api-Key",
            "value": "k-123"
        },
        "body": {"contentType": null, "body": ""},
        "requestVariables": []
    });

    let record = request_entity().safe_parse(&v4).unwrap();
    assert!(matches!(record.auth, Auth::ApiKey { .. }));
    // The unknown-typed v4 body maps to the null body of v6+
    assert_eq!(
        record.body,
        RequestBody::Inline(InlineBody {
            content_type: None,
            body: None,
        })
    );
}

#[test]
fn v6_binary_body_survives_the_chain() {
    let v6 = json!({
        "v": "6",
        "endpoint": "https://api.example.com/upload",
        "name": "Upload",
        "method": "PUT",
        "headers": [],
        "params": [],
        "preRequestScript": "",
        "testScript": "",
        "auth": {"authType": "inherit", "authActive": true},
        "body": {"contentType": "application/octet-stream", "body": null},
        "requestVariables": []
    });

    let record = request_entity().safe_parse(&v6).unwrap();
    assert_eq!(
        record.body,
        RequestBody::Inline(InlineBody {
            content_type: Some(ContentType::OctetStream),
            body: None,
        })
    );
}

// ============================================================================
// Current-version inputs
// ============================================================================

#[test]
fn current_record_round_trips_unchanged() {
    let raw = json!({
        "v": "7",
        "id": "c1",
        "_ref_id": "ref-1",
        "endpoint": "https://api.example.com",
        "name": "Untitled",
        "method": "GET",
        "headers": [{"key": "X-Team", "value": "ops", "active": true}],
        "params": [],
        "preRequestScript": "",
        "testScript": "",
        "auth": {"authType": "inherit", "authActive": true},
        "body": {"contentType": null, "body": null},
        "requestVariables": []
    });

    let record = request_entity().safe_parse(&raw).unwrap();
    assert_eq!(serde_json::to_value(&record).unwrap(), raw);
}

#[test]
fn every_migrated_record_is_latest() {
    let vintages = [
        json!({"url": "https://a", "method": "GET"}),
        json!({
            "v": "2",
            "endpoint": "https://a",
            "name": "Untitled",
            "method": "GET",
            "headers": [],
            "params": [],
            "preRequestScript": "",
            "testScript": "",
            "auth": {"authType": "none", "authActive": true},
            "body": {"contentType": null, "body": ""},
            "requestVariables": []
        }),
    ];

    let entity = request_entity();
    for raw in vintages {
        let record = entity.safe_parse(&raw).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert!(entity.is_latest(&value));
        assert!(entity.is(&value));
    }
}

// ============================================================================
// Failure kinds
// ============================================================================

#[test]
fn unregistered_tag_reports_unknown_version() {
    let raw = json!({"v": "99", "endpoint": "https://a"});
    let err = request_entity().safe_parse(&raw).unwrap_err();
    assert_eq!(
        err,
        EntityError::UnknownVersion {
            version: Some(VersionId::new(99))
        }
    );
}

#[test]
fn undetectable_value_reports_unknown_version() {
    let err = request_entity().safe_parse(&json!({"nope": 1})).unwrap_err();
    assert_eq!(err, EntityError::UnknownVersion { version: None });
}

#[test]
fn tampered_record_reports_schema_mismatch() {
    let raw = json!({"v": "7", "endpoint": 42});
    let err = request_entity().safe_parse(&raw).unwrap_err();
    assert!(matches!(
        err,
        EntityError::SchemaMismatch { version, .. } if version == VersionId::new(7)
    ));
}

#[test]
fn failures_never_mutate_the_input() {
    let raw = json!({"v": "7", "endpoint": 42});
    let before = raw.clone();
    let _ = request_entity().safe_parse(&raw);
    assert_eq!(raw, before);
}

#[test]
#[should_panic(expected = "value failed versioned parse")]
fn parse_or_panic_surfaces_failure_as_a_panic() {
    request_entity().parse_or_panic(&json!({"nope": 1}));
}
