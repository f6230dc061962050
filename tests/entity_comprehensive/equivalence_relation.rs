//! Laws of the structural equivalence relation
//!
//! `is_equal_request` must be a genuine equivalence relation (reflexive,
//! symmetric, transitive) and must treat blank placeholder rows as
//! cosmetic. Generators draw from small pools so that equal-but-distinct
//! records actually occur.

use proptest::prelude::*;
use relic::{
    default_request, is_equal_request, Auth, InlineBody, KeyValueEntry, Request, RequestBody,
    REQUEST_SCHEMA_VERSION,
};

fn entry_strategy() -> impl Strategy<Value = KeyValueEntry> {
    (
        prop::sample::select(vec!["", "X-Team", "X-Trace"]),
        prop::sample::select(vec!["", "ops"]),
        any::<bool>(),
    )
        .prop_map(|(key, value, active)| KeyValueEntry {
            key: key.to_string(),
            value: value.to_string(),
            active,
        })
}

fn auth_strategy() -> impl Strategy<Value = Auth> {
    prop_oneof![
        Just(Auth::None { auth_active: true }),
        Just(Auth::Inherit { auth_active: true }),
        Just(Auth::Bearer {
            auth_active: true,
            token: "t".to_string(),
        }),
    ]
}

fn body_strategy() -> impl Strategy<Value = RequestBody> {
    prop_oneof![
        Just(RequestBody::Inline(InlineBody {
            content_type: None,
            body: None,
        })),
        Just(RequestBody::Inline(InlineBody {
            content_type: Some(relic::ContentType::Json),
            body: Some("{}".to_string()),
        })),
    ]
}

fn request_strategy() -> impl Strategy<Value = Request> {
    (
        prop::option::of(prop::sample::select(vec!["c1", "c2"]).prop_map(String::from)),
        prop::option::of(prop::sample::select(vec!["r1", "r2"]).prop_map(String::from)),
        prop::sample::select(vec!["https://a", "https://b"]).prop_map(String::from),
        prop::sample::select(vec!["GET", "POST"]).prop_map(String::from),
        prop::collection::vec(entry_strategy(), 0..3),
        prop::collection::vec(entry_strategy(), 0..3),
        prop::collection::vec(entry_strategy(), 0..3),
        auth_strategy(),
        body_strategy(),
    )
        .prop_map(
            |(id, ref_id, endpoint, method, headers, params, vars, auth, body)| Request {
                v: REQUEST_SCHEMA_VERSION.to_string(),
                id,
                ref_id,
                endpoint,
                name: "Untitled".to_string(),
                method,
                headers,
                params,
                pre_request_script: String::new(),
                test_script: String::new(),
                auth,
                body,
                request_variables: vars,
            },
        )
}

fn blank_row() -> KeyValueEntry {
    KeyValueEntry {
        key: String::new(),
        value: String::new(),
        active: true,
    }
}

proptest! {
    #[test]
    fn equivalence_is_reflexive(a in request_strategy()) {
        prop_assert!(is_equal_request(&a, &a));
    }

    #[test]
    fn equivalence_is_symmetric(a in request_strategy(), b in request_strategy()) {
        prop_assert_eq!(is_equal_request(&a, &b), is_equal_request(&b, &a));
    }

    #[test]
    fn equivalence_is_transitive(
        a in request_strategy(),
        b in request_strategy(),
        c in request_strategy(),
    ) {
        if is_equal_request(&a, &b) && is_equal_request(&b, &c) {
            prop_assert!(is_equal_request(&a, &c));
        }
    }

    #[test]
    fn blank_rows_never_affect_equality(a in request_strategy(), b in request_strategy()) {
        let mut padded = a.clone();
        padded.headers.push(blank_row());
        padded.params.insert(0, blank_row());
        padded.request_variables.push(blank_row());

        // Padding one side with placeholders changes nothing, either way
        prop_assert!(is_equal_request(&a, &padded));
        prop_assert_eq!(is_equal_request(&padded, &b), is_equal_request(&a, &b));
    }

    #[test]
    fn cloned_records_are_equal(a in request_strategy()) {
        prop_assert!(is_equal_request(&a, &a.clone()));
    }
}

// ============================================================================
// Pinned cases
// ============================================================================

#[test]
fn extra_blank_header_row_compares_equal() {
    let mut a = default_request();
    a.ref_id = Some("ref-1".to_string());
    let mut b = a.clone();
    b.headers.push(blank_row());

    assert!(is_equal_request(&a, &b));
}

#[test]
fn differing_reference_ids_compare_unequal() {
    let mut a = default_request();
    a.ref_id = Some("ref-1".to_string());
    let mut b = a.clone();
    b.ref_id = Some("ref-2".to_string());

    assert!(!is_equal_request(&a, &b));
}

#[test]
fn fresh_defaults_differ_only_by_reference_id() {
    let a = default_request();
    let b = default_request();

    // Unique identifiers keep otherwise-identical fresh records apart
    assert!(!is_equal_request(&a, &b));

    let mut b_aligned = b;
    b_aligned.ref_id = a.ref_id.clone();
    assert!(is_equal_request(&a, &b_aligned));
}
