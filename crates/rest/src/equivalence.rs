//! Structural equivalence over current records
//!
//! Used for change detection and deduplication, not persistence identity.
//! Equality is the conjunction of per-field comparators, spelled out field
//! by field so the normalization policy stays visible:
//!
//! - scalar fields compare by exact text
//! - `id` and `_ref_id` treat two absences as equal; a value present on
//!   one side only is unequal
//! - `auth` and `body` compare by deep structural equality
//! - the row lists (`headers`, `params`, `requestVariables`) are first
//!   stripped of blank placeholder rows, then compared as ordered
//!   sequences
//!
//! Each per-field comparator is reflexive, symmetric, and transitive, so
//! the conjunction is too.

use crate::v::v1::KeyValueEntry;
use crate::v::v7::Request;

/// Rows that survive normalization
///
/// Blank placeholder rows (key and value both empty) are an editor
/// artifact, not content; they must not make two otherwise-identical
/// records compare unequal.
fn live_rows(rows: &[KeyValueEntry]) -> impl Iterator<Item = &KeyValueEntry> {
    rows.iter()
        .filter(|row| !(row.key.is_empty() && row.value.is_empty()))
}

/// Ordered comparison of key/value rows after dropping blank placeholders
fn rows_equal(a: &[KeyValueEntry], b: &[KeyValueEntry]) -> bool {
    live_rows(a).eq(live_rows(b))
}

/// Field-by-field structural equality over two current records
pub fn is_equal_request(a: &Request, b: &Request) -> bool {
    a.id == b.id
        && a.v == b.v
        && a.auth == b.auth
        && a.body == b.body
        && a.endpoint == b.endpoint
        && rows_equal(&a.headers, &b.headers)
        && rows_equal(&a.params, &b.params)
        && a.method == b.method
        && a.name == b.name
        && a.pre_request_script == b.pre_request_script
        && a.test_script == b.test_script
        && rows_equal(&a.request_variables, &b.request_variables)
        && a.ref_id == b.ref_id
}
