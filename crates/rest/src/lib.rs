//! Versioned request records
//!
//! The request domain built on `relic-core`: the schema history (versions
//! 0 through 7), the current [`Request`] record, structural equivalence,
//! the legacy extractor, and the process-wide entity instance.
//!
//! # Quick Start
//!
//! ```
//! use relic_rest::{default_request, is_equal_request, request_entity};
//! use serde_json::json;
//!
//! // Anything previously stored parses to the current shape, whatever
//! // its vintage
//! let record = request_entity()
//!     .safe_parse(&json!({"url": "https://api.example.com", "method": "GET"}))
//!     .unwrap();
//! assert_eq!(record.v, "7");
//! assert_eq!(record.endpoint, "https://api.example.com");
//!
//! // Fresh records come from the default factory
//! let fresh = default_request();
//! assert!(!is_equal_request(&record, &fresh));
//! ```

pub mod content_type;
pub mod equivalence;
pub mod extract;
pub mod v;

use once_cell::sync::Lazy;
use relic_core::VersionedEntity;
use serde_json::Value;
use uuid::Uuid;

pub use content_type::{is_json_content_type, ContentType};
pub use equivalence::is_equal_request;
pub use v::v1::{FormDataBody, FormDataEntry, FormDataMime, KeyValueEntry};
pub use v::v3::GrantTypeInfo;
pub use v::v4::ApiKeyLocation;
pub use v::v5::Auth;
pub use v::v6::{InlineBody, RequestBody};
pub use v::v7::Request;

#[allow(deprecated)]
pub use extract::safely_extract_request;

/// Wire tag of the current request schema version
pub const REQUEST_SCHEMA_VERSION: &str = "7";

static REQUEST_ENTITY: Lazy<VersionedEntity<Request>> = Lazy::new(|| {
    VersionedEntity::new(v::version_modules()).expect("request schema registry is dense and ordered")
});

/// The process-wide request entity
///
/// The registry is assembled once, on first use, and read-only afterwards;
/// the entity is safe for unsynchronized concurrent reads.
pub fn request_entity() -> &'static VersionedEntity<Request> {
    &REQUEST_ENTITY
}

/// Build a current record from request parts, stamping the schema tag
///
/// Keeps hand-built records aligned with [`REQUEST_SCHEMA_VERSION`]
/// regardless of what tag the parts carried.
pub fn make_request(parts: Request) -> Request {
    Request {
        v: REQUEST_SCHEMA_VERSION.to_string(),
        ..parts
    }
}

/// A fresh current record
///
/// Deterministic placeholder fields plus a newly generated reference
/// identifier, the only draw of randomness in the engine.
pub fn default_request() -> Request {
    Request {
        v: REQUEST_SCHEMA_VERSION.to_string(),
        id: None,
        ref_id: Some(Uuid::new_v4().to_string()),
        endpoint: "https://echo.relic.dev".to_string(),
        name: "Untitled".to_string(),
        method: "GET".to_string(),
        headers: Vec::new(),
        params: Vec::new(),
        pre_request_script: String::new(),
        test_script: String::new(),
        auth: Auth::Inherit { auth_active: true },
        body: RequestBody::Inline(InlineBody {
            content_type: None,
            body: None,
        }),
        request_variables: Vec::new(),
    }
}

/// Whether a value is already a valid current record
#[deprecated(note = "use request_entity().is_latest() / .is() instead")]
pub fn is_request(x: &Value) -> bool {
    request_entity().is_latest(x)
}

/// Parse a value into a current record, falling back to a fresh default
///
/// Swallows the failure reason; call sites that care which way parsing
/// failed should use `request_entity().safe_parse()` directly.
#[deprecated(note = "use request_entity().safe_parse() and handle the failure")]
pub fn parse_or_default(x: &Value) -> Request {
    request_entity()
        .safe_parse(x)
        .unwrap_or_else(|_| default_request())
}
