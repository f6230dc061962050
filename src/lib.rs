//! Relic - versioned request-record engine
//!
//! Relic manages the long-term evolution of stored API-client request
//! records. Given a previously-stored value of unknown vintage it detects
//! which historical schema version the value conforms to, validates it
//! there, and migrates it forward one version at a time to the current
//! shape. It also provides a structural equivalence relation over current
//! records that tolerates cosmetic differences like blank placeholder rows.
//!
//! # Quick Start
//!
//! ```
//! use relic::request_entity;
//! use serde_json::json;
//!
//! // A value exported years ago, before version tags existed
//! let legacy = json!({"url": "https://api.example.com", "path": "/items", "method": "GET"});
//!
//! let record = request_entity().safe_parse(&legacy).unwrap();
//! assert_eq!(record.v, "7");
//! assert_eq!(record.endpoint, "https://api.example.com/items");
//! ```
//!
//! # Architecture
//!
//! The generic engine (registry, detector, migration chain, parse facade)
//! lives in [`relic-core`](relic_core); the request schema history and the
//! domain surface live in [`relic-rest`](relic_rest). This crate re-exports
//! the public API of both.

// Re-export the public API
pub use relic_core::{
    EntityError, Result, SchemaError, VersionId, VersionModule, VersionedEntity, VERSION_TAG_FIELD,
};
pub use relic_rest::*;
