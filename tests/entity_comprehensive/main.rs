//! Comprehensive entity tests
//!
//! Cross-crate suites exercising the public surface end to end: version
//! detection, full migration journeys across every registered vintage,
//! the equivalence relation's laws, and the legacy extractor.

mod equivalence_relation;
mod extraction;
mod migration_journeys;
