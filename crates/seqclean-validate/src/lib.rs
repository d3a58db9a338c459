//! Batched remote validation with graceful degradation.
//!
//! The entry point is [`BatchValidator`]: identifiers are partitioned into
//! fixed-size batches and resolved against a [`LookupService`]. A failed
//! whole-batch call is classified by a pluggable [`FailureClassifier`];
//! confirmed-bad identifiers are dropped and the reduced batch retried for
//! free, ambiguous failures consume a bounded retry budget, and an exhausted
//! budget degrades to per-identifier lookups. No batch is ever discarded
//! wholesale and no remote error aborts a run.

mod classify;
mod engine;
mod entrez;
mod lookup;
mod report_file;

pub use classify::{FailureClassifier, FailureKind, InvalidUidClassifier};
pub use engine::BatchValidator;
pub use entrez::{ESUMMARY_TIMEOUT, EUTILS_BASE_URL, EntrezConfig, EntrezLookup};
pub use lookup::LookupService;
pub use report_file::write_rejection_report_json;
