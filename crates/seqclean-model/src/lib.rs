//! Shared data model for the seqclean pipeline.
//!
//! Defines the rejection taxonomy, remote lookup error type, validator
//! options, and the validation report exchanged between the pipeline stages.

mod error;
mod options;
mod report;

pub use error::{LookupError, Result};
pub use options::{
    DEFAULT_BATCH_SIZE, DEFAULT_RETRY_LIMIT, ValidatorOptions, polite_delay,
};
pub use report::{RejectionReason, ValidationReport};
