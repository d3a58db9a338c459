//! Run pipeline with explicit stages.
//!
//! 1. **Collect**: scan the input for unique accessions
//! 2. **Screen**: apply the syntactic local filter
//! 3. **Validate**: resolve the survivors against the remote authority
//! 4. **Rewrite**: stream the cleaned dataset to the output
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Stages 1 and 4 only apply to FASTA input.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, info_span};

use seqclean_ingest::{looks_like_accession, passes_local_filter};
use seqclean_model::{
    RejectionReason, ValidationReport, ValidatorOptions, polite_delay,
};
use seqclean_validate::{BatchValidator, EntrezConfig, EntrezLookup, InvalidUidClassifier};

use crate::cli::RemoteArgs;

/// Result of the local screening stage.
#[derive(Debug)]
pub struct ScreenResult {
    /// Tokens rejected by the syntactic filter; terminal, never sent remote.
    pub malformed: BTreeSet<String>,
    /// Tokens surviving to remote validation.
    pub candidates: BTreeSet<String>,
}

/// Apply the local filter to the collected accessions.
///
/// `strict` selects the accession-shape check used for bare lists, where
/// there is no header context; FASTA input uses the minimal filter so that
/// local rejection cannot create false positives.
pub fn screen(accessions: &BTreeSet<String>, strict: bool) -> ScreenResult {
    let _guard = info_span!("screen", total = accessions.len()).entered();
    let filter: fn(&str) -> bool = if strict {
        looks_like_accession
    } else {
        passes_local_filter
    };

    let mut result = ScreenResult {
        malformed: BTreeSet::new(),
        candidates: BTreeSet::new(),
    };
    for accession in accessions {
        if filter(accession) {
            result.candidates.insert(accession.clone());
        } else {
            debug!(accession = %accession, "rejected by local filter");
            result.malformed.insert(accession.clone());
        }
    }
    info!(
        malformed = result.malformed.len(),
        candidates = result.candidates.len(),
        "local screening complete"
    );
    result
}

/// Run remote validation over the screened candidates and fold the local
/// rejections into one report, so accepted and rejected partition the
/// full input set.
pub fn validate_remote(
    total: usize,
    screened: &ScreenResult,
    remote: &RemoteArgs,
) -> Result<ValidationReport> {
    let span = info_span!("validate", candidates = screened.candidates.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut report = ValidationReport::new(total);
    for accession in &screened.malformed {
        report.reject(accession.clone(), RejectionReason::MalformedPattern);
    }

    let config = EntrezConfig::new(remote.email.clone())
        .with_db(remote.db.clone())
        .with_api_key(remote.api_key.clone());
    let service = EntrezLookup::new(config)?;
    let classifier = InvalidUidClassifier::new();
    let options = validator_options(remote);
    let validator = BatchValidator::new(&service, &classifier, options);

    report.absorb(validator.validate(&screened.candidates));
    report.accepted = total - report.rejected.len();

    info!(
        accepted = report.accepted,
        rejected = report.rejected.len(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    Ok(report)
}

/// Translate CLI remote settings into validator options.
pub fn validator_options(remote: &RemoteArgs) -> ValidatorOptions {
    let delay = remote
        .delay
        .map_or_else(|| polite_delay(remote.api_key.is_some()), Duration::from_secs_f64);
    ValidatorOptions::default()
        .with_batch_size(remote.batch_size)
        .with_retry_limit(remote.retries)
        .with_inter_request_delay(delay)
}
