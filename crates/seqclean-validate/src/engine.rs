//! The batch validation state machine.

use std::collections::BTreeSet;
use std::thread;

use seqclean_model::{RejectionReason, ValidationReport, ValidatorOptions};
use tracing::{debug, info, warn};

use crate::classify::{FailureClassifier, FailureKind};
use crate::lookup::LookupService;

/// Resolves every identifier in an input set to exactly one
/// accepted/rejected outcome with the minimum number of remote calls.
///
/// Per batch, in order:
/// 1. Whole-batch lookup; success accepts every current member.
/// 2. A failure naming an offender still in the batch rejects that one
///    identifier and retries the reduced batch immediately. This is forward
///    progress, so it never consumes the retry budget; a batch with `k` bad
///    identifiers resolves in at most `k + 1` whole-batch calls.
/// 3. Any other failure is ambiguous: bounded retries with growing backoff,
///    then per-identifier fallback. Fallback always terminates and never
///    discards a batch wholesale.
///
/// Batches run strictly sequentially; the configured inter-request delay is
/// honored after every remote call, success or failure.
pub struct BatchValidator<'a> {
    service: &'a dyn LookupService,
    classifier: &'a dyn FailureClassifier,
    options: ValidatorOptions,
}

impl<'a> BatchValidator<'a> {
    pub fn new(
        service: &'a dyn LookupService,
        classifier: &'a dyn FailureClassifier,
        options: ValidatorOptions,
    ) -> Self {
        Self {
            service,
            classifier,
            options,
        }
    }

    /// Validate a deduplicated identifier set.
    ///
    /// The returned report's rejected map plus its accepted count partition
    /// the input exactly: every identifier terminates as one outcome.
    pub fn validate(&self, identifiers: &BTreeSet<String>) -> ValidationReport {
        let mut report = ValidationReport::new(identifiers.len());
        let ordered: Vec<String> = identifiers.iter().cloned().collect();
        let total = ordered.len();

        info!(
            total,
            batch_size = self.options.batch_size,
            retry_limit = self.options.retry_limit,
            "starting remote validation"
        );

        let mut processed = 0usize;
        for chunk in ordered.chunks(self.options.batch_size) {
            let mut batch: Vec<String> = chunk.to_vec();
            self.resolve_batch(&mut batch, &mut report);
            processed += chunk.len();
            info!(processed, total, rejected = report.rejected.len(), "batch resolved");
        }

        report.accepted = total - report.rejected.len();
        info!(
            accepted = report.accepted,
            rejected = report.rejected.len(),
            batch_calls = report.batch_calls,
            single_calls = report.single_calls,
            "remote validation complete"
        );
        report
    }

    /// Drive one batch to a terminal state.
    fn resolve_batch(&self, batch: &mut Vec<String>, report: &mut ValidationReport) {
        let mut attempt: u32 = 0;
        loop {
            report.batch_calls += 1;
            let outcome = self.service.lookup_batch(batch);
            self.pace();

            let error = match outcome {
                Ok(()) => return,
                Err(error) => error,
            };

            match self.classifier.classify(&error) {
                // Confirmed removal: a distinct transition from the budgeted
                // retry path. The batch shrank, so retry immediately without
                // touching the attempt counter.
                FailureKind::NamesOffender(offender)
                    if batch.iter().any(|id| *id == offender) =>
                {
                    warn!(
                        identifier = %offender,
                        remaining = batch.len() - 1,
                        "service named invalid identifier; dropping from batch"
                    );
                    report.reject(offender.clone(), RejectionReason::ConfirmedInvalid);
                    batch.retain(|id| *id != offender);
                    report.free_reductions += 1;
                    if batch.is_empty() {
                        return;
                    }
                }
                // An offender we do not hold is a stale report; treat the
                // failure as ambiguous like any other.
                _ => {
                    attempt += 1;
                    if attempt > self.options.retry_limit {
                        warn!(
                            retries = self.options.retry_limit,
                            error = %error,
                            "retry budget exhausted; falling back to per-identifier lookups"
                        );
                        report.fallback_batches += 1;
                        self.fallback(batch, report);
                        return;
                    }
                    debug!(
                        attempt,
                        retry_limit = self.options.retry_limit,
                        error = %error,
                        "ambiguous batch failure; retrying"
                    );
                    let backoff = self.options.retry_backoff * attempt;
                    if !backoff.is_zero() {
                        thread::sleep(backoff);
                    }
                }
            }
        }
    }

    /// Per-identifier fallback: the slow, always-correct path.
    fn fallback(&self, batch: &[String], report: &mut ValidationReport) {
        for identifier in batch {
            report.single_calls += 1;
            let outcome = self.service.lookup_single(identifier);
            self.pace();
            if let Err(error) = outcome {
                debug!(identifier = %identifier, error = %error, "individual lookup failed");
                report.reject(identifier.clone(), RejectionReason::IndividualFailure);
            }
        }
        debug!(checked = batch.len(), "per-identifier fallback complete");
    }

    fn pace(&self) {
        if !self.options.inter_request_delay.is_zero() {
            thread::sleep(self.options.inter_request_delay);
        }
    }
}
