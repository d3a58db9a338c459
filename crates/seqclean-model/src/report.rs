//! Per-run validation outcome accounting.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Why an identifier was rejected.
///
/// Exactly one reason exists per rejected identifier; everything else in
/// the input set is accepted. `ExhaustedRetries` is deliberately absent:
/// running out of retries triggers per-identifier fallback, it never
/// rejects anything by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Failed the local syntactic check; never sent to the remote service.
    MalformedPattern,
    /// The remote service unambiguously named this identifier as invalid
    /// in a whole-batch failure message.
    ConfirmedInvalid,
    /// An individual lookup for this identifier failed during per-identifier
    /// fallback.
    IndividualFailure,
}

/// Outcome of a validation run: the rejected subset plus call accounting.
///
/// Invariant: `rejected` keys are a subset of the run's input identifiers,
/// and `accepted + rejected.len()` equals the deduplicated input size.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Timestamp of report creation.
    pub generated_at: Option<DateTime<Utc>>,
    /// Deduplicated input identifier count.
    pub total: usize,
    /// Identifiers the authority (or the local filter) accepted.
    pub accepted: usize,
    /// Rejected identifiers with the reason each one was rejected.
    pub rejected: BTreeMap<String, RejectionReason>,
    /// Whole-batch remote calls issued.
    pub batch_calls: usize,
    /// Individual remote calls issued during fallback.
    pub single_calls: usize,
    /// Confirmed-invalid removals that retried a reduced batch for free.
    pub free_reductions: usize,
    /// Batches that exhausted their retry budget and fell back.
    pub fallback_batches: usize,
}

impl ValidationReport {
    /// Create an empty report for an input of the given size.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Record a rejection. Later reasons never overwrite earlier ones; an
    /// identifier terminates as exactly one outcome.
    pub fn reject(&mut self, identifier: impl Into<String>, reason: RejectionReason) {
        self.rejected.entry(identifier.into()).or_insert(reason);
    }

    /// True if the identifier was rejected in this run.
    #[must_use]
    pub fn is_rejected(&self, identifier: &str) -> bool {
        self.rejected.contains_key(identifier)
    }

    /// The rejected identifiers as a sorted set, for the rewriter.
    #[must_use]
    pub fn rejected_ids(&self) -> BTreeSet<String> {
        self.rejected.keys().cloned().collect()
    }

    /// Stamp the report with the current time.
    #[must_use]
    pub fn stamped(mut self) -> Self {
        self.generated_at = Some(Utc::now());
        self
    }

    /// Merge counters and rejections from another report (used to combine
    /// the local-filter pass with the remote validation pass).
    pub fn absorb(&mut self, other: ValidationReport) {
        for (identifier, reason) in other.rejected {
            self.reject(identifier, reason);
        }
        self.accepted += other.accepted;
        self.batch_calls += other.batch_calls;
        self.single_calls += other.single_calls;
        self.free_reductions += other.free_reductions;
        self.fallback_batches += other.fallback_batches;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rejection_reason_wins() {
        let mut report = ValidationReport::new(2);
        report.reject("NP_1.1", RejectionReason::ConfirmedInvalid);
        report.reject("NP_1.1", RejectionReason::IndividualFailure);
        assert_eq!(
            report.rejected.get("NP_1.1"),
            Some(&RejectionReason::ConfirmedInvalid)
        );
    }

    #[test]
    fn rejected_ids_are_sorted() {
        let mut report = ValidationReport::new(3);
        report.reject("ZP_9", RejectionReason::MalformedPattern);
        report.reject("AP_1", RejectionReason::ConfirmedInvalid);
        let ids: Vec<String> = report.rejected_ids().into_iter().collect();
        assert_eq!(ids, vec!["AP_1".to_string(), "ZP_9".to_string()]);
    }

    #[test]
    fn serializes_reason_as_snake_case() {
        let json = serde_json::to_string(&RejectionReason::ConfirmedInvalid).unwrap();
        assert_eq!(json, "\"confirmed_invalid\"");
    }
}
