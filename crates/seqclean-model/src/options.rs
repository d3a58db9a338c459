//! Tuning knobs for the batch validator.

use std::time::Duration;

/// Default number of identifiers submitted per whole-batch lookup.
pub const DEFAULT_BATCH_SIZE: usize = 400;

/// Default number of budgeted retries for an ambiguous batch failure
/// before falling back to per-identifier lookups.
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Polite inter-request delay mandated by the remote service's usage
/// policy: 3 requests/second without an API key, 10/second with one.
#[must_use]
pub fn polite_delay(has_api_key: bool) -> Duration {
    if has_api_key {
        Duration::from_millis(100)
    } else {
        Duration::from_millis(340)
    }
}

/// Configuration for batch validation behavior.
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Maximum identifiers per whole-batch lookup.
    pub batch_size: usize,
    /// Budgeted retries per batch for ambiguous failures. Free reductions
    /// (a confirmed-bad identifier removed from the batch) do not consume
    /// this budget.
    pub retry_limit: u32,
    /// Delay applied after every remote call, success or failure.
    pub inter_request_delay: Duration,
    /// Base backoff for ambiguous retries; attempt `n` sleeps `n * base`.
    pub retry_backoff: Duration,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            retry_limit: DEFAULT_RETRY_LIMIT,
            inter_request_delay: polite_delay(false),
            retry_backoff: Duration::from_secs(3),
        }
    }
}

impl ValidatorOptions {
    /// Set the batch size (clamped to at least 1).
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set the ambiguous-failure retry budget.
    #[must_use]
    pub fn with_retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = limit;
        self
    }

    /// Set the delay applied after every remote call.
    #[must_use]
    pub fn with_inter_request_delay(mut self, delay: Duration) -> Self {
        self.inter_request_delay = delay;
        self
    }

    /// Set the base backoff for ambiguous retries.
    #[must_use]
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_policy() {
        let options = ValidatorOptions::default();
        assert_eq!(options.batch_size, 400);
        assert_eq!(options.retry_limit, 3);
        assert_eq!(options.inter_request_delay, Duration::from_millis(340));
    }

    #[test]
    fn batch_size_never_zero() {
        let options = ValidatorOptions::default().with_batch_size(0);
        assert_eq!(options.batch_size, 1);
    }

    #[test]
    fn api_key_speeds_up_polite_delay() {
        assert!(polite_delay(true) < polite_delay(false));
    }
}
