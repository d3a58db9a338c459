//! Error type for remote lookup calls.

use thiserror::Error;

/// Failure of a single remote lookup call (batch or individual).
///
/// The validator never aborts on these; every variant is either classified
/// as naming a specific offending identifier or treated as an ambiguous
/// batch failure.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("service returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// The service answered successfully at the transport level but the
    /// payload carries an error message.
    #[error("service error: {0}")]
    Service(String),
}

impl LookupError {
    /// The human-readable failure message, as fed to the failure classifier.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Service(message) => message,
            Self::Http { message, .. } => message,
        }
    }

    /// True for failures that never name a specific identifier.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_exposes_payload_text() {
        let err = LookupError::Service("Invalid uid ABC_1".to_string());
        assert_eq!(err.message(), "Invalid uid ABC_1");

        let err = LookupError::Http {
            status: 400,
            message: "Bad Request".to_string(),
        };
        assert_eq!(err.message(), "Bad Request");
    }

    #[test]
    fn transport_classification() {
        assert!(LookupError::Network("timed out".to_string()).is_transport());
        assert!(!LookupError::Service("boom".to_string()).is_transport());
    }
}
