//! Pluggable classification of batch failure messages.
//!
//! The validator itself never inspects message text. A [`FailureClassifier`]
//! maps a failure to either "names offending identifier X" or "ambiguous",
//! so the batch protocol stays reusable against any remote service message
//! format.

use std::sync::LazyLock;

use regex::Regex;
use seqclean_model::LookupError;

/// What a failure message tells us about the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The message unambiguously names one offending identifier.
    NamesOffender(String),
    /// The failure carries no usable per-identifier information.
    Ambiguous,
}

/// Maps a lookup failure to a [`FailureKind`].
pub trait FailureClassifier {
    fn classify(&self, error: &LookupError) -> FailureKind;
}

/// `Invalid uid <token>` phrasing used by NCBI E-utilities.
static INVALID_UID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Invalid uid\s+(\S+)").expect("invalid uid regex"));

/// Default classifier for E-utilities-style failure messages.
///
/// Transport failures are always ambiguous; a stale or garbled report never
/// gets to name an offender it cannot know about.
#[derive(Debug, Default)]
pub struct InvalidUidClassifier {
    pattern: Option<Regex>,
}

impl InvalidUidClassifier {
    /// Classifier using the built-in `Invalid uid <token>` pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with a custom offender pattern. The first capture group
    /// must be the offending identifier.
    #[must_use]
    pub fn with_pattern(pattern: Regex) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }

    fn pattern(&self) -> &Regex {
        self.pattern.as_ref().unwrap_or(&INVALID_UID_REGEX)
    }
}

impl FailureClassifier for InvalidUidClassifier {
    fn classify(&self, error: &LookupError) -> FailureKind {
        if error.is_transport() {
            return FailureKind::Ambiguous;
        }
        match self
            .pattern()
            .captures(error.message())
            .and_then(|captures| captures.get(1))
        {
            Some(token) => FailureKind::NamesOffender(token.as_str().to_string()),
            None => FailureKind::Ambiguous,
        }
    }
}
