//! Collaborator interface for the remote lookup authority.

use seqclean_model::LookupError;

/// A remote authority that confirms identifier validity.
///
/// The success payload is opaque to the validator; all it depends on is
/// success versus failure, and the failure message (which may or may not
/// name an offending identifier). Calls are blocking; the implementation
/// owns its own timeout.
pub trait LookupService {
    /// Submit a whole batch of identifiers in one call.
    fn lookup_batch(&self, identifiers: &[String]) -> Result<(), LookupError>;

    /// Submit a single identifier (used in per-identifier fallback).
    fn lookup_single(&self, identifier: &str) -> Result<(), LookupError>;
}
