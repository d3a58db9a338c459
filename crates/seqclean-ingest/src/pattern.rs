//! Syntactic accession checks that never touch the network.
//!
//! The local filter is intentionally minimal: it only rejects token shapes
//! that are known to be non-protein records (PDB chain identifiers such as
//! `1Q3Z_A`). Everything else is let through for the remote authority to
//! judge. A local rejection is final, so the filter must never produce a
//! false positive.

use std::sync::LazyLock;

use regex::Regex;

/// PDB chain identifiers: digit, three alphanumerics, underscore, one
/// alphanumeric (e.g. `1Q3Z_A`, `5AUM_D`).
static PDB_CHAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9][A-Za-z0-9]{3}_[A-Za-z0-9]$").expect("invalid PDB chain regex")
});

/// RefSeq-style accessions: `NP_123456.1`, `YP_`, `XP_`, `WP_` and friends.
static REFSEQ_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{1,3}_[0-9]+(?:\.[0-9]+)?$").expect("invalid RefSeq regex")
});

/// UniProt-like accessions.
static UNIPROT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-NR-Z0-9]{6,10}$").expect("invalid UniProt regex"));

/// Bare numeric UIDs.
static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("invalid numeric regex"));

/// Minimal local filter applied before any remote call.
///
/// Pure and deterministic. Returns `false` only for tokens that are
/// structurally certain to be non-target records; false negatives are
/// acceptable, false positives are not.
#[must_use]
pub fn passes_local_filter(token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }
    !PDB_CHAIN_REGEX.is_match(token)
}

/// Stricter shape check used for bare accession lists, where there is no
/// FASTA header context to fall back on: RefSeq, UniProt-like, or numeric
/// UID shapes.
#[must_use]
pub fn looks_like_accession(token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }
    NUMERIC_REGEX.is_match(token)
        || REFSEQ_REGEX.is_match(token)
        || UNIPROT_REGEX.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_filter_rejects_pdb_chains() {
        assert!(!passes_local_filter("1Q3Z_A"));
        assert!(!passes_local_filter("5AUM_D"));
        assert!(!passes_local_filter(""));
        assert!(!passes_local_filter("   "));
    }

    #[test]
    fn local_filter_lets_everything_else_through() {
        assert!(passes_local_filter("NP_123456.1"));
        assert!(passes_local_filter("WP_000001"));
        // Odd but not provably junk; the authority decides.
        assert!(passes_local_filter("AAA_28"));
        assert!(passes_local_filter("whatever"));
    }

    #[test]
    fn accession_shapes() {
        assert!(looks_like_accession("NP_123456.1"));
        assert!(looks_like_accession("YP_009724390"));
        assert!(looks_like_accession("P0DTC2"));
        assert!(looks_like_accession("47118297"));

        assert!(!looks_like_accession("1Q3Z_A"));
        assert!(!looks_like_accession("AAA_28"));
        assert!(!looks_like_accession(""));
        assert!(!looks_like_accession("not an id"));
    }

    #[test]
    fn local_filter_trims_whitespace() {
        assert!(!passes_local_filter(" 1Q3Z_A \n"));
        assert!(passes_local_filter(" NP_1.1 "));
    }
}
