use std::path::PathBuf;

use seqclean_model::ValidationReport;
use seqclean_output::RewriteStats;

/// Result of a `clean` or `check` run, for the terminal summary.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Cleaned output path (`clean` without `--dry-run` only).
    pub output: Option<PathBuf>,
    /// FASTA headers scanned (0 for list input).
    pub headers: usize,
    /// Deduplicated accessions found in the input.
    pub total_accessions: usize,
    pub report: ValidationReport,
    pub rewrite: Option<RewriteStats>,
    /// Written JSON rejection report, when requested.
    pub report_path: Option<PathBuf>,
}
