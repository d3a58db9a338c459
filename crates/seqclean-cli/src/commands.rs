//! Subcommand orchestration.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use seqclean_ingest::{collect_accessions, is_accession_list, read_accession_list};
use seqclean_model::ValidationReport;
use seqclean_output::rewrite_fasta;
use seqclean_validate::write_rejection_report_json;

use crate::cli::{CheckArgs, CleanArgs};
use crate::pipeline::{screen, validate_remote};
use crate::types::RunResult;

/// Full pipeline: collect, screen, validate, rewrite.
pub fn run_clean(args: &CleanArgs) -> Result<RunResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    // Conditions outside the validation core fail fast, before any batch
    // processing begins.
    if !args.input.exists() {
        bail!("input FASTA does not exist: {}", args.input.display());
    }
    if !args.dry_run {
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }

    let scan = info_span!("collect").in_scope(|| collect_accessions(&args.input))?;
    let total = scan.accessions.len();

    let screened = screen(&scan.accessions, false);
    let report = validate_remote(total, &screened, &args.remote)?;

    let rewrite = if args.dry_run {
        info!("dry run; skipping rewrite");
        None
    } else {
        let rejected = report.rejected_ids();
        Some(
            info_span!("rewrite", output = %args.out.display())
                .in_scope(|| rewrite_fasta(&args.input, &args.out, &rejected))?,
        )
    };

    let report_path = match &args.report_dir {
        Some(dir) => Some(write_rejection_report_json(dir, &report)?),
        None => None,
    };

    info!(
        duration_ms = start.elapsed().as_millis(),
        accepted = report.accepted,
        rejected = report.rejected.len(),
        "clean complete"
    );
    Ok(RunResult {
        input: args.input.clone(),
        output: (!args.dry_run).then(|| args.out.clone()),
        headers: scan.headers,
        total_accessions: total,
        report,
        rewrite,
        report_path,
    })
}

/// Validate a bare accession list; no rewrite.
pub fn run_check(args: &CheckArgs) -> Result<RunResult> {
    let span = info_span!("check", input = %args.list.display());
    let _guard = span.enter();
    let start = Instant::now();

    if !args.list.exists() {
        bail!("accession list does not exist: {}", args.list.display());
    }
    if !is_accession_list(&args.list) {
        warn!(
            input = %args.list.display(),
            "input extension is not a recognized list extension; reading as plain text anyway"
        );
    }

    let accessions = info_span!("collect").in_scope(|| read_accession_list(&args.list))?;
    let total = accessions.len();
    if total == 0 {
        // Empty input partitions trivially; only absent input is fatal.
        warn!(input = %args.list.display(), "accession list is empty; nothing to validate");
        return Ok(RunResult {
            input: args.list.clone(),
            output: None,
            headers: 0,
            total_accessions: 0,
            report: ValidationReport::new(0),
            rewrite: None,
            report_path: None,
        });
    }

    let screened = screen(&accessions, true);
    let report = validate_remote(total, &screened, &args.remote)?;

    let report_path = match &args.report_dir {
        Some(dir) => Some(write_rejection_report_json(dir, &report)?),
        None => None,
    };

    info!(
        duration_ms = start.elapsed().as_millis(),
        accepted = report.accepted,
        rejected = report.rejected.len(),
        "check complete"
    );
    Ok(RunResult {
        input: args.list.clone(),
        output: None,
        headers: 0,
        total_accessions: total,
        report,
        rewrite: None,
        report_path,
    })
}
