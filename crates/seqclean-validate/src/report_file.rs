//! Machine-readable rejection report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use seqclean_model::ValidationReport;

/// File name of the JSON rejection report.
pub const REPORT_FILE_NAME: &str = "rejection_report.json";

/// Write the run's rejection report as pretty-printed JSON, stamped with
/// the current time. Returns the written path.
pub fn write_rejection_report_json(
    output_dir: &Path,
    report: &ValidationReport,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create report directory {}", output_dir.display()))?;
    let path = output_dir.join(REPORT_FILE_NAME);
    let stamped = report.clone().stamped();
    let json = serde_json::to_string_pretty(&stamped).context("serialize rejection report")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
