//! Streamed FASTA reading and accession extraction.
//!
//! Records are one header line (`>` marker followed by free text) and zero
//! or more body lines. Files may be plain or gzip-compressed; compression
//! is detected from the `.gz` extension. Reading is a single forward pass
//! over raw bytes so arbitrarily large files never need to fit in memory.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use regex::Regex;
use tracing::{debug, info};

/// Marker byte that opens a FASTA header line.
const HEADER_MARKER: u8 = b'>';

/// RefSeq-style accession anywhere in a header line, e.g. `NP_123456.1`.
static HEADER_ACCESSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]{1,3}_[0-9]+(?:\.[0-9]+)?)").expect("invalid header accession regex")
});

/// Open a FASTA file for buffered reading, transparently decompressing
/// `.gz` input.
pub fn open_fasta_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file =
        File::open(path).with_context(|| format!("open FASTA file {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// True if the raw line opens a new record.
#[must_use]
pub fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&HEADER_MARKER)
}

/// Extract the accession token from a FASTA header line.
///
/// Tries a RefSeq-shaped token first, then falls back to the first
/// whitespace-delimited token after the marker. Returns `None` for headers
/// with no token at all.
#[must_use]
pub fn extract_accession(header: &str) -> Option<String> {
    let text = header.trim_end().strip_prefix('>').unwrap_or(header);
    if let Some(found) = HEADER_ACCESSION_REGEX.find(text) {
        return Some(found.as_str().to_string());
    }
    text.split_whitespace().next().map(str::to_string)
}

/// Result of scanning a FASTA file for accessions.
#[derive(Debug, Default)]
pub struct AccessionScan {
    /// Unique accessions in sorted order.
    pub accessions: BTreeSet<String>,
    /// Header lines seen.
    pub headers: usize,
    /// Headers from which no accession could be extracted.
    pub headers_without_accession: usize,
}

/// Scan a FASTA(.gz) file and collect every unique header accession.
pub fn collect_accessions(path: &Path) -> Result<AccessionScan> {
    let mut reader = open_fasta_reader(path)?;
    let mut scan = AccessionScan::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("read {}", path.display()))?;
        if read == 0 {
            break;
        }
        if !is_header(&line) {
            continue;
        }
        scan.headers += 1;
        let header = String::from_utf8_lossy(&line);
        match extract_accession(&header) {
            Some(accession) => {
                scan.accessions.insert(accession);
            }
            None => {
                scan.headers_without_accession += 1;
                debug!(header = %header.trim_end(), "header without extractable accession");
            }
        }
    }

    info!(
        path = %path.display(),
        headers = scan.headers,
        unique_accessions = scan.accessions.len(),
        "FASTA scan complete"
    );
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_detection() {
        assert!(is_header(b">NP_1.1 some protein\n"));
        assert!(!is_header(b"MKTAYIAKQR\n"));
        assert!(!is_header(b""));
    }

    #[test]
    fn extracts_refseq_token_anywhere_in_header() {
        assert_eq!(
            extract_accession(">sp|x|y NP_123456.1 spike protein"),
            Some("NP_123456.1".to_string())
        );
        assert_eq!(
            extract_accession(">WP_000001 hypothetical"),
            Some("WP_000001".to_string())
        );
    }

    #[test]
    fn falls_back_to_first_token() {
        assert_eq!(
            extract_accession(">someid description here"),
            Some("someid".to_string())
        );
        assert_eq!(extract_accession(">"), None);
        assert_eq!(extract_accession(">   \n"), None);
    }

    #[test]
    fn versioned_accession_wins_over_fallback() {
        assert_eq!(
            extract_accession(">gi|123|ref|YP_009724390.1| orf1ab"),
            Some("YP_009724390.1".to_string())
        );
    }
}
