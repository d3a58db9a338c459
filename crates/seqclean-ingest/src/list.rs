//! Plain-text accession list files: one accession per line.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Extensions recognized as bare accession lists rather than FASTA.
const LIST_EXTENSIONS: &[&str] = &["txt", "list", "acc", "ids"];

/// True if the path looks like a text accession list.
#[must_use]
pub fn is_accession_list(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            LIST_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Read a one-accession-per-line text file into a sorted, deduplicated set.
/// Blank lines are skipped. No shape checking happens here; the local
/// filter decides what is malformed so that every token still terminates
/// as exactly one accepted/rejected outcome.
pub fn read_accession_list(path: &Path) -> Result<BTreeSet<String>> {
    let file =
        File::open(path).with_context(|| format!("open accession list {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut accessions = BTreeSet::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("read {}", path.display()))?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        accessions.insert(token.to_string());
    }
    Ok(accessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn list_extension_detection() {
        assert!(is_accession_list(Path::new("ids.txt")));
        assert!(is_accession_list(Path::new("proteins.ACC")));
        assert!(!is_accession_list(Path::new("data.fasta")));
        assert!(!is_accession_list(Path::new("data.fasta.gz")));
    }

    #[test]
    fn reads_deduplicated_sorted_tokens() {
        let mut file = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        writeln!(file, "NP_2.1\n\nNP_1.1\nNP_2.1\n  NP_3.1  ").unwrap();
        let accessions = read_accession_list(file.path()).unwrap();
        let ordered: Vec<&String> = accessions.iter().collect();
        assert_eq!(ordered, vec!["NP_1.1", "NP_2.1", "NP_3.1"]);
    }
}
