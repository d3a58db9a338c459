//! Integration tests for FASTA scanning over plain and gzipped files.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use seqclean_ingest::collect_accessions;

const SAMPLE: &str = "\
>NP_000001.1 alpha protein
MKTAYIAKQR
QGKTLLNQ
>junk-header without refseq token
MMMM
>NP_000002 beta protein
AAAA
>NP_000001.1 duplicate record
CCCC
";

#[test]
fn scans_plain_fasta() {
    let mut file = tempfile::NamedTempFile::with_suffix(".fasta").unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let scan = collect_accessions(file.path()).unwrap();
    assert_eq!(scan.headers, 4);
    assert_eq!(scan.headers_without_accession, 0);
    let accessions: Vec<&String> = scan.accessions.iter().collect();
    assert_eq!(accessions, vec!["NP_000001.1", "NP_000002", "junk-header"]);
}

#[test]
fn scans_gzipped_fasta() {
    let mut file = tempfile::NamedTempFile::with_suffix(".fasta.gz").unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    let compressed = encoder.finish().unwrap();
    file.write_all(&compressed).unwrap();

    let scan = collect_accessions(file.path()).unwrap();
    assert_eq!(scan.headers, 4);
    assert_eq!(scan.accessions.len(), 3);
    assert!(scan.accessions.contains("NP_000002"));
}

#[test]
fn counts_headers_with_no_token() {
    let mut file = tempfile::NamedTempFile::with_suffix(".fasta").unwrap();
    file.write_all(b">\nAAAA\n>NP_9.9 ok\nCCCC\n").unwrap();

    let scan = collect_accessions(file.path()).unwrap();
    assert_eq!(scan.headers, 2);
    assert_eq!(scan.headers_without_accession, 1);
    assert_eq!(scan.accessions.len(), 1);
}
