//! Rewriter fidelity tests: exact record subsets, intact body lines,
//! original order.

use std::collections::BTreeSet;
use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use seqclean_output::rewrite_fasta;

const SAMPLE: &str = "\
>NP_000001.1 alpha
MKTAYIAKQR
QGKTLLNQ
>AAA_28 junk record
XXXX
YYYY
>NP_000002 beta
AAAA
>no_accession_token weird header
ZZZZ
";

fn rejected(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn drops_rejected_records_with_their_bodies() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    std::fs::write(&input, SAMPLE).unwrap();

    let stats = rewrite_fasta(&input, &output, &rejected(&["AAA_28"])).unwrap();

    assert_eq!(stats.headers, 4);
    assert_eq!(stats.kept, 3);
    assert_eq!(stats.removed, 1);

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "\
>NP_000001.1 alpha
MKTAYIAKQR
QGKTLLNQ
>NP_000002 beta
AAAA
>no_accession_token weird header
ZZZZ
"
    );
}

#[test]
fn empty_rejected_set_copies_input_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    std::fs::write(&input, SAMPLE).unwrap();

    let stats = rewrite_fasta(&input, &output, &BTreeSet::new()).unwrap();

    assert_eq!(stats.removed, 0);
    assert_eq!(std::fs::read(&output).unwrap(), SAMPLE.as_bytes());
}

#[test]
fn keeps_headers_without_extractable_accession() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    std::fs::write(&input, ">\nBODY\n>NP_1.1 ok\nAAAA\n").unwrap();

    let stats = rewrite_fasta(&input, &output, &rejected(&["NP_1.1"])).unwrap();

    assert_eq!(stats.kept, 1);
    assert_eq!(stats.removed, 1);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), ">\nBODY\n");
}

#[test]
fn preserves_line_without_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    std::fs::write(&input, ">NP_1.1 ok\nAAAA").unwrap();

    rewrite_fasta(&input, &output, &BTreeSet::new()).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), ">NP_1.1 ok\nAAAA");
}

#[test]
fn gzip_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.fasta.gz");
    let output = dir.path().join("out.fasta.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    std::fs::write(&input, encoder.finish().unwrap()).unwrap();

    let stats = rewrite_fasta(&input, &output, &rejected(&["NP_000002"])).unwrap();
    assert_eq!(stats.kept, 3);
    assert_eq!(stats.removed, 1);

    let mut decoded = String::new();
    MultiGzDecoder::new(std::fs::File::open(&output).unwrap())
        .read_to_string(&mut decoded)
        .unwrap();
    assert!(decoded.contains(">NP_000001.1 alpha"));
    assert!(!decoded.contains(">NP_000002 beta"));
    assert!(!decoded.contains("AAAA\n"));
}

#[test]
fn gzip_output_decodes_to_the_exact_kept_subset() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta.gz");
    std::fs::write(&input, SAMPLE).unwrap();

    rewrite_fasta(&input, &output, &rejected(&["AAA_28"])).unwrap();

    // A missing or corrupt gzip trailer makes this decode fail.
    let mut decoded = String::new();
    MultiGzDecoder::new(std::fs::File::open(&output).unwrap())
        .read_to_string(&mut decoded)
        .unwrap();
    assert_eq!(
        decoded,
        "\
>NP_000001.1 alpha
MKTAYIAKQR
QGKTLLNQ
>NP_000002 beta
AAAA
>no_accession_token weird header
ZZZZ
"
    );
}

#[test]
fn unwritable_output_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    std::fs::write(&input, SAMPLE).unwrap();

    let output = dir.path().join("missing").join("out.fasta.gz");
    assert!(rewrite_fasta(&input, &output, &BTreeSet::new()).is_err());
}
