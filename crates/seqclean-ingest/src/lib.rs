//! Ingestion for the seqclean pipeline: FASTA header scanning, accession
//! extraction, accession-list files, and the syntactic local filter.

pub mod fasta;
pub mod list;
pub mod pattern;

pub use fasta::{
    AccessionScan, collect_accessions, extract_accession, is_header, open_fasta_reader,
};
pub use list::{is_accession_list, read_accession_list};
pub use pattern::{looks_like_accession, passes_local_filter};
