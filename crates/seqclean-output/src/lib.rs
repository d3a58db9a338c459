//! Output stage: rewrite a FASTA dataset dropping rejected records.

mod rewrite;

pub use rewrite::{RewriteStats, rewrite_fasta};
