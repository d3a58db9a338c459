//! Byte-preserving streamed FASTA rewrite.
//!
//! Single forward pass: each header line is classified by its extracted
//! accession, and every body line up to the next header inherits that
//! keep/drop decision. Kept lines are copied byte-for-byte, so the output
//! is an exact subset of the input. Both ends may be gzip-compressed,
//! detected from the `.gz` extension.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use seqclean_ingest::{extract_accession, is_header, open_fasta_reader};
use tracing::info;

/// Counts from a rewrite pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStats {
    /// Header lines seen in the input.
    pub headers: usize,
    /// Records copied to the output.
    pub kept: usize,
    /// Records dropped because their accession was rejected.
    pub removed: usize,
}

/// Output sink, plain or gzip-compressed.
///
/// The variants are kept concrete (no `Box<dyn Write>`) so the gzip trailer
/// can be written with an explicit, fallible `finish`; dropping a
/// `GzEncoder` writes the trailer too, but swallows any I/O error, leaving
/// a corrupt output behind a successful exit.
enum FastaWriter {
    Plain(BufWriter<File>),
    Gz(GzEncoder<BufWriter<File>>),
}

impl FastaWriter {
    fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        if path.extension().is_some_and(|ext| ext == "gz") {
            Ok(Self::Gz(GzEncoder::new(
                BufWriter::new(file),
                Compression::default(),
            )))
        } else {
            Ok(Self::Plain(BufWriter::new(file)))
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Plain(writer) => writer.write_all(buf),
            Self::Gz(writer) => writer.write_all(buf),
        }
    }

    /// Flush buffered data and, for gzip, write the stream trailer.
    fn finish(self) -> io::Result<()> {
        match self {
            Self::Plain(mut writer) => writer.flush(),
            Self::Gz(writer) => writer.finish()?.flush(),
        }
    }
}

/// Stream `input` to `output`, keeping only records whose accession is not
/// in `rejected`.
///
/// Headers with no extractable accession are kept: the authority never
/// ruled on them, and a local drop would be an unrecoverable false
/// positive.
pub fn rewrite_fasta(
    input: &Path,
    output: &Path,
    rejected: &BTreeSet<String>,
) -> Result<RewriteStats> {
    let mut reader = open_fasta_reader(input)?;
    let mut writer = FastaWriter::create(output)?;

    let mut stats = RewriteStats::default();
    let mut keep_current = true;
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("read {}", input.display()))?;
        if read == 0 {
            break;
        }
        if is_header(&line) {
            stats.headers += 1;
            let header = String::from_utf8_lossy(&line);
            let dropped = extract_accession(&header)
                .is_some_and(|accession| rejected.contains(&accession));
            if dropped {
                keep_current = false;
                stats.removed += 1;
            } else {
                keep_current = true;
                stats.kept += 1;
            }
        }
        if keep_current {
            writer
                .write_all(&line)
                .with_context(|| format!("write {}", output.display()))?;
        }
    }
    writer
        .finish()
        .with_context(|| format!("finish {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        kept = stats.kept,
        removed = stats.removed,
        "rewrite complete"
    );
    Ok(stats)
}
