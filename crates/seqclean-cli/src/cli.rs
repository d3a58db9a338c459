//! CLI argument definitions for seqclean.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use seqclean_model::{DEFAULT_BATCH_SIZE, DEFAULT_RETRY_LIMIT};

#[derive(Parser)]
#[command(
    name = "seqclean",
    version,
    about = "Clean FASTA datasets by validating accessions against NCBI",
    long_about = "Validate sequence record accessions against NCBI E-utilities and\n\
                  rewrite a FASTA dataset with unrecognized or malformed records removed.\n\n\
                  Batches are validated with graceful degradation: a confirmed-invalid\n\
                  accession is dropped and the batch retried, and persistent batch-level\n\
                  failures fall back to per-accession checks. No batch is ever discarded\n\
                  wholesale."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a FASTA file's accessions and write a cleaned copy.
    Clean(CleanArgs),

    /// Validate a text accession list (one accession per line) and report.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input FASTA file (.fasta or .fasta.gz).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output cleaned FASTA (.fasta or .fasta.gz).
    #[arg(long = "out", value_name = "PATH")]
    pub out: PathBuf,

    /// Validate and report without writing the cleaned output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Directory for the JSON rejection report (skipped when unset).
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    #[command(flatten)]
    pub remote: RemoteArgs,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Text file with one accession per line (.txt/.list/.acc/.ids).
    #[arg(value_name = "LIST")]
    pub list: PathBuf,

    /// Directory for the JSON rejection report (skipped when unset).
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    #[command(flatten)]
    pub remote: RemoteArgs,
}

/// Remote lookup service settings shared by both subcommands.
#[derive(Args)]
pub struct RemoteArgs {
    /// Contact email sent with every E-utilities request (NCBI policy).
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// NCBI API key; raises the polite rate limit.
    #[arg(long = "api-key", env = "NCBI_API_KEY", value_name = "KEY")]
    pub api_key: Option<String>,

    /// E-utilities database to validate against.
    #[arg(long, default_value = "protein")]
    pub db: String,

    /// Accessions per whole-batch lookup.
    #[arg(long = "batch-size", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Budgeted retries per batch for ambiguous failures before falling
    /// back to per-accession checks.
    #[arg(long = "retries", default_value_t = DEFAULT_RETRY_LIMIT)]
    pub retries: u32,

    /// Seconds between remote calls (defaults by API key presence).
    #[arg(long, value_name = "SECONDS")]
    pub delay: Option<f64>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
