//! CLI argument parsing for scribe
//!
//! Global flags: --root, --store, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod format;
pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{
    DeleteArgs, ListArgs, NewArgs, NoteSummaryArgs, SearchArgs, ShowArgs, SummarizeArgs,
    UpdateArgs,
};
pub use output::OutputFormat;

/// Scribe - rich-text notes with remote-first summaries
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store path (the `.scribe` directory)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = output::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "scribe_core=trace")
    #[arg(long, global = true, env = "SCRIBE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new scribe store
    Init,

    /// Summarize text from a file or stdin
    Summarize(SummarizeArgs),

    /// Create a note; the body is read from stdin when piped
    New(NewArgs),

    /// List notes, most recently updated first
    List(ListArgs),

    /// Show a note
    Show(ShowArgs),

    /// Search note titles and text
    Search(SearchArgs),

    /// Update a note; a piped body replaces the existing one
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Summarize a stored note
    NoteSummary(NoteSummaryArgs),
}
