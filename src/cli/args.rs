//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use super::paths::parse_max_length;

/// Arguments for the summarize command.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// File to summarize; stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Length hint for the remote model, in characters
    #[arg(long, value_parser = parse_max_length)]
    pub max_length: Option<usize>,

    /// Skip the remote model and use the extractive summarizer
    #[arg(long)]
    pub local: bool,

    /// Treat the input as markup and strip tags first
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the new command.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Note title
    #[arg(long, short = 't')]
    pub title: String,

    /// Category (defaults to the template's, then the store's default category)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Tags (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Start from a template: daily-journal, meeting-notes, project-planning,
    /// book-notes, idea-capture, blank
    #[arg(long)]
    pub template: Option<String>,
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only starred notes
    #[arg(long)]
    pub favorites: bool,

    /// Only the N most recently updated notes
    #[arg(long, num_args = 0..=1, default_missing_value = "5")]
    pub recent: Option<usize>,

    /// Filter by category (case-insensitive)
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: String,
}

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in titles and note text
    pub term: String,
}

/// Arguments for the update command.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Note ID
    pub id: String,

    /// New title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Replace tags (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Star or unstar the note
    #[arg(long)]
    pub favorite: Option<bool>,
}

/// Arguments for the delete command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Note ID
    pub id: String,
}

/// Arguments for the note-summary command.
#[derive(Args, Debug)]
pub struct NoteSummaryArgs {
    /// Note ID
    pub id: String,

    /// Append the summary block to the note and save it
    #[arg(long)]
    pub insert: bool,

    /// Skip the remote model and use the extractive summarizer
    #[arg(long)]
    pub local: bool,

    /// Length hint for the remote model, in characters
    #[arg(long, value_parser = parse_max_length)]
    pub max_length: Option<usize>,
}
