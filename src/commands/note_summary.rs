//! `scribe note-summary` command - summarize a stored note
//!
//! Works on the note's plain text. With `--insert` the summary block is
//! appended to the note body and the note is saved.

use tracing::debug;

use super::summarize::summarizer_for;
use crate::cli::NoteSummaryArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::SummaryJson;
use crate::output_by_format_result;
use scribe_core::error::Result;
use scribe_core::summarize::SummaryRequest;

/// Execute the note-summary command
pub fn execute(ctx: &CommandContext, args: &NoteSummaryArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let mut note = store.get_note(&args.id)?;

    let config = &store.config().summarize;
    let summarizer = summarizer_for(config, args.local);
    let max_length = args.max_length.unwrap_or(config.max_length);

    let request = SummaryRequest::new(note.plain_text()).with_max_length(max_length);
    let outcome = summarizer.summarize(&request)?;
    trace_command!(ctx, "summarize");

    if args.insert {
        note.insert_summary(outcome.text());
        store.save_note(&mut note)?;
        debug!(id = note.id(), words = note.word_count(), "summary_inserted");
    }

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = SummaryJson {
                id: Some(note.id()),
                inserted: Some(args.insert),
                ..SummaryJson::new(&outcome)
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            println!("{}", outcome.text());
            if args.insert && !ctx.cli.quiet {
                eprintln!("Inserted summary into {}", note.id());
            }
        }
    )
}
