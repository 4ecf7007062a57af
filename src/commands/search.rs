//! `scribe search` command - case-insensitive search over titles and text

use tracing::debug;

use crate::cli::SearchArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_notes;
use scribe_core::error::Result;

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let notes = store.search_notes(&args.term)?;
    debug!(term = %args.term, hits = notes.len(), "search");

    print_notes(ctx.cli.format, ctx.cli.quiet, &notes, "No results found")
}
