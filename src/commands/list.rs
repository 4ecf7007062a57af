//! `scribe list` command - list notes, most recently updated first

use crate::cli::ListArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_notes;
use scribe_core::error::Result;

/// Execute the list command
pub fn execute(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let category = args.category.as_deref();

    let mut notes = match (args.favorites, category, args.recent) {
        (false, None, Some(limit)) => store.recent_notes(limit)?,
        (false, None, None) => store.list_notes()?,
        (false, Some(category), _) => store.notes_in_category(category)?,
        (true, _, _) => store.favorite_notes()?,
    };

    if args.favorites {
        if let Some(category) = category {
            notes.retain(|n| n.category().eq_ignore_ascii_case(category.trim()));
        }
    }
    if let Some(limit) = args.recent {
        notes.truncate(limit);
    }

    print_notes(ctx.cli.format, ctx.cli.quiet, &notes, "No notes found")
}
