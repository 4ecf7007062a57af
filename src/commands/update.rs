//! `scribe update` command - change a note without an editor
//!
//! Only the given flags are applied. A body piped on stdin replaces the
//! existing one: `echo "<p>new</p>" | scribe update <id>`.

use crate::cli::UpdateArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::note_json;
use crate::commands::input;
use crate::output_by_format_result;
use scribe_core::bail_usage;
use scribe_core::error::Result;
use scribe_core::store::NoteUpdate;

/// Execute the update command
pub fn execute(ctx: &CommandContext, args: &UpdateArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;

    let update = NoteUpdate {
        title: args.title.clone(),
        body: input::piped_body()?,
        category: args.category.clone(),
        tags: (!args.tag.is_empty()).then(|| args.tag.clone()),
        favorite: args.favorite,
    };
    if update.is_empty() {
        bail_usage!("nothing to update: pass --title, --category, --tag, --favorite or pipe a body");
    }

    let note = store.update_note(&args.id, update)?;
    trace_command!(ctx, "update_note");

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&note_json(&note, false))?);
            Ok(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("Updated {}", note.id());
            }
        }
    )
}
