//! `scribe show` command - display a note

use crate::cli::ShowArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::note_json;
use crate::output_by_format_result;
use scribe_core::error::Result;

/// Execute the show command
pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let note = store.get_note(&args.id)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&note_json(&note, true))?);
            Ok(())
        },
        human => {
            print!("{}", note.to_file_content()?);
            if !note.body.ends_with('\n') {
                println!();
            }
        }
    )
}
