//! `scribe delete` command - remove a note

use crate::cli::DeleteArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use scribe_core::error::Result;

/// Execute the delete command
pub fn execute(ctx: &CommandContext, args: &DeleteArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let note = store.delete_note(&args.id)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "deleted",
                "id": note.id(),
                "title": note.title(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("Deleted {} ({})", note.id(), note.title());
            }
        }
    )
}
