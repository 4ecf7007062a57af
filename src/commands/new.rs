//! `scribe new` command - create a note
//!
//! The body is read from stdin when piped:
//! `scribe new --title "Trip plan" < plan.html`
//!
//! `--template` seeds the body and category; a piped body or an explicit
//! `--category` takes precedence.

use crate::cli::NewArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::note_json;
use crate::commands::input;
use crate::output_by_format_result;
use scribe_core::error::Result;
use scribe_core::store::NewNote;
use scribe_core::templates;

/// Execute the new command
pub fn execute(ctx: &CommandContext, args: &NewArgs) -> Result<()> {
    let template = args.template.as_deref().map(templates::find).transpose()?;
    let store = ctx.discover_or_open_store()?;

    let mut new = match template {
        Some(template) => NewNote::from_template(args.title.clone(), template),
        None => NewNote::new(args.title.clone(), ""),
    };
    if let Some(body) = input::piped_body()? {
        new.body = body;
    }
    if args.category.is_some() {
        new.category = args.category.clone();
    }
    new.tags = args.tag.clone();

    let note = store.create_note(new)?;
    trace_command!(ctx, "create_note");

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&note_json(&note, false))?);
            Ok(())
        },
        human => {
            println!("{}", note.id());
            if let Some(path) = note.path_display() {
                println!("{}", path);
            }
        }
    )
}
