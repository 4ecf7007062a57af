//! `scribe init` command - create a new store

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use scribe_core::error::Result;
use scribe_core::store::Store;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let store = Store::init(ctx.root())?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "initialized",
                "path": store.root().display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("Initialized scribe store at {}", store.root().display());
            }
        }
    )
}
