//! Command implementations for all scribe commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use scribe_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init => commands::init::execute(ctx),
            Commands::Summarize(args) => commands::summarize::execute(ctx, args),
            Commands::New(args) => commands::new::execute(ctx, args),
            Commands::List(args) => commands::list::execute(ctx, args),
            Commands::Show(args) => commands::show::execute(ctx, args),
            Commands::Search(args) => commands::search::execute(ctx, args),
            Commands::Update(args) => commands::update::execute(ctx, args),
            Commands::Delete(args) => commands::delete::execute(ctx, args),
            Commands::NoteSummary(args) => commands::note_summary::execute(ctx, args),
        };
        super::trace_command!(ctx, "execute_command");
        result
    }
}
