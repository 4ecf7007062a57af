//! `scribe summarize` command - summarize a file or stdin
//!
//! The remote model is asked first unless `--local` is given or the
//! configuration disables it; any remote failure falls back to the
//! extractive summary.

use tracing::debug;

use crate::cli::SummarizeArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::SummaryJson;
use crate::commands::input;
use crate::output_by_format_result;
use scribe_core::config::SummarizeConfig;
use scribe_core::error::Result;
use scribe_core::summarize::{SummaryOutcome, SummaryRequest, Summarizer};
use scribe_core::text;

/// Pick the summarizer for a command invocation
pub fn summarizer_for(config: &SummarizeConfig, local: bool) -> Summarizer {
    if local {
        Summarizer::local().with_min_input_chars(config.min_input_chars)
    } else {
        Summarizer::from_config(config)
    }
}

/// Execute the summarize command
pub fn execute(ctx: &CommandContext, args: &SummarizeArgs) -> Result<()> {
    let raw = input::read_text(args.file.as_deref())?;
    let text = if args.html {
        text::to_plain_text(&raw)
    } else {
        raw
    };
    trace_command!(ctx, "read_input");

    let config = ctx.config()?;
    let summarizer = summarizer_for(&config.summarize, args.local);
    let max_length = args.max_length.unwrap_or(config.summarize.max_length);
    debug!(remote = summarizer.has_remote(), max_length, "summarize_params");

    let outcome = summarizer.summarize(&SummaryRequest::new(text).with_max_length(max_length))?;
    trace_command!(ctx, "summarize");

    print_outcome(ctx, &outcome)
}

fn print_outcome(ctx: &CommandContext, outcome: &SummaryOutcome) -> Result<()> {
    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&SummaryJson::new(outcome))?);
            Ok(())
        },
        human => {
            println!("{}", outcome.text());
        }
    )
}
