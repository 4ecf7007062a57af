pub use scribe_core::format::OutputFormat;

/// clap value parser for `--format`, backed by `OutputFormat::from_str`
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
