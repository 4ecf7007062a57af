//! Shared output helpers for commands

use serde::Serialize;
use serde_json::json;

use scribe_core::error::Result;
use scribe_core::note::Note;
use scribe_core::summarize::SummaryOutcome;

/// JSON shape for a note; the body is included only when asked for
pub fn note_json(note: &Note, with_body: bool) -> serde_json::Value {
    let mut value = json!({
        "id": note.id(),
        "title": note.title(),
        "category": note.category(),
        "tags": note.frontmatter.tags,
        "favorite": note.is_favorite(),
        "word_count": note.word_count(),
        "created": note.frontmatter.created,
        "updated": note.frontmatter.updated,
        "path": note.path_display(),
    });
    if with_body {
        if let Some(obj) = value.as_object_mut() {
            obj.insert("body".to_string(), json!(note.body));
        }
    }
    value
}

/// One-line human listing: `<id> [<category>] <title>`, starred notes marked
pub fn note_line(note: &Note) -> String {
    let star = if note.is_favorite() { " ★" } else { "" };
    format!("{} [{}] {}{}", note.id(), note.category(), note.title(), star)
}

/// Print a list of notes in the requested format
pub fn print_notes(
    format: crate::cli::OutputFormat,
    quiet: bool,
    notes: &[Note],
    empty_message: &str,
) -> Result<()> {
    crate::output_by_format_result!(format,
        json => {
            let items: Vec<_> = notes.iter().map(|n| note_json(n, false)).collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
            Ok(())
        },
        human => {
            if notes.is_empty() {
                if !quiet {
                    println!("{}", empty_message);
                }
            } else {
                for note in notes {
                    println!("{}", note_line(note));
                }
            }
        }
    )
}

/// JSON shape for a summary
#[derive(Debug, Serialize)]
pub struct SummaryJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub summary: &'a str,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted: Option<bool>,
}

impl<'a> SummaryJson<'a> {
    pub fn new(outcome: &'a SummaryOutcome) -> Self {
        SummaryJson {
            id: None,
            summary: outcome.text(),
            source: outcome.source(),
            fallback_reason: outcome.fallback_reason(),
            inserted: None,
        }
    }
}
