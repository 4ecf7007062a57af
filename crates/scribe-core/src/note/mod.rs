//! Note data structures for scribe
//!
//! A note is a YAML frontmatter block followed by the rich-text markup the
//! editor produced. Word counts and summaries work on the plain-text
//! rendering of that markup.

pub mod frontmatter;

use std::path::PathBuf;

use chrono::Utc;

use crate::error::Result;
use crate::text;

pub use frontmatter::NoteFrontmatter;

/// CSS class marking an inserted summary block
pub const SUMMARY_CLASS: &str = "ai-summary";

/// Heading of an inserted summary block
pub const SUMMARY_HEADING: &str = "📝 AI Summary";

/// A complete note (frontmatter + body)
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Note frontmatter
    pub frontmatter: NoteFrontmatter,
    /// Note body (rich-text markup after the frontmatter)
    pub body: String,
    /// Path to the note file (if loaded from disk)
    pub path: Option<PathBuf>,
}

impl Note {
    /// Create a new note, counting the words of its body
    pub fn new(frontmatter: NoteFrontmatter, body: impl Into<String>) -> Self {
        let mut note = Note {
            frontmatter,
            body: body.into(),
            path: None,
        };
        note.refresh_word_count();
        note
    }

    pub fn id(&self) -> &str {
        &self.frontmatter.id
    }

    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    pub fn category(&self) -> &str {
        &self.frontmatter.category
    }

    pub fn is_favorite(&self) -> bool {
        self.frontmatter.favorite
    }

    pub fn word_count(&self) -> usize {
        self.frontmatter.word_count
    }

    /// Get the path as a display string (if available)
    pub fn path_display(&self) -> Option<String> {
        self.path.as_ref().map(|p| p.display().to_string())
    }

    /// The body as plain text
    pub fn plain_text(&self) -> String {
        text::to_plain_text(&self.body)
    }

    /// Replace the body and recount words
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.refresh_word_count();
    }

    /// Mark the note as modified now
    pub fn touch(&mut self) {
        self.frontmatter.updated = Utc::now();
    }

    /// Append a summary block to the end of the body
    pub fn insert_summary(&mut self, summary: &str) {
        let block = summary_block(summary);
        let mut body = self.body.trim_end().to_string();
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&block);
        self.set_body(body);
    }

    fn refresh_word_count(&mut self) {
        self.frontmatter.word_count = text::word_count(&self.plain_text());
    }

    /// Parse a note from file content
    #[tracing::instrument(skip(content), fields(path = ?path))]
    pub fn parse(content: &str, path: Option<PathBuf>) -> Result<Self> {
        let (frontmatter, body) = frontmatter::parse_frontmatter(content, path.as_ref())?;
        Ok(Note {
            frontmatter,
            body,
            path,
        })
    }

    /// Serialize the note to file content
    pub fn to_file_content(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.frontmatter)?;
        Ok(format!("---\n{}---\n\n{}", yaml, self.body))
    }
}

/// Markup for an inserted summary
pub fn summary_block(summary: &str) -> String {
    format!(
        "<div class=\"{}\"><h3>{}</h3><p>{}</p></div>",
        SUMMARY_CLASS,
        SUMMARY_HEADING,
        text::escape(summary)
    )
}
