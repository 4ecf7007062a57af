//! Note ID generation for scribe
//!
//! IDs are `sc-` followed by a lowercase ULID, so they sort by creation time.
//! Filenames are `<id>-<slug(title)>.md`.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{Result, ScribeError};

/// Note ID with the `sc-` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(String);

impl NoteId {
    /// The standard ID prefix
    pub const PREFIX: &'static str = "sc-";

    /// Generate a fresh ID
    pub fn generate() -> Self {
        NoteId(format!(
            "{}{}",
            Self::PREFIX,
            Ulid::new().to_string().to_lowercase()
        ))
    }

    /// Parse an ID supplied by a user
    pub fn parse(id: &str) -> Result<Self> {
        let id = id.trim();
        let suffix = id
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| ScribeError::invalid_value("note id", id))?;
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ScribeError::invalid_value("note id", id));
        }
        Ok(NoteId(id.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slugify a title for use in filenames
pub fn slugify(title: &str) -> String {
    slug::slugify(title)
}

/// Generate a filename from ID and title
///
/// Example: `sc-01hq3k8zt5x4v1n2m3p4q5r6s7-meeting-notes.md`
pub fn filename(id: &NoteId, title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{}.md", id)
    } else {
        format!("{}-{}.md", id, slug)
    }
}
