use std::cmp::Reverse;
use std::fs;

use tracing::warn;
use walkdir::WalkDir;

use super::Store;
use crate::bail_invalid;
use crate::error::Result;
use crate::note::Note;
use crate::trace_time;

impl Store {
    /// All notes, most recently updated first
    ///
    /// Files that fail to parse are logged and skipped so one bad note does
    /// not hide the rest.
    #[tracing::instrument(skip(self))]
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        let start = std::time::Instant::now();
        let mut notes = Vec::new();

        for entry in WalkDir::new(self.notes_dir())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let is_markdown = path.extension().and_then(|ext| ext.to_str()) == Some("md");
            if !entry.file_type().is_file() || !is_markdown {
                continue;
            }

            let content = fs::read_to_string(path)?;
            match Note::parse(&content, Some(path.to_path_buf())) {
                Ok(note) => notes.push(note),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable note"),
            }
        }

        notes.sort_by_key(|n| (Reverse(n.frontmatter.updated), Reverse(n.id().to_string())));
        trace_time!(start, "list_notes", count = notes.len());
        Ok(notes)
    }

    /// Case-insensitive substring match over title and plain-text body
    #[tracing::instrument(skip(self))]
    pub fn search_notes(&self, term: &str) -> Result<Vec<Note>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            bail_invalid!("search term", "(empty)");
        }

        Ok(self
            .list_notes()?
            .into_iter()
            .filter(|note| {
                note.title().to_lowercase().contains(&needle)
                    || note.plain_text().to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Starred notes, most recently updated first
    pub fn favorite_notes(&self) -> Result<Vec<Note>> {
        Ok(self
            .list_notes()?
            .into_iter()
            .filter(Note::is_favorite)
            .collect())
    }

    /// The `limit` most recently updated notes
    pub fn recent_notes(&self, limit: usize) -> Result<Vec<Note>> {
        let mut notes = self.list_notes()?;
        notes.truncate(limit);
        Ok(notes)
    }

    /// Notes whose category matches, ignoring case
    pub fn notes_in_category(&self, category: &str) -> Result<Vec<Note>> {
        let category = category.trim();
        Ok(self
            .list_notes()?
            .into_iter()
            .filter(|note| note.category().eq_ignore_ascii_case(category))
            .collect())
    }
}
