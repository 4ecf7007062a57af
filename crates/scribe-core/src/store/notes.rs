//! Note lifecycle: create, read, update, delete

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::Store;
use crate::bail_invalid;
use crate::error::{Result, ScribeError};
use crate::id::{self, NoteId};
use crate::note::{Note, NoteFrontmatter};
use crate::templates::NoteTemplate;

/// Fields for a new note
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: String,
    pub body: String,
    /// Falls back to the configured default category
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        NewNote {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// A note seeded with a template's body (dated today) and category
    pub fn from_template(title: impl Into<String>, template: &NoteTemplate) -> Self {
        NewNote {
            title: title.into(),
            body: template.render_today(),
            category: Some(template.category.to_string()),
            ..Default::default()
        }
    }
}

/// Partial update; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub favorite: Option<bool>,
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.favorite.is_none()
    }
}

fn clean_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        bail_invalid!("title", "(empty)");
    }
    Ok(title.to_string())
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

impl Store {
    /// Create a note and write it to disk
    #[tracing::instrument(skip(self, new), fields(title = %new.title))]
    pub fn create_note(&self, new: NewNote) -> Result<Note> {
        let title = clean_title(&new.title)?;
        let category = new
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.config().default_category.clone());

        let id = NoteId::generate();
        let frontmatter = NoteFrontmatter::new(id.to_string(), title)
            .with_category(category)
            .with_tags(clean_tags(new.tags));

        let mut note = Note::new(frontmatter, new.body);
        self.write_note(&mut note)?;
        debug!(id = %note.id(), words = note.word_count(), "note_created");
        Ok(note)
    }

    /// Load a note by ID
    #[tracing::instrument(skip(self))]
    pub fn get_note(&self, id: &str) -> Result<Note> {
        let id = NoteId::parse(id)?;
        let path = self.note_path(&id)?;
        let content = fs::read_to_string(&path)?;
        Note::parse(&content, Some(path))
    }

    /// Apply a partial update and bump the modification time
    #[tracing::instrument(skip(self, update))]
    pub fn update_note(&self, id: &str, update: NoteUpdate) -> Result<Note> {
        let mut note = self.get_note(id)?;

        if let Some(title) = update.title {
            note.frontmatter.title = clean_title(&title)?;
        }
        if let Some(category) = update.category {
            let category = category.trim();
            if category.is_empty() {
                bail_invalid!("category", "(empty)");
            }
            note.frontmatter.category = category.to_string();
        }
        if let Some(tags) = update.tags {
            note.frontmatter.tags = clean_tags(tags);
        }
        if let Some(favorite) = update.favorite {
            note.frontmatter.favorite = favorite;
        }
        if let Some(body) = update.body {
            note.set_body(body);
        }

        note.touch();
        self.write_note(&mut note)?;
        debug!(id = %note.id(), "note_updated");
        Ok(note)
    }

    /// Write an already loaded note back to disk, bumping its modification time
    pub fn save_note(&self, note: &mut Note) -> Result<()> {
        note.touch();
        self.write_note(note)
    }

    /// Delete a note, returning what was removed
    #[tracing::instrument(skip(self))]
    pub fn delete_note(&self, id: &str) -> Result<Note> {
        let note = self.get_note(id)?;
        if let Some(path) = &note.path {
            fs::remove_file(path)?;
        }
        debug!(id = %note.id(), "note_deleted");
        Ok(note)
    }

    /// Write the note under its canonical filename, removing a stale file
    /// left behind by a title change
    fn write_note(&self, note: &mut Note) -> Result<()> {
        let id = NoteId::parse(note.id())?;
        let target = self.notes_dir().join(id::filename(&id, note.title()));

        fs::write(&target, note.to_file_content()?)?;

        if let Some(old) = note.path.take() {
            if old != target && old.exists() {
                fs::remove_file(&old)?;
            }
        }
        note.path = Some(target);
        Ok(())
    }

    /// Locate the file for an ID: `<id>.md` or `<id>-<slug>.md`
    fn note_path(&self, id: &NoteId) -> Result<PathBuf> {
        let exact = format!("{}.md", id);
        let prefix = format!("{}-", id);

        for entry in fs::read_dir(self.notes_dir())? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name == exact || (name.starts_with(&prefix) && name.ends_with(".md")) {
                return Ok(entry.path());
            }
        }

        Err(ScribeError::NoteNotFound {
            id: id.to_string(),
        })
    }
}
