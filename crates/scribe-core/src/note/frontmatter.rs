use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::DEFAULT_CATEGORY;
use crate::error::{Result, ScribeError};

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Note frontmatter (YAML header)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteFrontmatter {
    /// Unique note identifier (required)
    pub id: String,
    /// Note title (required)
    pub title: String,
    /// Free-form category
    #[serde(default = "default_category")]
    pub category: String,
    /// Tags for filtering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last update timestamp
    pub updated: DateTime<Utc>,
    /// Starred by the user
    #[serde(default, skip_serializing_if = "is_false")]
    pub favorite: bool,
    /// Words in the plain-text rendering of the body
    #[serde(default)]
    pub word_count: usize,
}

impl NoteFrontmatter {
    /// Create new frontmatter with required fields
    pub fn new(id: String, title: String) -> Self {
        let now = Utc::now();
        NoteFrontmatter {
            id,
            title,
            category: default_category(),
            tags: Vec::new(),
            created: now,
            updated: now,
            favorite: false,
            word_count: 0,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Add tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Format tags as comma-separated values, using "-" for empty tags
    pub fn format_tags(&self) -> String {
        if self.tags.is_empty() {
            "-".to_string()
        } else {
            self.tags.join(",")
        }
    }
}

fn strip_line_break(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

/// Split a note file into frontmatter and body
#[tracing::instrument(skip(content), fields(path = ?path))]
pub(crate) fn parse_frontmatter(
    content: &str,
    path: Option<&PathBuf>,
) -> Result<(NoteFrontmatter, String)> {
    let invalid = |reason: String| ScribeError::InvalidFrontmatter {
        path: path.cloned().unwrap_or_default(),
        reason,
    };

    let content = content.trim_start();
    let after_first = content
        .strip_prefix("---")
        .ok_or_else(|| invalid("missing frontmatter delimiter (---)".to_string()))?;

    let end_pos = after_first
        .find("\n---")
        .ok_or_else(|| invalid("missing closing frontmatter delimiter (---)".to_string()))?;

    let yaml_content = &after_first[..end_pos];
    // End of the closing delimiter line, then the one blank separator line
    let body = strip_line_break(strip_line_break(&after_first[end_pos + 4..])).to_string();

    let frontmatter: NoteFrontmatter =
        serde_yaml::from_str(yaml_content).map_err(|e| invalid(e.to_string()))?;

    if frontmatter.id.is_empty() {
        return Err(invalid("missing required field: id".to_string()));
    }
    if frontmatter.title.is_empty() {
        return Err(invalid("missing required field: title".to_string()));
    }

    Ok((frontmatter, body))
}
