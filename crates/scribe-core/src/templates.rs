//! Starter templates for new notes
//!
//! A template supplies a body and a category. `{date}` in a body is replaced
//! with the creation date when the template is rendered.

use chrono::{Local, NaiveDate};

use crate::error::{Result, ScribeError};

const DATE_PLACEHOLDER: &str = "{date}";

/// A named starter body for new notes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    body: &'static str,
}

impl NoteTemplate {
    /// Body with the date filled in
    pub fn render(&self, date: NaiveDate) -> String {
        self.body
            .replace(DATE_PLACEHOLDER, &date.format("%Y-%m-%d").to_string())
    }

    /// Body dated today, in local time
    pub fn render_today(&self) -> String {
        self.render(Local::now().date_naive())
    }
}

/// Built-in templates, in display order
pub static TEMPLATES: [NoteTemplate; 6] = [
    NoteTemplate {
        id: "daily-journal",
        name: "Daily Journal",
        description: "Reflect on your day with guided prompts",
        category: "Personal",
        body: DAILY_JOURNAL,
    },
    NoteTemplate {
        id: "meeting-notes",
        name: "Meeting Notes",
        description: "Structured template for meeting documentation",
        category: "Work",
        body: MEETING_NOTES,
    },
    NoteTemplate {
        id: "project-planning",
        name: "Project Planning",
        description: "Plan and organize your projects effectively",
        category: "Work",
        body: PROJECT_PLANNING,
    },
    NoteTemplate {
        id: "book-notes",
        name: "Book Notes",
        description: "Capture insights and key takeaways from books",
        category: "Learning",
        body: BOOK_NOTES,
    },
    NoteTemplate {
        id: "idea-capture",
        name: "Idea Capture",
        description: "Quick template for capturing and developing ideas",
        category: "Creative",
        body: IDEA_CAPTURE,
    },
    NoteTemplate {
        id: "blank",
        name: "Blank Note",
        description: "Start with a clean slate",
        category: "General",
        body: BLANK,
    },
];

/// Look up a template by ID, ignoring case
pub fn find(id: &str) -> Result<&'static NoteTemplate> {
    let id = id.trim();
    TEMPLATES
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| {
            let known: Vec<&str> = TEMPLATES.iter().map(|t| t.id).collect();
            ScribeError::invalid_value(
                "template",
                format!("{} (expected one of: {})", id, known.join(", ")),
            )
        })
}

const DAILY_JOURNAL: &str = r"# Daily Journal - {date}

## How was your day?


## What did you accomplish?


## What are you grateful for?


## Tomorrow's priorities:
- 
- 
- 

## Reflection:

";

const MEETING_NOTES: &str = r"# Meeting Notes

**Date:** {date}
**Attendees:** 
**Duration:** 

## Agenda
- 

## Discussion Points


## Action Items
- [ ] 
- [ ] 
- [ ] 

## Next Steps


## Follow-up Required

";

const PROJECT_PLANNING: &str = r"# Project Planning

## Project Overview
**Name:** 
**Goal:** 
**Deadline:** 

## Objectives
- 
- 
- 

## Key Milestones
1. 
2. 
3. 

## Resources Needed


## Potential Challenges


## Success Metrics

";

const BOOK_NOTES: &str = r"# Book Notes

**Title:** 
**Author:** 
**Date Started:** 
**Date Finished:** 

## Key Takeaways
- 
- 
- 

## Favorite Quotes


## Personal Reflections


## Action Items
- [ ] 
- [ ] 

## Rating: ⭐⭐⭐⭐⭐

";

const IDEA_CAPTURE: &str = r"# Idea: 

## The Concept


## Why This Matters


## Potential Applications
- 
- 
- 

## Next Steps
- [ ] 
- [ ] 

## Resources/Research Needed


## Related Ideas

";

const BLANK: &str = r"# 

";
