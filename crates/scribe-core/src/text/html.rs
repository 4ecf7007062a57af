//! Rich-text markup handling
//!
//! Note bodies are the markup produced by the editor. Summaries and word
//! counts work on the plain text a reader would see, so the markup is
//! flattened first: block boundaries become line breaks, tags are dropped
//! and character references are decoded.

use regex::{Captures, Regex};
use std::sync::OnceLock;

static HIDDEN_BLOCK: OnceLock<Regex> = OnceLock::new();
static COMMENT: OnceLock<Regex> = OnceLock::new();
static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
static BLOCK_END: OnceLock<Regex> = OnceLock::new();
static TAG: OnceLock<Regex> = OnceLock::new();
static ENTITY: OnceLock<Regex> = OnceLock::new();
static BLANK_RUN: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

/// Flatten markup into plain text
pub fn to_plain_text(markup: &str) -> String {
    let text = regex(
        &HIDDEN_BLOCK,
        r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>",
    )
    .replace_all(markup, "");
    let text = regex(&COMMENT, r"(?s)<!--.*?-->").replace_all(&text, "");
    let text = regex(&LINE_BREAK, r"(?i)<br\s*/?>").replace_all(&text, "\n");
    let text = regex(
        &BLOCK_END,
        r"(?i)</(p|div|h[1-6]|li|ul|ol|blockquote|pre|tr|table|section|article)\s*>",
    )
    .replace_all(&text, "\n");
    let text = regex(&TAG, r"<[^>]*>").replace_all(&text, "");
    let text = decode_entities(&text);

    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let joined = lines.join("\n");
    regex(&BLANK_RUN, r"\n{3,}")
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

/// Decode named and numeric character references
fn decode_entities(text: &str) -> String {
    regex(&ENTITY, r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);")
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => numeric_reference(name),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_reference(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(|c: char| c == 'x' || c == 'X') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

/// Escape text for insertion into markup
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
