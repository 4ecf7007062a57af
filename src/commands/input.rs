//! Reading command input from files and stdin

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use tracing::debug;

use scribe_core::error::{Result, ScribeError};

/// Read a file, or stdin when the path is absent or "-"
pub fn read_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .map_err(|e| ScribeError::failed(&format!("read {}", path.display()), e))?;
            debug!(path = %path.display(), len = text.len(), "read_file");
            Ok(text)
        }
        _ => read_stdin(),
    }
}

/// Body piped on stdin, if any
///
/// Returns `None` when stdin is a terminal or the pipe was empty.
pub fn piped_body() -> Result<Option<String>> {
    if io::stdin().is_terminal() {
        return Ok(None);
    }
    let body = read_stdin()?;
    if body.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(body.trim_end().to_string()))
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| ScribeError::failed("read from stdin", e))?;
    debug!(len = text.len(), "read_stdin");
    Ok(text)
}
