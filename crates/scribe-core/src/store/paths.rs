use crate::error::{Result, ScribeError};
use std::path::{Path, PathBuf};

/// Store directory name (hidden)
pub const STORE_DIR: &str = ".scribe";

/// Notes subdirectory
pub const NOTES_DIR: &str = "notes";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Find a store by walking up from `root`
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(ScribeError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
