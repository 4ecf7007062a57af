//! Store management for scribe
//!
//! The store is a `.scribe/` directory holding `config.toml` and one file per
//! note under `notes/`. Commands find it by walking up from the working
//! directory.

pub mod notes;
pub mod paths;
mod query;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScribeConfig;
use crate::error::{Result, ScribeError};
use crate::summarize::Summarizer;
pub use notes::{NewNote, NoteUpdate};
use paths::{CONFIG_FILE, NOTES_DIR, STORE_DIR};

/// The scribe store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store (the `.scribe` directory)
    root: PathBuf,
    /// Store configuration, with environment overrides applied
    config: ScribeConfig,
}

impl Store {
    /// Create a new store under `root`
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn init(root: &Path) -> Result<Self> {
        let store_path = root.join(STORE_DIR);
        if store_path.exists() {
            return Err(ScribeError::already_exists(
                "store",
                store_path.display(),
            ));
        }

        fs::create_dir_all(store_path.join(NOTES_DIR))?;
        ScribeConfig::default().save(&store_path.join(CONFIG_FILE))?;
        tracing::info!(path = %store_path.display(), "store_initialized");

        Self::open(&store_path)
    }

    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(ScribeError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        // Tolerate a store whose notes directory was removed by hand
        let notes_dir = path.join(NOTES_DIR);
        if !notes_dir.is_dir() {
            fs::create_dir_all(&notes_dir)?;
        }

        let mut config = ScribeConfig::load_or_default(&path.join(CONFIG_FILE))?;
        config.apply_env();

        Ok(Store {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the store configuration
    pub fn config(&self) -> &ScribeConfig {
        &self.config
    }

    /// Directory holding note files
    pub fn notes_dir(&self) -> PathBuf {
        self.root.join(NOTES_DIR)
    }

    /// Build a summarizer from this store's configuration
    pub fn summarizer(&self) -> Summarizer {
        Summarizer::from_config(&self.config.summarize)
    }
}
