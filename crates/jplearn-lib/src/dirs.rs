use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Directories helper.
pub struct Dirs {
    project_dirs: ProjectDirs,
}

impl Dirs {
    /// Open directories for this project.
    pub fn open() -> Result<Dirs> {
        Ok(Dirs {
            project_dirs: ProjectDirs::from("org", "jplearn", "jplearn")
                .context("Could not figure out base directories")?,
        })
    }

    /// Get the path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.project_dirs.config_dir().join("config.toml")
    }

    /// Get the path where study progress is stored.
    pub fn progress_path(&self) -> PathBuf {
        self.project_dirs.data_dir().join("progress.json")
    }

    /// Default directory to look for word lists in.
    pub fn words_dir(&self) -> PathBuf {
        self.project_dirs.data_dir().join("words")
    }
}
