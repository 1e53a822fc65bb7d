use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::Dirs;

/// The language used to describe forms and particles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    Korean,
    English,
}

impl Language {
    /// Parse a language from its name.
    pub fn parse(input: &str) -> Option<Language> {
        match input.trim().to_lowercase().as_str() {
            "korean" | "ko" | "kor" => Some(Language::Korean),
            "english" | "en" | "eng" => Some(Language::English),
            _ => None,
        }
    }
}

/// Markers wrapped around highlighted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Marker {
    /// Construct a new marker.
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_owned(),
            close: close.to_owned(),
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

/// A configuration used for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Directory to load word lists from. Uses the built-in lists if not set
    /// and the default data directory is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_dir: Option<PathBuf>,
    /// Language used for descriptions.
    pub language: Language,
    /// Markers used when highlighting conjugated forms.
    pub marker: Marker,
    /// Number of questions in a drill.
    pub drill_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_dir: None,
            language: Language::default(),
            marker: Marker::default(),
            drill_length: 10,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load(dirs: &Dirs) -> Result<Self> {
        Self::load_from(&dirs.config_path())
    }

    /// Load configuration from the given path, using defaults if it doesn't
    /// exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let data = std::fs::read_to_string(config_path)
                .with_context(|| config_path.display().to_string())?;
            toml::from_str(&data).with_context(|| config_path.display().to_string())?
        } else {
            Self::default()
        };

        Ok(config)
    }
}
