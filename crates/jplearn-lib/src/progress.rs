//! Study progress, kept per module such as `verbs` or `particles`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Counters for a single module.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleProgress {
    /// Number of study sessions.
    pub studied: u32,
    pub correct: u32,
    pub incorrect: u32,
    /// Seconds since the unix epoch of the last time the module was
    /// studied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<u64>,
}

impl ModuleProgress {
    /// Fraction of answers which were correct, if any were given.
    pub fn accuracy(&self) -> Option<f64> {
        accuracy(self.correct, self.incorrect)
    }
}

/// Progress over every module.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub modules: BTreeMap<String, ModuleProgress>,
}

/// Totals over every module.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of modules that have been studied.
    pub modules: usize,
    pub studied: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub accuracy: Option<f64>,
}

impl Progress {
    /// Load progress, treating a missing file as no progress.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e).with_context(|| path.display().to_string()),
        };

        serde_json::from_str(&data).with_context(|| path.display().to_string())
    }

    /// Save progress, creating the parent directory if needed.
    ///
    /// The file is replaced atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let Some(parent) = path.parent() else {
            bail!("Missing parent directory for {}", path.display());
        };

        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent).with_context(|| parent.display().to_string())?;
        }

        let data = serde_json::to_vec_pretty(self)?;

        let mut file = if parent.as_os_str().is_empty() {
            NamedTempFile::new_in(".")?
        } else {
            NamedTempFile::new_in(parent)?
        };

        file.write_all(&data)?;
        file.persist(path)
            .with_context(|| path.display().to_string())?;

        tracing::debug!("Wrote progress to {}", path.display());
        Ok(())
    }

    /// Record an answer in the given module.
    pub fn record(&mut self, module: &str, correct: bool, now: u64) {
        let m = self.modules.entry(module.to_owned()).or_default();

        if correct {
            m.correct += 1;
        } else {
            m.incorrect += 1;
        }

        m.last_studied = Some(now);
    }

    /// Record a study session in the given module.
    pub fn visit(&mut self, module: &str, now: u64) {
        let m = self.modules.entry(module.to_owned()).or_default();
        m.studied += 1;
        m.last_studied = Some(now);
    }

    /// Progress of a single module.
    pub fn module(&self, module: &str) -> Option<&ModuleProgress> {
        self.modules.get(module)
    }

    /// Summarize progress over every module.
    pub fn summary(&self) -> Summary {
        let mut studied = 0;
        let mut correct = 0;
        let mut incorrect = 0;

        for m in self.modules.values() {
            studied += m.studied;
            correct += m.correct;
            incorrect += m.incorrect;
        }

        Summary {
            modules: self.modules.len(),
            studied,
            correct,
            incorrect,
            accuracy: accuracy(correct, incorrect),
        }
    }
}

/// The current time in seconds since the unix epoch.
pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn accuracy(correct: u32, incorrect: u32) -> Option<f64> {
    let total = correct + incorrect;

    if total == 0 {
        return None;
    }

    Some(f64::from(correct) / f64::from(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters() {
        let mut progress = Progress::default();
        progress.visit("verbs", 10);
        progress.record("verbs", true, 11);
        progress.record("verbs", true, 12);
        progress.record("verbs", false, 13);
        progress.record("particles", true, 14);

        let verbs = progress.module("verbs").unwrap();
        assert_eq!(verbs.studied, 1);
        assert_eq!(verbs.correct, 2);
        assert_eq!(verbs.incorrect, 1);
        assert_eq!(verbs.last_studied, Some(13));

        let summary = progress.summary();
        assert_eq!(summary.modules, 2);
        assert_eq!(summary.studied, 1);
        assert_eq!(summary.correct, 3);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.accuracy, Some(0.75));
    }

    #[test]
    fn empty_accuracy() {
        let progress = Progress::default();
        assert_eq!(progress.summary().accuracy, None);
        assert_eq!(ModuleProgress::default().accuracy(), None);
    }

    #[test]
    fn persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");

        assert_eq!(Progress::load(&path).unwrap(), Progress::default());

        let mut progress = Progress::default();
        progress.record("adjectives", false, 100);
        progress.save(&path).unwrap();

        assert_eq!(Progress::load(&path).unwrap(), progress);

        fs::write(&path, "{").unwrap();
        assert!(Progress::load(&path).is_err());
    }
}
