use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::wordlist::LoadError;

/// A particle to study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    /// The particle as written, like `は`.
    pub particle: String,
    /// How the particle is pronounced if it differs from how it's written,
    /// like `わ` for `は`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reading: String,
    /// Short summary of the role of the particle.
    pub role: String,
    #[serde(default)]
    pub explanation: String,
    /// Example sentences, where the particle is marked with brackets like
    /// `私[は]学生です。`.
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { particles: Vec<Particle> },
    List(Vec<Particle>),
}

impl Particle {
    pub(crate) fn new(particle: &str, reading: &str, role: &str, explanation: &str) -> Self {
        Self {
            particle: particle.to_owned(),
            reading: reading.to_owned(),
            role: role.to_owned(),
            explanation: explanation.to_owned(),
            examples: Vec::new(),
        }
    }

    pub(crate) fn with_example(mut self, example: &str) -> Self {
        self.examples.push(example.to_owned());
        self
    }

    /// Load particles from a JSON file, either a bare array or an object with
    /// a `particles` array.
    pub fn try_load(path: &Path) -> Result<Vec<Particle>, LoadError> {
        let data = fs::read_to_string(path).map_err(|error| LoadError::Io {
            path: path.to_owned(),
            error,
        })?;

        let document = serde_json::from_str(&data).map_err(|error| LoadError::Json {
            path: path.to_owned(),
            error,
        })?;

        Ok(match document {
            Document::Wrapped { particles } => particles,
            Document::List(particles) => particles,
        })
    }

    /// The reading of the particle.
    pub fn reading(&self) -> &str {
        if self.reading.is_empty() {
            &self.particle
        } else {
            &self.reading
        }
    }
}

/// Split a sentence around its first bracketed blank.
///
/// `私[は]学生です。` splits into `("私", "は", "学生です。")`.
pub fn split_blank(sentence: &str) -> Option<(&str, &str, &str)> {
    let (head, rest) = sentence.split_once('[')?;
    let (blank, tail) = rest.split_once(']')?;

    if blank.is_empty() {
        return None;
    }

    Some((head, blank, tail))
}

/// Remove blank markers from a sentence.
pub fn strip_blanks(sentence: &str) -> String {
    sentence.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks() {
        assert_eq!(split_blank("私[は]学生です。"), Some(("私", "は", "学生です。")));
        assert_eq!(split_blank("[書いた]"), Some(("", "書いた", "")));
        assert_eq!(split_blank("私は学生です。"), None);
        assert_eq!(split_blank("私[]学生"), None);
        assert_eq!(split_blank("私[は学生"), None);
        assert_eq!(strip_blanks("私[は]学生です。"), "私は学生です。");
    }

    #[test]
    fn load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("particles.json");

        fs::write(
            &path,
            r#"{"particles": [{"particle": "は", "reading": "わ", "role": "topic", "examples": ["私[は]学生です。"]}]}"#,
        )
        .unwrap();

        let particles = Particle::try_load(&path).unwrap();
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].reading(), "わ");
        assert_eq!(particles[0].explanation, "");

        fs::write(&path, r#"[{"particle": "を", "role": "object"}]"#).unwrap();
        let particles = Particle::try_load(&path).unwrap();
        assert_eq!(particles[0].reading(), "を");

        assert!(matches!(
            Particle::try_load(&dir.path().join("missing.json")),
            Err(LoadError::Io { .. })
        ));
    }
}
