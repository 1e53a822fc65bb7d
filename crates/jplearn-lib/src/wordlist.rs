//! Loading of word lists.
//!
//! Two layouts are understood. The current one is either a bare array of
//! entries or an object with a `words` array, where every entry is a
//! [`WordEntry`]:
//!
//! ```json
//! {"words": [{"surfaceForm": "書く", "reading": "かく", "meaning": "to write", "wordClass": "group1-verb"}]}
//! ```
//!
//! The legacy layout keys the word by `verb`, `adjective` or `noun`, with an
//! optional `type` and precomputed `conjugations` keyed by form name:
//!
//! ```json
//! [{"verb": "書く", "stem": "書", "reading": "かく", "meaning": "쓰다", "type": "u",
//!   "conjugations": {"past": "書いた", "negative": {"form": "書かない", "reading": "かかない"}}}]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::builtin;
use crate::inflection::FormType;
use crate::particles::Particle;
use crate::reporter::Reporter;
use crate::word::{Override, WordClass, WordEntry};

/// Error raised when a data file can't be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
    #[error("Failed to parse {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document<T> {
    Wrapped { words: Vec<T> },
    List(Vec<T>),
}

impl<T> Document<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Document::Wrapped { words } => words,
            Document::List(words) => words,
        }
    }
}

#[derive(Deserialize)]
struct LegacyEntry {
    #[serde(default)]
    verb: Option<String>,
    #[serde(default)]
    adjective: Option<String>,
    #[serde(default)]
    noun: Option<String>,
    #[serde(default)]
    stem: String,
    #[serde(default)]
    reading: String,
    #[serde(default)]
    meaning: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    examples: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    conjugations: BTreeMap<String, LegacyForm>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyForm {
    Text(String),
    Full {
        #[serde(alias = "japanese", alias = "text")]
        form: String,
        #[serde(default)]
        reading: Option<String>,
    },
}

/// A list of words.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Construct a word list from entries.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Parse a word list in either layout.
    ///
    /// Entries which can't be understood are reported and skipped. Fails
    /// only if the document itself is malformed.
    pub fn parse(data: &str, reporter: &dyn Reporter) -> Result<Self, serde_json::Error> {
        let values = serde_json::from_str::<Document<Value>>(data)?.into_vec();
        let mut entries = Vec::with_capacity(values.len());

        for (index, value) in values.into_iter().enumerate() {
            let current = value.get("surfaceForm").is_some();

            let entry = if current {
                serde_json::from_value::<WordEntry>(value).map(Some)
            } else {
                serde_json::from_value::<LegacyEntry>(value).map(|legacy| legacy.convert(reporter))
            };

            match entry {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {
                    report_warn!(reporter, "#{index}: expected one of `verb`, `adjective` or `noun`");
                }
                Err(error) => {
                    report_warn!(reporter, "#{index}: {error}");
                }
            }
        }

        Ok(Self { entries })
    }

    /// Load a word list, failing on read or parse errors.
    pub fn try_load(path: &Path, reporter: &dyn Reporter) -> Result<Self, LoadError> {
        let data = fs::read_to_string(path).map_err(|error| LoadError::Io {
            path: path.to_owned(),
            error,
        })?;

        Self::parse(&data, reporter).map_err(|error| LoadError::Json {
            path: path.to_owned(),
            error,
        })
    }

    /// Load a word list, falling back to the built-in entry of `fallback`
    /// if the file is missing, malformed or has no usable entries.
    pub fn load_or_default(path: &Path, fallback: WordClass, reporter: &dyn Reporter) -> Self {
        match Self::try_load(path, reporter) {
            Ok(list) if !list.is_empty() => return list,
            Ok(..) => {
                report_warn!(reporter, "{}: No usable entries", path.display());
            }
            Err(error) => {
                report_warn!(reporter, "{}", DisplayChain(&error));
            }
        }

        Self::new(vec![WordEntry::fallback(fallback)])
    }

    /// Test if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in the list.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Convert into entries.
    pub fn into_entries(self) -> Vec<WordEntry> {
        self.entries
    }
}

/// Every word list and particle list available to study.
#[derive(Debug, Clone)]
pub struct Library {
    words: Vec<WordEntry>,
    particles: Vec<Particle>,
}

impl Library {
    /// The built-in starter library.
    pub fn builtin() -> Self {
        Self {
            words: builtin::words(),
            particles: builtin::particles(),
        }
    }

    /// Open a library from a directory containing `verbs.json`,
    /// `adjectives.json`, `nouns.json` and `particles.json`.
    pub fn open(dir: &Path, reporter: &dyn Reporter) -> Self {
        let mut words = Vec::new();

        for (name, fallback) in [
            ("verbs.json", WordClass::Group1Verb),
            ("adjectives.json", WordClass::IAdjective),
            ("nouns.json", WordClass::Noun),
        ] {
            let list = WordList::load_or_default(&dir.join(name), fallback, reporter);
            report_info!(reporter, "{name}: {} entries", list.entries().len());
            words.extend(list.into_entries());
        }

        let path = dir.join("particles.json");

        let particles = match Particle::try_load(&path) {
            Ok(particles) if !particles.is_empty() => particles,
            Ok(..) => {
                report_warn!(reporter, "{}: No usable entries", path.display());
                builtin::particles()
            }
            Err(error) => {
                report_warn!(reporter, "{}", DisplayChain(&error));
                builtin::particles()
            }
        };

        Self { words, particles }
    }

    /// Every word.
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Words of the given class.
    pub fn by_class(&self, class: WordClass) -> impl Iterator<Item = &WordEntry> + '_ {
        self.words.iter().filter(move |w| w.word_class == class)
    }

    /// Find a word by its dictionary form or reading.
    pub fn find(&self, query: &str) -> Option<&WordEntry> {
        let query = query.trim();

        self.words
            .iter()
            .find(|w| w.surface_form == query)
            .or_else(|| self.words.iter().find(|w| w.reading() == query))
    }

    /// Particles to study.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl LegacyEntry {
    fn convert(self, reporter: &dyn Reporter) -> Option<WordEntry> {
        let kind = self.kind.as_deref().and_then(WordClass::parse);

        let (surface_form, word_class) = match (self.verb, self.adjective, self.noun) {
            (Some(verb), None, None) => {
                let class = kind
                    .filter(WordClass::is_verb)
                    .unwrap_or_else(|| guess_verb_class(&verb, &self.reading));
                (verb, class)
            }
            (None, Some(adjective), None) => {
                let class = match kind {
                    Some(class @ (WordClass::IAdjective | WordClass::NaAdjective)) => class,
                    _ => guess_adjective_class(&adjective),
                };

                (adjective, class)
            }
            (None, None, Some(noun)) => (noun, WordClass::Noun),
            _ => return None,
        };

        let mut overrides = BTreeMap::new();

        for (name, form) in self.conjugations {
            let Some(form_type) = FormType::parse(&name) else {
                report_warn!(reporter, "{surface_form}: Unknown conjugation `{name}`");
                continue;
            };

            if form_type == FormType::Present {
                continue;
            }

            let o = match form {
                LegacyForm::Text(form) => Override {
                    form,
                    reading: None,
                },
                LegacyForm::Full { form, reading } => Override { form, reading },
            };

            overrides.insert(form_type, o);
        }

        let mut examples = self.examples;
        examples.extend(self.example);

        Some(WordEntry {
            surface_form,
            stem: self.stem,
            reading: self.reading,
            meaning: self.meaning,
            word_class,
            examples,
            tags: self.tags,
            overrides,
        })
    }
}

/// Guess the class of an adjective from its shape.
///
/// Anything ending in い is taken to be an い adjective, which is wrong for
/// な adjectives such as きれい or 嫌い. Data which cares should specify a
/// `type`.
fn guess_adjective_class(text: &str) -> WordClass {
    if text.ends_with('い') {
        WordClass::IAdjective
    } else {
        WordClass::NaAdjective
    }
}

/// Guess the class of a verb from its shape.
///
/// る verbs whose reading ends in an い or え row kana followed by る are
/// assumed to be group 2, which is wrong for exceptions like 帰る. Data
/// which cares should specify a `type`.
fn guess_verb_class(text: &str, reading: &str) -> WordClass {
    let reading = if reading.is_empty() { text } else { reading };

    if text.ends_with("する") || text.ends_with("為る") || text.ends_with("来る") || reading == "くる" {
        return WordClass::Group3Verb;
    }

    let mut chars = reading.chars();

    match (chars.next_back(), chars.next_back()) {
        (Some('る'), Some(c)) if is_i_or_e_row(c) => WordClass::Group2Verb,
        _ => WordClass::Group1Verb,
    }
}

fn is_i_or_e_row(c: char) -> bool {
    matches!(
        c,
        'い' | 'き' | 'ぎ' | 'し' | 'じ' | 'ち' | 'ぢ' | 'に' | 'ひ' | 'び' | 'ぴ' | 'み' | 'り'
            | 'え' | 'け' | 'げ' | 'せ' | 'ぜ' | 'て' | 'で' | 'ね' | 'へ' | 'べ' | 'ぺ' | 'め'
            | 'れ'
    )
}

/// Display an error together with its sources.
pub(crate) struct DisplayChain<'a>(pub(crate) &'a dyn std::error::Error);

impl std::fmt::Display for DisplayChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;

        let mut source = self.0.source();

        while let Some(error) = source {
            write!(f, ": {error}")?;
            source = error.source();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::reporter::Collect;

    #[test]
    fn current_layout() {
        let reporter = Collect::default();

        let list = WordList::parse(
            r#"{"words": [
                {"surfaceForm": "書く", "reading": "かく", "meaning": "to write", "wordClass": "group1-verb"},
                {"surfaceForm": "食べる", "reading": "たべる", "wordClass": "ru", "examples": ["[食べた]"]}
            ]}"#,
            &reporter,
        )
        .unwrap();

        assert_eq!(list.entries().len(), 2);
        assert_eq!(list.entries()[0], WordEntry::new("書く", "かく", "to write", WordClass::Group1Verb));
        assert_eq!(list.entries()[1].word_class, WordClass::Group2Verb);
        assert_eq!(list.entries()[1].examples, ["[食べた]"]);
        assert!(reporter.warnings.borrow().is_empty());
    }

    #[test]
    fn legacy_layout() {
        let reporter = Collect::default();

        let list = WordList::parse(
            r#"[
                {"verb": "帰る", "stem": "帰", "reading": "かえる", "meaning": "돌아가다", "type": "u",
                 "conjugations": {"past": "帰った", "pastNegative": {"form": "帰らなかった", "reading": "かえらなかった"}, "mystery": "?"}},
                {"verb": "見る", "reading": "みる"},
                {"verb": "勉強する", "reading": "べんきょうする"},
                {"adjective": "静か", "reading": "しずか"},
                {"adjective": "きれい", "type": "na"},
                {"adjective": "高い", "reading": "たかい", "example": "[高い]です"},
                {"noun": "本", "reading": "ほん"}
            ]"#,
            &reporter,
        )
        .unwrap();

        let e = list.entries();
        assert_eq!(e.len(), 7);

        assert_eq!(e[0].surface_form, "帰る");
        assert_eq!(e[0].word_class, WordClass::Group1Verb);
        assert_eq!(e[0].stem(), "帰");
        assert_eq!(e[0].overrides[&FormType::Past].form, "帰った");
        assert_eq!(
            e[0].overrides[&FormType::NegativePast].reading.as_deref(),
            Some("かえらなかった")
        );
        assert_eq!(e[0].overrides.len(), 2);

        assert_eq!(e[1].word_class, WordClass::Group2Verb);
        assert_eq!(e[2].word_class, WordClass::Group3Verb);
        assert_eq!(e[3].word_class, WordClass::NaAdjective);
        assert_eq!(e[4].word_class, WordClass::NaAdjective);
        assert_eq!(e[5].word_class, WordClass::IAdjective);
        assert_eq!(e[5].examples, ["[高い]です"]);
        assert_eq!(e[6].word_class, WordClass::Noun);

        let warnings = reporter.warnings.borrow();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("mystery"));
    }

    #[test]
    fn skips_bad_entries() {
        let reporter = Collect::default();

        let list = WordList::parse(
            r#"[{"meaning": "nothing"}, {"surfaceForm": "本"}, {"noun": "本"}]"#,
            &reporter,
        )
        .unwrap();

        assert_eq!(list.entries().len(), 1);
        assert_eq!(reporter.warnings.borrow().len(), 2);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let reporter = Collect::default();
        assert!(WordList::parse("{\"words\": 42}", &reporter).is_err());
        assert!(WordList::parse("not json", &reporter).is_err());
    }

    #[test]
    fn missing_or_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Collect::default();

        let list = WordList::load_or_default(
            &dir.path().join("verbs.json"),
            WordClass::Group1Verb,
            &reporter,
        );

        assert_eq!(list.entries(), [WordEntry::fallback(WordClass::Group1Verb)]);

        let path = dir.path().join("nouns.json");
        fs::write(&path, "[").unwrap();
        let list = WordList::load_or_default(&path, WordClass::Noun, &reporter);
        assert_eq!(list.entries(), [WordEntry::fallback(WordClass::Noun)]);

        let path = dir.path().join("adjectives.json");
        fs::write(&path, "[]").unwrap();
        let list = WordList::load_or_default(&path, WordClass::IAdjective, &reporter);
        assert_eq!(list.entries(), [WordEntry::fallback(WordClass::IAdjective)]);

        assert_eq!(reporter.warnings.borrow().len(), 3);
    }

    #[test]
    fn open_library() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Collect::default();

        fs::write(
            dir.path().join("verbs.json"),
            r#"[{"verb": "飲む", "reading": "のむ", "type": "u"}]"#,
        )
        .unwrap();

        let library = Library::open(dir.path(), &reporter);

        assert_eq!(library.by_class(WordClass::Group1Verb).count(), 1);
        assert!(library.find("のむ").is_some());
        assert!(library.find("飲む").is_some());
        assert_eq!(library.by_class(WordClass::IAdjective).count(), 1);
        assert_eq!(library.by_class(WordClass::Noun).count(), 1);
        assert!(!library.particles().is_empty());
    }

    #[test]
    fn guesses() {
        assert_eq!(guess_verb_class("食べる", "たべる"), WordClass::Group2Verb);
        assert_eq!(guess_verb_class("起きる", "おきる"), WordClass::Group2Verb);
        assert_eq!(guess_verb_class("分かる", "わかる"), WordClass::Group1Verb);
        assert_eq!(guess_verb_class("来る", "くる"), WordClass::Group3Verb);
        assert_eq!(guess_verb_class("くる", ""), WordClass::Group3Verb);
        assert_eq!(guess_verb_class("泳ぐ", "およぐ"), WordClass::Group1Verb);
        assert_eq!(guess_verb_class("勉強為る", "べんきょうする"), WordClass::Group3Verb);

        assert_eq!(guess_adjective_class("高い"), WordClass::IAdjective);
        assert_eq!(guess_adjective_class("静か"), WordClass::NaAdjective);
        // Known misguess, see `guess_adjective_class`.
        assert_eq!(guess_adjective_class("きれい"), WordClass::IAdjective);
    }
}
