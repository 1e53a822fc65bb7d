use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inflection::FormType;

/// The class of a word, which decides how it conjugates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordClass {
    /// う verbs (godan).
    #[serde(alias = "u", alias = "godan", alias = "group1")]
    Group1Verb,
    /// る verbs (ichidan).
    #[serde(alias = "ru", alias = "ichidan", alias = "group2")]
    Group2Verb,
    /// する, 来る and their compounds.
    #[serde(alias = "irregular", alias = "group3")]
    Group3Verb,
    /// い adjectives.
    #[serde(alias = "i", alias = "i-adj")]
    IAdjective,
    /// な adjectives.
    #[serde(alias = "na", alias = "na-adj")]
    NaAdjective,
    /// Nouns.
    Noun,
}

impl WordClass {
    pub const ALL: &'static [WordClass] = &[
        WordClass::Group1Verb,
        WordClass::Group2Verb,
        WordClass::Group3Verb,
        WordClass::IAdjective,
        WordClass::NaAdjective,
        WordClass::Noun,
    ];

    /// Name of the class as used on the command line and in data files.
    pub fn name(&self) -> &'static str {
        match self {
            WordClass::Group1Verb => "group1-verb",
            WordClass::Group2Verb => "group2-verb",
            WordClass::Group3Verb => "group3-verb",
            WordClass::IAdjective => "i-adjective",
            WordClass::NaAdjective => "na-adjective",
            WordClass::Noun => "noun",
        }
    }

    /// Parse a class from its name or a common shorthand.
    pub fn parse(input: &str) -> Option<WordClass> {
        let class = match input.trim().to_lowercase().as_str() {
            "group1-verb" | "group1" | "u" | "godan" | "1" => WordClass::Group1Verb,
            "group2-verb" | "group2" | "ru" | "ichidan" | "2" => WordClass::Group2Verb,
            "group3-verb" | "group3" | "irregular" | "suru" | "kuru" | "3" => {
                WordClass::Group3Verb
            }
            "i-adjective" | "i" | "i-adj" => WordClass::IAdjective,
            "na-adjective" | "na" | "na-adj" => WordClass::NaAdjective,
            "noun" | "n" => WordClass::Noun,
            _ => return None,
        };

        Some(class)
    }

    /// Test if the class is a verb class.
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            WordClass::Group1Verb | WordClass::Group2Verb | WordClass::Group3Verb
        )
    }
}

impl fmt::Display for WordClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// A form provided by the word list which takes precedence over the
/// computed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
}

/// A word as loaded from a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// Dictionary form, like `書く`.
    pub surface_form: String,
    /// Stem of the word. Derived from the surface form if empty.
    #[serde(default)]
    pub stem: String,
    /// Kana reading of the dictionary form. Empty if the surface form is
    /// already kana.
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub meaning: String,
    pub word_class: WordClass,
    /// Example sentences, where the studied form is marked with brackets
    /// like `毎日手紙を[書きます]。`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Free form tags, like `jlpt-n5`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<FormType, Override>,
}

impl WordEntry {
    /// Construct a new entry without examples or overrides.
    pub fn new(surface_form: &str, reading: &str, meaning: &str, word_class: WordClass) -> Self {
        Self {
            surface_form: surface_form.to_owned(),
            stem: String::new(),
            reading: reading.to_owned(),
            meaning: meaning.to_owned(),
            word_class,
            examples: Vec::new(),
            tags: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }

    /// Add an example sentence.
    pub fn with_example(mut self, example: &str) -> Self {
        self.examples.push(example.to_owned());
        self
    }

    /// Test if the entry carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The built-in entry used when a word list can't be loaded.
    pub fn fallback(word_class: WordClass) -> Self {
        match word_class {
            WordClass::Group1Verb => WordEntry::new("書く", "かく", "to write", word_class)
                .with_example("毎日日記を[書きます]。"),
            WordClass::Group2Verb => WordEntry::new("食べる", "たべる", "to eat", word_class)
                .with_example("昨日すしを[食べた]。"),
            WordClass::Group3Verb => WordEntry::new("する", "", "to do", word_class)
                .with_example("宿題を[しなかった]。"),
            WordClass::IAdjective => WordEntry::new("高い", "たかい", "expensive, tall", word_class)
                .with_example("このかばんは[高かった]です。"),
            WordClass::NaAdjective => WordEntry::new("静か", "しずか", "quiet", word_class)
                .with_example("図書館は[静かです]。"),
            WordClass::Noun => WordEntry::new("学生", "がくせい", "student", word_class)
                .with_example("私は[学生です]。"),
        }
    }

    /// The kana reading of the dictionary form.
    pub fn reading(&self) -> &str {
        if self.reading.is_empty() {
            &self.surface_form
        } else {
            &self.reading
        }
    }

    /// The stem of the word.
    ///
    /// This is the part of the surface form which stays the same across
    /// conjugations, used to find conjugated forms in running text.
    pub fn stem(&self) -> &str {
        if !self.stem.is_empty() {
            return &self.stem;
        }

        let text = self.surface_form.as_str();

        let stem = match self.word_class {
            WordClass::Group1Verb => text
                .char_indices()
                .next_back()
                .map(|(n, _)| &text[..n]),
            WordClass::Group2Verb => text.strip_suffix('る'),
            WordClass::Group3Verb => text
                .strip_suffix("する")
                .or_else(|| text.strip_suffix("為る"))
                .or_else(|| text.strip_suffix("くる"))
                .or_else(|| text.strip_suffix('る')),
            WordClass::IAdjective => text.strip_suffix('い'),
            WordClass::NaAdjective | WordClass::Noun => None,
        };

        stem.unwrap_or(text)
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reading() != self.surface_form {
            write!(f, "{} ({})", self.surface_form, self.reading())
        } else {
            self.surface_form.fmt(f)
        }
    }
}

#[test]
fn derived_stems() {
    let e = |s, r, c| WordEntry::new(s, r, "", c);
    assert_eq!(e("書く", "かく", WordClass::Group1Verb).stem(), "書");
    assert_eq!(e("食べる", "たべる", WordClass::Group2Verb).stem(), "食べ");
    assert_eq!(e("勉強する", "べんきょうする", WordClass::Group3Verb).stem(), "勉強");
    assert_eq!(e("勉強為る", "べんきょうする", WordClass::Group3Verb).stem(), "勉強");
    assert_eq!(e("来る", "くる", WordClass::Group3Verb).stem(), "来");
    assert_eq!(e("高い", "たかい", WordClass::IAdjective).stem(), "高");
    assert_eq!(e("静か", "しずか", WordClass::NaAdjective).stem(), "静か");

    let mut explicit = e("見る", "みる", WordClass::Group2Verb);
    explicit.stem = "見".to_owned();
    assert_eq!(explicit.stem(), "見");
}

#[test]
fn parse_classes() {
    assert_eq!(WordClass::parse("u"), Some(WordClass::Group1Verb));
    assert_eq!(WordClass::parse("Ichidan"), Some(WordClass::Group2Verb));
    assert_eq!(WordClass::parse("na"), Some(WordClass::NaAdjective));
    assert_eq!(WordClass::parse("adverb"), None);

    for class in WordClass::ALL {
        assert_eq!(WordClass::parse(class.name()), Some(*class));
    }
}
