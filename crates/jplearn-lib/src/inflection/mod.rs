//! Conjugation of verbs, adjectives and nouns.

mod godan;
mod tables;

#[cfg(test)]
mod tests;

use std::fmt;

use fixed_map::{Key, Set};
use serde::{Deserialize, Serialize};

use crate::concat::Concat;
use crate::config::Language;
use crate::word::{WordClass, WordEntry};

macro_rules! form {
    ($vis:vis enum $name:ident { $({$variant:ident, $label:literal, $title:literal, $korean:literal $(, alias = $alias:literal)* $(,)?}),* $(,)? }) => {
        /// A grammatical form which a word can be conjugated into.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(Serialize, Key)]
        #[serde(rename_all = "kebab-case")]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every form in table order.
            $vis const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Short label of the form, which is also what it parses from.
            $vis fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)*
                }
            }

            /// English title of the form.
            $vis fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }

            /// Korean description of the form.
            $vis fn korean(&self) -> &'static str {
                match self {
                    $($name::$variant => $korean,)*
                }
            }

            /// Parse a form from its label or one of its aliases.
            ///
            /// Case, dashes, underscores and spaces are ignored.
            $vis fn parse(input: &str) -> Option<$name> {
                let input = normalize(input);

                $(
                    if input == normalize($label) $(|| input == normalize($alias))* {
                        return Some($name::$variant);
                    }
                )*

                None
            }
        }
    }
}

form! {
    pub enum FormType {
        {Present, "present", "dictionary form / present", "현재형 (기본형)", alias = "dictionary", alias = "plain"},
        {Past, "past", "past", "과거형", alias = "ta"},
        {Negative, "negative", "negative", "부정형", alias = "negative-present", alias = "nai"},
        {NegativePast, "negative-past", "past negative", "과거 부정형", alias = "past-negative", alias = "nakatta"},
        {Polite, "polite", "polite present", "정중형", alias = "polite-present", alias = "masu", alias = "desu"},
        {PolitePast, "polite-past", "polite past", "정중 과거형", alias = "mashita", alias = "deshita"},
        {PoliteNegative, "polite-negative", "polite negative", "정중 부정형", alias = "masen"},
        {PoliteNegativePast, "polite-negative-past", "polite past negative", "정중 과거 부정형", alias = "polite-past-negative"},
        {Te, "te", "～て form, connective", "て형 (연결형)", alias = "te-form"},
        {Volitional, "volitional", "volitional, let's ~", "의지형 (~하자)"},
        {Potential, "potential", "potential, can ~", "가능형 (~할 수 있다)"},
        {Passive, "passive", "passive, is ~ed", "수동형 (~되다)"},
        {Causative, "causative", "causative, make / let ~", "사역형 (~시키다)"},
        {Imperative, "imperative", "imperative, command", "명령형", alias = "command"},
        {Conditional, "conditional", "～ば conditional, if ~", "가정형 (~하면, ば)", alias = "ba", alias = "hypothetical"},
        {Tara, "tara", "～たら conditional, when / if ~", "조건형 (~하면, たら)"},
        {Tai, "tai", "～たい, want to ~", "희망형 (~하고 싶다)"},
        {Attributive, "attributive", "attributive, modifying a noun", "연체형 (명사 수식)"},
        {Adverbial, "adverbial", "adverbial", "부사형", alias = "adverb"},
    }
}

impl FormType {
    /// Describe the form in the given language.
    pub fn describe(&self, language: Language) -> &'static str {
        match language {
            Language::Korean => self.korean(),
            Language::English => self.title(),
        }
    }

    /// The polite counterpart of a plain form, if there is one.
    pub fn polite(&self) -> Option<FormType> {
        match self {
            FormType::Present => Some(FormType::Polite),
            FormType::Past => Some(FormType::PolitePast),
            FormType::Negative => Some(FormType::PoliteNegative),
            FormType::NegativePast => Some(FormType::PoliteNegativePast),
            _ => None,
        }
    }

    /// Test if this is one of the polite forms.
    pub fn is_polite(&self) -> bool {
        matches!(
            self,
            FormType::Polite
                | FormType::PolitePast
                | FormType::PoliteNegative
                | FormType::PoliteNegativePast
        )
    }
}

impl fmt::Display for FormType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}

impl<'de> Deserialize<'de> for FormType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;

        FormType::parse(&name)
            .ok_or_else(|| serde::de::Error::custom(format_args!("unknown form `{name}`")))
    }
}

fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The outcome of conjugating a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConjugationResult {
    /// Conjugated surface form.
    pub form: String,
    /// Kana reading of the conjugated form.
    pub reading: String,
    /// Meaning of the word together with a description of the form.
    pub translation: String,
}

impl ConjugationResult {
    /// Render the result as furigana, like `書[か]いた`.
    pub fn furigana(&self) -> crate::Furigana<'_> {
        crate::Furigana::new(&self.form, &self.reading)
    }
}

impl fmt::Display for ConjugationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.form != self.reading {
            write!(f, "{} ({})", self.form, self.reading)
        } else {
            self.form.fmt(f)
        }
    }
}

/// A plain form and its polite counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variants {
    pub casual: ConjugationResult,
    pub polite: Option<ConjugationResult>,
}

/// A conjugated form assembled from borrowed fragments.
///
/// The text and reading prefixes differ, while the suffix is kana shared by
/// both.
#[derive(Debug, Clone, Copy)]
struct Fragments<'a> {
    text: Concat<'a, 3>,
    reading: Concat<'a, 3>,
    suffix: Concat<'a, 3>,
}

impl<'a> Fragments<'a> {
    fn new<A, B, C>(text: A, reading: B, suffix: C) -> Self
    where
        A: IntoIterator<Item = &'a str>,
        B: IntoIterator<Item = &'a str>,
        C: IntoIterator<Item = &'a str>,
    {
        Self {
            text: Concat::from_iter(text),
            reading: Concat::from_iter(reading),
            suffix: Concat::from_iter(suffix),
        }
    }

    fn text(&self) -> String {
        join(&self.text, &self.suffix)
    }

    fn reading(&self) -> String {
        join(&self.reading, &self.suffix)
    }
}

fn join(prefix: &Concat<'_, 3>, suffix: &Concat<'_, 3>) -> String {
    let mut out = String::with_capacity(prefix.byte_len() + suffix.byte_len());

    for s in prefix.as_slice().iter().chain(suffix.as_slice()) {
        out.push_str(s);
    }

    out
}

/// Conjugates words, describing forms in the configured language.
#[derive(Debug, Default, Clone, Copy)]
pub struct Conjugator {
    language: Language,
}

impl Conjugator {
    /// Construct a conjugator which describes forms in the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The language forms are described in.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Conjugate `entry` into the given form.
    ///
    /// If the form is not covered for the class of the word, or the word
    /// doesn't have the shape its class requires, the dictionary form is
    /// returned unchanged.
    pub fn conjugate(&self, entry: &WordEntry, form: FormType) -> ConjugationResult {
        if form == FormType::Present {
            return self.dictionary(entry);
        }

        let computed = inflect(entry, form);

        if let Some(o) = entry.overrides.get(&form) {
            let reading = match (&o.reading, &computed) {
                (Some(reading), _) => reading.clone(),
                (None, Some(fragments)) if fragments.text() == o.form => fragments.reading(),
                (None, _) => o.form.clone(),
            };

            return ConjugationResult {
                form: o.form.clone(),
                reading,
                translation: self.translation(entry, form),
            };
        }

        match computed {
            Some(fragments) => ConjugationResult {
                form: fragments.text(),
                reading: fragments.reading(),
                translation: self.translation(entry, form),
            },
            None => {
                tracing::debug!(
                    word = %entry.surface_form,
                    class = ?entry.word_class,
                    ?form,
                    "No rule, using dictionary form"
                );
                self.dictionary(entry)
            }
        }
    }

    /// Conjugate into a plain form and its polite counterpart.
    pub fn conjugate_pair(&self, entry: &WordEntry, form: FormType) -> Variants {
        Variants {
            casual: self.conjugate(entry, form),
            polite: form.polite().map(|polite| self.conjugate(entry, polite)),
        }
    }

    /// Conjugate into every form valid for the class of the word, in table
    /// order.
    pub fn conjugate_all(&self, entry: &WordEntry) -> Vec<(FormType, ConjugationResult)> {
        forms(entry.word_class)
            .iter()
            .map(|form| (form, self.conjugate(entry, form)))
            .collect()
    }

    fn dictionary(&self, entry: &WordEntry) -> ConjugationResult {
        ConjugationResult {
            form: entry.surface_form.clone(),
            reading: entry.reading().to_owned(),
            translation: entry.meaning.clone(),
        }
    }

    fn translation(&self, entry: &WordEntry, form: FormType) -> String {
        let description = form.describe(self.language);

        if entry.meaning.is_empty() {
            description.to_owned()
        } else {
            format!("{} ({description})", entry.meaning)
        }
    }
}

/// Conjugate `entry` into the given form, describing it in Korean.
///
/// See [`Conjugator::conjugate`].
pub fn conjugate(entry: &WordEntry, form: FormType) -> ConjugationResult {
    Conjugator::default().conjugate(entry, form)
}

/// The set of forms covered for a word class.
pub fn forms(class: WordClass) -> Set<FormType> {
    let mut set = Set::new();

    match class {
        WordClass::Group1Verb => tables::godan(godan::RU, |_, _, form| {
            set.insert(form);
        }),
        WordClass::Group2Verb => tables::ichidan(|_, form| {
            set.insert(form);
        }),
        WordClass::Group3Verb => tables::suru(|_, _, form| {
            set.insert(form);
        }),
        WordClass::IAdjective => tables::adjective_i(|_, form| {
            set.insert(form);
        }),
        WordClass::NaAdjective => tables::copula("な", Some("に"), |_, form| {
            set.insert(form);
        }),
        WordClass::Noun => tables::copula("の", None, |_, form| {
            set.insert(form);
        }),
    }

    set
}

fn inflect(entry: &WordEntry, form: FormType) -> Option<Fragments<'_>> {
    let mut output = None;

    each(entry, |fragments, f| {
        if f == form && output.is_none() {
            output = Some(fragments);
        }
    });

    output
}

/// Call `r` with every form of `entry`. Does nothing if the word doesn't
/// have the shape its class requires.
fn each<'a>(entry: &'a WordEntry, mut r: impl FnMut(Fragments<'a>, FormType)) {
    let text = entry.surface_form.as_str();
    let reading = entry.reading();

    match entry.word_class {
        WordClass::Group1Verb => {
            let Some((k, rd, last)) = split_last(text, reading) else {
                return;
            };

            let Some(g) = godan::lookup(text, reading, last) else {
                return;
            };

            // ある has no stem in the negative.
            let aru = reading == "ある";

            tables::godan(g, |prefix, suffix, form| {
                let fragments = match form {
                    FormType::Negative | FormType::NegativePast if aru => {
                        Fragments::new([], [], [suffix])
                    }
                    _ => Fragments::new([k], [rd], [prefix, suffix]),
                };

                r(fragments, form);
            });
        }
        WordClass::Group2Verb => {
            let (k, rd) = match_char(text, reading, 'る').unwrap_or((text, reading));

            tables::ichidan(|suffix, form| {
                r(Fragments::new([k], [rd], [suffix]), form);
            });
        }
        WordClass::Group3Verb => {
            if let Some((mode, k, rd)) = extract_kuru(text, reading) {
                tables::kuru(|prefix, suffix, form| {
                    r(
                        Fragments::new([k, mode.apply(prefix)], [rd, prefix], [suffix]),
                        form,
                    );
                });
            } else if let Some((mode, k, rd)) = extract_suru(text, reading) {
                tables::suru(|prefix, suffix, form| {
                    // 為 stands in for the changing kana, except for できる
                    // which replaces the whole verb.
                    let head = match mode {
                        SuffixMode::Excluded if !prefix.is_empty() => "為",
                        mode => mode.apply(prefix),
                    };

                    r(Fragments::new([k, head], [rd, prefix], [suffix]), form);
                });
            }
        }
        WordClass::IAdjective => {
            if let Some((mode, k, rd)) = extract_ii(text, reading) {
                tables::adjective_i(|suffix, form| {
                    let prefix = match form {
                        FormType::Present | FormType::Attributive | FormType::Polite => "い",
                        _ => "よ",
                    };

                    r(
                        Fragments::new([k, mode.apply(prefix)], [rd, prefix], [suffix]),
                        form,
                    );
                });
            } else if let Some((k, rd)) = match_char(text, reading, 'い') {
                tables::adjective_i(|suffix, form| {
                    r(Fragments::new([k], [rd], [suffix]), form);
                });
            }
        }
        WordClass::NaAdjective => {
            tables::copula("な", Some("に"), |suffix, form| {
                r(Fragments::new([text], [reading], [suffix]), form);
            });
        }
        WordClass::Noun => {
            tables::copula("の", None, |suffix, form| {
                r(Fragments::new([text], [reading], [suffix]), form);
            });
        }
    }
}

/// Whether the kana replaced by an irregular stem change is part of the
/// text. It is excluded when a kanji such as 来 stands in for it.
#[derive(Debug, Clone, Copy)]
enum SuffixMode {
    Excluded,
    Included,
}

impl SuffixMode {
    fn apply(self, prefix: &str) -> &str {
        match self {
            SuffixMode::Excluded => "",
            SuffixMode::Included => prefix,
        }
    }
}

/// Split off the last character which must be shared by text and reading.
fn split_last<'a>(text: &'a str, reading: &'a str) -> Option<(&'a str, &'a str, char)> {
    let last = text.chars().next_back()?;
    let (k, rd) = match_char(text, reading, last)?;
    Some((k, rd, last))
}

fn match_char<'a>(text: &'a str, reading: &'a str, suffix: char) -> Option<(&'a str, &'a str)> {
    Some((text.strip_suffix(suffix)?, reading.strip_suffix(suffix)?))
}

fn extract_suru<'a>(text: &'a str, reading: &'a str) -> Option<(SuffixMode, &'a str, &'a str)> {
    let rd = reading.strip_suffix("する")?;

    if let Some(k) = text.strip_suffix("為る") {
        return Some((SuffixMode::Excluded, k, rd));
    }

    let k = text.strip_suffix("する")?;
    Some((SuffixMode::Included, k, rd))
}

fn extract_kuru<'a>(text: &'a str, reading: &'a str) -> Option<(SuffixMode, &'a str, &'a str)> {
    let rd = reading.strip_suffix("くる")?;

    if let Some(k) = text.strip_suffix("来る").or_else(|| text.strip_suffix("來る")) {
        // Keep the kanji, it carries the changing reading.
        let k = &text[..k.len() + '来'.len_utf8()];
        return Some((SuffixMode::Excluded, k, rd));
    }

    let k = text.strip_suffix("くる")?;
    Some((SuffixMode::Included, k, rd))
}

fn extract_ii<'a>(text: &'a str, reading: &'a str) -> Option<(SuffixMode, &'a str, &'a str)> {
    let rd = reading.strip_suffix("いい")?;

    // かわいい is a regular adjective.
    if rd.ends_with('わ') {
        return None;
    }

    if let Some(k) = text.strip_suffix("いい") {
        return Some((SuffixMode::Included, k, rd));
    }

    let k = text.strip_suffix('い')?;

    if k.ends_with(['良', '好', '善']) {
        return Some((SuffixMode::Excluded, k, rd));
    }

    None
}
