use core::fmt;

use crate::kana::is_kanji;

/// A group of text with an optional reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuriganaGroup<'a> {
    /// Kanji with their reading.
    Kanji(&'a str, &'a str),
    /// Kana which reads as written.
    Kana(&'a str),
}

/// Displays text with its reading as `書[か]いた`.
#[derive(Debug, Clone, Copy)]
pub struct Furigana<'a> {
    text: &'a str,
    reading: &'a str,
}

impl<'a> Furigana<'a> {
    /// Construct a new furigana wrapper based on an exact combination of
    /// text and reading.
    pub fn new(text: &'a str, reading: &'a str) -> Self {
        Self { text, reading }
    }

    /// Align the text with the reading.
    ///
    /// Returns `None` if the kana in the text can't be found in the reading.
    pub fn groups(&self) -> Option<Vec<FuriganaGroup<'a>>> {
        let mut out = Vec::new();
        let mut text = self.text;
        let mut reading = self.reading;

        while !text.is_empty() {
            let n = text.find(is_kanji).unwrap_or(text.len());
            let (kana, rest) = text.split_at(n);

            if !kana.is_empty() {
                reading = reading.strip_prefix(kana)?;
                out.push(FuriganaGroup::Kana(kana));
            }

            text = rest;

            if text.is_empty() {
                break;
            }

            let n = text.find(|c| !is_kanji(c)).unwrap_or(text.len());
            let (kanji, rest) = text.split_at(n);

            let next = &rest[..rest.find(is_kanji).unwrap_or(rest.len())];

            let len = if next.is_empty() {
                reading.len()
            } else {
                // Each kanji reads as at least one kana.
                let skip = reading.chars().next()?.len_utf8();
                skip + reading.get(skip..)?.find(next)?
            };

            if len == 0 {
                return None;
            }

            let (group, tail) = reading.split_at(len);
            out.push(FuriganaGroup::Kanji(kanji, group));
            reading = tail;
            text = rest;
        }

        if !reading.is_empty() {
            return None;
        }

        Some(out)
    }
}

impl fmt::Display for Furigana<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text == self.reading {
            return self.text.fmt(f);
        }

        let Some(groups) = self.groups() else {
            return write!(f, "{}[{}]", self.text, self.reading);
        };

        for group in groups {
            match group {
                FuriganaGroup::Kanji(kanji, reading) => write!(f, "{kanji}[{reading}]")?,
                FuriganaGroup::Kana(kana) => kana.fmt(f)?,
            }
        }

        Ok(())
    }
}
