//! Emphasis of conjugated forms inside example sentences.

use std::borrow::Cow;

use crate::config::Marker;
use crate::inflection::ConjugationResult;

/// Wrap the first occurrence of the conjugated form in `sentence` with the
/// given marker.
///
/// If the form doesn't appear, its reading is tried, then `stem`. If none of
/// them can be found the sentence is returned unchanged.
pub fn highlight<'a>(
    sentence: &'a str,
    result: &ConjugationResult,
    stem: &str,
    marker: &Marker,
) -> Cow<'a, str> {
    for needle in [result.form.as_str(), result.reading.as_str(), stem] {
        if let Some(out) = wrap(sentence, needle, marker) {
            return Cow::Owned(out);
        }
    }

    Cow::Borrowed(sentence)
}

/// Wrap the first occurrence of `needle`.
fn wrap(sentence: &str, needle: &str, marker: &Marker) -> Option<String> {
    if needle.is_empty() {
        return None;
    }

    let start = sentence.find(needle)?;
    let end = start + needle.len();

    let mut out =
        String::with_capacity(sentence.len() + marker.open.len() + marker.close.len());
    out.push_str(&sentence[..start]);
    out.push_str(&marker.open);
    out.push_str(needle);
    out.push_str(&marker.close);
    out.push_str(&sentence[end..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(form: &str, reading: &str) -> ConjugationResult {
        ConjugationResult {
            form: form.to_owned(),
            reading: reading.to_owned(),
            translation: String::new(),
        }
    }

    #[test]
    fn wraps_form() {
        let marker = Marker::default();
        let out = highlight("昨日手紙を書いた。", &result("書いた", "かいた"), "書", &marker);
        assert_eq!(out, "昨日手紙を<mark>書いた</mark>。");
    }

    #[test]
    fn wraps_only_first() {
        let marker = Marker::new("[", "]");
        let out = highlight("書いた書いた", &result("書いた", "かいた"), "書", &marker);
        assert_eq!(out, "[書いた]書いた");
    }

    #[test]
    fn falls_back_to_reading_then_stem() {
        let marker = Marker::new("*", "*");

        let out = highlight("てがみをかいた", &result("書いた", "かいた"), "書", &marker);
        assert_eq!(out, "てがみを*かいた*");

        let out = highlight("書きたかった", &result("書いた", "かいた"), "書", &marker);
        assert_eq!(out, "*書*きたかった");
    }

    #[test]
    fn unchanged_without_match() {
        let marker = Marker::default();
        let out = highlight("読んだ", &result("書いた", "かいた"), "", &marker);
        assert!(matches!(out, Cow::Borrowed("読んだ")));
    }
}
