pub(crate) mod conjugate;
pub(crate) mod dashboard;
pub(crate) mod drill;
pub(crate) mod forms;
pub(crate) mod particles;

use anyhow::{anyhow, Context, Result};
use lib::{FormType, WordClass};

/// Parse a word class given on the command line.
pub(crate) fn parse_class(input: &str) -> Result<WordClass> {
    WordClass::parse(input).with_context(|| {
        let names = WordClass::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");

        anyhow!("Unknown word class `{input}`, expected one of: {names}")
    })
}

/// Parse forms given on the command line.
pub(crate) fn parse_forms(inputs: &[String]) -> Result<Vec<FormType>> {
    let mut forms = Vec::with_capacity(inputs.len());

    for input in inputs {
        let form = FormType::parse(input).with_context(|| {
            anyhow!("Unknown form `{input}`, see `jplearn forms` for available forms")
        })?;

        forms.push(form);
    }

    Ok(forms)
}

/// The progress module a word class is studied in.
pub(crate) fn module(class: WordClass) -> &'static str {
    match class {
        WordClass::Group1Verb | WordClass::Group2Verb | WordClass::Group3Verb => "verbs",
        WordClass::IAdjective | WordClass::NaAdjective => "adjectives",
        WordClass::Noun => "nouns",
    }
}
