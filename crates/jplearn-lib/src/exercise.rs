//! Quiz questions built from words and particles.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Language;
use crate::inflection::{Conjugator, FormType};
use crate::kana::to_hiragana;
use crate::particles::{split_blank, strip_blanks, Particle};
use crate::word::WordEntry;

/// Placeholder for the part of a sentence that should be filled in.
pub const BLANK: &str = "＿＿＿";

/// Number of wrong choices offered next to the answer.
const DISTRACTORS: usize = 3;

/// A single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    /// What is being asked.
    pub prompt: String,
    /// Sentence with the answer blanked out, if the question has one.
    pub sentence: Option<String>,
    pub answer: String,
    /// Kana reading of the answer, also accepted when checking.
    pub reading: String,
    /// Shuffled choices, one of which is the answer.
    pub choices: Vec<String>,
    /// Shown after the question has been answered.
    pub explanation: String,
}

impl Exercise {
    /// Ask for the given form of a word.
    ///
    /// Choices are drawn from the other forms of the same word.
    pub fn conjugation<R>(
        conjugator: &Conjugator,
        entry: &WordEntry,
        form: FormType,
        rng: &mut R,
    ) -> Self
    where
        R: ?Sized + Rng,
    {
        let result = conjugator.conjugate(entry, form);
        let choices = choices(conjugator, entry, &result.form, rng);

        Self {
            prompt: conjugation_prompt(conjugator.language(), entry, form),
            sentence: None,
            answer: result.form,
            reading: result.reading,
            choices,
            explanation: result.translation,
        }
    }

    /// Ask for the given form of a word inside an example sentence.
    ///
    /// The form is blanked out where the sentence marks it with brackets,
    /// otherwise where it first occurs. Returns `None` if the form can't be
    /// found in the sentence.
    pub fn completion<R>(
        conjugator: &Conjugator,
        entry: &WordEntry,
        sentence: &str,
        form: FormType,
        rng: &mut R,
    ) -> Option<Self>
    where
        R: ?Sized + Rng,
    {
        let result = conjugator.conjugate(entry, form);

        let blanked = match split_blank(sentence) {
            Some((head, blank, tail)) if blank == result.form || blank == result.reading => {
                format!("{}{BLANK}{}", strip_blanks(head), strip_blanks(tail))
            }
            _ => {
                let plain = strip_blanks(sentence);
                let start = plain.find(result.form.as_str())?;
                let end = start + result.form.len();
                format!("{}{BLANK}{}", &plain[..start], &plain[end..])
            }
        };

        let choices = choices(conjugator, entry, &result.form, rng);

        Some(Self {
            prompt: conjugation_prompt(conjugator.language(), entry, form),
            sentence: Some(blanked),
            answer: result.form,
            reading: result.reading,
            choices,
            explanation: result.translation,
        })
    }

    /// Ask for the particle blanked out of an example sentence.
    ///
    /// Returns `None` unless the example marks the particle with brackets.
    pub fn particle<R>(
        language: Language,
        particle: &Particle,
        example: &str,
        particles: &[Particle],
        rng: &mut R,
    ) -> Option<Self>
    where
        R: ?Sized + Rng,
    {
        let (head, blank, tail) = split_blank(example)?;

        if blank != particle.particle {
            return None;
        }

        let mut others = particles
            .iter()
            .map(|p| p.particle.as_str())
            .filter(|p| *p != particle.particle)
            .collect::<Vec<_>>();

        others.sort_unstable();
        others.dedup();

        let mut choices = others
            .choose_multiple(rng, DISTRACTORS)
            .map(|p| (*p).to_owned())
            .collect::<Vec<_>>();

        choices.push(particle.particle.clone());
        choices.shuffle(rng);

        let prompt = match language {
            Language::Korean => "빈칸에 알맞은 조사는?",
            Language::English => "Which particle fills the blank?",
        };

        let explanation = if particle.explanation.is_empty() {
            particle.role.clone()
        } else {
            format!("{}: {}", particle.role, particle.explanation)
        };

        Some(Self {
            prompt: prompt.to_owned(),
            sentence: Some(format!(
                "{}{BLANK}{}",
                strip_blanks(head),
                strip_blanks(tail)
            )),
            answer: particle.particle.clone(),
            reading: particle.reading().to_owned(),
            choices,
            explanation,
        })
    }

    /// Check an answer.
    ///
    /// Surrounding whitespace is ignored and katakana is treated as
    /// hiragana. Both the answer and its reading are accepted.
    pub fn check(&self, input: &str) -> bool {
        let input = to_hiragana(input.trim());

        if input.is_empty() {
            return false;
        }

        input == to_hiragana(&self.answer) || input == to_hiragana(&self.reading)
    }
}

/// Find the form an example sentence marks with brackets.
pub fn example_form(conjugator: &Conjugator, entry: &WordEntry, sentence: &str) -> Option<FormType> {
    let (_, blank, _) = split_blank(sentence)?;

    conjugator
        .conjugate_all(entry)
        .into_iter()
        .find(|(_, result)| result.form == blank || result.reading == blank)
        .map(|(form, _)| form)
}

fn conjugation_prompt(language: Language, entry: &WordEntry, form: FormType) -> String {
    let description = form.describe(language);

    match language {
        Language::Korean => format!("{entry}: {description}"),
        Language::English => format!("{description} of {entry}"),
    }
}

fn choices<R>(conjugator: &Conjugator, entry: &WordEntry, answer: &str, rng: &mut R) -> Vec<String>
where
    R: ?Sized + Rng,
{
    let mut others = conjugator
        .conjugate_all(entry)
        .into_iter()
        .map(|(_, result)| result.form)
        .filter(|form| form != answer)
        .collect::<Vec<_>>();

    others.sort_unstable();
    others.dedup();

    let mut choices = others
        .choose_multiple(rng, DISTRACTORS)
        .cloned()
        .collect::<Vec<_>>();

    choices.push(answer.to_owned());
    choices.shuffle(rng);
    choices
}
