use anyhow::{bail, Result};
use clap::Parser;
use lib::exercise::example_form;
use lib::progress::{self, Progress};
use lib::{Conjugator, Deck, Exercise, FormType, WordEntry};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::quiz::{self, Question};
use crate::Context;

#[derive(Parser)]
pub(crate) struct DrillArgs {
    /// Only drill words of the given class.
    #[arg(long)]
    class: Option<String>,
    /// Only drill the given forms. See `jplearn forms`.
    #[arg(long = "form", name = "form")]
    forms: Vec<String>,
    /// Only drill words with the given tag.
    #[arg(long)]
    tag: Option<String>,
    /// Number of questions. Defaults to `drill-length` in the configuration.
    #[arg(long)]
    count: Option<usize>,
    /// Seed used to pick questions, for repeatable drills.
    #[arg(long)]
    seed: Option<u64>,
    /// Ask for forms inside example sentences where words have them.
    #[arg(long)]
    sentences: bool,
}

pub(crate) fn run(cx: &Context, args: &DrillArgs) -> Result<()> {
    let class = args.class.as_deref().map(super::parse_class).transpose()?;
    let forms = super::parse_forms(&args.forms)?;

    let words = cx
        .library
        .words()
        .iter()
        .filter(|w| class.map_or(true, |c| w.word_class == c))
        .filter(|w| args.tag.as_deref().map_or(true, |t| w.has_tag(t)))
        .collect::<Vec<_>>();

    if words.is_empty() {
        bail!("No words to drill");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let count = args.count.unwrap_or(cx.config.drill_length);
    let mut questions = Vec::with_capacity(count);

    for _ in 0..count.saturating_mul(4) {
        if questions.len() == count {
            break;
        }

        let Some(entry) = words.choose(&mut rng) else {
            break;
        };

        let exercise = if args.sentences {
            sentence_exercise(&cx.conjugator, entry, &forms, &mut rng)
        } else {
            None
        };

        let exercise = match exercise {
            Some(exercise) => exercise,
            None => {
                let Some(form) = pick_form(&cx.conjugator, entry, &forms, &mut rng) else {
                    continue;
                };

                Exercise::conjugation(&cx.conjugator, entry, form, &mut rng)
            }
        };

        questions.push(Question {
            module: super::module(entry.word_class),
            exercise,
        });
    }

    if questions.is_empty() {
        bail!("None of the selected words can be drilled in the selected forms");
    }

    tracing::debug!(count = questions.len(), "Starting drill");

    let mut progress = Progress::load(&cx.progress_path)?;
    let now = progress::now();

    let mut modules = questions.iter().map(|q| q.module).collect::<Vec<_>>();
    modules.sort_unstable();
    modules.dedup();

    for module in modules {
        progress.visit(module, now);
    }

    let mut deck = Deck::new(questions);

    let input = std::io::stdin();
    let mut input = input.lock();
    let o = std::io::stdout();
    let mut o = o.lock();

    let answers = quiz::run(&mut input, &mut o, &mut deck)?;

    for answer in answers {
        progress.record(answer.module, answer.correct, now);
    }

    progress.save(&cx.progress_path)?;
    Ok(())
}

/// Pick a form to ask for whose answer differs from the dictionary form,
/// since that is already shown in the prompt.
fn pick_form<R>(
    conjugator: &Conjugator,
    entry: &WordEntry,
    only: &[FormType],
    rng: &mut R,
) -> Option<FormType>
where
    R: ?Sized + Rng,
{
    let candidates = lib::forms(entry.word_class)
        .iter()
        .filter(|f| only.is_empty() || only.contains(f))
        .filter(|f| !gives_away(conjugator, entry, *f))
        .collect::<Vec<_>>();

    candidates.choose(rng).copied()
}

/// Test if asking for `form` would be answered by the dictionary form.
fn gives_away(conjugator: &Conjugator, entry: &WordEntry, form: FormType) -> bool {
    conjugator.conjugate(entry, form).form == entry.surface_form
}

/// Build a question from one of the example sentences of a word.
fn sentence_exercise<R>(
    conjugator: &Conjugator,
    entry: &WordEntry,
    only: &[FormType],
    rng: &mut R,
) -> Option<Exercise>
where
    R: ?Sized + Rng,
{
    let sentence = entry.examples.choose(rng)?;
    let form = example_form(conjugator, entry, sentence)?;

    if (!only.is_empty() && !only.contains(&form)) || gives_away(conjugator, entry, form) {
        return None;
    }

    Exercise::completion(conjugator, entry, sentence, form, rng)
}
