use std::io::Write;

use anyhow::{bail, Result};
use clap::Parser;
use lib::exercise::example_form;
use lib::kana;
use lib::particles::strip_blanks;
use lib::{highlight, ConjugationResult, FormType, WordEntry};
use serde::Serialize;

use crate::Context;

#[derive(Parser)]
pub(crate) struct ConjugateArgs {
    /// Word to conjugate, in dictionary form.
    word: String,
    /// Class of the word. Looked up in the loaded word lists if omitted.
    #[arg(long)]
    class: Option<String>,
    /// Kana reading of the word.
    #[arg(long)]
    reading: Option<String>,
    /// Meaning of the word.
    #[arg(long)]
    meaning: Option<String>,
    /// Only show the given forms. See `jplearn forms`.
    #[arg(long = "form", name = "form")]
    forms: Vec<String>,
    /// Include polite variants next to casual forms.
    #[arg(long)]
    polite: bool,
    /// Print output in furigana.
    #[arg(long)]
    furigana: bool,
    /// Print output as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonForm<'a> {
    form: FormType,
    #[serde(flatten)]
    result: &'a ConjugationResult,
}

pub(crate) fn run(cx: &Context, args: &ConjugateArgs) -> Result<()> {
    let entry = resolve(cx, args)?;

    let results = if args.forms.is_empty() {
        cx.conjugator.conjugate_all(&entry)
    } else {
        super::parse_forms(&args.forms)?
            .into_iter()
            .map(|form| (form, cx.conjugator.conjugate(&entry, form)))
            .collect()
    };

    let o = std::io::stdout();
    let mut o = o.lock();

    if args.json {
        let output = results
            .iter()
            .map(|(form, result)| JsonForm {
                form: *form,
                result,
            })
            .collect::<Vec<_>>();

        serde_json::to_writer_pretty(&mut o, &output)?;
        writeln!(o)?;
        return Ok(());
    }

    writeln!(o, "{entry} [{}]", entry.word_class)?;

    if !entry.meaning.is_empty() {
        writeln!(o, "  {}", entry.meaning)?;
    }

    let language = cx.conjugator.language();

    for (form, result) in &results {
        if args.polite && form.is_polite() {
            continue;
        }

        write!(o, "  {:<22} ", form.label())?;
        print_result(&mut o, result, args.furigana)?;

        if args.polite {
            if let Some(polite) = form.polite() {
                let polite = cx.conjugator.conjugate(&entry, polite);
                write!(o, " / ")?;
                print_result(&mut o, &polite, args.furigana)?;
            }
        }

        writeln!(o, "  {}", form.describe(language))?;
    }

    if !entry.examples.is_empty() {
        writeln!(o, "Examples:")?;

        for example in &entry.examples {
            let sentence = strip_blanks(example);

            let Some(form) = example_form(&cx.conjugator, &entry, example) else {
                writeln!(o, "  - {sentence}")?;
                continue;
            };

            let result = cx.conjugator.conjugate(&entry, form);
            let marked = highlight(&sentence, &result, entry.stem(), &cx.config.marker);
            writeln!(o, "  - {marked} ({})", form.describe(language))?;
        }
    }

    Ok(())
}

fn print_result<O>(o: &mut O, result: &ConjugationResult, furigana: bool) -> Result<()>
where
    O: ?Sized + Write,
{
    if furigana {
        write!(o, "{}", result.furigana())?;
    } else {
        write!(o, "{result}")?;
    }

    Ok(())
}

/// Find the entry to conjugate.
fn resolve(cx: &Context, args: &ConjugateArgs) -> Result<WordEntry> {
    let class = args.class.as_deref().map(super::parse_class).transpose()?;
    let found = cx.library.find(&args.word);

    let mut entry = match (class, found) {
        (Some(class), Some(found)) if found.word_class == class => found.clone(),
        (Some(class), _) => WordEntry::new(&args.word, "", "", class),
        (None, Some(found)) => found.clone(),
        (None, None) => {
            bail!(
                "`{}` isn't in any word list, specify its class with `--class`",
                args.word
            )
        }
    };

    if let Some(reading) = &args.reading {
        entry.reading = reading.clone();
    }

    if let Some(meaning) = &args.meaning {
        entry.meaning = meaning.clone();
    }

    if entry.reading.is_empty() && !kana::is_kana(&entry.surface_form) {
        tracing::warn!(
            "`{}` has no reading, readings will repeat the written form, use `--reading`",
            entry.surface_form
        );
    }

    Ok(entry)
}
