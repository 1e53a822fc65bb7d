use std::io::Write;

use anyhow::Result;
use clap::Parser;
use lib::{FormType, Language, WordClass};

use crate::Context;

#[derive(Parser)]
pub(crate) struct FormsArgs {
    /// Only list forms covered for the given word class.
    #[arg(long)]
    class: Option<String>,
}

pub(crate) fn run(cx: &Context, args: &FormsArgs) -> Result<()> {
    let class = args.class.as_deref().map(super::parse_class).transpose()?;

    let o = std::io::stdout();
    let mut o = o.lock();

    match class {
        Some(class) => print_class(&mut o, class, cx.conjugator.language()),
        None => print_all(&mut o),
    }
}

fn print_class<O>(o: &mut O, class: WordClass, language: Language) -> Result<()>
where
    O: ?Sized + Write,
{
    writeln!(o, "Forms of {class}:")?;

    for form in lib::forms(class).iter() {
        writeln!(o, "{} - {}", form.label(), form.describe(language))?;
    }

    Ok(())
}

fn print_all<O>(o: &mut O) -> Result<()>
where
    O: ?Sized + Write,
{
    writeln!(o, "Available `--form` arguments:")?;

    for form in FormType::ALL {
        let classes = WordClass::ALL
            .iter()
            .filter(|c| lib::forms(**c).contains(*form))
            .map(|c| c.name())
            .collect::<Vec<_>>();

        writeln!(
            o,
            "{} - {} / {} ({})",
            form.label(),
            form.title(),
            form.korean(),
            classes.join(", ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_class() {
        let mut out = Vec::new();
        print_class(&mut out, WordClass::Group1Verb, Language::English).unwrap();
        let out = String::from_utf8(out).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Forms of group1-verb:"));
        assert_eq!(lines.count(), lib::forms(WordClass::Group1Verb).len());
    }

    #[test]
    fn list_all() {
        let mut out = Vec::new();
        print_all(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out.lines().count(), FormType::ALL.len() + 1);
        assert!(out.lines().skip(1).all(|line| line.contains(" - ")));
    }
}
