use std::io::Write;

use anyhow::{bail, Result};
use clap::Parser;
use lib::particles::split_blank;
use lib::progress::{self, Progress};
use lib::{Deck, Exercise, Marker, Particle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::quiz::{self, Question};
use crate::Context;

const MODULE: &str = "particles";

#[derive(Parser)]
pub(crate) struct ParticlesArgs {
    /// Quiz yourself instead of listing particles.
    #[arg(long)]
    quiz: bool,
    /// Number of questions. Defaults to `drill-length` in the configuration.
    #[arg(long)]
    count: Option<usize>,
    /// Seed used to shuffle questions.
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(cx: &Context, args: &ParticlesArgs) -> Result<()> {
    if args.quiz {
        return run_quiz(cx, args);
    }

    let mut progress = Progress::load(&cx.progress_path)?;

    let o = std::io::stdout();
    let mut o = o.lock();
    print(&mut o, cx.library.particles(), &cx.config.marker)?;

    progress.visit(MODULE, progress::now());
    progress.save(&cx.progress_path)?;
    Ok(())
}

fn print<O>(o: &mut O, particles: &[Particle], marker: &Marker) -> Result<()>
where
    O: ?Sized + Write,
{
    for p in particles {
        if p.reading() != p.particle {
            writeln!(o, "{} ({}) - {}", p.particle, p.reading(), p.role)?;
        } else {
            writeln!(o, "{} - {}", p.particle, p.role)?;
        }

        if !p.explanation.is_empty() {
            writeln!(o, "  {}", p.explanation)?;
        }

        for example in &p.examples {
            writeln!(o, "  - {}", mark(example, marker))?;
        }
    }

    Ok(())
}

fn run_quiz(cx: &Context, args: &ParticlesArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let particles = cx.library.particles();
    let mut questions = Vec::new();

    for p in particles {
        for example in &p.examples {
            let language = cx.conjugator.language();

            if let Some(exercise) = Exercise::particle(language, p, example, particles, &mut rng) {
                questions.push(Question {
                    module: MODULE,
                    exercise,
                });
            }
        }
    }

    if questions.is_empty() {
        bail!("No particle examples to quiz on");
    }

    let mut deck = Deck::new(questions);
    deck.shuffle(&mut rng);

    let count = args.count.unwrap_or(cx.config.drill_length);
    let mut deck = deck.into_iter().take(count).collect::<Deck<_>>();

    let mut progress = Progress::load(&cx.progress_path)?;
    let now = progress::now();
    progress.visit(MODULE, now);

    let input = std::io::stdin();
    let mut input = input.lock();
    let o = std::io::stdout();
    let mut o = o.lock();

    for answer in quiz::run(&mut input, &mut o, &mut deck)? {
        progress.record(answer.module, answer.correct, now);
    }

    progress.save(&cx.progress_path)?;
    Ok(())
}

/// Replace the brackets around the particle in an example with markers.
fn mark(example: &str, marker: &Marker) -> String {
    match split_blank(example) {
        Some((head, blank, tail)) => format!("{head}{}{blank}{}{tail}", marker.open, marker.close),
        None => example.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use lib::Library;

    use super::*;

    #[test]
    fn mark_particle() {
        let marker = Marker::new("*", "*");
        assert_eq!(mark("私[は]学生です。", &marker), "私*は*学生です。");
        assert_eq!(mark("私は学生です。", &marker), "私は学生です。");
    }

    #[test]
    fn listing() {
        let library = Library::builtin();
        let marker = Marker::new("<", ">");

        let mut out = Vec::new();
        print(&mut out, library.particles(), &marker).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.lines().any(|line| line.starts_with("は (わ) - ")));
        assert!(out.contains("<は>"));
        assert!(!out.contains('['));
    }
}
