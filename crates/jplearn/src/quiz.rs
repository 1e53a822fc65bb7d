//! Interactive question loop shared by drills and particle quizzes.

use std::io::{BufRead, Write};

use anyhow::Result;
use lib::{Deck, Exercise};

/// A question together with the progress module it counts towards.
pub(crate) struct Question {
    pub(crate) module: &'static str,
    pub(crate) exercise: Exercise,
}

/// The outcome of a single answered question.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Answer {
    pub(crate) module: &'static str,
    pub(crate) correct: bool,
}

/// Ask every question in the deck.
///
/// Answers are either typed out or given as the number of a choice. An empty
/// line skips the question, `q` or the end of input stops the quiz.
pub(crate) fn run<I, O>(input: &mut I, o: &mut O, deck: &mut Deck<Question>) -> Result<Vec<Answer>>
where
    I: ?Sized + BufRead,
    O: ?Sized + Write,
{
    let mut answers = Vec::new();
    let total = deck.len();
    let mut line = String::new();

    for n in 0..total {
        let Some(q) = deck.current() else {
            break;
        };

        let e = &q.exercise;

        writeln!(o, "[{}/{total}] {}", n + 1, e.prompt)?;

        if let Some(sentence) = &e.sentence {
            writeln!(o, "  {sentence}")?;
        }

        for (i, choice) in e.choices.iter().enumerate() {
            writeln!(o, "  {}) {choice}", i + 1)?;
        }

        write!(o, "> ")?;
        o.flush()?;

        line.clear();

        if input.read_line(&mut line)? == 0 {
            break;
        }

        let given = line.trim();

        if given == "q" {
            break;
        }

        if !given.is_empty() {
            let given = match given.parse::<usize>() {
                Ok(i) if (1..=e.choices.len()).contains(&i) => e.choices[i - 1].as_str(),
                _ => given,
            };

            let correct = e.check(given);

            if correct {
                writeln!(o, "Correct!")?;
            } else if e.answer != e.reading {
                writeln!(o, "Wrong, the answer is {} ({})", e.answer, e.reading)?;
            } else {
                writeln!(o, "Wrong, the answer is {}", e.answer)?;
            }

            writeln!(o, "  {}", e.explanation)?;

            answers.push(Answer {
                module: q.module,
                correct,
            });
        }

        deck.next();
    }

    let correct = answers.iter().filter(|a| a.correct).count();
    writeln!(o, "Score: {correct}/{}", answers.len())?;
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn question(answer: &str, reading: &str) -> Question {
        Question {
            module: "verbs",
            exercise: Exercise {
                prompt: "prompt".to_owned(),
                sentence: None,
                answer: answer.to_owned(),
                reading: reading.to_owned(),
                choices: vec!["書かない".to_owned(), answer.to_owned()],
                explanation: String::new(),
            },
        }
    }

    #[test]
    fn answers() {
        let mut deck = Deck::new(vec![
            question("書いた", "かいた"),
            question("書いた", "かいた"),
            question("書いた", "かいた"),
            question("書いた", "かいた"),
            question("書いた", "かいた"),
        ]);

        let mut input = Cursor::new("カイタ\n1\n\n2\nq\n");
        let mut output = Vec::new();

        let answers = run(&mut input, &mut output, &mut deck).unwrap();

        assert_eq!(
            answers,
            [
                Answer {
                    module: "verbs",
                    correct: true
                },
                Answer {
                    module: "verbs",
                    correct: false
                },
                Answer {
                    module: "verbs",
                    correct: true
                },
            ]
        );

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Wrong, the answer is 書いた (かいた)"));
        assert!(output.ends_with("Score: 2/3\n"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let mut deck = Deck::new(vec![question("書く", "かく"), question("書く", "かく")]);
        let mut input = Cursor::new("かく\n");
        let mut output = Vec::new();

        let answers = run(&mut input, &mut output, &mut deck).unwrap();
        assert_eq!(answers.len(), 1);
    }
}
