use std::io::Write;

use anyhow::Result;
use lib::progress::{self, Progress};

use crate::Context;

pub(crate) fn run(cx: &Context) -> Result<()> {
    let progress = Progress::load(&cx.progress_path)?;

    let o = std::io::stdout();
    let mut o = o.lock();
    print(&mut o, &progress, progress::now())
}

fn print<O>(o: &mut O, progress: &Progress, now: u64) -> Result<()>
where
    O: ?Sized + Write,
{
    if progress.modules.is_empty() {
        writeln!(o, "Nothing studied yet, try `jplearn drill`")?;
        return Ok(());
    }

    writeln!(
        o,
        "{:<12} {:>8} {:>8} {:>8} {:>9}  last studied",
        "module", "sessions", "correct", "wrong", "accuracy"
    )?;

    for (name, m) in &progress.modules {
        let last = match m.last_studied {
            Some(at) => ago(now.saturating_sub(at)),
            None => "-".to_owned(),
        };

        writeln!(
            o,
            "{name:<12} {:>8} {:>8} {:>8} {:>9}  {last}",
            m.studied,
            m.correct,
            m.incorrect,
            percent(m.accuracy())
        )?;
    }

    let s = progress.summary();

    writeln!(
        o,
        "{:<12} {:>8} {:>8} {:>8} {:>9}",
        "total",
        s.studied,
        s.correct,
        s.incorrect,
        percent(s.accuracy)
    )?;

    Ok(())
}

fn percent(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(a) => format!("{:.0}%", a * 100.0),
        None => "-".to_owned(),
    }
}

fn ago(seconds: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = MINUTE * 60;
    const DAY: u64 = HOUR * 24;

    match seconds {
        s if s < MINUTE => "just now".to_owned(),
        s if s < HOUR => format!("{}m ago", s / MINUTE),
        s if s < DAY => format!("{}h ago", s / HOUR),
        s => format!("{}d ago", s / DAY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        let mut progress = Progress::default();
        progress.visit("verbs", 0);
        progress.record("verbs", true, 0);
        progress.record("verbs", false, 0);

        let mut out = Vec::new();
        print(&mut out, &progress, 2 * 86400).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("50%"));
        assert!(out.contains("2d ago"));
        assert!(out.lines().last().unwrap().starts_with("total"));
    }

    #[test]
    fn empty() {
        let mut out = Vec::new();
        print(&mut out, &Progress::default(), 0).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Nothing studied yet"));
    }

    #[test]
    fn durations() {
        assert_eq!(ago(5), "just now");
        assert_eq!(ago(120), "2m ago");
        assert_eq!(ago(7200), "2h ago");
    }
}
