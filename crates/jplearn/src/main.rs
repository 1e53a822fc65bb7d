mod command;
mod quiz;

use std::path::PathBuf;

use anyhow::{anyhow, Context as _, Result};
use clap::{Parser, Subcommand};
use lib::reporter::{Reporter, TracingReporter};
use lib::{report_info, Config, Conjugator, Dirs, Language, Library};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Use the given configuration file instead of the default one.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Load word lists from the given directory. Overrides `words-dir` in the
    /// configuration.
    #[arg(long, global = true)]
    words_dir: Option<PathBuf>,
    /// Language used for descriptions, either `korean` or `english`.
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Store progress in the given file instead of the default one.
    #[arg(long, global = true)]
    progress: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate a word into every form, or the selected ones.
    Conjugate(command::conjugate::ConjugateArgs),
    /// List forms with their descriptions.
    Forms(command::forms::FormsArgs),
    /// Quiz yourself on conjugations.
    Drill(command::drill::DrillArgs),
    /// Study particles.
    Particles(command::particles::ParticlesArgs),
    /// Show study progress.
    Dashboard,
}

/// Services shared by every command.
pub(crate) struct Context {
    pub(crate) config: Config,
    pub(crate) conjugator: Conjugator,
    pub(crate) library: Library,
    pub(crate) progress_path: PathBuf,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = Args::parse();
    let dirs = Dirs::open()?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(&dirs)?,
    };

    if let Some(lang) = &args.lang {
        config.language = Language::parse(lang)
            .with_context(|| anyhow!("Unsupported language `{lang}`, expected `korean` or `english`"))?;
    }

    if let Some(dir) = &args.words_dir {
        config.words_dir = Some(dir.clone());
    }

    let library = open_library(&config, &dirs, &TracingReporter);

    let cx = Context {
        conjugator: Conjugator::new(config.language),
        library,
        progress_path: args.progress.clone().unwrap_or_else(|| dirs.progress_path()),
        config,
    };

    match &args.command {
        Command::Conjugate(a) => command::conjugate::run(&cx, a),
        Command::Forms(a) => command::forms::run(&cx, a),
        Command::Drill(a) => command::drill::run(&cx, a),
        Command::Particles(a) => command::particles::run(&cx, a),
        Command::Dashboard => command::dashboard::run(&cx),
    }
}

/// Open the configured word lists, then the default data directory, and
/// finally the built-in lists.
fn open_library(config: &Config, dirs: &Dirs, reporter: &dyn Reporter) -> Library {
    if let Some(dir) = &config.words_dir {
        report_info!(reporter, "Loading word lists from {}", dir.display());
        return Library::open(dir, reporter);
    }

    let dir = dirs.words_dir();

    if dir.is_dir() {
        report_info!(reporter, "Loading word lists from {}", dir.display());
        return Library::open(&dir, reporter);
    }

    Library::builtin()
}
