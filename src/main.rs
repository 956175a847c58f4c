use chrono::Local;
use clap::{ArgAction, Parser, Subcommand};
use dashtype::{
    analytics,
    app_dirs::AppDirs,
    clock::{Clock, ManualClock},
    config::{ConfigStore, FileConfigStore, Preferences},
    history, logging,
    metrics::{Metrics, SessionResult},
    stats,
    time_series::SampleSeries,
    word_generator::TextGenerator,
    SessionConfig, TypingSession,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    error::Error,
    io::{self, BufRead},
    path::PathBuf,
};
use tracing::info;

/// typing tests with progress trends
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Generates sentence-like typing tests, scores speed and accuracy per word, and tracks progress with an outlier-robust trend line."
)]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// history log to read and append to
    #[clap(long, global = true)]
    history: Option<PathBuf>,

    /// preferences file
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// more logging on stderr (repeat for more)
    #[clap(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// take a test; type the prompt and press enter (blank lines are skipped)
    Practice {
        /// number of words to use in test
        #[clap(short = 'w', long)]
        number_of_words: Option<usize>,

        /// capitalize sentences and sprinkle in punctuation; `-p false` overrides the saved preference
        #[clap(short = 'p', long, num_args = 0..=1, default_missing_value = "true")]
        punctuation: Option<bool>,

        /// seed for a reproducible prompt
        #[clap(long)]
        seed: Option<u64>,
    },
    /// show history with outliers marked and the trend line
    Trend {
        /// lowest wpm treated as a real attempt
        #[clap(long)]
        floor: Option<f64>,
    },
    /// personal bests and current streak
    Best,
    /// show or change preferences
    Config {
        #[clap(long)]
        test_length: Option<usize>,

        #[clap(long)]
        punctuation: Option<bool>,
    },
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        self.config
            .as_ref()
            .map(FileConfigStore::with_path)
            .unwrap_or_default()
    }

    fn history_path(&self) -> PathBuf {
        self.history.clone().unwrap_or_else(AppDirs::history_path)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.verbose {
        0 => logging::init(),
        1 => logging::init_with_level("info"),
        2 => logging::init_with_level("debug"),
        _ => logging::init_with_level("trace"),
    }

    let store = cli.config_store();
    let prefs = store.load();

    match &cli.command {
        Command::Practice {
            number_of_words,
            punctuation,
            seed,
        } => {
            let config = SessionConfig::new(
                number_of_words.unwrap_or(prefs.test_length),
                punctuation.unwrap_or(prefs.punctuation),
            );
            practice(&cli, config, seed.or(prefs.seed))
        }
        Command::Trend { floor } => trend(&cli, floor.unwrap_or(prefs.outlier_floor)),
        Command::Best => best(&cli),
        Command::Config {
            test_length,
            punctuation,
        } => configure(&store, prefs, *test_length, *punctuation),
    }
}

fn practice(cli: &Cli, config: SessionConfig, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Lines arrive whole, so the clock is synced to the wall clock per line
    // and the attempt is timed from the moment the prompt is shown.
    let clock = ManualClock::new(Local::now());
    let mut session =
        TypingSession::with_clock(TextGenerator::english()?, config, &mut rng, clock.clone())?;

    println!("{}", session.prompt());

    let mut result = None;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut chars = line.chars().chain(std::iter::once(' '));

        if !session.has_started() {
            if let Some(first) = chars.next() {
                result = result.or(session.type_char(first));
            }
        }
        clock.advance(Local::now() - clock.now());

        for c in chars {
            result = result.or(session.type_char(c));
        }
        if result.is_some() {
            break;
        }
    }

    match result {
        Some(result) => {
            report(&result);
            let path = cli.history_path();
            history::append_result(&path, &result)?;
            info!(path = %path.display(), "result saved");
        }
        None => {
            let metrics = Metrics::of(&session);
            println!(
                "Unfinished after {} of {} words. WPM so far: {:.1}",
                session.current_index(),
                session.words().len(),
                metrics.wpm
            );
        }
    }
    Ok(())
}

fn report(result: &SessionResult) {
    println!("WPM: {:.1}", result.wpm);
    println!("Time: {:.2} seconds", result.elapsed_seconds());
    println!("Accuracy: {:.0}%", result.accuracy_percent);
}

fn trend(cli: &Cli, floor: f64) -> Result<(), Box<dyn Error>> {
    let results = history::read_results(&cli.history_path())?;
    let series = SampleSeries::from_results(&results);
    let trend = analytics::analyze(&series, floor)?;

    if trend.points.is_empty() {
        println!("No sessions yet.");
        return Ok(());
    }

    for point in &trend.points {
        let marker = if point.is_outlier { "  (outlier)" } else { "" };
        println!("{}  {:>6.1}{marker}", point.label, point.value);
    }

    match trend.regression {
        Some(line) => {
            let first = &trend.points[line.start.index].label;
            let last = &trend.points[line.end.index].label;
            println!(
                "Trend: {:.1} WPM ({first}) -> {:.1} WPM ({last}), {:+.2} per session",
                line.start.value, line.end.value, line.slope
            );
        }
        None => println!("Not enough typical sessions for a trend."),
    }
    Ok(())
}

fn best(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let results = history::read_results(&cli.history_path())?;

    for (rank, r) in stats::personal_bests(&results).iter().enumerate() {
        let punctuation = if r.punctuation_enabled { "punctuation" } else { "plain" };
        println!(
            "{:>2}. {:>3} words, {punctuation:<11}  {:>6.1} WPM  {:>5.1}%  {}",
            rank + 1,
            r.test_length,
            r.wpm,
            r.accuracy_percent,
            r.start_time.format("%Y-%m-%d %H:%M")
        );
    }

    if let Some(summary) = stats::summarize(&results) {
        println!(
            "{} sessions, average {:.1} WPM at {:.0}% accuracy",
            summary.sessions, summary.average_wpm, summary.average_accuracy
        );
    }
    println!(
        "Streak: {} day(s)",
        stats::result_streak(&results, Local::now().date_naive())
    );
    Ok(())
}

fn configure(
    store: &FileConfigStore,
    mut prefs: Preferences,
    test_length: Option<usize>,
    punctuation: Option<bool>,
) -> Result<(), Box<dyn Error>> {
    if test_length.is_none() && punctuation.is_none() {
        println!("{}", serde_json::to_string_pretty(&prefs)?);
        return Ok(());
    }

    if let Some(n) = test_length {
        prefs.test_length = n;
    }
    if let Some(p) = punctuation {
        prefs.punctuation = p;
    }
    store.save(&prefs)?;
    info!(path = %store.path().display(), "preferences saved");
    println!("{}", serde_json::to_string_pretty(&prefs)?);
    Ok(())
}
