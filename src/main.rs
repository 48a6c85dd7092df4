use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{self, feedback, Console};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::storage::Storage;
use expense_tracker::ExpenseError;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Interactive terminal expense tracker",
    long_about = "Records, deletes and filters expenses stored in a local JSON file. \
                  Runs an interactive menu; all options below are optional."
)]
struct Cli {
    /// Path to the expense document (defaults to $EXPENSE_TRACKER_FILE or ./expenses.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Skip the cosmetic save/delete/load pauses
    #[arg(long, env = "EXPENSE_TRACKER_NO_ANIMATION")]
    no_animation: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    });

    let paths = match cli.file {
        Some(file) => TrackerPaths::with_data_file(file),
        None => TrackerPaths::new(),
    };
    let mut settings = Settings::new(paths);
    if cli.no_animation {
        settings = settings.without_animations();
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(ExpenseError::StorageUnavailable(detail)) = e.downcast_ref::<ExpenseError>() {
                error!(%detail, "Cannot open expense document");
            }
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<()> {
    let mut storage = Storage::load(settings.paths.clone())?;
    let mut feedback = feedback::from_settings(settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    cli::run(&mut console, &mut storage, feedback.as_mut())?;
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
