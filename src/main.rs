// Sortscope: step-by-step sorting visualizer with time-travel playback

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sortscope::playback::{
    Controller, PlaybackConfig, DEFAULT_DESCRIPTION_WINDOW, DEFAULT_INTERVAL_MS, INITIAL_LIST,
};
use sortscope::sorting::Algorithm;
use sortscope::ui::App;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "sortscope")]
#[command(about = "Watch bubble sort, quicksort and merge sort one step at a time")]
struct Args {
    /// Algorithm to visualize: bubble, quicksort or mergesort
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Start from a random list of this many values instead of the built-in list
    #[arg(short, long, conflicts_with = "values")]
    length: Option<usize>,

    /// Comma-separated values to sort, e.g. 8,2,4,7
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i64>>,

    /// Delay between automatic steps in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_MS)]
    speed_ms: u64,

    /// Number of recent step descriptions to show
    #[arg(long, default_value_t = DEFAULT_DESCRIPTION_WINDOW)]
    window: usize,

    /// Seed for shuffles and random lists (random by default)
    #[arg(long)]
    seed: Option<u64>,

    /// Print every step to stdout and exit instead of opening the TUI
    #[arg(long)]
    trace: bool,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// Dump the full step sequence, one line per snapshot
fn print_trace(algorithm: Algorithm, values: &[i64]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, snapshot) in algorithm.steps(values).enumerate() {
        writeln!(
            out,
            "{:>4} {:>3}% {:?} {}",
            i,
            snapshot.progress_percent,
            snapshot.values,
            snapshot.description.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = PlaybackConfig {
        interval: Duration::from_millis(args.speed_ms),
        description_window: args.window,
        ..PlaybackConfig::default()
    };

    let initial = args.values.clone().unwrap_or_else(|| INITIAL_LIST.to_vec());
    let mut controller = match args.seed {
        Some(seed) => Controller::with_seed(args.algorithm, initial, config, seed),
        None => Controller::new(args.algorithm, initial, config),
    };
    if let Some(len) = args.length {
        controller.set_list_length(len);
    }

    if args.trace {
        print_trace(args.algorithm, controller.values())?;
        return Ok(());
    }

    tracing::info!(algorithm = %args.algorithm, len = controller.values().len(), "launching TUI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
