use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dots_and_boxes::config::{AppConfig, LogConfig, MAX_DIMENSION};
use dots_and_boxes::engine::Engine;
use dots_and_boxes::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Dots and Boxes against the computer in the terminal.
#[derive(Parser)]
#[command(name = "dots_and_boxes", about = "Dots and Boxes against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "dots_and_boxes.toml")]
    config: PathBuf,

    /// Override the board size (cells per side)
    #[arg(long)]
    dimension: Option<usize>,

    /// Seed starting turns and computer moves for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(dimension) = cli.dimension {
        if !(1..=MAX_DIMENSION).contains(&dimension) {
            bail!("--dimension must be between 1 and {MAX_DIMENSION}, got {dimension}");
        }
        app_config.game.dimension = dimension;
    }

    init_logging(&app_config.log)?;
    info!(
        dimension = app_config.game.dimension,
        frame_rate = app_config.game.frame_rate,
        seed = ?cli.seed,
        "starting dots and boxes"
    );

    let engine = match cli.seed {
        Some(seed) => Engine::with_seed(app_config.game, seed),
        None => Engine::new(app_config.game),
    }
    .context("creating engine")?;

    run(App::new(engine)).context("running terminal UI")
}

/// Log to the configured file. The terminal belongs to the board, so without a
/// file nothing is logged.
fn init_logging(log: &LogConfig) -> Result<()> {
    let Some(path) = &log.file else {
        return Ok(());
    };

    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
