mod app;
mod domain;
mod input;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::format_seconds;
use persistence::{ensure_studi_dir, get_studi_dir, history_file, init_local_studi, HistoryStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "studi")]
#[command(about = "A calm, terminal-based study-session timer with goal tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .studi directory in the current directory
    Init,
    /// Print past study sessions without entering the TUI
    History {
        /// Show at most this many entries (newest first)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let studi_dir = init_local_studi()?;
            println!("Initialized studi directory: {}", studi_dir.display());
            println!();
            println!("Studi will now use this local directory for session history.");
            println!("Run 'studi' to start a study session.");
            Ok(())
        }
        Some(Commands::History { limit }) => {
            let history = HistoryStore::load(history_file()?);
            print_history(&history, limit);
            Ok(())
        }
        None => run_tui(),
    }
}

/// Print the history to stdout, newest first
fn print_history(history: &HistoryStore, limit: Option<usize>) {
    if history.is_empty() {
        println!("No completed sessions yet.");
        return;
    }

    let shown = limit.unwrap_or(usize::MAX);
    for entry in history.list().iter().take(shown) {
        let marker = if entry.achieved { "✓" } else { "○" };
        println!(
            "{} {}  ({})  target {}m · actual {}",
            marker,
            entry.goal,
            entry.completed_at,
            entry.target_minutes,
            format_seconds(entry.actual_time_seconds),
        );
    }
}

fn run_tui() -> Result<()> {
    // Ensure the studi directory exists
    ensure_studi_dir()?;

    // Show which directory we're using
    let studi_dir = get_studi_dir()?;
    eprintln!("Using studi directory: {}", studi_dir.display());

    // Load history once at startup; a missing or corrupt file starts empty
    let history = HistoryStore::load(history_file()?);

    // Create app state
    let mut app = AppState::new(history);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Refresh derived session time (no-op outside the study screen)
        app.tick();
    }
}
