mod app;
mod config;
mod domain;
mod evaluator;
mod input;
mod notifications;
mod store;
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
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use store::{ensure_protocol_dir, init_local_protocol, FileStorage, HistoryStore};

#[derive(Parser)]
#[command(name = "protocol")]
#[command(about = "A terminal daily-habit tracker: three fixed blocks, a tactical checklist, a night journal, and a campaign heat-map", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .protocol directory in the current directory
    Init,
    /// Print today's completion, the current streak, and the emergency flag
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let protocol_dir = init_local_protocol()?;
            println!("Initialized protocol directory: {}", protocol_dir.display());
            println!();
            println!("Protocol will now use this local directory for history storage.");
            println!("Run 'protocol' to start tracking.");
            Ok(())
        }
        Some(Commands::Status) => print_status(),
        None => run_tui(),
    }
}

fn print_status() -> Result<()> {
    let storage = FileStorage::open()?;
    let store = HistoryStore::new(Box::new(storage))?;

    let today = chrono::Local::now().date_naive();
    let record = store.load(today);
    let streak = evaluator::compute_streak(store.history(), today);
    let emergency = evaluator::is_emergency(store.history(), today);

    println!("Protocol status for {}", today);
    for cfg in &config::TASKS {
        let mark = if record.task(cfg.id) { "x" } else { " " };
        println!("  [{}] {} ({} min)", mark, cfg.label, cfg.minutes);
    }
    println!("  Streak: {} day(s)", streak);
    if emergency {
        println!("  EMERGENCY: yesterday's attempt was broken. Never miss twice.");
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    // Ensure the protocol directory exists and show which one we're using
    let protocol_dir = ensure_protocol_dir()?;
    eprintln!("Using protocol directory: {}", protocol_dir.display());

    // Build the store on disk-backed storage; malformed history loads empty
    let storage = FileStorage::open()?;
    let store = HistoryStore::new(Box::new(storage))?;
    let mut app = AppState::new(store);

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
        // Check for midnight crossing - force restart so streak, emergency,
        // and the day's record never straddle two dates
        if app.has_day_changed() && app.ui_mode != domain::UiMode::DayChanged {
            app.close_timer();
            app.ui_mode = domain::UiMode::DayChanged;
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    // If day changed, only allow quit
                    if app.ui_mode == domain::UiMode::DayChanged {
                        if key.code == event::KeyCode::Char('q') || key.code == event::KeyCode::Esc {
                            return Ok(());
                        }
                        continue; // Ignore all other keys
                    }

                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the countdown; completion marks the block done and persists
        app.tick()?;
    }
}
