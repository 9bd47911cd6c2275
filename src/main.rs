mod app;
mod domain;
mod input;
mod persistence;
mod report;
mod store;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    ensure_ember_dir, init_local_ember, load_settings, JsonTaskService, TaskService,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use store::TaskStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "A terminal pomodoro tracker for tasks and task groups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .ember directory in the current directory
    Init,
    /// Generate a progress report across all groups and tasks
    Report {
        /// Output file path. Defaults to ~/.ember/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let ember_dir = init_local_ember()?;
            println!("Initialized ember directory: {}", ember_dir.display());
            println!();
            println!("Ember will now use this local directory for task storage.");
            println!("Run 'ember' to start tracking pomodoros.");
            Ok(())
        }
        Some(Commands::Report { output }) => {
            let dir = ensure_ember_dir()?;
            let service = JsonTaskService::new(dir.clone());
            let groups = service.get_task_groups()?;
            let tasks = service.get_tasks()?;
            let settings = load_settings(dir.join("settings.json"))?;

            let report_path =
                report::generate_report(&groups, &tasks, &settings, output.map(PathBuf::from))?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    let ember_dir = ensure_ember_dir()?;
    init_logging(&ember_dir)?;

    let settings = load_settings(ember_dir.join("settings.json"))?;
    let service = JsonTaskService::new(ember_dir);
    let mut app = AppState::new(TaskStore::new(service), settings);

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

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Log to a file inside the data directory so the TUI stays clean
fn init_logging(ember_dir: &std::path::Path) -> Result<()> {
    let log_file = File::create(ember_dir.join("ember.log"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app<S: TaskService>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState<S>,
) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
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

        // Advance the countdown
        app.on_tick();
    }
}
