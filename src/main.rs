// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod auth;
mod data;
mod events;
mod sim;
mod source;
mod ui;

use app::{App, View};
use auth::{AuthGate, Credentials};
use sim::{SeededRandom, TelemetrySession, ThreadRandom, UniformSource};
use ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "orewatch")]
#[command(about = "Executive TUI dashboard with simulated IoT telemetry")]
struct Args {
    /// Config file overriding the built-in demo credentials
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the simulation for a reproducible demo run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the login gate and open the dashboard directly
    #[arg(long)]
    skip_login: bool,

    /// Color theme: auto, dark, or light
    #[arg(long, default_value = "auto")]
    theme: String,

    /// Export the pitch figures to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return export_to_file(export_path, args.seed);
    }

    let credentials = Credentials::load(args.config.as_deref())?;
    let auth = if args.skip_login {
        AuthGate::pre_authorized(credentials)
    } else {
        AuthGate::new(credentials)
    };
    let theme = Theme::from_flag(&args.theme);

    // The ticker task needs a live runtime while the draw loop occupies
    // the main thread.
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    run_tui(App::new(auth, theme, args.seed))
}

/// Route tracing output to a file; the raw-mode screen cannot take it.
///
/// Logging is opt-in via `RUST_LOG` so a plain demo run leaves no files
/// behind.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = std::fs::File::create("orewatch.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the TUI until the operator quits.
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 70;
    const MIN_HEIGHT: u16 = 20;

    while app.running {
        // Promote a pending login and drain the telemetry channel
        app.refresh();

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            if !app.auth.is_signed_in() {
                ui::login::render(frame, app, area);
                return;
            }

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with the live sensor state
            ui::common::render_header(frame, app, chunks[0]);

            // Render tabs
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current view
            match app.current_view {
                View::Dashboard => ui::dashboard::render(frame, app, chunks[2]),
                View::Budget => ui::budget::render(frame, app, chunks[2]),
                View::Scorecard => ui::scorecard::render(frame, app, chunks[2]),
                View::Gallery => ui::gallery::render(frame, app, chunks[2]),
            }

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render media detail overlay if active
            if app.show_media_overlay {
                ui::gallery::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Export the pitch figures to a JSON file without opening the TUI.
///
/// Runs a short offline session so the telemetry section has content;
/// `--seed` makes the run reproducible.
fn export_to_file(export_path: &Path, seed: Option<u64>) -> Result<()> {
    let rng: Box<dyn UniformSource + Send> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let mut session = TelemetrySession::new(rng);
    let mut snapshot = session.snapshot();
    for _ in 0..5 {
        snapshot = session.tick();
    }

    let mut app = App::new(
        AuthGate::new(Credentials::default()),
        Theme::dark(),
        seed,
    );
    app.telemetry = Some(snapshot);
    app.export_state(export_path)?;

    println!("Exported pitch figures to: {}", export_path.display());
    Ok(())
}
