//! Tapecalc terminal calculator
//!
//! A keypad calculator with operator chaining and a session history tape.
//! All calculation rules live in the `tapecalc` engine crate; this binary
//! only translates terminal events into logical actions and renders the
//! resulting state.
//!
//! ## Usage
//!
//! ```bash
//! tapecalc-tui                     # Run with the default 50-entry tape
//! tapecalc-tui --history-limit 10  # Keep a shorter tape
//! RUST_LOG=debug tapecalc-tui      # Trace dispatched actions to stderr
//! ```

mod app;
mod input;
mod keypad;
mod ui;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tapecalc::prelude::HistoryTape;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::input::InputHandler;

/// Terminal keypad calculator with a session history tape
#[derive(Debug, Parser)]
#[command(name = "tapecalc", version, about)]
struct Cli {
    /// Maximum number of entries kept on the history tape
    #[arg(long, default_value_t = HistoryTape::DEFAULT_MAX_ENTRIES)]
    history_limit: usize,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    let cli = Cli::parse();

    // Honors RUST_LOG; silent by default so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::with_tape_capacity(cli.history_limit));

    // Restore the terminal even if the app loop failed.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    let input = InputHandler::new();

    loop {
        terminal.draw(|frame| ui::render(&app, frame))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(input.handle_key(key));
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let areas = ui::layout(Rect::new(0, 0, size.width, size.height));
                app.click(&areas, mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
