//! Terminal UI for Strictly Memory

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, Direction, command_for_key, move_cursor};
pub use ui::{ScreenLayout, draw, screen_layout};

use std::io::{self, Stdout, Write};
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use strictly_memory::{GameConfig, MemoryGame};
use tokio::time::{Duration, Instant, sleep};
use tracing::{error, info, instrument};

use crate::logging::init_file_tracing;

/// Longest wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the terminal game until the player quits.
pub async fn run_tui(config: GameConfig, log_file: &Path) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    init_file_tracing(log_file)?;

    info!("Starting Strictly Memory TUI");

    let game = MemoryGame::new(config).context("Failed to deal the deck")?;
    info!(seed = game.seed(), pairs = game.pair_count(), "Deck dealt");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            if let Err(restore) = restore_terminal() {
                error!(error = ?restore, "Failed to restore terminal");
            }
            return Err(err).context("Failed to set up terminal");
        }
    };

    let res = run_game(&mut terminal, App::new(game)).await;
    let restored = restore_terminal();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }

    res?;
    restored.context("Failed to restore terminal")
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves raw mode and the alternate screen, attempting every step.
fn restore_terminal() -> io::Result<()> {
    restore_screen(disable_raw_mode(), &mut io::stdout())
}

/// Writes the screen restore sequence even when leaving raw mode failed,
/// then reports the first error.
fn restore_screen<W: Write>(raw_mode: io::Result<()>, out: &mut W) -> io::Result<()> {
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw_mode.and(screen)
}

/// Draw, read input, advance the session by the wall time that passed.
#[instrument(skip_all)]
async fn run_game(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut last = Instant::now();

    loop {
        let snapshot = app.snapshot();
        let (cursor, columns) = (app.cursor(), app.columns());
        let frame = terminal.draw(|f| draw(f, &snapshot, cursor, columns))?;
        app.set_area(frame.area);

        // Wake up in time for the next deferred action.
        let timeout = app
            .next_deadline()
            .map_or(POLL_INTERVAL, |deadline| deadline.min(POLL_INTERVAL));

        if event::poll(timeout)? {
            match event::read()? {
                // Skip key release events (crossterm fires both press and release).
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        let now = Instant::now();
        app.advance(now - last);
        last = now;

        if app.should_quit() {
            info!(
                score = app.game().score(),
                moves = app.game().moves(),
                "Leaving game"
            );
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }
}
