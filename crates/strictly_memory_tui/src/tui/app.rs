//! Application state and input handling.

use std::time::Duration;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_memory::{FlipOutcome, MemoryGame, SessionEvent, SessionSnapshot};
use tracing::{debug, info, instrument};

use super::input::{Command, command_for_key, move_cursor};
use super::ui::screen_layout;

/// Main application state: the game controller plus what the terminal adds
/// on top (cursor, last drawn area).
#[derive(Debug)]
pub struct App {
    game: MemoryGame,
    cursor: usize,
    columns: u16,
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a dealt session.
    pub fn new(game: MemoryGame) -> Self {
        let columns = (*game.config().columns()).max(1);
        Self {
            game,
            cursor: 0,
            columns,
            area: Rect::default(),
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    /// Snapshot for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.game.snapshot()
    }

    /// Card under the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cards per row.
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the terminal area of the last draw, for mouse hit-testing.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(command) = command_for_key(key) else {
            return;
        };
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Restart => self.restart(),
            Command::Flip => self.flip(self.cursor),
            Command::Move(direction) => {
                self.cursor = move_cursor(
                    self.cursor,
                    direction,
                    self.game.deck().len(),
                    self.columns as usize,
                );
            }
        }
    }

    /// Handles a mouse event: left clicks flip cards or press restart.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = screen_layout(self.area, self.game.deck().len(), self.columns);
        if layout.is_restart(mouse.column, mouse.row) {
            self.restart();
        } else if let Some(index) = layout.card_at(mouse.column, mouse.row) {
            self.cursor = index;
            self.flip(index);
        }
    }

    /// Feeds elapsed wall time to the session.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        let events = self.game.advance(elapsed);
        for event in &events {
            debug!(?event, "Session event");
        }
        events
    }

    /// Time until the session next needs to run, if anything is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.game.next_deadline()
    }

    fn flip(&mut self, index: usize) {
        match self.game.flip(index) {
            FlipOutcome::Ignored(reason) => debug!(index, %reason, "Flip ignored"),
            FlipOutcome::Matched {
                finished: Some(message),
                ..
            } => info!(%message, "All pairs found"),
            outcome => debug!(?outcome, "Flip applied"),
        }
    }

    fn restart(&mut self) {
        info!("Restarting game");
        self.game.reset();
        self.cursor = 0;
    }
}
