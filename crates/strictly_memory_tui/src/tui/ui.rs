//! Stateless UI rendering for the memory board.
//!
//! Everything here reads a [`SessionSnapshot`]; nothing touches the live
//! session. [`screen_layout`] is shared with mouse hit-testing so clicks land
//! on exactly the rectangles that were drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_memory::{CardView, Face, Outcome, SessionSnapshot};

const MAX_CARD_WIDTH: u16 = 16;
const MAX_CARD_HEIGHT: u16 = 5;

/// Where every interactive element sits on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Score, moves and timer.
    pub stats: Rect,
    /// Clickable restart control.
    pub restart: Rect,
    /// One rectangle per card, in deck order.
    pub cards: Vec<Rect>,
    /// End-of-game message area.
    pub message: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Index of the card under the terminal cell `(column, row)`.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cards.iter().position(|rect| contains(*rect, column, row))
    }

    /// Whether `(column, row)` is on the restart control.
    pub fn is_restart(&self, column: u16, row: u16) -> bool {
        contains(self.restart, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.width > 0
        && rect.height > 0
        && column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

/// Computes the layout for `card_count` cards, `columns` per row.
pub fn screen_layout(area: Rect, card_count: usize, columns: u16) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Stats
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(area);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(13)])
        .split(chunks[1]);

    ScreenLayout {
        title: chunks[0],
        stats: stats[0],
        restart: stats[1],
        cards: grid(chunks[2], card_count, columns),
        message: chunks[3],
        help: chunks[4],
    }
}

/// Lays cards out row-major, centered, each card at most
/// `MAX_CARD_WIDTH` x `MAX_CARD_HEIGHT` with a one-cell gutter.
fn grid(area: Rect, card_count: usize, columns: u16) -> Vec<Rect> {
    if card_count == 0 {
        return Vec::new();
    }
    let columns = columns.max(1);
    let rows = card_count.div_ceil(columns as usize) as u16;

    let cell_width = (area.width / columns).min(MAX_CARD_WIDTH + 1);
    let cell_height = (area.height / rows.max(1)).min(MAX_CARD_HEIGHT);
    let origin_x = area.x + (area.width - cell_width * columns) / 2;
    let origin_y = area.y + (area.height - cell_height * rows) / 2;

    (0..card_count)
        .map(|index| {
            let col = (index % columns as usize) as u16;
            let row = (index / columns as usize) as u16;
            Rect::new(
                origin_x + col * cell_width,
                origin_y + row * cell_height,
                cell_width.saturating_sub(1),
                cell_height,
            )
        })
        .collect()
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, snapshot: &SessionSnapshot, cursor: usize, columns: u16) {
    let layout = screen_layout(frame.area(), snapshot.card_count(), columns);

    let title = Paragraph::new("Strictly Memory - find every pair")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    draw_stats(frame, layout.stats, snapshot);
    draw_restart(frame, layout.restart);

    for (card, rect) in snapshot.cards().iter().zip(&layout.cards) {
        draw_card(frame, *rect, card, *card.index() == cursor);
    }

    draw_message(frame, layout.message, snapshot);

    let help = Paragraph::new("click or arrows + enter: flip | r: restart | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_stats(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let timer_style = if *snapshot.remaining_seconds() <= 10 && *snapshot.timer_active() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            snapshot.score().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Moves: "),
        Span::styled(snapshot.moves().to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("   Pairs: "),
        Span::raw(format!("{}/{}", snapshot.matched_pairs(), snapshot.pair_count())),
        Span::raw("   Time: "),
        Span::styled(snapshot.clock(), timer_style),
    ]);

    let stats = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats, area);
}

fn draw_restart(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new("Restart")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_card(frame: &mut Frame, area: Rect, card: &CardView, highlighted: bool) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let (text, style) = match card.face() {
        Face::Down => ("?".to_string(), Style::default().fg(Color::DarkGray)),
        Face::Up => (
            card.label().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Face::Matched => (
            card.label().to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
        ),
    };

    let border = if highlighted {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border);
    let inner_height = area.height.saturating_sub(2);
    let padding = inner_height.saturating_sub(1) / 2;
    let mut lines = vec![Line::raw(""); padding as usize];
    lines.push(Line::from(Span::styled(text, style)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_message(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let (text, style) = match (snapshot.message(), snapshot.outcome()) {
        (Some(message), Some(Outcome::Won)) => (
            message.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        (Some(message), _) => (
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        (None, Some(_)) => (
            "Press r to play again".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        (None, None) => (String::new(), Style::default()),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fits_area() {
        let layout = screen_layout(Rect::new(0, 0, 80, 40), 16, 4);
        assert_eq!(layout.cards.len(), 16);
        for rect in &layout.cards {
            assert!(rect.right() <= 80 && rect.bottom() <= 40);
            assert!(rect.width >= 3 && rect.height >= 3);
        }
        // Row-major: card 1 sits right of card 0, card 4 below it.
        assert!(layout.cards[1].x > layout.cards[0].x);
        assert_eq!(layout.cards[4].x, layout.cards[0].x);
        assert!(layout.cards[4].y > layout.cards[0].y);
    }

    #[test]
    fn test_hit_testing() {
        let layout = screen_layout(Rect::new(0, 0, 80, 40), 16, 4);
        let third = layout.cards[2];
        assert_eq!(layout.card_at(third.x, third.y), Some(2));
        assert_eq!(layout.card_at(third.x + third.width - 1, third.y + third.height - 1), Some(2));
        assert_eq!(layout.card_at(0, 0), None);
        assert!(layout.is_restart(layout.restart.x + 1, layout.restart.y + 1));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = screen_layout(Rect::new(0, 0, 10, 5), 24, 6);
        assert_eq!(layout.cards.len(), 24);
    }
}
