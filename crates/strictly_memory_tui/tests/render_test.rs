//! Rendering tests against ratatui's in-memory backend.

use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend};
use strictly_memory::{Deck, GameConfig, MemoryGame, SessionSnapshot};
use strictly_memory_tui::tui::draw;

fn render(snapshot: &SessionSnapshot, cursor: usize) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal.draw(|f| draw(f, snapshot, cursor, 4)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn game() -> MemoryGame {
    let deck = Deck::from_order(vec![
        "images/cat.png".into(),
        "images/dog.png".into(),
        "images/cat.png".into(),
        "images/dog.png".into(),
    ])
    .unwrap();
    MemoryGame::with_deck(GameConfig::default().with_seed(0), deck)
}

#[test]
fn test_fresh_board_hides_faces() {
    let screen = render(&game().snapshot(), 0);
    assert!(screen.contains("Score: 0"));
    assert!(screen.contains("Moves: 0"));
    assert!(screen.contains("Time: 02:00"));
    assert!(screen.contains("Restart"));
    assert!(screen.contains('?'));
    assert!(!screen.contains("cat"));
}

#[test]
fn test_revealed_cards_show_labels() {
    let mut game = game();
    game.flip(0);
    game.flip(1);
    let screen = render(&game.snapshot(), 1);
    assert!(screen.contains("cat"));
    assert!(screen.contains("dog"));
    assert!(screen.contains("Moves: 1"));
}

#[test]
fn test_win_message_shown_then_hidden() {
    let mut game = game();
    game.flip(0);
    game.flip(2);
    game.advance(Duration::from_millis(200));
    game.flip(1);
    game.flip(3);

    let screen = render(&game.snapshot(), 3);
    assert!(screen.contains("You won! Score: 20, Moves: 2"));

    game.advance(Duration::from_secs(5));
    let screen = render(&game.snapshot(), 3);
    assert!(!screen.contains("You won!"));
    assert!(screen.contains("Press r to play again"));
}
