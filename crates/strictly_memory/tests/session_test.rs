//! Tests for the memory session state machine.

use std::time::Duration;

use strictly_memory::{
    Deck, EndMessage, Face, FlipOutcome, FlipRejection, GameConfig, MemoryGame, Outcome, Phase,
    SessionEvent, Verdict,
};

fn abab(config: GameConfig) -> MemoryGame {
    let deck = Deck::from_order(vec!["A".into(), "B".into(), "A".into(), "B".into()])
        .expect("valid deck");
    MemoryGame::with_deck(config.with_seed(3), deck)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_first_flip_starts_timer_once() {
    let mut game = abab(GameConfig::default());
    assert!(!game.countdown().is_active());

    assert_eq!(
        game.flip(0),
        FlipOutcome::Revealed {
            index: 0,
            timer_started: true
        }
    );
    assert!(game.countdown().is_active());

    game.flip(1);
    game.advance(ms(800));
    assert_eq!(
        game.flip(1),
        FlipOutcome::Revealed {
            index: 1,
            timer_started: false
        }
    );
}

#[test]
fn test_match_awards_bonus() {
    let mut game = abab(GameConfig::default());
    game.flip(0);
    let outcome = game.flip(2);

    assert_eq!(
        outcome,
        FlipOutcome::Matched {
            first: 0,
            second: 2,
            finished: None
        }
    );
    assert_eq!(game.score(), 10);
    assert_eq!(game.matched_pairs(), 1);
    assert_eq!(game.moves(), 1);
    assert_eq!(
        game.phase(),
        Phase::Evaluating {
            first: 0,
            second: 2,
            verdict: Verdict::Match
        }
    );
}

#[test]
fn test_mismatch_reverts_after_delay() {
    let mut game = abab(GameConfig::default());
    game.flip(0);
    assert_eq!(game.flip(1), FlipOutcome::Mismatched { first: 0, second: 1 });
    assert_eq!(game.score(), 0);

    let faces: Vec<Face> = game.snapshot().cards().iter().map(|c| *c.face()).collect();
    assert_eq!(faces, [Face::Up, Face::Up, Face::Down, Face::Down]);

    game.advance(ms(800));
    let faces: Vec<Face> = game.snapshot().cards().iter().map(|c| *c.face()).collect();
    assert_eq!(faces, [Face::Down; 4]);
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_mismatch_subtracts_from_positive_score() {
    let deck = Deck::from_order(
        ["A", "A", "B", "C", "B", "C"]
            .into_iter()
            .map(Into::into)
            .collect(),
    )
    .expect("valid deck");
    let mut game = MemoryGame::with_deck(GameConfig::default().with_seed(0), deck);

    game.flip(0);
    game.flip(1);
    game.advance(ms(200));
    assert_eq!(game.score(), 10);

    game.flip(2);
    game.flip(3);
    assert_eq!(game.score(), 9);
    assert_eq!(game.moves(), 2);
}

#[test]
fn test_ignored_flips_change_nothing() {
    let mut game = abab(GameConfig::default());
    game.flip(0);

    assert_eq!(
        game.flip(0),
        FlipOutcome::Ignored(FlipRejection::AlreadySelected(0))
    );
    assert_eq!(game.flip(9), FlipOutcome::Ignored(FlipRejection::OutOfRange(9)));

    game.flip(2);
    assert_eq!(game.flip(1), FlipOutcome::Ignored(FlipRejection::SelectionFull));
    game.advance(ms(200));
    assert_eq!(
        game.flip(2),
        FlipOutcome::Ignored(FlipRejection::AlreadyMatched(2))
    );
    assert_eq!(game.moves(), 1);
    assert_eq!(game.score(), 10);
}

#[test]
fn test_win_ends_game_with_message() {
    let mut game = abab(GameConfig::default());
    game.flip(0);
    game.flip(1);
    game.advance(ms(800));
    game.flip(0);
    game.flip(2);
    game.advance(ms(200));
    game.flip(1);

    let expected = EndMessage {
        outcome: Outcome::Won,
        score: 20,
        moves: 3,
    };
    assert_eq!(
        game.flip(3),
        FlipOutcome::Matched {
            first: 1,
            second: 3,
            finished: Some(expected)
        }
    );
    assert_eq!(game.phase(), Phase::Over(Outcome::Won));
    assert!(!game.countdown().is_active());
    assert_eq!(
        game.snapshot().message().as_deref(),
        Some("You won! Score: 20, Moves: 3")
    );
    assert_eq!(game.flip(0), FlipOutcome::Ignored(FlipRejection::GameOver));
}

#[test]
fn test_message_hides_after_five_seconds() {
    let mut game = abab(GameConfig::default());
    game.flip(0);
    game.flip(2);
    game.advance(ms(200));
    game.flip(1);
    game.flip(3);
    assert!(game.message().is_some());

    assert!(game.advance(ms(4999)).is_empty());
    assert_eq!(game.advance(ms(1)), vec![SessionEvent::MessageHidden]);
    assert!(game.message().is_none());
    assert!(game.is_over());
}

#[test]
fn test_countdown_expiry_is_a_loss() {
    let mut game = abab(GameConfig::default().with_timer_seconds(3));
    game.flip(0);
    game.flip(2);

    let events = game.advance(Duration::from_secs(3));
    let expected = EndMessage {
        outcome: Outcome::TimeUp,
        score: 10,
        moves: 1,
    };
    assert_eq!(
        events,
        vec![
            SessionEvent::MatchSettled { first: 0, second: 2 },
            SessionEvent::Tick { remaining: 2 },
            SessionEvent::Tick { remaining: 1 },
            SessionEvent::TimeUp(expected),
        ]
    );
    assert_eq!(game.countdown().remaining(), 0);
    assert_eq!(
        game.message().map(ToString::to_string).as_deref(),
        Some("Time's up! Score: 10, Moves: 1")
    );
    assert_eq!(game.next_deadline(), Some(ms(5000)));
}

#[test]
fn test_ticks_once_per_second() {
    let mut game = abab(GameConfig::default());
    game.flip(0);
    assert_eq!(game.next_deadline(), Some(Duration::from_secs(1)));

    let events = game.advance(ms(2500));
    assert_eq!(
        events,
        vec![
            SessionEvent::Tick { remaining: 119 },
            SessionEvent::Tick { remaining: 118 },
        ]
    );
    assert_eq!(game.snapshot().clock(), "01:58");
    assert_eq!(game.next_deadline(), Some(ms(500)));
}

#[test]
fn test_reset_restores_fresh_session() {
    let mut game = abab(GameConfig::default());
    game.flip(0);
    game.flip(2);
    game.advance(Duration::from_secs(10));
    game.reset();

    let snapshot = game.snapshot();
    assert_eq!(*snapshot.score(), 0);
    assert_eq!(*snapshot.moves(), 0);
    assert_eq!(*snapshot.matched_pairs(), 0);
    assert_eq!(*snapshot.remaining_seconds(), 120);
    assert!(!*snapshot.timer_active());
    assert!(snapshot.cards().iter().all(|c| *c.face() == Face::Down));
    assert_eq!(game.next_deadline(), None);
}

#[test]
fn test_seeded_sessions_deal_identically() {
    let a = MemoryGame::with_seed(GameConfig::default(), 42).expect("deal");
    let b = MemoryGame::with_seed(GameConfig::default(), 42).expect("deal");
    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.pair_count(), 8);
}

#[test]
fn test_oversized_pair_count_is_capped() {
    let config = GameConfig::default().with_pair_count(50);
    let game = MemoryGame::with_seed(config, 1).expect("deal");
    assert_eq!(game.pair_count(), 12);
    assert_eq!(game.deck().len(), 24);
}
