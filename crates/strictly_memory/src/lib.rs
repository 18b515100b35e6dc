//! Strictly Memory - pure memory-matching game logic
//!
//! A deck of paired images is shuffled, the player flips two cards at a
//! time, matches score points, mismatches cost a point, and a countdown
//! ends the game.
//!
//! # Architecture
//!
//! - **Deck**: picks images from the front of the pool, pairs and shuffles them
//! - **Session**: [`MemoryGame`] owns all state and runs the selection state machine
//! - **Countdown**: start/stop/tick timer advanced by injected time
//! - **Scheduler**: deferred reveal/hide actions, cancelled on reset
//! - **Contracts**: flip preconditions and session invariants
//! - **Snapshot**: immutable views for renderers
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use strictly_memory::{Deck, FlipOutcome, GameConfig, MemoryGame};
//!
//! let deck = Deck::from_order(vec!["A".into(), "B".into(), "A".into(), "B".into()])?;
//! let mut game = MemoryGame::with_deck(GameConfig::default().with_seed(7), deck);
//!
//! game.flip(0);
//! assert!(matches!(game.flip(2), FlipOutcome::Matched { .. }));
//! assert_eq!(game.score(), 10);
//!
//! game.advance(Duration::from_millis(200));
//! assert_eq!(game.matched_pairs(), 1);
//! # Ok::<(), strictly_memory::DeckError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod countdown;
mod deck;
pub mod invariants;
mod phases;
mod rng;
mod schedule;
mod session;
mod snapshot;
mod types;

// Crate-level exports - Domain types
pub use types::{Card, CardId, Face, ImageKey};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Deck building
pub use deck::{Deck, DeckError};
pub use rng::GameRng;

// Crate-level exports - Timer and deferred actions
pub use countdown::{Countdown, TickOutcome, format_clock};
pub use schedule::{DeferredAction, ScheduledAction, Scheduler};

// Crate-level exports - Session
pub use action::{FlipOutcome, FlipRejection, SessionEvent};
pub use contracts::{
    CardIsFlippable, Contract, FlipContract, LegalFlip, SelectionHasRoom, SessionOpen,
};
pub use phases::{EndMessage, Outcome, Phase, Verdict};
pub use session::MemoryGame;
pub use snapshot::{CardView, SessionSnapshot};
