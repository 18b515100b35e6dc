//! Immutable views of a session for renderers.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::countdown::format_clock;
use crate::phases::{Outcome, Phase};
use crate::session::MemoryGame;
use crate::{Face, ImageKey};

/// One card as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct CardView {
    /// Position in the deck.
    index: usize,
    /// Image on the card face.
    image: ImageKey,
    /// How the card presents.
    face: Face,
}

impl CardView {
    /// Text shown on the card face when revealed.
    pub fn label(&self) -> &str {
        self.image.label()
    }

    /// Whether the face is visible.
    pub fn is_revealed(&self) -> bool {
        self.face != Face::Down
    }
}

/// Everything a renderer needs, detached from the live session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Cards in deal order.
    cards: Vec<CardView>,
    /// Current score.
    score: u32,
    /// Completed two-card attempts.
    moves: u32,
    /// Pairs found so far.
    matched_pairs: usize,
    /// Pairs in the deck.
    pair_count: usize,
    /// Countdown seconds left.
    remaining_seconds: u32,
    /// Whether the countdown is running.
    timer_active: bool,
    /// Selection phase.
    phase: Phase,
    /// End-of-game message while visible.
    message: Option<String>,
    /// How the session ended, if it has.
    outcome: Option<Outcome>,
}

impl SessionSnapshot {
    pub(crate) fn capture(game: &MemoryGame) -> Self {
        let phase = game.phase();
        let cards = game
            .deck()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let face = if card.is_matched() {
                    Face::Matched
                } else if phase.is_selected(index) {
                    Face::Up
                } else {
                    Face::Down
                };
                CardView::new(index, card.image().clone(), face)
            })
            .collect();

        Self {
            cards,
            score: game.score(),
            moves: game.moves(),
            matched_pairs: game.matched_pairs(),
            pair_count: game.pair_count(),
            remaining_seconds: game.countdown().remaining(),
            timer_active: game.countdown().is_active(),
            phase,
            message: game.message().map(ToString::to_string),
            outcome: phase.outcome(),
        }
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    /// Number of cards on the board.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
