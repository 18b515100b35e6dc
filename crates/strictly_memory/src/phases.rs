//! Selection phases and game outcomes.

use serde::{Deserialize, Serialize};

/// Result of comparing two flipped cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Verdict {
    /// Both cards show the same image.
    Match,
    /// The images differ.
    Mismatch,
}

/// Where the selection state machine currently is.
///
/// The flipped selection lives inside the phase, so it can never hold more
/// than two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card is face-up (apart from matched ones).
    Idle,
    /// One card is face-up.
    OneSelected(usize),
    /// Two cards are face-up and waiting for their display delay.
    Evaluating {
        /// First card flipped.
        first: usize,
        /// Second card flipped.
        second: usize,
        /// Comparison result.
        verdict: Verdict,
    },
    /// The session has ended.
    Over(Outcome),
}

impl Phase {
    /// Indices of currently selected cards, in flip order.
    pub fn selection(&self) -> Vec<usize> {
        match *self {
            Phase::OneSelected(first) => vec![first],
            Phase::Evaluating { first, second, .. } => vec![first, second],
            Phase::Idle | Phase::Over(_) => Vec::new(),
        }
    }

    /// Whether `index` is part of the current selection.
    pub fn is_selected(&self, index: usize) -> bool {
        match *self {
            Phase::OneSelected(first) => first == index,
            Phase::Evaluating { first, second, .. } => first == index || second == index,
            Phase::Idle | Phase::Over(_) => false,
        }
    }

    /// The outcome, if the session has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            Phase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Short label for status lines and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::OneSelected(_) => "one selected",
            Phase::Evaluating { .. } => "evaluating",
            Phase::Over(_) => "game over",
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Every pair was matched before the countdown ran out.
    #[display("You won!")]
    Won,
    /// The countdown reached zero first.
    #[display("Time's up!")]
    TimeUp,
}

impl Outcome {
    /// Whether the player won.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// The transient end-of-game message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} Score: {}, Moves: {}", outcome, score, moves)]
pub struct EndMessage {
    /// How the game ended.
    pub outcome: Outcome,
    /// Final score.
    pub score: u32,
    /// Final move count.
    pub moves: u32,
}
