//! Flip results and session events.
//!
//! Flips are player intent; the session answers with a [`FlipOutcome`].
//! Time passing answers with [`SessionEvent`]s. Both are plain values so
//! the renderer and logs can consume them without touching session state.

use serde::{Deserialize, Serialize};

use crate::phases::EndMessage;

/// Why a flip was ignored.
///
/// Ignored flips change nothing; they are reported rather than raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum FlipRejection {
    /// The session has ended.
    #[display("Game is already over")]
    GameOver,

    /// No card exists at this index.
    #[display("No card at index {}", _0)]
    OutOfRange(usize),

    /// The card is already matched.
    #[display("Card {} is already matched", _0)]
    AlreadyMatched(usize),

    /// The card is already face-up in the current selection.
    #[display("Card {} is already selected", _0)]
    AlreadySelected(usize),

    /// Two cards are already face-up.
    #[display("Two cards are already selected")]
    SelectionFull,
}

impl std::error::Error for FlipRejection {}

/// What a flip did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(FlipRejection),

    /// The first card of a pair was revealed.
    Revealed {
        /// Card flipped.
        index: usize,
        /// Whether this flip started the countdown.
        timer_started: bool,
    },

    /// The second card matched the first.
    Matched {
        /// First card flipped.
        first: usize,
        /// Second card flipped.
        second: usize,
        /// The end-of-game message if this was the last pair.
        finished: Option<EndMessage>,
    },

    /// The second card differed from the first.
    Mismatched {
        /// First card flipped.
        first: usize,
        /// Second card flipped.
        second: usize,
    },
}

impl FlipOutcome {
    /// Whether the flip changed session state.
    pub fn is_applied(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }
}

/// Something that happened while time advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The countdown ticked.
    Tick {
        /// Seconds left.
        remaining: u32,
    },
    /// A matched pair finished displaying; selection cleared.
    MatchSettled {
        /// First card of the pair.
        first: usize,
        /// Second card of the pair.
        second: usize,
    },
    /// A mismatched pair turned face-down; selection cleared.
    MismatchHidden {
        /// First card flipped.
        first: usize,
        /// Second card flipped.
        second: usize,
    },
    /// The countdown reached zero and the game ended.
    TimeUp(EndMessage),
    /// The end-of-game message was hidden.
    MessageHidden,
}
