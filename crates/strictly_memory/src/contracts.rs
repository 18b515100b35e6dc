//! Contract-based validation for flips.
//!
//! Contracts define correctness through preconditions and postconditions.
//! A flip that fails its precondition is ignored; postconditions are the
//! session invariants, checked in debug builds after every transition.

use tracing::instrument;

use crate::action::FlipRejection;
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::phases::Phase;
use crate::session::MemoryGame;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Why a precondition failed.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Flip Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session has not ended.
pub struct SessionOpen;

impl SessionOpen {
    /// Rejects flips after the game is over.
    pub fn check(game: &MemoryGame) -> Result<(), FlipRejection> {
        if matches!(game.phase(), Phase::Over(_)) {
            Err(FlipRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: fewer than two cards are face-up.
pub struct SelectionHasRoom;

impl SelectionHasRoom {
    /// Rejects flips while a pair is being displayed.
    pub fn check(game: &MemoryGame) -> Result<(), FlipRejection> {
        if matches!(game.phase(), Phase::Evaluating { .. }) {
            Err(FlipRejection::SelectionFull)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the card exists, is unmatched and is not already selected.
pub struct CardIsFlippable;

impl CardIsFlippable {
    /// Rejects flips on missing, matched or selected cards.
    pub fn check(index: usize, game: &MemoryGame) -> Result<(), FlipRejection> {
        let card = game
            .deck()
            .get(index)
            .ok_or(FlipRejection::OutOfRange(index))?;
        if card.is_matched() {
            return Err(FlipRejection::AlreadyMatched(index));
        }
        if game.phase().is_selected(index) {
            return Err(FlipRejection::AlreadySelected(index));
        }
        Ok(())
    }
}

/// Composite precondition for a flip.
///
/// Order matters for the reported reason: a finished game outranks a full
/// selection, which outranks anything about the card itself.
pub struct LegalFlip;

impl LegalFlip {
    /// Validates all preconditions for a flip.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &MemoryGame) -> Result<(), FlipRejection> {
        SessionOpen::check(game)?;
        SelectionHasRoom::check(game)?;
        CardIsFlippable::check(index, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Flip Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for flips.
///
/// Preconditions:
/// - Game not over
/// - Fewer than two cards selected
/// - Card exists, unmatched, not selected
///
/// Postconditions:
/// - Deck still holds exactly two cards per image
/// - Selection holds at most two distinct cards
/// - Matched count agrees with the deck
pub struct FlipContract;

impl Contract<MemoryGame, usize> for FlipContract {
    type Rejection = FlipRejection;

    fn pre(game: &MemoryGame, index: &usize) -> Result<(), FlipRejection> {
        LegalFlip::check(*index, game)
    }

    fn post(after: &MemoryGame) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(after)
    }
}
