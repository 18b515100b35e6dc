//! Selection bound invariant: at most two distinct cards are face-up.

use super::Invariant;
use crate::{MemoryGame, Phase, Verdict};

/// Invariant: the selection holds at most two distinct, in-range cards.
///
/// A card in `OneSelected` is never matched. In `Evaluating`, both cards
/// are matched exactly when the verdict is a match.
pub struct SelectionBoundInvariant;

impl Invariant<MemoryGame> for SelectionBoundInvariant {
    fn holds(game: &MemoryGame) -> bool {
        let matched = |index: usize| game.deck().get(index).map(|card| card.is_matched());

        match game.phase() {
            Phase::Idle | Phase::Over(_) => true,
            Phase::OneSelected(first) => matched(first) == Some(false),
            Phase::Evaluating {
                first,
                second,
                verdict,
            } => {
                let expected = Some(verdict == Verdict::Match);
                first != second && matched(first) == expected && matched(second) == expected
            }
        }
    }

    fn description() -> &'static str {
        "Selection holds at most two distinct cards and never a previously matched one"
    }
}
