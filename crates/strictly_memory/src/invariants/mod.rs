//! First-class invariants for a memory session.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and serve as documentation of system
//! guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod matched_count;
pub mod paired_deck;
pub mod selection_bound;

pub use matched_count::MatchedCountInvariant;
pub use paired_deck::PairedDeckInvariant;
pub use selection_bound::SelectionBoundInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    PairedDeckInvariant,
    SelectionBoundInvariant,
    MatchedCountInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, GameConfig, MemoryGame};

    #[test]
    fn test_fresh_session_satisfies_all() {
        let game = MemoryGame::with_seed(GameConfig::default(), 11).unwrap();
        assert!(SessionInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_reports_each_violation() {
        let deck = Deck::from_order(vec!["A".into(), "A".into()]).unwrap();
        let mut game = MemoryGame::with_deck(GameConfig::default().with_seed(0), deck);
        game.matched_pairs = 3;
        let violations = SessionInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            <MatchedCountInvariant as Invariant<MemoryGame>>::description()
        );
    }
}
