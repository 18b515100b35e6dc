//! Matched count invariant: the counter agrees with the deck.

use super::Invariant;
use crate::MemoryGame;

/// Invariant: `matched_pairs` equals half the matched cards and never
/// exceeds the pair count.
pub struct MatchedCountInvariant;

impl Invariant<MemoryGame> for MatchedCountInvariant {
    fn holds(game: &MemoryGame) -> bool {
        let matched_cards = game.deck().matched_cards();
        matched_cards % 2 == 0
            && game.matched_pairs() == matched_cards / 2
            && game.matched_pairs() <= game.pair_count()
    }

    fn description() -> &'static str {
        "Matched pair count agrees with the deck and never exceeds the pair count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, GameConfig};

    #[test]
    fn test_counts_agree_after_match() {
        let deck = Deck::from_order(vec!["A".into(), "B".into(), "B".into(), "A".into()]).unwrap();
        let mut game = MemoryGame::with_deck(GameConfig::default().with_seed(0), deck);
        game.flip(1);
        game.flip(2);
        assert_eq!(game.matched_pairs(), 1);
        assert!(MatchedCountInvariant::holds(&game));
    }

    #[test]
    fn test_drifted_counter_violates() {
        let deck = Deck::from_order(vec!["A".into(), "A".into()]).unwrap();
        let mut game = MemoryGame::with_deck(GameConfig::default().with_seed(0), deck);
        game.matched_pairs = 1;
        assert!(!MatchedCountInvariant::holds(&game));
    }
}
