//! Paired deck invariant: every image appears on exactly two cards.

use std::collections::HashMap;

use super::Invariant;
use crate::MemoryGame;

/// Invariant: the deck has an even number of cards and each image key is
/// shared by exactly two of them.
pub struct PairedDeckInvariant;

impl Invariant<MemoryGame> for PairedDeckInvariant {
    fn holds(game: &MemoryGame) -> bool {
        let mut counts = HashMap::new();
        for card in game.deck() {
            *counts.entry(card.image()).or_insert(0usize) += 1;
        }
        !counts.is_empty() && counts.values().all(|&n| n == 2)
    }

    fn description() -> &'static str {
        "Every image appears on exactly two cards"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, ImageKey};

    #[test]
    fn test_dealt_deck_holds() {
        for seed in 0..10 {
            let game = MemoryGame::with_seed(GameConfig::default(), seed).unwrap();
            assert!(PairedDeckInvariant::holds(&game));
        }
    }

    #[test]
    fn test_single_pair_holds() {
        let config = GameConfig::new(vec![ImageKey::new("only")], 1);
        let game = MemoryGame::with_seed(config, 0).unwrap();
        assert!(PairedDeckInvariant::holds(&game));
    }
}
