//! Deck building: select images, form pairs, shuffle.

use std::collections::HashSet;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Card, CardId, GameRng, ImageKey};

/// Error that can occur when building a deck.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DeckError {
    /// The image pool is empty.
    #[display("Image pool is empty")]
    EmptyPool,

    /// Zero pairs were requested.
    #[display("At least one pair is required")]
    NoPairs,

    /// The same image appears twice in the selected pool prefix.
    #[display("Image {} appears more than once in the pool", _0)]
    DuplicateImage(ImageKey),

    /// An image in a fixed order does not appear exactly twice.
    #[display("Image {} does not appear exactly twice", _0)]
    Unpaired(ImageKey),

    /// More pairs were requested than images are available.
    #[display("Requested {} pairs but only {} images are available", requested, available)]
    TooManyPairs {
        /// Pairs requested.
        requested: usize,
        /// Images in the pool.
        available: usize,
    },
}

impl std::error::Error for DeckError {}

/// An ordered, shuffled sequence of paired cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a shuffled deck of `pair_count` pairs drawn from the front of
    /// `images`.
    #[instrument(skip(images, rng), fields(pool = images.len(), seed = rng.seed()))]
    pub fn build(
        images: &[ImageKey],
        pair_count: usize,
        rng: &mut GameRng,
    ) -> Result<Self, DeckError> {
        if images.is_empty() {
            return Err(DeckError::EmptyPool);
        }
        if pair_count == 0 {
            return Err(DeckError::NoPairs);
        }
        if pair_count > images.len() {
            return Err(DeckError::TooManyPairs {
                requested: pair_count,
                available: images.len(),
            });
        }

        let picked = &images[..pair_count];
        let mut seen = HashSet::with_capacity(pair_count);
        for image in picked {
            if !seen.insert(image) {
                return Err(DeckError::DuplicateImage(image.clone()));
            }
        }

        let mut cards: Vec<Card> = picked
            .iter()
            .flat_map(|image| [image.clone(), image.clone()])
            .enumerate()
            .map(|(slot, image)| Card::new(CardId::new(slot, image.clone()), image))
            .collect();
        rng.shuffle(&mut cards);

        debug!(cards = cards.len(), "Deck built");
        Ok(Self { cards })
    }

    /// Builds a deck in exactly the given order, without shuffling.
    ///
    /// Returns [`DeckError::Unpaired`] unless every image appears
    /// exactly twice.
    #[instrument(skip(order))]
    pub fn from_order(order: Vec<ImageKey>) -> Result<Self, DeckError> {
        if order.is_empty() {
            return Err(DeckError::NoPairs);
        }
        for image in &order {
            if order.iter().filter(|other| *other == image).count() != 2 {
                return Err(DeckError::Unpaired(image.clone()));
            }
        }
        let cards = order
            .into_iter()
            .enumerate()
            .map(|(slot, image)| Card::new(CardId::new(slot, image.clone()), image))
            .collect();
        Ok(Self { cards })
    }

    /// Deals the same cards again: fresh, unmatched, reshuffled.
    #[instrument(skip(self, rng), fields(cards = self.cards.len()))]
    pub fn redeal(&self, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = self
            .cards
            .iter()
            .map(|card| Card::new(card.id().clone(), card.image().clone()))
            .collect();
        cards.sort_by_key(|card| card.id().slot());
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Returns the card at `index`.
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over cards in deal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Whether the two cards show the same image.
    pub fn is_pair(&self, first: usize, second: usize) -> bool {
        match (self.cards.get(first), self.cards.get(second)) {
            (Some(a), Some(b)) => first != second && a.image() == b.image(),
            _ => false,
        }
    }

    pub(crate) fn mark_matched(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.mark_matched();
        }
    }

    /// Number of matched cards.
    pub fn matched_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
