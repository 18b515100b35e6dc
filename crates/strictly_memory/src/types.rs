//! Core domain types for the memory game.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of an image resource (e.g. `images/meme1.png`).
///
/// Exactly two cards in a deck share each key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageKey(String);

impl ImageKey {
    /// Creates a new image key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short human label: the file stem of the identifier.
    ///
    /// `images/meme10.webp` becomes `meme10`.
    pub fn label(&self) -> &str {
        let name = self.0.rsplit(['/', '\\']).next().unwrap_or(&self.0);
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }
}

impl From<&str> for ImageKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Identity of a card slot, unique within a deck.
///
/// Displays as `<slot>-<image>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{slot}-{image}")]
pub struct CardId {
    slot: usize,
    image: ImageKey,
}

impl CardId {
    /// Creates an identity for the card dealt into `slot` before shuffling.
    pub fn new(slot: usize, image: ImageKey) -> Self {
        Self { slot, image }
    }

    /// Slot the card occupied when the pairs were formed.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// A single card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    image: ImageKey,
    matched: bool,
}

impl Card {
    /// Creates a face-down, unmatched card.
    pub fn new(id: CardId, image: ImageKey) -> Self {
        Self {
            id,
            image,
            matched: false,
        }
    }

    /// Returns the card identity.
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the image shown on the card face.
    pub fn image(&self) -> &ImageKey {
        &self.image
    }

    /// Whether the card has been matched.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }
}

/// How a card currently presents to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Face {
    /// Hidden.
    Down,
    /// Revealed as part of the current selection.
    Up,
    /// Permanently revealed.
    Matched,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_strips_directory_and_extension() {
        assert_eq!(ImageKey::new("images/meme10.webp").label(), "meme10");
        assert_eq!(ImageKey::new("star").label(), "star");
        assert_eq!(ImageKey::new(".hidden").label(), ".hidden");
    }

    #[test]
    fn test_card_id_display() {
        let id = CardId::new(3, ImageKey::new("images/meme2.png"));
        assert_eq!(id.to_string(), "3-images/meme2.png");
    }

    #[test]
    fn test_new_card_is_unmatched() {
        let image = ImageKey::new("a");
        let mut card = Card::new(CardId::new(0, image.clone()), image);
        assert!(!card.is_matched());
        card.mark_matched();
        assert!(card.is_matched());
    }
}
