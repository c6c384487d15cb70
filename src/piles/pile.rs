//! A single ordered pile of cards.
//!
//! Piles follow stack discipline: the last element is the top, cards are
//! appended at the tail, and removal only ever happens from the tail. The
//! move validator enforces the tail-only rule on requests; `Pile` itself
//! simply doesn't expose interior removal.

use crate::core::card::Card;

/// An ordered, tail-discipline sequence of cards.
///
/// Index 0 is the bottom; the last index is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card at the tail (the top).
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The top card, if any.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// The card at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove the contiguous suffix starting at `from`, preserving order.
    ///
    /// The returned iterator yields the removed cards bottom-first, so
    /// collecting and appending them elsewhere keeps their relative order.
    pub fn drain_from(&mut self, from: usize) -> std::vec::Drain<'_, Card> {
        self.cards.drain(from..)
    }

    /// Append cards at the tail, preserving their order.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }
}
