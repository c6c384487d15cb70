//! Deck factory: the canonical 52-card deck and deck validation.

use crate::core::card::{Card, Suit};
use crate::error::InvalidArgumentError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// The canonical deck, in a fixed deterministic order: rank-major, with
/// suits cycling Clubs, Spades, Diamonds, Hearts within each rank. The
/// first card is A♣ and the last is K♥.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in 1..=13 {
        for suit in Suit::ALL {
            let card = Card::new(rank, suit).expect("ranks 1..=13 are valid");
            deck.push(card);
        }
    }
    deck
}

/// Check that a deck is playable: exactly 52 cards, no two the same.
///
/// Individual card well-formedness is already guaranteed by `Card::new`,
/// so only the count and the all-pairs duplicate scan remain. O(n²) at
/// n = 52 is fine.
pub fn validate_deck(deck: &[Card]) -> Result<(), InvalidArgumentError> {
    if deck.len() != DECK_SIZE {
        return Err(InvalidArgumentError::WrongDeckSize(deck.len()));
    }
    for (i, card) in deck.iter().enumerate() {
        for other in &deck[i + 1..] {
            if card == other {
                return Err(InvalidArgumentError::DuplicateCard(*card));
            }
        }
    }
    Ok(())
}
