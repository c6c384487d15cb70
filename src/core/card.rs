//! Card, suit, and color value types.
//!
//! A [`Card`] is an immutable (rank, suit) pair. Rank is validated into
//! `1..=13` at construction, so an out-of-range card is unrepresentable
//! after `Card::new` succeeds. Two cards are "the same card" iff rank and
//! suit both match; `PartialEq`/`Eq`/`Hash` encode exactly that.

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgumentError;

/// Display tokens for ranks 1..=13, indexed by `rank - 1`.
const RANK_TOKENS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// One of the four card suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Diamonds,
    Hearts,
}

impl Suit {
    /// All four suits, in the canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

    /// The color of this suit: clubs and spades are black, diamonds and
    /// hearts are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    /// The display glyph for this suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A suit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// A playing card: rank `1..=13` (Ace through King) plus a suit.
///
/// ```
/// use freecell_engine::core::{Card, Suit};
///
/// let ace = Card::new(1, Suit::Spades).unwrap();
/// assert_eq!(ace.to_string(), "A♠");
///
/// // Rank 0 and 14 are rejected at construction.
/// assert!(Card::new(0, Suit::Spades).is_err());
/// assert!(Card::new(14, Suit::Hearts).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

/// Wire shape for `Card`. Conversion re-runs the rank check, so an
/// out-of-range card cannot enter through deserialization either.
#[derive(Deserialize)]
struct RawCard {
    rank: u8,
    suit: Suit,
}

impl TryFrom<RawCard> for Card {
    type Error = InvalidArgumentError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.rank, raw.suit)
    }
}

impl Card {
    /// Create a card, rejecting ranks outside `1..=13`.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, InvalidArgumentError> {
        if !(1..=13).contains(&rank) {
            return Err(InvalidArgumentError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    /// The rank, `1..=13`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The color, derived from the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Whether this card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == 1
    }

    /// Whether both cards share a suit.
    #[must_use]
    pub fn same_suit(self, other: Card) -> bool {
        self.suit == other.suit
    }

    /// Whether the two cards have different colors.
    #[must_use]
    pub fn different_color(self, other: Card) -> bool {
        self.color() != other.color()
    }

    /// Whether this card's rank is exactly one above `other`'s.
    #[must_use]
    pub fn is_one_above(self, other: Card) -> bool {
        self.rank == other.rank + 1
    }

    /// Whether this card's rank is exactly one below `other`'s.
    #[must_use]
    pub fn is_one_below(self, other: Card) -> bool {
        self.rank + 1 == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", RANK_TOKENS[(self.rank - 1) as usize], self.suit)
    }
}
