//! Error types for game setup and move validation.
//!
//! Two kinds of failure cover the whole engine:
//!
//! - [`InvalidArgumentError`]: malformed setup input (bad card rank, bad
//!   deck, pile counts below the minimums). Raised from `Card::new` and
//!   `start_game`.
//! - [`IllegalMoveError`]: a move that violates the rules. This is an
//!   expected, recoverable outcome: callers report the message and let the
//!   user try again.
//!
//! Every variant carries a human-readable message suitable for verbatim
//! display.

use crate::core::card::Card;
use crate::piles::PileKind;

/// Malformed setup input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgumentError {
    #[error("card rank must be between 1 and 13, got {0}")]
    InvalidRank(u8),

    #[error("a deck must contain exactly 52 cards, got {0}")]
    WrongDeckSize(usize),

    #[error("deck contains {0} more than once")]
    DuplicateCard(Card),

    #[error("a game needs at least 4 cascade piles, got {0}")]
    TooFewCascades(usize),

    #[error("a game needs at least 1 open pile, got {0}")]
    TooFewOpens(usize),
}

/// A move that violates the rules of the selected variant.
///
/// The game state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("no game in progress")]
    NotStarted,

    #[error("no {kind} pile at index {index}")]
    NoSuchPile { kind: PileKind, index: usize },

    #[error("no card at index {index} in a pile of {pile_len} cards")]
    NoSuchCard { index: usize, pile_len: usize },

    #[error("the source pile is empty and has no cards to move")]
    EmptySource,

    #[error("only the top card of a pile can be moved")]
    NotAtTail,

    #[error("an open cell can hold only one card at a time")]
    OpenOccupied,

    #[error("only an ace may be placed on an empty foundation pile")]
    FoundationNeedsAce,

    #[error("card must be the same suit as the foundation pile")]
    FoundationSuitMismatch,

    #[error("card must be one rank higher than the top of the foundation pile")]
    FoundationRankMismatch,

    #[error("card is the same color as the top of the destination cascade")]
    CascadeColorClash,

    #[error("card must be one rank lower than the top of the destination cascade")]
    CascadeRankMismatch,

    #[error("invalid build: colors must alternate")]
    BrokenRunColor,

    #[error("invalid build: ranks must descend by one")]
    BrokenRunRank,

    #[error("cannot move more than one card off a foundation pile")]
    MultiFromFoundation,

    #[error("cannot move more than one card onto a foundation pile")]
    MultiToFoundation,

    #[error("cannot move more than one card onto an open cell")]
    MultiToOpen,

    #[error("not enough free slots to move {build} cards (capacity is {capacity})")]
    InsufficientCapacity { build: usize, capacity: u64 },
}
