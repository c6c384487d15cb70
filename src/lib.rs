//! # freecell-engine
//!
//! A Freecell game model with pluggable move-legality rules.
//!
//! ## Design Principles
//!
//! 1. **Model only**: no input handling, no prompts, no rendering beyond a
//!    plain-text state snapshot. A front-end drives the engine through a
//!    narrow interface and displays what it returns.
//!
//! 2. **Policy over inheritance**: the single-card and multi-card ("build")
//!    rule sets are two implementations of one `MovePolicy` trait, selected
//!    when the game is built. They share the single-card destination rule
//!    as a common helper.
//!
//! 3. **Validate before mutate**: `start_game` and `move_card` complete all
//!    validation before touching any pile, so a failed call leaves the
//!    state byte-for-byte unchanged.
//!
//! ## Modules
//!
//! - `core`: cards, move requests, shuffle RNG
//! - `piles`: pile and pile-store data structures
//! - `rules`: the `MovePolicy` trait and both rule sets
//! - `deck`: canonical deck production and validation
//! - `game`: the `FreecellGame` engine and its builder
//! - `error`: setup and move errors

pub mod core;
pub mod deck;
pub mod error;
pub mod game;
pub mod piles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Card, Color, GameRng, MoveRequest, Suit};

pub use crate::deck::{standard_deck, validate_deck, DECK_SIZE};

pub use crate::error::{IllegalMoveError, InvalidArgumentError};

pub use crate::game::{FreecellGame, GameBuilder, Variant};

pub use crate::piles::{Pile, PileKind, PileStore, FOUNDATION_COUNT, MIN_CASCADES, MIN_OPENS};

pub use crate::rules::{supermove_capacity, BuildMovePolicy, MovePolicy, SingleMovePolicy};
