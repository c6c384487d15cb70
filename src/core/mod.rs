//! Core value types: cards, move requests, and the shuffle RNG.

pub mod card;
pub mod request;
pub mod rng;

pub use card::{Card, Color, Suit};
pub use request::MoveRequest;
pub use rng::GameRng;
