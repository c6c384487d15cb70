//! Pile data structures: single piles and the three-collection store.

pub mod pile;
pub mod store;

pub use pile::Pile;
pub use store::{PileKind, PileStore, FOUNDATION_COUNT, MIN_CASCADES, MIN_OPENS};
