//! Move-legality policies.

pub mod policy;

pub use policy::{supermove_capacity, BuildMovePolicy, MovePolicy, SingleMovePolicy};
