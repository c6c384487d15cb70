//! Move request representation.
//!
//! A [`MoveRequest`] names a source position (pile kind, pile index, card
//! index) and a destination (pile kind, pile index). The engine doesn't
//! interpret requests beyond handing them to the active move policy; the
//! policy decides legality and the engine performs the transfer.
//!
//! All indices are 0-based. A 1-based user-facing numbering is a front-end
//! translation concern, not the engine's.

use serde::{Deserialize, Serialize};

use crate::piles::PileKind;

/// A proposed move from one pile position to another.
///
/// ```
/// use freecell_engine::core::MoveRequest;
/// use freecell_engine::piles::PileKind;
///
/// // Move the 13th card of the first cascade onto the first open cell.
/// let request = MoveRequest::new(PileKind::Cascade, 0, 12, PileKind::Open, 0);
/// assert_eq!(request.card_index, 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Kind of the source pile collection.
    pub source: PileKind,

    /// Index of the source pile within its collection.
    pub source_pile: usize,

    /// Index of the card within the source pile. For a multi-card move this
    /// names the first (deepest) card of the build; everything from here to
    /// the pile's tail moves as a unit.
    pub card_index: usize,

    /// Kind of the destination pile collection.
    pub dest: PileKind,

    /// Index of the destination pile within its collection.
    pub dest_pile: usize,
}

impl MoveRequest {
    /// Create a move request.
    #[must_use]
    pub fn new(
        source: PileKind,
        source_pile: usize,
        card_index: usize,
        dest: PileKind,
        dest_pile: usize,
    ) -> Self {
        Self {
            source,
            source_pile,
            card_index,
            dest,
            dest_pile,
        }
    }
}
