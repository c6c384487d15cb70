//! The pile store: three named collections of piles.
//!
//! Freecell plays across three kinds of pile: cascade, open (free cell),
//! and foundation. [`PileKind`] is a plain enum that indexes directly into
//! the three collections; there is deliberately no kind-to-collection
//! lookup table built per call.

use serde::{Deserialize, Serialize};

use super::pile::Pile;

/// Number of foundation piles, one per suit.
pub const FOUNDATION_COUNT: usize = 4;

/// Minimum number of cascade piles for a valid game.
pub const MIN_CASCADES: usize = 4;

/// Minimum number of open piles for a valid game.
pub const MIN_OPENS: usize = 1;

/// The kind of a pile collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Main tableau pile; receives the initial deal.
    Cascade,
    /// Single-card scratch space (free cell).
    Open,
    /// Per-suit ascending completion pile, Ace to King.
    Foundation,
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PileKind::Cascade => "cascade",
            PileKind::Open => "open",
            PileKind::Foundation => "foundation",
        };
        f.write_str(name)
    }
}

/// The three pile collections of a game in progress.
///
/// A default-constructed store has zero piles of every kind; that is the
/// shape of a game that has never been started.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PileStore {
    cascades: Vec<Pile>,
    opens: Vec<Pile>,
    foundations: Vec<Pile>,
}

impl PileStore {
    /// Create a store with no piles at all (the never-started shape).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store with the requested number of empty cascade and open
    /// piles, and always exactly [`FOUNDATION_COUNT`] empty foundations.
    ///
    /// Count minimums are the caller's concern; `start_game` validates them
    /// before building a store.
    #[must_use]
    pub fn with_counts(num_cascades: usize, num_opens: usize) -> Self {
        Self {
            cascades: vec![Pile::new(); num_cascades],
            opens: vec![Pile::new(); num_opens],
            foundations: vec![Pile::new(); FOUNDATION_COUNT],
        }
    }

    /// All piles of a kind, in index order.
    #[must_use]
    pub fn piles(&self, kind: PileKind) -> &[Pile] {
        match kind {
            PileKind::Cascade => &self.cascades,
            PileKind::Open => &self.opens,
            PileKind::Foundation => &self.foundations,
        }
    }

    fn piles_mut(&mut self, kind: PileKind) -> &mut Vec<Pile> {
        match kind {
            PileKind::Cascade => &mut self.cascades,
            PileKind::Open => &mut self.opens,
            PileKind::Foundation => &mut self.foundations,
        }
    }

    /// The pile at `index` within the `kind` collection, if it exists.
    #[must_use]
    pub fn pile(&self, kind: PileKind, index: usize) -> Option<&Pile> {
        self.piles(kind).get(index)
    }

    /// Mutable access to the pile at `index` within the `kind` collection.
    pub fn pile_mut(&mut self, kind: PileKind, index: usize) -> Option<&mut Pile> {
        self.piles_mut(kind).get_mut(index)
    }

    /// Number of currently-empty piles of the given kind.
    #[must_use]
    pub fn empty_pile_count(&self, kind: PileKind) -> usize {
        self.piles(kind).iter().filter(|p| p.is_empty()).count()
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        [PileKind::Cascade, PileKind::Open, PileKind::Foundation]
            .into_iter()
            .map(|kind| self.piles(kind).iter().map(Pile::len).sum::<usize>())
            .sum()
    }
}
