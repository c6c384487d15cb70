//! The game engine: lifecycle, move dispatch, and state rendering.
//!
//! [`FreecellGame`] owns the pile store and the selected move policy. It is
//! the sole mutator: `start_game` builds and deals the board, `move_card`
//! validates through the policy and then transfers cards, and everything
//! else is a read (`is_game_over`, `render_state`).
//!
//! Both mutating operations are atomic: all validation completes before the
//! first mutation, so a failed call leaves the piles byte-for-byte
//! unchanged, including a previously started game surviving a failed
//! `start_game`.
//!
//! ```
//! use freecell_engine::game::{FreecellGame, Variant};
//! use freecell_engine::core::MoveRequest;
//! use freecell_engine::piles::PileKind;
//!
//! let mut game = FreecellGame::builder().variant(Variant::MultiMove).build();
//! game.start_game(&FreecellGame::standard_deck(), 8, 4, false).unwrap();
//!
//! // The first cascade's top card moves to an open cell.
//! let top = game.piles().pile(PileKind::Cascade, 0).unwrap().len() - 1;
//! let request = MoveRequest::new(PileKind::Cascade, 0, top, PileKind::Open, 0);
//! game.move_card(&request).unwrap();
//! ```

use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::request::MoveRequest;
use crate::core::rng::GameRng;
use crate::deck::{standard_deck, validate_deck};
use crate::error::{IllegalMoveError, InvalidArgumentError};
use crate::piles::{Pile, PileKind, PileStore, MIN_CASCADES, MIN_OPENS};
use crate::rules::{BuildMovePolicy, MovePolicy, SingleMovePolicy};

/// Which move rules a game plays with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// One card per move.
    SingleMove,
    /// Multi-card builds per move.
    MultiMove,
}

/// Builder for [`FreecellGame`].
///
/// Selects the rules variant and, optionally, a fixed RNG seed for
/// reproducible shuffles. The default is the single-move variant with an
/// entropy-seeded RNG.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    variant: Variant,
    seed: Option<u64>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            variant: Variant::SingleMove,
            seed: None,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the rules variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Pin the shuffle RNG to a seed. Games built without a seed draw one
    /// from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a game in the never-started state.
    #[must_use]
    pub fn build(self) -> FreecellGame {
        let policy: Box<dyn MovePolicy> = match self.variant {
            Variant::SingleMove => Box::new(SingleMovePolicy),
            Variant::MultiMove => Box::new(BuildMovePolicy),
        };
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        FreecellGame {
            piles: PileStore::empty(),
            policy,
            rng,
            started: false,
        }
    }
}

/// A Freecell game: the three pile collections plus the active move policy.
#[derive(Debug)]
pub struct FreecellGame {
    piles: PileStore,
    policy: Box<dyn MovePolicy>,
    rng: GameRng,
    started: bool,
}

impl FreecellGame {
    /// Start configuring a game.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// The canonical 52-card deck, in a fixed deterministic order.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        standard_deck()
    }

    /// Read access to the current piles.
    #[must_use]
    pub fn piles(&self) -> &PileStore {
        &self.piles
    }

    /// Validate the setup and deal a new board, replacing any game in
    /// progress.
    ///
    /// Validation happens before any state is touched: a rejected deck or
    /// pile count leaves a previously running game exactly as it was.
    /// With `shuffle`, the deal order is a uniform permutation of `deck`;
    /// without it, cards are dealt in the given order, which makes deals
    /// reproducible.
    ///
    /// Cards go to cascade piles round-robin (card `i` to pile
    /// `i % num_cascades`, appended at the tail), so pile sizes differ by
    /// at most one. Four empty foundations and `num_opens` empty open
    /// cells are always allocated.
    pub fn start_game(
        &mut self,
        deck: &[Card],
        num_cascades: usize,
        num_opens: usize,
        shuffle: bool,
    ) -> Result<(), InvalidArgumentError> {
        validate_deck(deck)?;
        if num_cascades < MIN_CASCADES {
            return Err(InvalidArgumentError::TooFewCascades(num_cascades));
        }
        if num_opens < MIN_OPENS {
            return Err(InvalidArgumentError::TooFewOpens(num_opens));
        }

        let mut order = deck.to_vec();
        if shuffle {
            self.rng.shuffle(&mut order);
        }

        let mut piles = PileStore::with_counts(num_cascades, num_opens);
        for (i, card) in order.into_iter().enumerate() {
            piles
                .pile_mut(PileKind::Cascade, i % num_cascades)
                .expect("dealt cascade index is in range")
                .push(card);
        }

        self.piles = piles;
        self.started = true;
        Ok(())
    }

    /// Validate a move through the active policy and perform it.
    ///
    /// On success the whole build (one card under the single-move variant)
    /// transfers from the source tail to the destination tail, preserving
    /// order. On any error nothing changes.
    pub fn move_card(&mut self, request: &MoveRequest) -> Result<(), IllegalMoveError> {
        if !self.started {
            return Err(IllegalMoveError::NotStarted);
        }

        let count = self.policy.validate(&self.piles, request)?;

        // A valid run is at most 13 cards, so the buffer stays inline.
        let build: SmallVec<[Card; 13]> = self
            .piles
            .pile_mut(request.source, request.source_pile)
            .expect("validated source pile exists")
            .drain_from(request.card_index)
            .collect();
        debug_assert_eq!(build.len(), count);

        self.piles
            .pile_mut(request.dest, request.dest_pile)
            .expect("validated destination pile exists")
            .extend(build);
        Ok(())
    }

    /// Whether the game has been won: all 52 cards on the foundations,
    /// 13 per pile, with every cascade and open pile empty.
    ///
    /// Always false before the first `start_game`.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.started
            && self
                .piles
                .piles(PileKind::Foundation)
                .iter()
                .all(|pile| pile.len() == 13)
            && self.piles.piles(PileKind::Cascade).iter().all(Pile::is_empty)
            && self.piles.piles(PileKind::Open).iter().all(Pile::is_empty)
    }

    /// A deterministic multi-line text snapshot of the board.
    ///
    /// Foundation piles first, then open, then cascade; one line per pile,
    /// prefixed `F`/`O`/`C` plus the 1-based pile number and a colon, with
    /// the pile's cards comma-space separated in pile order:
    ///
    /// ```text
    /// F1: A♦
    /// F2:
    /// O1:
    /// C1: K♣, Q♥
    /// ```
    ///
    /// Lines are newline-joined with no trailing newline. A never-started
    /// game renders as the empty string.
    #[must_use]
    pub fn render_state(&self) -> String {
        if !self.started {
            return String::new();
        }

        let sections = [
            ('F', PileKind::Foundation),
            ('O', PileKind::Open),
            ('C', PileKind::Cascade),
        ];

        let mut lines = Vec::new();
        for (letter, kind) in sections {
            for (i, pile) in self.piles.piles(kind).iter().enumerate() {
                let mut line = format!("{}{}:", letter, i + 1);
                let cards = pile.cards();
                for (j, card) in cards.iter().enumerate() {
                    if j + 1 == cards.len() {
                        line.push_str(&format!(" {card}"));
                    } else {
                        line.push_str(&format!(" {card},"));
                    }
                }
                lines.push(line);
            }
        }
        lines.join("\n")
    }
}
