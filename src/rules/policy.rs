//! Move policies: the rule engines that decide move legality.
//!
//! Two interchangeable policies implement [`MovePolicy`]:
//!
//! - [`SingleMovePolicy`] moves exactly one card, and only from the top of
//!   its pile.
//! - [`BuildMovePolicy`] moves the whole suffix of the source pile starting
//!   at the requested card ("the build") in one operation, provided the
//!   suffix is a valid alternating-color descending run and enough free
//!   slots exist to stage it.
//!
//! Both share the single-card destination rule as a common helper; the
//! build policy is a strict superset of single-card legality. Policies are
//! stateless: they read the pile store and either approve the move
//! (returning how many cards transfer) or name the violated rule.

use crate::core::card::Card;
use crate::core::request::MoveRequest;
use crate::error::IllegalMoveError;
use crate::piles::{Pile, PileKind, PileStore};

/// A move-legality rule engine, selected at game construction.
///
/// `validate` inspects the current piles and the request and returns the
/// number of cards that may transfer (always 1 for the single-card policy).
/// It never mutates anything; the game engine performs the transfer only
/// after validation succeeds.
pub trait MovePolicy: std::fmt::Debug {
    /// Decide whether the move is legal. Returns the build length.
    fn validate(
        &self,
        piles: &PileStore,
        request: &MoveRequest,
    ) -> Result<usize, IllegalMoveError>;
}

fn lookup<'a>(
    piles: &'a PileStore,
    kind: PileKind,
    index: usize,
) -> Result<&'a Pile, IllegalMoveError> {
    piles
        .pile(kind, index)
        .ok_or(IllegalMoveError::NoSuchPile { kind, index })
}

/// Shared bounds checks: both piles exist, the source is non-empty, and the
/// card index addresses a card. Returns the source pile and that card.
fn source_card<'a>(
    piles: &'a PileStore,
    request: &MoveRequest,
) -> Result<(&'a Pile, Card), IllegalMoveError> {
    let source = lookup(piles, request.source, request.source_pile)?;
    lookup(piles, request.dest, request.dest_pile)?;

    if source.is_empty() {
        return Err(IllegalMoveError::EmptySource);
    }
    let card = source
        .get(request.card_index)
        .ok_or(IllegalMoveError::NoSuchCard {
            index: request.card_index,
            pile_len: source.len(),
        })?;
    Ok((source, card))
}

/// The single-card destination rule, per destination kind:
///
/// - Open: legal iff the cell is empty.
/// - Foundation: an ace on an empty pile, or same suit and one rank above
///   the current top.
/// - Cascade: any card on an empty pile, or different color and one rank
///   below the current top.
fn check_destination(
    card: Card,
    dest: &Pile,
    dest_kind: PileKind,
) -> Result<(), IllegalMoveError> {
    match dest_kind {
        PileKind::Open => {
            if dest.is_empty() {
                Ok(())
            } else {
                Err(IllegalMoveError::OpenOccupied)
            }
        }
        PileKind::Foundation => match dest.peek() {
            None if card.is_ace() => Ok(()),
            None => Err(IllegalMoveError::FoundationNeedsAce),
            Some(top) if !card.same_suit(top) => Err(IllegalMoveError::FoundationSuitMismatch),
            Some(top) if !card.is_one_above(top) => Err(IllegalMoveError::FoundationRankMismatch),
            Some(_) => Ok(()),
        },
        PileKind::Cascade => match dest.peek() {
            None => Ok(()),
            Some(top) if !card.different_color(top) => Err(IllegalMoveError::CascadeColorClash),
            Some(top) if !card.is_one_below(top) => Err(IllegalMoveError::CascadeRankMismatch),
            Some(_) => Ok(()),
        },
    }
}

/// Maximum movable build length given the current board:
/// `(empty_opens + 1) * 2^empty_cascades`.
///
/// Each empty open cell buffers one extra card; each empty cascade doubles
/// the buffer (recursive supermoves). Arithmetic overflow is treated as
/// unlimited capacity, never as a rejection.
#[must_use]
pub fn supermove_capacity(piles: &PileStore) -> u64 {
    let empty_opens = piles.empty_pile_count(PileKind::Open) as u64;
    let empty_cascades = piles.empty_pile_count(PileKind::Cascade) as u32;

    match 1u64
        .checked_shl(empty_cascades)
        .and_then(|doubling| doubling.checked_mul(empty_opens + 1))
    {
        Some(capacity) => capacity,
        None => u64::MAX,
    }
}

/// Moves one card at a time, from the top of its pile only.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleMovePolicy;

impl MovePolicy for SingleMovePolicy {
    fn validate(
        &self,
        piles: &PileStore,
        request: &MoveRequest,
    ) -> Result<usize, IllegalMoveError> {
        let (source, card) = source_card(piles, request)?;

        if request.card_index + 1 != source.len() {
            return Err(IllegalMoveError::NotAtTail);
        }

        let dest = lookup(piles, request.dest, request.dest_pile)?;
        check_destination(card, dest, request.dest)?;
        Ok(1)
    }
}

/// Moves the suffix of the source pile starting at the requested card.
///
/// A build of length 1 behaves exactly like a single-card move. Longer
/// builds must form a valid run, may only travel cascade-to-cascade, and
/// are bounded by [`supermove_capacity`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildMovePolicy;

impl MovePolicy for BuildMovePolicy {
    fn validate(
        &self,
        piles: &PileStore,
        request: &MoveRequest,
    ) -> Result<usize, IllegalMoveError> {
        let (source, first) = source_card(piles, request)?;
        let dest = lookup(piles, request.dest, request.dest_pile)?;

        // The first card of the build must land as if it were moving alone.
        check_destination(first, dest, request.dest)?;

        // The suffix must be an alternating-color, descending-by-one run.
        let run = &source.cards()[request.card_index..];
        for pair in run.windows(2) {
            if !pair[1].different_color(pair[0]) {
                return Err(IllegalMoveError::BrokenRunColor);
            }
            if !pair[1].is_one_below(pair[0]) {
                return Err(IllegalMoveError::BrokenRunRank);
            }
        }

        let build_len = run.len();
        if build_len > 1 {
            if request.source == PileKind::Foundation {
                return Err(IllegalMoveError::MultiFromFoundation);
            }
            if request.dest == PileKind::Foundation {
                return Err(IllegalMoveError::MultiToFoundation);
            }
            if request.dest == PileKind::Open {
                return Err(IllegalMoveError::MultiToOpen);
            }
        }

        let capacity = supermove_capacity(piles);
        if build_len as u64 > capacity {
            return Err(IllegalMoveError::InsufficientCapacity {
                build: build_len,
                capacity,
            });
        }

        Ok(build_len)
    }
}
