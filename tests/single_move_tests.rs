//! Single-move variant integration tests.
//!
//! These exercise the engine through its public surface only: deal a deck,
//! issue moves, and check the rendered state and the game-over predicate.

use freecell_engine::core::MoveRequest;
use freecell_engine::error::{IllegalMoveError, InvalidArgumentError};
use freecell_engine::game::FreecellGame;
use freecell_engine::piles::PileKind;

fn new_game() -> FreecellGame {
    FreecellGame::builder().build()
}

fn mv(
    source: PileKind,
    source_pile: usize,
    card_index: usize,
    dest: PileKind,
    dest_pile: usize,
) -> MoveRequest {
    MoveRequest::new(source, source_pile, card_index, dest, dest_pile)
}

// =============================================================================
// Deck
// =============================================================================

#[test]
fn test_deck_shape() {
    let deck = FreecellGame::standard_deck();

    assert_eq!(deck.len(), 52);
    assert_eq!(deck[0].to_string(), "A♣");
    assert_eq!(deck[51].to_string(), "K♥");
}

// =============================================================================
// Game start
// =============================================================================

#[test]
fn test_start_game_shapes_the_board() {
    let mut game = new_game();
    game.start_game(&FreecellGame::standard_deck(), 4, 4, false)
        .unwrap();

    assert!(!game.is_game_over());
    let state = game.render_state();
    assert!(state.starts_with("F1:\nF2:"));

    // Restarting with different parameters re-deals.
    game.start_game(&FreecellGame::standard_deck(), 5, 4, false)
        .unwrap();
    assert_ne!(game.render_state(), state);
}

#[test]
fn test_start_game_rejects_invalid_setup() {
    let mut game = new_game();
    let deck = FreecellGame::standard_deck();

    let mut short = deck.clone();
    short.remove(0);
    assert_eq!(
        game.start_game(&short, 4, 4, false),
        Err(InvalidArgumentError::WrongDeckSize(51))
    );

    let mut crowded = deck.clone();
    crowded.push(deck[0]);
    assert_eq!(
        game.start_game(&crowded, 4, 4, false),
        Err(InvalidArgumentError::WrongDeckSize(53))
    );

    // We allow as few as 4 cascade and 1 open piles, no fewer.
    assert_eq!(
        game.start_game(&deck, 3, 4, false),
        Err(InvalidArgumentError::TooFewCascades(3))
    );
    assert_eq!(
        game.start_game(&deck, 4, 0, false),
        Err(InvalidArgumentError::TooFewOpens(0))
    );

    // Nothing was ever dealt.
    assert_eq!(game.render_state(), "");
}

#[test]
fn test_shuffled_deal_differs_from_ordered() {
    let deck = FreecellGame::standard_deck();

    let mut shuffled = FreecellGame::builder().seed(11).build();
    shuffled.start_game(&deck, 4, 4, true).unwrap();

    let mut ordered = new_game();
    ordered.start_game(&deck, 4, 4, false).unwrap();

    assert_ne!(shuffled.render_state(), ordered.render_state());
}

// =============================================================================
// Illegal moves
// =============================================================================

#[test]
fn test_illegal_moves_leave_state_unchanged() {
    let mut game = new_game();
    game.start_game(&FreecellGame::standard_deck(), 4, 4, false)
        .unwrap();
    let before = game.render_state();

    // Can't move from an empty pile.
    assert!(game
        .move_card(&mv(PileKind::Foundation, 0, 2, PileKind::Cascade, 3))
        .is_err());
    assert!(game
        .move_card(&mv(PileKind::Open, 0, 1, PileKind::Cascade, 3))
        .is_err());

    // Can't move a card from the middle of a pile.
    assert_eq!(
        game.move_card(&mv(PileKind::Cascade, 0, 1, PileKind::Cascade, 3)),
        Err(IllegalMoveError::NotAtTail)
    );
    assert_eq!(
        game.move_card(&mv(PileKind::Cascade, 0, 0, PileKind::Cascade, 2)),
        Err(IllegalMoveError::NotAtTail)
    );

    // Can't move a card whose index doesn't exist.
    assert_eq!(
        game.move_card(&mv(PileKind::Cascade, 0, 25, PileKind::Cascade, 2)),
        Err(IllegalMoveError::NoSuchCard {
            index: 25,
            pile_len: 13
        })
    );

    // Same color: K♣ onto K♠'s pile.
    assert_eq!(
        game.move_card(&mv(PileKind::Cascade, 0, 12, PileKind::Cascade, 1)),
        Err(IllegalMoveError::CascadeColorClash)
    );

    // Right color, wrong rank: K♣ onto K♦'s pile.
    assert_eq!(
        game.move_card(&mv(PileKind::Cascade, 0, 12, PileKind::Cascade, 2)),
        Err(IllegalMoveError::CascadeRankMismatch)
    );

    // Out-of-range pile indices.
    assert_eq!(
        game.move_card(&mv(PileKind::Cascade, 8, 12, PileKind::Cascade, 2)),
        Err(IllegalMoveError::NoSuchPile {
            kind: PileKind::Cascade,
            index: 8
        })
    );
    assert_eq!(
        game.move_card(&mv(PileKind::Cascade, 0, 12, PileKind::Cascade, 7)),
        Err(IllegalMoveError::NoSuchPile {
            kind: PileKind::Cascade,
            index: 7
        })
    );

    // Every rejection above left the board alone.
    assert_eq!(game.render_state(), before);

    // Valid: K♦ to an open cell. A second card to the same cell is not.
    game.move_card(&mv(PileKind::Cascade, 2, 12, PileKind::Open, 1))
        .unwrap();
    assert_eq!(
        game.move_card(&mv(PileKind::Cascade, 2, 11, PileKind::Open, 1)),
        Err(IllegalMoveError::OpenOccupied)
    );
}

#[test]
fn test_failed_move_renders_byte_identical() {
    let mut game = new_game();
    game.start_game(&FreecellGame::standard_deck(), 4, 4, false)
        .unwrap();

    let before = game.render_state();
    assert_eq!(
        game.move_card(&mv(PileKind::Open, 0, 0, PileKind::Cascade, 0)),
        Err(IllegalMoveError::EmptySource)
    );
    assert_eq!(game.render_state(), before);
}

// =============================================================================
// Game over
// =============================================================================

#[test]
fn test_game_over_lifecycle() {
    let mut game = new_game();

    // Game is not over since it has never begun.
    assert!(!game.is_game_over());

    game.start_game(&FreecellGame::standard_deck(), 52, 4, false)
        .unwrap();
    assert!(!game.is_game_over());

    // Cascade i holds exactly card i of the canonical deck, so foundation
    // i % 4 receives each suit in ascending order.
    for i in 0..52 {
        game.move_card(&mv(PileKind::Cascade, i, 0, PileKind::Foundation, i % 4))
            .unwrap();
    }
    assert!(game.is_game_over());

    // Restarting leaves the finished game behind.
    game.start_game(&FreecellGame::standard_deck(), 4, 4, false)
        .unwrap();
    assert!(!game.is_game_over());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_before_and_after_start() {
    let mut game = new_game();
    assert_eq!(game.render_state(), "");

    game.start_game(&FreecellGame::standard_deck(), 4, 4, false)
        .unwrap();
    assert_ne!(game.render_state(), "");
    assert_eq!(&game.render_state()[..7], "F1:\nF2:");
}

#[test]
fn test_render_full_won_game() {
    let mut game = new_game();
    game.start_game(&FreecellGame::standard_deck(), 52, 1, false)
        .unwrap();
    for i in 0..52 {
        game.move_card(&mv(PileKind::Cascade, i, 0, PileKind::Foundation, i % 4))
            .unwrap();
    }

    let state = game.render_state();
    assert!(state.starts_with(
        "F1: A♣, 2♣, 3♣, 4♣, 5♣, 6♣, 7♣, 8♣, 9♣, 10♣, J♣, Q♣, K♣\n\
         F2: A♠"
    ));

    // All cascades and the open cell render as bare labels.
    assert!(state.contains("\nO1:\nC1:\n"));
    assert!(state.ends_with("C52:"));
}
