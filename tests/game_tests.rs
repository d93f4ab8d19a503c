//! Engine integration tests: dealing, single-card moves, foundations,
//! victory, and rendering.

mod common;

use common::{card, started};
use freecell_engine::{
    canonical_deck, EngineBuilder, EngineConfig, EngineError, FreecellGame, MoveRuleKind,
    PileKind, Suit,
};

const SPADE: &str = "\u{2660}";

fn cascade_lens(game: &FreecellGame) -> Vec<usize> {
    (0..game.config().cascades)
        .map(|i| game.pile(PileKind::Cascade, i).unwrap().len())
        .collect()
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_deal_eight_cascades() {
    let game = started(8, 4, MoveRuleKind::SingleMove, &canonical_deck());
    assert_eq!(cascade_lens(&game), vec![7, 7, 7, 7, 6, 6, 6, 6]);
    assert_eq!(game.board().card_count(), 52);
    assert!(!game.is_game_over());
}

#[test]
fn test_deal_uneven_cascades() {
    let game = started(5, 1, MoveRuleKind::SingleMove, &canonical_deck());
    assert_eq!(cascade_lens(&game), vec![11, 11, 10, 10, 10]);
}

#[test]
fn test_deal_more_cascades_than_cards() {
    let game = started(60, 1, MoveRuleKind::SingleMove, &canonical_deck());
    let lens = cascade_lens(&game);
    assert!(lens[..52].iter().all(|&n| n == 1));
    assert!(lens[52..].iter().all(|&n| n == 0));
}

#[test]
fn test_rendered_deal() {
    let game = started(8, 4, MoveRuleKind::SingleMove, &canonical_deck());
    let text = game.game_state();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 16);
    assert_eq!(&lines[..8], &["F1:", "F2:", "F3:", "F4:", "O1:", "O2:", "O3:", "O4:"]);
    assert_eq!(
        lines[8],
        "C1: A\u{2663}, 9\u{2663}, 4\u{2666}, Q\u{2666}, 7\u{2665}, 2\u{2660}, 10\u{2660}"
    );
    assert_eq!(lines[15], format!("C8: 8\u{2663}, 3\u{2666}, J\u{2666}, 6\u{2665}, A{SPADE}, 9{SPADE}"));
}

#[test]
fn test_restart_redeals() {
    let deck = canonical_deck();
    let mut game = started(8, 4, MoveRuleKind::SingleMove, &deck);
    let fresh = game.game_state();

    game.make_move(PileKind::Cascade, 4, 5, PileKind::Open, 0).unwrap();
    assert_ne!(game.game_state(), fresh);

    game.start_game(&deck, false).unwrap();
    assert_eq!(game.game_state(), fresh);
}

#[test]
fn test_rejects_bad_decks() {
    let mut game = EngineBuilder::new().seed(1).build().unwrap();

    let mut dup = canonical_deck();
    dup[51] = dup[0];
    assert!(matches!(game.start_game(&dup, false), Err(EngineError::InvalidDeck(_))));

    let short = &canonical_deck()[..40];
    assert!(matches!(game.start_game(short, true), Err(EngineError::InvalidDeck(_))));
    assert!(!game.is_started());
    assert_eq!(game.game_state(), "");
}

// =============================================================================
// Single-card moves
// =============================================================================

#[test]
fn test_cascade_to_open() {
    let mut game = started(8, 4, MoveRuleKind::SingleMove, &canonical_deck());
    game.make_move(PileKind::Cascade, 4, 5, PileKind::Open, 0).unwrap();

    assert_eq!(game.pile(PileKind::Open, 0), Some(vec![card(Suit::Spade, 6)]));
    assert_eq!(game.pile(PileKind::Cascade, 4).unwrap().len(), 5);
    assert!(game.game_state().contains(&format!("O1: 6{SPADE}")));
    assert!(game.game_state().contains("C5: 5\u{2663}, K\u{2663}, 8\u{2666}, 3\u{2665}, J\u{2665}\n"));
}

#[test]
fn test_open_to_open_and_tail_index() {
    let mut game = started(8, 4, MoveRuleKind::SingleMove, &canonical_deck());
    game.make_move(PileKind::Cascade, 4, 5, PileKind::Open, 0).unwrap();

    // An open pile's only card sits at index 0.
    assert!(matches!(
        game.make_move(PileKind::Open, 0, 1, PileKind::Open, 1),
        Err(EngineError::InvalidCardIndex { kind: PileKind::Open, index: 0, card_index: 1 })
    ));
    game.make_move(PileKind::Open, 0, 0, PileKind::Open, 1).unwrap();
    assert_eq!(game.pile(PileKind::Open, 0), Some(vec![]));
    assert_eq!(game.pile(PileKind::Open, 1), Some(vec![card(Suit::Spade, 6)]));

    assert!(matches!(
        game.make_move(PileKind::Open, 0, 0, PileKind::Open, 2),
        Err(EngineError::InvalidCardIndex { .. })
    ));
}

#[test]
fn test_occupied_open_rejected() {
    let mut game = started(8, 4, MoveRuleKind::SingleMove, &canonical_deck());
    game.make_move(PileKind::Cascade, 0, 6, PileKind::Open, 0).unwrap();
    assert!(matches!(
        game.make_move(PileKind::Cascade, 1, 6, PileKind::Open, 0),
        Err(EngineError::InvalidCard(_))
    ));
}

#[test]
fn test_cascade_build_rules() {
    // 60 cascades: cascade i holds canonical card i alone.
    let mut game = started(60, 1, MoveRuleKind::SingleMove, &canonical_deck());

    // A♣ on 2♣: same color.
    assert!(matches!(
        game.make_move(PileKind::Cascade, 0, 0, PileKind::Cascade, 1),
        Err(EngineError::InvalidCard(_))
    ));
    // A♣ on 3♦: wrong rank.
    assert!(matches!(
        game.make_move(PileKind::Cascade, 0, 0, PileKind::Cascade, 15),
        Err(EngineError::InvalidCard(_))
    ));
    // A♣ on 2♦.
    game.make_move(PileKind::Cascade, 0, 0, PileKind::Cascade, 14).unwrap();
    assert_eq!(
        game.pile(PileKind::Cascade, 14),
        Some(vec![card(Suit::Diamond, 2), card(Suit::Club, 1)])
    );
    assert_eq!(game.pile(PileKind::Cascade, 0), Some(vec![]));

    // Only the tail moves under the single-card rule.
    assert!(matches!(
        game.make_move(PileKind::Cascade, 14, 0, PileKind::Cascade, 2),
        Err(EngineError::InvalidCardIndex { .. })
    ));
}

#[test]
fn test_empty_cascade_needs_flag() {
    let deck = canonical_deck();
    let mut game = started(60, 1, MoveRuleKind::SingleMove, &deck);
    assert!(matches!(
        game.make_move(PileKind::Cascade, 0, 0, PileKind::Cascade, 55),
        Err(EngineError::InvalidCard(_))
    ));

    game.make_move(PileKind::Cascade, 0, 0, PileKind::Open, 0).unwrap();
    assert!(matches!(
        game.make_move(PileKind::Open, 0, 0, PileKind::Cascade, 55),
        Err(EngineError::InvalidCard(_))
    ));

    let mut game = EngineBuilder::new()
        .cascades(60)
        .unwrap()
        .opens(1)
        .unwrap()
        .empty_cascade_moves(true)
        .build()
        .unwrap();
    game.start_game(&deck, false).unwrap();
    game.make_move(PileKind::Cascade, 0, 0, PileKind::Cascade, 55).unwrap();
    assert_eq!(game.pile(PileKind::Cascade, 55), Some(vec![card(Suit::Club, 1)]));
}

#[test]
fn test_same_pile_rejected() {
    let mut game = started(60, 2, MoveRuleKind::SingleMove, &canonical_deck());
    assert!(matches!(
        game.make_move(PileKind::Cascade, 3, 0, PileKind::Cascade, 3),
        Err(EngineError::InvalidMove(_))
    ));
    game.make_move(PileKind::Cascade, 3, 0, PileKind::Open, 1).unwrap();
    assert!(matches!(
        game.make_move(PileKind::Open, 1, 0, PileKind::Open, 1),
        Err(EngineError::InvalidMove(_))
    ));
}

#[test]
fn test_pile_numbers_validated() {
    let mut game = started(8, 4, MoveRuleKind::SingleMove, &canonical_deck());
    assert_eq!(
        game.make_move(PileKind::Cascade, 8, 0, PileKind::Open, 0),
        Err(EngineError::InvalidPileNumber { kind: PileKind::Cascade, index: 8, count: 8 })
    );
    assert_eq!(
        game.make_move(PileKind::Cascade, 0, 6, PileKind::Open, 4),
        Err(EngineError::InvalidPileNumber { kind: PileKind::Open, index: 4, count: 4 })
    );
    assert_eq!(
        game.make_move(PileKind::Cascade, 0, 6, PileKind::Foundation, 4),
        Err(EngineError::InvalidPileNumber { kind: PileKind::Foundation, index: 4, count: 4 })
    );
}

#[test]
fn test_failed_moves_leave_board_unchanged() {
    let mut game = started(8, 4, MoveRuleKind::SingleMove, &canonical_deck());
    let before = game.game_state();
    let board = game.board().clone();

    let attempts = [
        (PileKind::Cascade, 0, 0, PileKind::Open, 0),
        (PileKind::Cascade, 0, 6, PileKind::Cascade, 1),
        (PileKind::Cascade, 0, 6, PileKind::Foundation, 0),
        (PileKind::Foundation, 0, 0, PileKind::Open, 0),
        (PileKind::Open, 0, 0, PileKind::Cascade, 0),
        (PileKind::Cascade, 9, 0, PileKind::Open, 0),
    ];
    for (sk, si, ci, dk, di) in attempts {
        assert!(game.make_move(sk, si, ci, dk, di).is_err());
        assert_eq!(game.game_state(), before);
    }
    assert_eq!(game.board(), &board);
}

// =============================================================================
// Foundations and victory
// =============================================================================

#[test]
fn test_foundation_order() {
    // 13 cascades: cascade r holds rank r+1 of ♣ ♦ ♥ ♠ bottom to top.
    let mut game = started(13, 1, MoveRuleKind::SingleMove, &canonical_deck());

    assert!(matches!(
        game.make_move(PileKind::Cascade, 1, 3, PileKind::Foundation, 0),
        Err(EngineError::InvalidCard(_))
    ));
    game.make_move(PileKind::Cascade, 0, 3, PileKind::Foundation, 0).unwrap();
    // A♥ on A♠: wrong suit and rank.
    assert!(matches!(
        game.make_move(PileKind::Cascade, 0, 2, PileKind::Foundation, 0),
        Err(EngineError::InvalidCard(_))
    ));
    game.make_move(PileKind::Cascade, 1, 3, PileKind::Foundation, 0).unwrap();
    assert_eq!(
        game.pile(PileKind::Foundation, 0),
        Some(vec![card(Suit::Spade, 1), card(Suit::Spade, 2)])
    );

    assert!(matches!(
        game.make_move(PileKind::Foundation, 0, 1, PileKind::Open, 0),
        Err(EngineError::InvalidMove(_))
    ));
}

#[test]
fn test_play_to_victory() {
    let mut game = started(13, 1, MoveRuleKind::SingleMove, &canonical_deck());

    for cascade in 0..13 {
        // Tail first: ♠ to F1, ♥ to F2, ♦ to F3, ♣ to F4.
        for (card_index, foundation) in [(3, 0), (2, 1), (1, 2), (0, 3)] {
            assert!(!game.is_game_over());
            game.make_move(PileKind::Cascade, cascade, card_index, PileKind::Foundation, foundation)
                .unwrap();
        }
    }

    assert!(game.is_game_over());
    assert_eq!(game.board().card_count(), 52);
    assert_eq!(game.board().empty_cascades(), 13);
    let text = game.game_state();
    assert!(text.starts_with(&format!("F1: A{SPADE}, 2{SPADE}")));
    assert!(text.contains(&format!("Q{SPADE}, K{SPADE}\n")));
}

#[test]
fn test_shuffled_game_via_config() {
    let config = EngineConfig::default().with_seed(2024);
    let mut game = FreecellGame::new(config).unwrap();
    let deck = game.deck();
    game.start_game(&deck, true).unwrap();

    assert_eq!(game.board().card_count(), 52);
    assert_eq!(cascade_lens(&game), vec![7, 7, 7, 7, 6, 6, 6, 6]);
    let mut dealt: Vec<_> = game.board().all_cards().collect();
    dealt.sort();
    let mut expected = canonical_deck();
    expected.sort();
    assert_eq!(dealt, expected);
}
