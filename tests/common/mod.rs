//! Shared helpers for integration tests.

#![allow(dead_code)]

use freecell_engine::{canonical_deck, Card, EngineConfig, FreecellGame, MoveRuleKind, Suit};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

/// Canonical deck rearranged so each `(deck_index, card)` lands where asked.
/// Unplaced cards keep canonical order as far as the swaps allow.
pub fn deck_with(placements: &[(usize, Card)]) -> Vec<Card> {
    let mut deck = canonical_deck();
    for &(index, wanted) in placements {
        let from = deck.iter().position(|&c| c == wanted).unwrap();
        deck.swap(index, from);
    }
    deck
}

/// Started game over an unshuffled `deck`.
pub fn started(cascades: usize, opens: usize, rule: MoveRuleKind, deck: &[Card]) -> FreecellGame {
    init_logging();
    let config = EngineConfig {
        cascades,
        opens,
        rule,
        ..EngineConfig::default()
    }
    .with_seed(7);
    let mut game = FreecellGame::new(config).unwrap();
    game.start_game(deck, false).unwrap();
    game
}
