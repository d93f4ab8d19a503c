//! Canonical deck construction and deck validation.

use rustc_hash::FxHashSet;

use super::card::{Card, Suit, ACE, KING};
use super::error::{EngineError, EngineResult};

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 52;

/// The canonical unshuffled deck: Clubs A..K, Diamonds A..K, Hearts A..K,
/// Spades A..K.
#[must_use]
pub fn canonical_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (ACE..=KING).map(move |rank| Card::from_parts(suit, rank)))
        .collect()
}

/// Check that `deck` holds exactly 52 pairwise-distinct cards.
pub fn validate_deck(deck: &[Card]) -> EngineResult<()> {
    if deck.len() != DECK_SIZE {
        return Err(EngineError::InvalidDeck(format!(
            "expected {DECK_SIZE} cards, got {}",
            deck.len()
        )));
    }

    let mut seen = FxHashSet::default();
    for card in deck {
        if !seen.insert(*card) {
            return Err(EngineError::InvalidDeck(format!("duplicate card {card}")));
        }
    }

    Ok(())
}
