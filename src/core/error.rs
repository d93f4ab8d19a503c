//! Engine error type.
//!
//! Every fallible engine operation returns `EngineResult<T>`. Errors are
//! synchronous and caller-visible; a failed move never mutates the board.

use thiserror::Error;

use crate::board::PileKind;

/// Errors reported by the engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Deck is not exactly 52 pairwise-distinct cards.
    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    /// Pile counts below the supported minimum.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Operation attempted in a state that does not allow it.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// Pile index outside the configured range for its kind.
    #[error("invalid pile number: {kind} {index} (have {count})")]
    InvalidPileNumber {
        kind: PileKind,
        index: usize,
        count: usize,
    },

    /// Card index does not reference a movable position.
    #[error("invalid card index {card_index} for {kind} {index}")]
    InvalidCardIndex {
        kind: PileKind,
        index: usize,
        card_index: usize,
    },

    /// Card rank outside 1..=13.
    #[error("invalid rank: {0}")]
    InvalidRank(u8),

    /// Destination does not accept the card.
    #[error("invalid card: {0}")]
    InvalidCard(String),

    /// Move is structurally illegal.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// Run is longer than the free resources allow.
    #[error("not enough capacity: moving {requested} cards, at most {capacity} allowed")]
    NotEnoughCapacity { requested: usize, capacity: usize },
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;
