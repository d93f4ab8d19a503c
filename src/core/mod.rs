//! Core engine types: cards, deck, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the move rules and
//! the game engine.

pub mod card;
pub mod deck;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{Card, Color, Suit};
pub use deck::{canonical_deck, validate_deck, DECK_SIZE};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineBuilder, EngineConfig, MoveRuleKind, FOUNDATIONS, MIN_CASCADES, MIN_OPENS};
pub use error::{EngineError, EngineResult};
