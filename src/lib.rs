//! # freecell-engine
//!
//! The rule engine of a Freecell solitaire game: board state, move
//! validation for single-card and supermove rules, victory detection, and
//! a text rendering of the board.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: A move is fully checked into a `MovePlan`
//!    before the board changes. A failed move leaves the board untouched.
//!
//! 2. **Rules as strategies**: `SingleMove` and `SuperMove` implement one
//!    `MoveRule` trait and share acceptance predicates. The engine picks one
//!    at construction.
//!
//! 3. **Configuration over convention**: Pile counts, rule, and shuffle seed
//!    live in an immutable `EngineConfig`, validated once.
//!
//! ## Example
//!
//! ```
//! use freecell_engine::{EngineBuilder, PileKind};
//!
//! let mut game = EngineBuilder::new().cascades(8)?.opens(4)?.build()?;
//! let deck = game.deck();
//! game.start_game(&deck, false)?;
//!
//! game.make_move(PileKind::Cascade, 4, 5, PileKind::Open, 0)?;
//! assert!(game.game_state().contains("O1: 6\u{2660}"));
//! assert!(!game.is_game_over());
//! # Ok::<(), freecell_engine::EngineError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Cards, deck, RNG, configuration, errors
//! - `board`: Pile kinds and the board
//! - `rules`: Move rules and acceptance predicates
//! - `game`: The engine and board rendering

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    canonical_deck, validate_deck, Card, Color, EngineBuilder, EngineConfig, EngineError,
    EngineResult, GameRng, GameRngState, MoveRuleKind, Suit, DECK_SIZE,
};

pub use crate::board::{Board, PileKind, PileRef};

pub use crate::rules::{MovePlan, MoveRequest, MoveRule, SingleMove, SuperMove};

pub use crate::game::{render_board, FreecellGame};
