//! The Freecell game engine.
//!
//! `FreecellGame` owns the board and the selected move rule:
//! - `deck()` returns the canonical 52-card deck
//! - `start_game(deck, shuffle)` deals a new game
//! - `make_move(...)` validates and applies one move
//! - `game_state()` renders the board as text
//! - `is_game_over()` reports victory
//!
//! Indices are 0-based everywhere except the rendered text.

mod freecell;
pub mod render;

pub use freecell::FreecellGame;
pub use render::render_board;
