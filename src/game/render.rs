//! Text rendering of the board.
//!
//! Foundations, then opens, then cascades, one line per pile:
//!
//! ```text
//! F1: A♣, 2♣
//! F2:
//! ...
//! O1: 7♥
//! ...
//! C8: 4♠, 10♦
//! ```
//!
//! Labels are 1-based. Empty piles render as the bare label and colon.
//! There is no newline after the last line.

use std::fmt::Write;

use crate::board::{Board, PileKind, PileRef};

/// Render every pile of `board`.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for kind in PileKind::RENDER_ORDER {
        for index in 0..board.pile_count(kind) {
            if !out.is_empty() {
                out.push('\n');
            }
            render_pile(board, PileRef::new(kind, index), &mut out);
        }
    }
    out
}

fn render_pile(board: &Board, pile: PileRef, out: &mut String) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{pile}:");
    let cards = board.cards(pile).unwrap_or_default();
    for (i, card) in cards.iter().enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        let _ = write!(out, "{sep}{card}");
    }
}
