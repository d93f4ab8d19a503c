//! Acceptance predicates shared by every move rule.

use super::engine::MoveRequest;
use crate::board::Board;
use crate::core::card::{Card, ACE};
use crate::core::error::{EngineError, EngineResult};

/// The card at `request.card_index`, which must be the source pile's tail.
pub fn tail_card(board: &Board, request: &MoveRequest) -> EngineResult<Card> {
    let len = board.pile_len(request.source);
    let top = board.top(request.source);
    match top {
        Some(card) if request.card_index + 1 == len => Ok(card),
        _ => Err(invalid_card_index(request)),
    }
}

/// `InvalidCardIndex` for the request's source pile.
pub fn invalid_card_index(request: &MoveRequest) -> EngineError {
    EngineError::InvalidCardIndex {
        kind: request.source.kind,
        index: request.source.index,
        card_index: request.card_index,
    }
}

pub fn reject_same_pile(request: &MoveRequest) -> EngineResult<()> {
    if request.source == request.dest {
        return Err(EngineError::InvalidMove(format!(
            "{} is both source and destination",
            request.source
        )));
    }
    Ok(())
}

/// Cascade acceptance: one rank lower and opposite color than the top card.
/// An empty cascade accepts only when `allow_empty` is set.
pub fn accepts_on_cascade(top: Option<Card>, card: Card, allow_empty: bool) -> EngineResult<()> {
    match top {
        Some(top) if card.stacks_on(top) => Ok(()),
        Some(top) => Err(EngineError::InvalidCard(format!("{card} cannot be placed on {top}"))),
        None if allow_empty => Ok(()),
        None => Err(EngineError::InvalidCard(format!(
            "{card} cannot be placed on an empty cascade"
        ))),
    }
}

/// Open piles accept any card while empty.
pub fn accepts_on_open(top: Option<Card>) -> EngineResult<()> {
    match top {
        None => Ok(()),
        Some(held) => Err(EngineError::InvalidCard(format!("open pile already holds {held}"))),
    }
}

/// Foundation acceptance: an Ace on an empty pile, otherwise the same suit
/// one rank higher.
pub fn accepts_on_foundation(top: Option<Card>, card: Card) -> EngineResult<()> {
    match top {
        None if card.rank() == ACE => Ok(()),
        None => Err(EngineError::InvalidCard(format!("{card} cannot start a foundation"))),
        Some(top) if top.suit() == card.suit() && top.rank() + 1 == card.rank() => Ok(()),
        Some(top) => Err(EngineError::InvalidCard(format!(
            "{card} cannot be placed on foundation {top}"
        ))),
    }
}

/// True if every adjacent pair in `run` descends by one and alternates
/// color. Empty and single-card runs are builds.
#[must_use]
pub fn is_build(run: &[Card]) -> bool {
    run.windows(2).all(|pair| pair[1].stacks_on(pair[0]))
}

/// Supermove capacity: `(empty_opens + 1) * 2^empty_cascades`, saturating.
#[must_use]
pub fn max_movable(empty_opens: usize, empty_cascades: usize) -> usize {
    let doubling = u32::try_from(empty_cascades)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .unwrap_or(usize::MAX);
    (empty_opens + 1).saturating_mul(doubling)
}
