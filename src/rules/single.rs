//! Single-card move rule.
//!
//! Every move carries exactly one card: the tail of the source pile.

use super::acceptance::{accepts_on_cascade, reject_same_pile, tail_card};
use super::engine::{MovePlan, MoveRequest, MoveRule};
use crate::board::Board;
use crate::core::config::MoveRuleKind;
use crate::core::error::EngineResult;

/// Classic rule: only tail cards move, one at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleMove {
    empty_cascade_moves: bool,
}

impl SingleMove {
    #[must_use]
    pub const fn new(empty_cascade_moves: bool) -> Self {
        Self { empty_cascade_moves }
    }
}

impl MoveRule for SingleMove {
    fn kind(&self) -> MoveRuleKind {
        MoveRuleKind::SingleMove
    }

    fn empty_cascade_moves(&self) -> bool {
        self.empty_cascade_moves
    }

    fn max_movable(&self, _board: &Board) -> usize {
        1
    }

    fn plan_cascade_to_cascade(&self, board: &Board, request: &MoveRequest) -> EngineResult<MovePlan> {
        let card = tail_card(board, request)?;
        reject_same_pile(request)?;
        accepts_on_cascade(board.top(request.dest), card, self.empty_cascade_moves)?;
        Ok(MovePlan::single(request.source, request.card_index, request.dest))
    }
}
