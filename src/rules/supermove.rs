//! Supermove rule.
//!
//! Cascade-to-cascade moves may carry a whole build (a descending,
//! alternating-color run through the end of the pile), limited by
//! `(empty_opens + 1) * 2^empty_cascades`. All other moves are single-card
//! moves exactly as in `SingleMove`.

use super::acceptance::{invalid_card_index, is_build, max_movable, reject_same_pile};
use super::engine::{MovePlan, MoveRequest, MoveRule};
use crate::board::Board;
use crate::core::card::Card;
use crate::core::config::MoveRuleKind;
use crate::core::error::{EngineError, EngineResult};

/// Multi-card cascade moves, capacity-limited by free piles.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuperMove {
    empty_cascade_moves: bool,
}

impl SuperMove {
    #[must_use]
    pub const fn new(empty_cascade_moves: bool) -> Self {
        Self { empty_cascade_moves }
    }
}

impl MoveRule for SuperMove {
    fn kind(&self) -> MoveRuleKind {
        MoveRuleKind::SuperMove
    }

    fn empty_cascade_moves(&self) -> bool {
        self.empty_cascade_moves
    }

    /// Counts every empty pile on the board, an empty destination included.
    fn max_movable(&self, board: &Board) -> usize {
        max_movable(board.empty_opens(), board.empty_cascades())
    }

    fn plan_cascade_to_cascade(&self, board: &Board, request: &MoveRequest) -> EngineResult<MovePlan> {
        let pile = board
            .cascade(request.source.index)
            .ok_or_else(|| invalid_card_index(request))?;
        if request.card_index >= pile.len() {
            return Err(invalid_card_index(request));
        }
        reject_same_pile(request)?;

        let run: Vec<Card> = pile.iter().skip(request.card_index).copied().collect();
        if !is_build(&run) {
            return Err(EngineError::InvalidMove(format!(
                "cards from {} index {} do not form a build",
                request.source, request.card_index
            )));
        }

        let capacity = self.max_movable(board);
        if run.len() > capacity {
            return Err(EngineError::NotEnoughCapacity {
                requested: run.len(),
                capacity,
            });
        }

        if let (Some(top), Some(&first)) = (board.top(request.dest), run.first()) {
            if !first.stacks_on(top) {
                return Err(EngineError::InvalidCard(format!(
                    "{first} cannot be placed on {top}"
                )));
            }
        }

        Ok(MovePlan {
            source: request.source,
            start: request.card_index,
            count: run.len(),
            dest: request.dest,
        })
    }
}
