//! Move rule trait and the pile-kind dispatch table.
//!
//! A `MoveRule` turns a `MoveRequest` into a `MovePlan` without touching
//! the board. The game applies the plan only after validation succeeds,
//! so a rejected move leaves the board unchanged.

use serde::{Deserialize, Serialize};

use super::acceptance::{accepts_on_cascade, accepts_on_foundation, accepts_on_open, reject_same_pile, tail_card};
use crate::board::{Board, PileKind, PileRef};
use crate::core::config::{EngineConfig, MoveRuleKind};
use crate::core::error::{EngineError, EngineResult};

use super::{SingleMove, SuperMove};

/// A move as issued by the caller. All indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: PileRef,
    /// Index in the source pile of the first card to move.
    pub card_index: usize,
    pub dest: PileRef,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(source: PileRef, card_index: usize, dest: PileRef) -> Self {
        Self {
            source,
            card_index,
            dest,
        }
    }
}

/// A validated move: `count` cards starting at `start` in `source`
/// (through the pile's end) go onto `dest`, order preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovePlan {
    pub source: PileRef,
    pub start: usize,
    pub count: usize,
    pub dest: PileRef,
}

impl MovePlan {
    /// Plan for moving the single card at `start`.
    #[must_use]
    pub const fn single(source: PileRef, start: usize, dest: PileRef) -> Self {
        Self {
            source,
            start,
            count: 1,
            dest,
        }
    }
}

/// Move rule strategy.
///
/// Implementors only decide cascade-to-cascade moves; every other
/// combination of pile kinds is a single-card move shared by all rules.
///
/// ## Implementation Notes
///
/// - `plan` must never mutate anything; it only reads the board
/// - Checks run in order: pile numbers, foundation source, card index,
///   then acceptance, each with its own error
pub trait MoveRule: std::fmt::Debug + Send + Sync {
    /// Which rule this is.
    fn kind(&self) -> MoveRuleKind;

    /// Whether a single card may be placed on an empty cascade.
    fn empty_cascade_moves(&self) -> bool;

    /// Largest number of cards one cascade-to-cascade move may carry.
    fn max_movable(&self, board: &Board) -> usize;

    /// Validate a cascade-to-cascade move. Pile numbers are already checked.
    fn plan_cascade_to_cascade(&self, board: &Board, request: &MoveRequest) -> EngineResult<MovePlan>;

    // === Shared dispatch ===

    /// Validate any move and produce the plan to apply.
    fn plan(&self, board: &Board, request: &MoveRequest) -> EngineResult<MovePlan> {
        board.check_pile(request.source)?;
        board.check_pile(request.dest)?;

        match (request.source.kind, request.dest.kind) {
            (PileKind::Foundation, _) => Err(EngineError::InvalidMove(
                "cards cannot be moved out of a foundation pile".to_string(),
            )),
            (PileKind::Cascade, PileKind::Cascade) => self.plan_cascade_to_cascade(board, request),
            (_, dest_kind) => {
                let card = tail_card(board, request)?;
                reject_same_pile(request)?;

                let top = board.top(request.dest);
                match dest_kind {
                    PileKind::Cascade => accepts_on_cascade(top, card, self.empty_cascade_moves())?,
                    PileKind::Open => accepts_on_open(top)?,
                    PileKind::Foundation => accepts_on_foundation(top, card)?,
                }

                Ok(MovePlan::single(request.source, request.card_index, request.dest))
            }
        }
    }
}

/// Instantiate the rule named by `config`.
#[must_use]
pub fn rule_for(config: &EngineConfig) -> Box<dyn MoveRule> {
    match config.rule {
        MoveRuleKind::SingleMove => Box::new(SingleMove::new(config.empty_cascade_moves)),
        MoveRuleKind::SuperMove => Box::new(SuperMove::new(config.empty_cascade_moves)),
    }
}
