//! Move rules.
//!
//! A `MoveRule` validates a `MoveRequest` against the board and returns
//! the `MovePlan` to apply. Two rules are provided:
//! - `SingleMove`: only the tail card moves
//! - `SuperMove`: cascade-to-cascade moves may carry a whole build
//!
//! The engine picks one at construction from `EngineConfig::rule`; the
//! acceptance predicates in `acceptance` are shared by both.

pub mod acceptance;
pub mod engine;
mod single;
mod supermove;

pub use engine::{rule_for, MovePlan, MoveRequest, MoveRule};
pub use single::SingleMove;
pub use supermove::SuperMove;
