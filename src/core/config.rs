//! Engine configuration.
//!
//! `EngineConfig` is an immutable record validated once, then handed to
//! `FreecellGame::new`. `EngineBuilder` is the fluent way to produce one:
//!
//! ```
//! use freecell_engine::core::EngineBuilder;
//!
//! let game = EngineBuilder::new()
//!     .cascades(8)?
//!     .opens(4)?
//!     .supermove()
//!     .build()?;
//! assert!(!game.is_started());
//! # Ok::<(), freecell_engine::core::EngineError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{EngineError, EngineResult};
use crate::game::FreecellGame;

/// Minimum number of cascade piles.
pub const MIN_CASCADES: usize = 4;
/// Minimum number of open piles.
pub const MIN_OPENS: usize = 1;
/// Number of foundation piles.
pub const FOUNDATIONS: usize = 4;

/// Which move rule the engine enforces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRuleKind {
    /// Only the tail card of a pile may move.
    #[default]
    SingleMove,
    /// Cascade-to-cascade moves may carry a whole build, capacity permitting.
    SuperMove,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of cascade piles (at least 4).
    pub cascades: usize,

    /// Number of open piles (at least 1).
    pub opens: usize,

    /// Move rule strategy.
    pub rule: MoveRuleKind,

    /// Whether single-card moves may land on an empty cascade.
    ///
    /// Off by default. Supermove runs may always land on an empty cascade.
    #[serde(default)]
    pub empty_cascade_moves: bool,

    /// Shuffle seed. `None` seeds from entropy when the engine is built.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cascades: 8,
            opens: 4,
            rule: MoveRuleKind::SingleMove,
            empty_cascade_moves: false,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Check pile-count minimums.
    pub fn validate(&self) -> EngineResult<()> {
        check_cascades(self.cascades)?;
        check_opens(self.opens)
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the move rule.
    #[must_use]
    pub fn with_rule(mut self, rule: MoveRuleKind) -> Self {
        self.rule = rule;
        self
    }
}

fn check_cascades(n: usize) -> EngineResult<()> {
    if n < MIN_CASCADES {
        return Err(EngineError::InvalidConfig(format!(
            "cascades cannot be less than {MIN_CASCADES}, got {n}"
        )));
    }
    Ok(())
}

fn check_opens(n: usize) -> EngineResult<()> {
    if n < MIN_OPENS {
        return Err(EngineError::InvalidConfig(format!(
            "open piles cannot be less than {MIN_OPENS}, got {n}"
        )));
    }
    Ok(())
}

/// Builder for `FreecellGame`.
///
/// Defaults to 8 cascades, 4 opens, single-card moves.
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cascade count. Fails below 4.
    pub fn cascades(mut self, n: usize) -> EngineResult<Self> {
        check_cascades(n)?;
        self.config.cascades = n;
        Ok(self)
    }

    /// Set the open pile count. Fails below 1.
    pub fn opens(mut self, n: usize) -> EngineResult<Self> {
        check_opens(n)?;
        self.config.opens = n;
        Ok(self)
    }

    #[must_use]
    pub fn rule(mut self, rule: MoveRuleKind) -> Self {
        self.config.rule = rule;
        self
    }

    /// Shorthand for `rule(MoveRuleKind::SuperMove)`.
    #[must_use]
    pub fn supermove(self) -> Self {
        self.rule(MoveRuleKind::SuperMove)
    }

    #[must_use]
    pub fn empty_cascade_moves(mut self, allow: bool) -> Self {
        self.config.empty_cascade_moves = allow;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// The configuration built so far.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the engine.
    pub fn build(self) -> EngineResult<FreecellGame> {
        debug!(
            cascades = self.config.cascades,
            opens = self.config.opens,
            rule = ?self.config.rule,
            "building freecell engine"
        );
        FreecellGame::new(self.config)
    }
}
