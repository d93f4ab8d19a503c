//! The Freecell engine.

use tracing::{debug, trace};

use super::render::render_board;
use crate::board::{Board, PileKind, PileRef};
use crate::core::card::Card;
use crate::core::config::{EngineBuilder, EngineConfig, MoveRuleKind};
use crate::core::deck::{canonical_deck, validate_deck};
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::{GameRng, GameRngState};
use crate::rules::{rule_for, MoveRequest, MoveRule};

/// A Freecell game: board, move rule, and shuffle RNG.
///
/// The board is empty until `start_game` succeeds; every call to
/// `start_game` deals a fresh board.
#[derive(Debug)]
pub struct FreecellGame {
    config: EngineConfig,
    rule: Box<dyn MoveRule>,
    board: Board,
    rng: GameRng,
    started: bool,
}

impl FreecellGame {
    /// Create an engine from a validated configuration.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            rule: rule_for(&config),
            board: Board::new(config.cascades, config.opens),
            rng,
            started: false,
            config,
        })
    }

    /// Start configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// The canonical unshuffled 52-card deck.
    #[must_use]
    pub fn deck(&self) -> Vec<Card> {
        canonical_deck()
    }

    /// Deal a new game.
    ///
    /// The deck must hold 52 distinct cards. With `shuffle` set, the deck is
    /// uniformly permuted before dealing; otherwise it is dealt as given.
    /// An invalid deck leaves the current game untouched.
    pub fn start_game(&mut self, deck: &[Card], shuffle: bool) -> EngineResult<()> {
        validate_deck(deck)?;

        let mut cards = deck.to_vec();
        if shuffle {
            self.rng.shuffle(&mut cards);
        }
        self.board.deal(&cards);
        self.started = true;

        debug!(
            cascades = self.config.cascades,
            opens = self.config.opens,
            shuffle,
            "game started"
        );
        Ok(())
    }

    /// Move the card at `card_index` of the source pile (and, under the
    /// supermove rule, every card above it) to the destination pile.
    ///
    /// Indices are 0-based. On error the board is unchanged.
    pub fn make_move(
        &mut self,
        source_kind: PileKind,
        source_index: usize,
        card_index: usize,
        dest_kind: PileKind,
        dest_index: usize,
    ) -> EngineResult<()> {
        self.apply_request(MoveRequest::new(
            PileRef::new(source_kind, source_index),
            card_index,
            PileRef::new(dest_kind, dest_index),
        ))
    }

    /// Validate and apply a move.
    pub fn apply_request(&mut self, request: MoveRequest) -> EngineResult<()> {
        let result = self.try_apply(&request);
        if let Err(err) = &result {
            debug!(
                source = %request.source,
                card_index = request.card_index,
                dest = %request.dest,
                error = %err,
                "move rejected"
            );
        }
        result
    }

    fn try_apply(&mut self, request: &MoveRequest) -> EngineResult<()> {
        if !self.started {
            return Err(EngineError::IllegalState("game not started"));
        }

        let plan = self.rule.plan(&self.board, request)?;
        self.board.apply(&plan)?;

        trace!(source = %plan.source, dest = %plan.dest, count = plan.count, "move applied");
        Ok(())
    }

    /// Rendered board; empty before the first `start_game`.
    #[must_use]
    pub fn game_state(&self) -> String {
        if !self.started {
            return String::new();
        }
        render_board(&self.board)
    }

    /// True when all four foundations hold 13 cards.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.started && self.board.foundations_complete()
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rule(&self) -> MoveRuleKind {
        self.rule.kind()
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cards in a pile, bottom first. `None` if the pile does not exist.
    #[must_use]
    pub fn pile(&self, kind: PileKind, index: usize) -> Option<Vec<Card>> {
        self.board.cards(PileRef::new(kind, index))
    }

    /// Largest run a cascade-to-cascade move may carry right now.
    #[must_use]
    pub fn max_movable(&self) -> usize {
        self.rule.max_movable(&self.board)
    }

    /// Shuffle RNG state, for reproducing later shuffles.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
