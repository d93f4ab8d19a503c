//! Board state: cascades, open piles, foundations.
//!
//! The `Board` owns every card after a deal. It supports:
//! - Round-robin dealing of a deck across the cascades
//! - Read access to piles by kind and index
//! - Free-resource counts used by the supermove capacity rule
//! - Applying a validated `MovePlan`
//!
//! Piles use `im` persistent vectors, so cloning a `Board` for a snapshot
//! is O(number of piles).

use im::Vector;

use super::pile::{PileKind, PileRef};
use crate::core::card::{Card, KING};
use crate::core::config::FOUNDATIONS;
use crate::core::error::{EngineError, EngineResult};
use crate::rules::MovePlan;

/// The card layout of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cascades: Vec<Vector<Card>>,
    opens: Vec<Option<Card>>,
    foundations: [Vector<Card>; FOUNDATIONS],
}

impl Board {
    /// Create an empty board with the given pile counts.
    #[must_use]
    pub fn new(cascades: usize, opens: usize) -> Self {
        Self {
            cascades: vec![Vector::new(); cascades],
            opens: vec![None; opens],
            foundations: Default::default(),
        }
    }

    /// Board with the given cascade contents and empty opens/foundations.
    #[cfg(test)]
    pub(crate) fn from_cascades(cascades: Vec<Vec<Card>>, opens: usize) -> Self {
        Self {
            cascades: cascades.into_iter().map(Vector::from).collect(),
            opens: vec![None; opens],
            foundations: Default::default(),
        }
    }

    /// Reset every pile and deal `deck` round-robin: card `i` goes to
    /// cascade `i % cascades`, preserving order within each pile.
    pub fn deal(&mut self, deck: &[Card]) {
        let count = self.cascades.len();
        *self = Self::new(count, self.opens.len());
        for (i, card) in deck.iter().enumerate() {
            self.cascades[i % count].push_back(*card);
        }
    }

    /// Number of piles of `kind`.
    #[must_use]
    pub fn pile_count(&self, kind: PileKind) -> usize {
        match kind {
            PileKind::Cascade => self.cascades.len(),
            PileKind::Open => self.opens.len(),
            PileKind::Foundation => FOUNDATIONS,
        }
    }

    /// Check that `pile` is within the configured bounds.
    pub fn check_pile(&self, pile: PileRef) -> EngineResult<()> {
        let count = self.pile_count(pile.kind);
        if pile.index >= count {
            return Err(EngineError::InvalidPileNumber {
                kind: pile.kind,
                index: pile.index,
                count,
            });
        }
        Ok(())
    }

    /// Get a cascade pile, bottom card first.
    #[must_use]
    pub fn cascade(&self, index: usize) -> Option<&Vector<Card>> {
        self.cascades.get(index)
    }

    /// Get the card in an open pile. `None` if out of range.
    #[must_use]
    pub fn open(&self, index: usize) -> Option<Option<Card>> {
        self.opens.get(index).copied()
    }

    /// Get a foundation pile, Ace first.
    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Vector<Card>> {
        self.foundations.get(index)
    }

    /// Cards in a pile, bottom first. `None` if out of range.
    #[must_use]
    pub fn cards(&self, pile: PileRef) -> Option<Vec<Card>> {
        match pile.kind {
            PileKind::Cascade => self.cascade(pile.index).map(|p| p.iter().copied().collect()),
            PileKind::Open => self.open(pile.index).map(|slot| slot.into_iter().collect()),
            PileKind::Foundation => self
                .foundation(pile.index)
                .map(|p| p.iter().copied().collect()),
        }
    }

    /// Number of cards in a pile. Out-of-range piles count as empty.
    #[must_use]
    pub fn pile_len(&self, pile: PileRef) -> usize {
        match pile.kind {
            PileKind::Cascade => self.cascade(pile.index).map_or(0, Vector::len),
            PileKind::Open => self.open(pile.index).flatten().map_or(0, |_| 1),
            PileKind::Foundation => self.foundation(pile.index).map_or(0, Vector::len),
        }
    }

    /// Top (last) card of a pile.
    #[must_use]
    pub fn top(&self, pile: PileRef) -> Option<Card> {
        match pile.kind {
            PileKind::Cascade => self.cascade(pile.index)?.back().copied(),
            PileKind::Open => self.open(pile.index)?,
            PileKind::Foundation => self.foundation(pile.index)?.back().copied(),
        }
    }

    /// Number of empty open piles.
    #[must_use]
    pub fn empty_opens(&self) -> usize {
        self.opens.iter().filter(|slot| slot.is_none()).count()
    }

    /// Number of empty cascade piles.
    #[must_use]
    pub fn empty_cascades(&self) -> usize {
        self.cascades.iter().filter(|p| p.is_empty()).count()
    }

    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }

    /// Every card on the board, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.foundations
            .iter()
            .flat_map(|p| p.iter().copied())
            .chain(self.opens.iter().flatten().copied())
            .chain(self.cascades.iter().flat_map(|p| p.iter().copied()))
    }

    /// True when every foundation holds a complete suit.
    #[must_use]
    pub fn foundations_complete(&self) -> bool {
        self.foundations.iter().all(|p| p.len() == KING as usize)
    }

    /// Apply a validated move plan.
    ///
    /// Fails without mutating if the plan does not fit the board.
    pub fn apply(&mut self, plan: &MovePlan) -> EngineResult<()> {
        self.check_pile(plan.source)?;
        self.check_pile(plan.dest)?;
        if self.pile_len(plan.source) != plan.start + plan.count || plan.count == 0 {
            return Err(EngineError::IllegalState("move plan does not match board"));
        }
        if plan.dest.kind == PileKind::Open && (plan.count != 1 || self.pile_len(plan.dest) != 0) {
            return Err(EngineError::IllegalState("move plan does not match board"));
        }

        let run = match plan.source.kind {
            PileKind::Cascade => self.cascades[plan.source.index].split_off(plan.start),
            PileKind::Open => self.opens[plan.source.index].take().into_iter().collect(),
            PileKind::Foundation => self.foundations[plan.source.index].split_off(plan.start),
        };

        match plan.dest.kind {
            PileKind::Cascade => self.cascades[plan.dest.index].append(run),
            PileKind::Open => self.opens[plan.dest.index] = run.front().copied(),
            PileKind::Foundation => self.foundations[plan.dest.index].append(run),
        }

        Ok(())
    }
}
