//! Card, Suit, and Color types for a standard 52-card deck.
//!
//! `Card` is an immutable `Copy` value. Its rank is validated at
//! construction so every `Card` in the engine holds a rank in 1..=13.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Lowest rank (Ace).
pub const ACE: u8 = 1;
/// Highest rank (King).
pub const KING: u8 = 13;

/// The four suits, in canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Club | Suit::Spade => Color::Black,
            Suit::Diamond | Suit::Heart => Color::Red,
        }
    }

    /// Glyph used in the rendered board.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Club => '\u{2663}',
            Suit::Diamond => '\u{2666}',
            Suit::Heart => '\u{2665}',
            Suit::Spade => '\u{2660}',
        }
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

/// A playing card.
///
/// Two cards are equal iff suit and rank match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCard", into = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Create a card, rejecting ranks outside 1..=13.
    pub fn new(suit: Suit, rank: u8) -> EngineResult<Self> {
        if !(ACE..=KING).contains(&rank) {
            return Err(EngineError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Construct from a rank already known to be in 1..=13.
    pub(crate) const fn from_parts(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Suit of this card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Rank in 1..=13 (Ace=1, King=13).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Color of this card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// True if `other` is of the opposite color.
    #[must_use]
    pub fn is_opposite_color(self, other: Card) -> bool {
        self.color() != other.color()
    }

    /// True if `self` may sit directly on top of `below` in a cascade:
    /// one rank lower and opposite color.
    #[must_use]
    pub fn stacks_on(self, below: Card) -> bool {
        below.rank == self.rank + 1 && self.is_opposite_color(below)
    }

    /// Rank symbol: A, J, Q, K, or the numeral.
    #[must_use]
    pub fn rank_symbol(self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.glyph())
    }
}

/// Unvalidated wire form so deserialized cards go through `Card::new`.
#[derive(Serialize, Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = EngineError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.suit, raw.rank)
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
        }
    }
}
