//! Pile kinds and pile references.

use serde::{Deserialize, Serialize};

/// The three kinds of pile on a Freecell board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Tableau column. Unbounded; only the tail is moved from.
    Cascade,
    /// Free cell. Holds at most one card.
    Open,
    /// Suit stack built up from Ace. The first card placed fixes the suit.
    Foundation,
}

impl PileKind {
    /// Kinds in rendering order.
    pub const RENDER_ORDER: [PileKind; 3] = [PileKind::Foundation, PileKind::Open, PileKind::Cascade];

    /// Label letter used in the rendered board (`C`, `O`, `F`).
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            PileKind::Cascade => 'C',
            PileKind::Open => 'O',
            PileKind::Foundation => 'F',
        }
    }
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PileKind::Cascade => "cascade",
            PileKind::Open => "open",
            PileKind::Foundation => "foundation",
        })
    }
}

/// A pile on the board: kind plus 0-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileRef {
    pub kind: PileKind,
    pub index: usize,
}

impl PileRef {
    #[must_use]
    pub const fn new(kind: PileKind, index: usize) -> Self {
        Self { kind, index }
    }

    #[must_use]
    pub const fn cascade(index: usize) -> Self {
        Self::new(PileKind::Cascade, index)
    }

    #[must_use]
    pub const fn open(index: usize) -> Self {
        Self::new(PileKind::Open, index)
    }

    #[must_use]
    pub const fn foundation(index: usize) -> Self {
        Self::new(PileKind::Foundation, index)
    }
}

impl std::fmt::Display for PileRef {
    /// 1-based label, as in the rendered board (`C5`, `O1`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.label(), self.index + 1)
    }
}
