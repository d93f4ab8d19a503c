//! Board model: pile kinds and the card layout.
//!
//! ## Key Types
//!
//! - `PileKind`: Cascade, Open, or Foundation
//! - `PileRef`: A pile kind plus a 0-based index
//! - `Board`: Every pile on the table and the primitives that mutate them

pub mod pile;
pub mod state;

pub use pile::{PileKind, PileRef};
pub use state::Board;
