//! Board model: sides, notation, and the checker-layout state machine.
//!
//! ## Key Types
//!
//! - `Side` / `SidePair`: two-sided identification and per-side storage
//! - `DiceRoll` / `MoveNotation`: transcript notation (`BAR`/`OFF` sentinels)
//! - `BoardState`: checker layout with mechanical move application,
//!   pip counting, and the home-board / race predicates

pub mod moves;
pub mod side;
pub mod state;

pub use moves::{DiceRoll, MoveNotation, BAR, OFF};
pub use side::{Side, SidePair};
pub use state::{ApplyError, BoardState, BAR_PIP_DISTANCE};
