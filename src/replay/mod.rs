//! Replay engine: parsed games in, pre-move position snapshots out.
//!
//! ## Key Types
//!
//! - `replay_game`: walk one game's recorded moves on a fresh board
//! - `ReplayPosition`: snapshot + dice + active side + pip counts + provenance
//! - `ReplayError` / `ReplayOutcome`: skip-and-record error stream

pub mod engine;

pub use engine::{replay_game, ReplayError, ReplayOutcome, ReplayPosition};
