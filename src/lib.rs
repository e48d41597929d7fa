//! # gammon-replay
//!
//! A backgammon match-archive replay and phase-classification engine: terse
//! historical transcripts in, exact board positions tagged by game phase out,
//! ready for a teaching/verification position library.
//!
//! ## Design Principles
//!
//! 1. **Values In, Values Out**: Parsing, replay, classification, and
//!    rendering are pure transformations. No I/O, no shared mutable state -
//!    callers replay whole archives in parallel with zero coordination.
//!
//! 2. **Skip And Record**: Bulk historical import must survive damage. Every
//!    failure mode - a malformed line, a mechanically impossible move - is
//!    returned as data and parsing/replay continues. Nothing throws across a
//!    component boundary.
//!
//! 3. **Trust The Transcript**: The engine enforces mechanical consistency
//!    (no checker moves that isn't there) but never judges move legality or
//!    quality. That is the job of the external analysis collaborator.
//!
//! 4. **Pre-Move Snapshots**: Replay captures each position *before* the
//!    turn's moves are applied, so downstream teaching content presents the
//!    decision a player actually faced.
//!
//! ## Modules
//!
//! - `board`: sides, notation, checker layout, pip counts, race/home predicates
//! - `parser`: JellyFish-family transcript grammar and provenance enrichment
//! - `replay`: per-turn position snapshots with running pip counts
//! - `phase`: opening/early/middle/bearoff classification with confidence
//! - `render`: fixed-width ASCII diagrams

pub mod board;
pub mod parser;
pub mod phase;
pub mod render;
pub mod replay;

// Re-export commonly used types
pub use crate::board::{ApplyError, BoardState, DiceRoll, MoveNotation, Side, SidePair, BAR, OFF};

pub use crate::parser::{
    enrich, parse, MatchMetadata, MoveEntry, ParseError, ParseOptions, ParseOutcome, ParsedGame,
    ParsedMatch, PlayerRecord, TurnRecord,
};

pub use crate::replay::{replay_game, ReplayError, ReplayOutcome, ReplayPosition};

pub use crate::phase::{
    classify, classify_with, distribution, is_race_position, GamePhase, PhaseClassification,
    PhaseDistribution, PhaseThresholds,
};

pub use crate::render::{render, render_by_position_id, render_opening, OPENING_ROLLS};
