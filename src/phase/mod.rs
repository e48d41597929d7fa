//! Phase classification: deterministic rules first, heuristics second.
//!
//! ## Key Types
//!
//! - `GamePhase` / `PhaseClassification`: the label plus its confidence
//! - `PhaseThresholds`: named, tunable heuristic boundaries
//! - `classify` / `classify_with` / `distribution` / `is_race_position`

pub mod classifier;

pub use classifier::{
    classify, classify_with, distribution, is_race_position, GamePhase, PhaseClassification,
    PhaseDistribution, PhaseThresholds,
};
