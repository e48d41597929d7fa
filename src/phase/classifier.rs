//! Game-phase classification.
//!
//! Rules apply in order: deterministic structure first (opening, bearoff),
//! then heuristic pip/move thresholds. The deterministic rules carry high
//! confidence; the heuristic split between early and middle game is fuzzy by
//! nature and says so in its score.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::replay::ReplayPosition;

/// The phase a position belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Opening,
    Early,
    Middle,
    Bearoff,
}

impl GamePhase {
    /// All phases, in game order.
    pub const ALL: [GamePhase; 4] =
        [GamePhase::Opening, GamePhase::Early, GamePhase::Middle, GamePhase::Bearoff];
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Opening => write!(f, "opening"),
            GamePhase::Early => write!(f, "early"),
            GamePhase::Middle => write!(f, "middle"),
            GamePhase::Bearoff => write!(f, "bearoff"),
        }
    }
}

/// A phase label with a confidence score in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseClassification {
    pub phase: GamePhase,
    pub confidence: f32,
}

/// Classification thresholds.
///
/// Named configuration rather than inline literals so domain experts can
/// retune the heuristic boundaries without touching the logic.
///
/// ## Defaults
///
/// - Moves 1-2 are opening theory territory regardless of board content.
/// - A combined pip total of 280+ inside the first 8 moves reads as an
///   early game; anything else with contact is a middle game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseThresholds {
    /// Highest move number still classified as the opening.
    pub opening_max_move: u32,
    /// Confidence for the opening rule (structural, so > 0.9).
    pub opening_confidence: f32,
    /// Minimum combined pip count (both sides) for an early game.
    pub early_min_combined_pips: u32,
    /// Highest move number still eligible for the early game.
    pub early_max_move: u32,
    /// Confidence for the heuristic early-game rule.
    pub early_confidence: f32,
    /// Confidence for the middle-game fallback.
    pub middle_confidence: f32,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            opening_max_move: 2,
            opening_confidence: 0.95,
            early_min_combined_pips: 280,
            early_max_move: 8,
            early_confidence: 0.7,
            middle_confidence: 0.6,
        }
    }
}

impl PhaseThresholds {
    /// Adjust the early-game pip boundary.
    #[must_use]
    pub fn with_early_min_combined_pips(mut self, pips: u32) -> Self {
        self.early_min_combined_pips = pips;
        self
    }

    /// Adjust the early-game move-number boundary.
    #[must_use]
    pub fn with_early_max_move(mut self, move_number: u32) -> Self {
        self.early_max_move = move_number;
        self
    }
}

/// Classify a position with the default thresholds.
#[must_use]
pub fn classify(position: &ReplayPosition) -> PhaseClassification {
    classify_with(position, &PhaseThresholds::default())
}

/// Classify a position. Rules in order:
///
/// 1. Move number within the opening window: `Opening`. Opening theory
///    applies to the very first decision pair as a structural fact,
///    independent of board content.
/// 2. Active side has everything home: `Bearoff` at confidence 1.0, the
///    one unambiguous terminal-phase signal.
/// 3. Pip/move thresholds split `Early` from `Middle` at reduced
///    confidence.
#[must_use]
pub fn classify_with(
    position: &ReplayPosition,
    thresholds: &PhaseThresholds,
) -> PhaseClassification {
    if position.move_number <= thresholds.opening_max_move {
        return PhaseClassification {
            phase: GamePhase::Opening,
            confidence: thresholds.opening_confidence,
        };
    }

    if position.board.all_in_home_board(position.active_side) {
        return PhaseClassification { phase: GamePhase::Bearoff, confidence: 1.0 };
    }

    let combined_pips =
        position.pip_counts.iter().map(|(_, &pips)| pips).sum::<u32>();
    if combined_pips >= thresholds.early_min_combined_pips
        && position.move_number <= thresholds.early_max_move
    {
        PhaseClassification {
            phase: GamePhase::Early,
            confidence: thresholds.early_confidence,
        }
    } else {
        PhaseClassification {
            phase: GamePhase::Middle,
            confidence: thresholds.middle_confidence,
        }
    }
}

/// True iff the two sides' checkers can no longer interact.
///
/// An auxiliary signal for callers - race-ness is orthogonal to the phase
/// enum (a race can be early, middle, or bearoff).
#[must_use]
pub fn is_race_position(board: &BoardState) -> bool {
    board.is_race()
}

/// Per-phase position counts across a batch.
///
/// Callers use this to judge whether a corpus covers all phases well
/// enough before building teaching content from it.
#[derive(Clone, Debug, Default)]
pub struct PhaseDistribution {
    counts: FxHashMap<GamePhase, usize>,
}

impl PhaseDistribution {
    /// Positions classified into `phase`.
    #[must_use]
    pub fn count(&self, phase: GamePhase) -> usize {
        self.counts.get(&phase).copied().unwrap_or(0)
    }

    /// Total positions tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Phases with no positions at all.
    pub fn missing_phases(&self) -> impl Iterator<Item = GamePhase> + '_ {
        GamePhase::ALL.into_iter().filter(|p| self.count(*p) == 0)
    }
}

/// Tally phases across a batch of positions using the default thresholds.
#[must_use]
pub fn distribution(positions: &[ReplayPosition]) -> PhaseDistribution {
    let mut dist = PhaseDistribution::default();
    for position in positions {
        *dist.counts.entry(classify(position).phase).or_insert(0) += 1;
    }
    dist
}
