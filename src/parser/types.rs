//! Parsed-match data model.
//!
//! A `ParsedMatch` is built once per archive and then only read: the replay
//! engine walks its games, the enricher attaches provenance, and batch
//! importers size their work from `expected_position_count`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{DiceRoll, MoveNotation, Side, SidePair};

/// One player's identification line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    /// Country tag when the transcript carries one, e.g. `(JPN)`.
    pub country: Option<String>,
    /// Match score going into this game.
    pub score: u32,
}

/// One side's half of a numbered move line: the dice it rolled and the
/// checker moves it recorded. The move list may be empty (a dance).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub dice: DiceRoll,
    /// At most four checkers move per turn, so the list is inline.
    pub moves: SmallVec<[MoveNotation; 4]>,
}

/// One numbered line of a game transcript.
///
/// Either side's turn may be absent: partial lines, illegible segments, or
/// a game that ends mid-pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub number: u32,
    pub turns: SidePair<Option<TurnRecord>>,
}

impl MoveEntry {
    /// Number of per-side turn records present on this line (0-2).
    #[must_use]
    pub fn present_turns(&self) -> usize {
        self.turns.iter().filter(|(_, t)| t.is_some()).count()
    }
}

/// One game of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedGame {
    pub number: u32,
    pub players: SidePair<PlayerRecord>,
    pub moves: Vec<MoveEntry>,
}

impl ParsedGame {
    /// The player record for one side.
    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerRecord {
        &self.players[side]
    }
}

/// Filename-derived provenance attached by `parser::enrich`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMetadata {
    /// Tournament name recovered from the archive filename, if the stem
    /// followed the `<Tournament>_<p1>-vs-<p2>` convention.
    pub tournament: Option<String>,
    /// Label of the source collection this archive came from.
    pub source_collection: String,
    /// The original filename, kept verbatim for provenance.
    pub source_file: String,
}

/// A fully parsed match archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMatch {
    /// Points needed to win the match.
    pub match_length: u32,
    pub games: Vec<ParsedGame>,
    pub metadata: Option<MatchMetadata>,
}

impl ParsedMatch {
    /// How many replay positions this match will produce: one per present
    /// dice segment across every move line. Callers use this to plan batch
    /// sizes before replay runs.
    #[must_use]
    pub fn expected_position_count(&self) -> usize {
        self.games
            .iter()
            .flat_map(|g| g.moves.iter())
            .map(MoveEntry::present_turns)
            .sum()
    }
}
