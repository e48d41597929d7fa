//! Game replay: recorded moves in, position snapshots out.
//!
//! Each replay walks one game's move entries against a single board. The
//! snapshot for a turn is captured **before** that turn's moves are applied -
//! a hard requirement, because downstream teaching content must present the
//! position a player actually faced, not the result of the decision.
//!
//! Every call builds its own board from the starting position, so distinct
//! games and archives replay fully in parallel with no coordination.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::{BoardState, DiceRoll, Side, SidePair};
use crate::parser::ParsedGame;

/// One position a player faced, with everything the position library and
/// the ground-truth verification collaborator need to identify it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayPosition {
    /// Board snapshot taken before the turn's moves were applied.
    pub board: BoardState,
    /// The dice the active side rolled for this turn.
    pub dice: DiceRoll,
    /// The side to move.
    pub active_side: Side,
    /// Both sides' pip counts at the snapshot.
    pub pip_counts: SidePair<u32>,
    /// Game this position came from.
    pub game_number: u32,
    /// Move line this position came from.
    pub move_number: u32,
}

/// A recorded move that could not be applied mechanically.
///
/// Replay continues with subsequent moves; the position stream stays usable
/// even when one historical line is corrupt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayError {
    pub game_number: u32,
    pub move_number: u32,
    pub side: Side,
    pub message: String,
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "game {} move {} ({}): {}",
            self.game_number, self.move_number, self.side, self.message
        )
    }
}

impl std::error::Error for ReplayError {}

/// Positions and errors produced by one game replay.
#[derive(Clone, Debug, Default)]
pub struct ReplayOutcome {
    pub positions: Vec<ReplayPosition>,
    pub errors: Vec<ReplayError>,
}

/// Replay one game's recorded moves, emitting a pre-move snapshot per
/// player turn.
///
/// No legality checking: the engine trusts recorded notation and enforces
/// mechanical consistency only. An inconsistent move becomes a recorded
/// `ReplayError` and replay continues.
#[must_use]
pub fn replay_game(game: &ParsedGame) -> ReplayOutcome {
    let mut board = BoardState::starting_position();
    let mut outcome = ReplayOutcome::default();

    for entry in &game.moves {
        for side in Side::BOTH {
            let Some(turn) = &entry.turns[side] else {
                continue;
            };

            outcome.positions.push(ReplayPosition {
                board,
                dice: turn.dice,
                active_side: side,
                pip_counts: SidePair::new(board.pip_count(Side::X), board.pip_count(Side::O)),
                game_number: game.number,
                move_number: entry.number,
            });

            for notation in &turn.moves {
                if let Err(err) = board.apply(side, notation) {
                    warn!(
                        "replay error in game {} move {}: {err}",
                        game.number, entry.number
                    );
                    outcome.errors.push(ReplayError {
                        game_number: game.number,
                        move_number: entry.number,
                        side,
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MoveNotation;
    use crate::parser::{MoveEntry, PlayerRecord, TurnRecord};

    fn turn(dice: DiceRoll, moves: &[MoveNotation]) -> TurnRecord {
        TurnRecord { dice, moves: moves.iter().copied().collect() }
    }

    fn game(moves: Vec<MoveEntry>) -> ParsedGame {
        ParsedGame {
            number: 1,
            players: SidePair::new(
                PlayerRecord { name: "Alpha".into(), country: None, score: 0 },
                PlayerRecord { name: "Beta".into(), country: None, score: 0 },
            ),
            moves,
        }
    }

    #[test]
    fn test_single_move_game_yields_two_positions() {
        let g = game(vec![MoveEntry {
            number: 1,
            turns: SidePair::new(
                Some(turn(
                    DiceRoll(3, 1),
                    &[MoveNotation::new(8, 5, false), MoveNotation::new(6, 5, false)],
                )),
                Some(turn(
                    DiceRoll(6, 3),
                    &[MoveNotation::new(24, 18, false), MoveNotation::new(13, 10, false)],
                )),
            ),
        }]);

        let outcome = replay_game(&g);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.positions.len(), 2);

        let first = &outcome.positions[0];
        assert_eq!(first.dice, DiceRoll(3, 1));
        assert_eq!(first.active_side, Side::X);
        assert_eq!(first.pip_counts[Side::X], 167);
        assert_eq!(first.pip_counts[Side::O], 167);
        assert_eq!(first.board, BoardState::starting_position());
    }

    #[test]
    fn test_snapshot_is_pre_move() {
        let g = game(vec![
            MoveEntry {
                number: 1,
                turns: SidePair::new(
                    Some(turn(DiceRoll(3, 1), &[MoveNotation::new(8, 5, false)])),
                    Some(turn(DiceRoll(6, 3), &[MoveNotation::new(24, 18, false)])),
                ),
            },
            MoveEntry {
                number: 2,
                turns: SidePair::new(
                    Some(turn(DiceRoll(4, 2), &[MoveNotation::new(13, 9, false)])),
                    None,
                ),
            },
        ]);

        let outcome = replay_game(&g);
        assert_eq!(outcome.positions.len(), 3);

        // Second position: X's first move already applied, O's not.
        let second = &outcome.positions[1];
        assert_eq!(second.active_side, Side::O);
        assert_eq!(second.board.checkers_on(Side::X, 5), 1);
        assert_eq!(second.board.checkers_on(Side::O, 18), 0);
        assert_eq!(second.pip_counts[Side::X], 164);

        // Third position: both first-move turns applied, X's second not.
        let third = &outcome.positions[2];
        assert_eq!(third.active_side, Side::X);
        assert_eq!(third.board.checkers_on(Side::O, 18), 1);
        assert_eq!(third.board.checkers_on(Side::X, 9), 0);
    }

    #[test]
    fn test_replay_continues_past_inconsistent_move() {
        let g = game(vec![MoveEntry {
            number: 1,
            turns: SidePair::new(
                Some(turn(
                    DiceRoll(5, 2),
                    &[
                        // Nothing on the 20-point: mechanically impossible.
                        MoveNotation::new(20, 15, false),
                        // Still applied after the error.
                        MoveNotation::new(13, 11, false),
                    ],
                )),
                None,
            ),
        }]);

        let outcome = replay_game(&g);
        assert_eq!(outcome.positions.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].game_number, 1);
        assert_eq!(outcome.errors[0].side, Side::X);
        assert!(outcome.errors[0].message.contains("point 20"));
    }

    #[test]
    fn test_conservation_across_full_replay_with_hits() {
        let g = game(vec![
            MoveEntry {
                number: 1,
                turns: SidePair::new(
                    Some(turn(DiceRoll(6, 4), &[MoveNotation::new(24, 18, false), MoveNotation::new(13, 9, false)])),
                    Some(turn(DiceRoll(5, 5), &[
                        MoveNotation::new(13, 8, false),
                        MoveNotation::new(13, 8, false),
                        MoveNotation::new(13, 8, false),
                        MoveNotation::new(13, 8, false),
                    ])),
                ),
            },
            MoveEntry {
                number: 2,
                turns: SidePair::new(
                    // X hits the blot O left nowhere - this will error - then moves on.
                    Some(turn(DiceRoll(3, 1), &[MoveNotation::new(9, 6, true), MoveNotation::new(6, 5, false)])),
                    Some(turn(DiceRoll(2, 1), &[MoveNotation::new(24, 22, false), MoveNotation::new(22, 21, false)])),
                ),
            },
        ]);

        let outcome = replay_game(&g);
        for position in &outcome.positions {
            assert_eq!(position.board.total_checkers(Side::X), 15);
            assert_eq!(position.board.total_checkers(Side::O), 15);
        }
        // The failed hit was recorded, not fatal.
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.positions.len(), 4);
    }

    #[test]
    fn test_dance_yields_position_without_moves() {
        let g = game(vec![MoveEntry {
            number: 1,
            turns: SidePair::new(Some(turn(DiceRoll(6, 6), &[])), None),
        }]);

        let outcome = replay_game(&g);
        assert_eq!(outcome.positions.len(), 1);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.positions[0].dice, DiceRoll(6, 6));
    }

    #[test]
    fn test_replay_position_serialization() {
        let g = game(vec![MoveEntry {
            number: 1,
            turns: SidePair::new(Some(turn(DiceRoll(3, 1), &[MoveNotation::new(8, 5, false)])), None),
        }]);
        let outcome = replay_game(&g);

        let json = serde_json::to_string(&outcome.positions[0]).unwrap();
        let back: ReplayPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome.positions[0], back);
    }
}
