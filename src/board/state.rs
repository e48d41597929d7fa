//! Board state and mechanical move application.
//!
//! ## Representation
//!
//! One unsigned point array per side, each in that side's own frame
//! (point 1 = last point before bearing off, point 24 = farthest), plus
//! explicit bar and borne-off counters. A point `p` in one side's frame is
//! the opponent's `25 - p`.
//!
//! ## Invariant
//!
//! For each side, points total + bar + borne-off == 15 after every mutation.
//! `apply` enforces mechanical consistency only (never move a checker that
//! isn't there); it does not validate backgammon legality - the engine
//! trusts recorded notation.

use serde::{Deserialize, Serialize};

use super::moves::{MoveNotation, BAR, OFF};
use super::side::{Side, SidePair};

/// Distance a bar checker must travel before it re-enters play.
pub const BAR_PIP_DISTANCE: u32 = 25;

/// A move that cannot be applied to the current board.
///
/// These are data, not panics: replay records them and keeps going so one
/// bad historical line does not discard the rest of an archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyError {
    /// The origin point (or bar) holds no checker of the moving side.
    EmptyOrigin { side: Side, from: u8 },
    /// A hit was recorded but the opponent has no checker on the target.
    NoCheckerToHit { side: Side, to: u8 },
    /// A from/to value outside 0-25.
    PointOutOfRange { value: u8 },
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyError::EmptyOrigin { side, from } => {
                if *from == BAR {
                    write!(f, "{side} has no checker on the bar")
                } else {
                    write!(f, "{side} has no checker on point {from}")
                }
            }
            ApplyError::NoCheckerToHit { side, to } => {
                write!(f, "no {} checker to hit on {side}'s point {to}", side.opponent())
            }
            ApplyError::PointOutOfRange { value } => {
                write!(f, "point {value} is outside the board")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// The full checker layout of one backgammon position.
///
/// Cheap to clone (a few dozen bytes), so the replay engine snapshots it
/// freely and callers may keep snapshots without aliasing live state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// Checkers per point, per side, in each side's own frame.
    /// Index 0 holds the 1-point, index 23 the 24-point.
    points: SidePair<[u8; 24]>,
    /// Checkers waiting to re-enter.
    bar: SidePair<u8>,
    /// Checkers removed from play.
    borne_off: SidePair<u8>,
}

impl BoardState {
    /// The canonical starting layout: per side, 2 checkers on the 24-point,
    /// 5 on the 13-point, 3 on the 8-point, 5 on the 6-point. Pip count 167.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut points = [0u8; 24];
        points[24 - 1] = 2;
        points[13 - 1] = 5;
        points[8 - 1] = 3;
        points[6 - 1] = 5;

        Self {
            points: SidePair::with_value(points),
            bar: SidePair::with_value(0),
            borne_off: SidePair::with_value(0),
        }
    }

    /// Checkers a side has on one of its points (1-24, own frame).
    ///
    /// Out-of-range points read as empty.
    #[must_use]
    pub fn checkers_on(&self, side: Side, point: u8) -> u8 {
        if (1..=24).contains(&point) {
            self.points[side][point as usize - 1]
        } else {
            0
        }
    }

    /// Checkers a side has on the bar.
    #[must_use]
    pub fn bar(&self, side: Side) -> u8 {
        self.bar[side]
    }

    /// Checkers a side has borne off.
    #[must_use]
    pub fn borne_off(&self, side: Side) -> u8 {
        self.borne_off[side]
    }

    /// Total checkers a side owns anywhere (points + bar + borne off).
    ///
    /// Always 15 for boards evolved from `starting_position` via `apply`.
    #[must_use]
    pub fn total_checkers(&self, side: Side) -> u8 {
        let on_points: u8 = self.points[side].iter().sum();
        on_points + self.bar[side] + self.borne_off[side]
    }

    /// Apply one recorded move for `side`.
    ///
    /// Decrements the origin (bar when `from == BAR`), increments the
    /// destination (the borne-off counter when `to == OFF`), and on a hit
    /// sends the opposing checker from the mirrored point to its bar.
    ///
    /// On error the board is left consistent - both sides still total 15 -
    /// so replay can continue with subsequent moves.
    pub fn apply(&mut self, side: Side, mv: &MoveNotation) -> Result<(), ApplyError> {
        if mv.from != BAR && !(1..=24).contains(&mv.from) {
            return Err(ApplyError::PointOutOfRange { value: mv.from });
        }
        if mv.to != OFF && !(1..=24).contains(&mv.to) {
            return Err(ApplyError::PointOutOfRange { value: mv.to });
        }

        // Origin first: a missing checker rejects the whole move.
        if mv.from == BAR {
            if self.bar[side] == 0 {
                return Err(ApplyError::EmptyOrigin { side, from: BAR });
            }
            self.bar[side] -= 1;
        } else {
            let slot = &mut self.points[side][mv.from as usize - 1];
            if *slot == 0 {
                return Err(ApplyError::EmptyOrigin { side, from: mv.from });
            }
            *slot -= 1;
        }

        if mv.to == OFF {
            self.borne_off[side] += 1;
        } else {
            self.points[side][mv.to as usize - 1] += 1;
        }

        // Hit: the opponent's checker sits on our destination, which is
        // point 25 - to in their frame.
        if mv.is_hit && mv.to != OFF {
            let opp = side.opponent();
            let mirror = 25 - mv.to;
            let slot = &mut self.points[opp][mirror as usize - 1];
            if *slot == 0 {
                return Err(ApplyError::NoCheckerToHit { side, to: mv.to });
            }
            *slot -= 1;
            self.bar[opp] += 1;
        }

        Ok(())
    }

    /// Pip count for one side: sum over occupied points of
    /// `distance-to-off x count`, bar checkers at distance 25.
    #[must_use]
    pub fn pip_count(&self, side: Side) -> u32 {
        let points: u32 = self.points[side]
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u32 + 1) * u32::from(count))
            .sum();
        points + BAR_PIP_DISTANCE * u32::from(self.bar[side])
    }

    /// True iff a side has nothing on the bar and nothing outside its 1-6
    /// home range. Gates bearoff detection in the phase classifier.
    #[must_use]
    pub fn all_in_home_board(&self, side: Side) -> bool {
        self.bar[side] == 0 && self.points[side][6..].iter().all(|&c| c == 0)
    }

    /// The farthest-from-home point a side still occupies, in its own frame.
    /// Bar checkers count as 25; a side with everything borne off reads 0.
    #[must_use]
    pub fn rearmost_point(&self, side: Side) -> u8 {
        if self.bar[side] > 0 {
            return BAR;
        }
        self.points[side]
            .iter()
            .rposition(|&c| c > 0)
            .map_or(0, |i| i as u8 + 1)
    }

    /// True iff the sides have passed each other entirely: no further
    /// contact is possible and the game is a pure race.
    #[must_use]
    pub fn is_race(&self) -> bool {
        u32::from(self.rearmost_point(Side::X)) + u32::from(self.rearmost_point(Side::O)) < 25
    }

    /// Net checker count on a point of X's frame: positive for X checkers,
    /// negative for O checkers (which sit on `25 - point` in O's frame).
    /// Used by the renderer to lay both sides onto one grid.
    #[must_use]
    pub fn signed_point(&self, point: u8) -> i8 {
        let x = self.checkers_on(Side::X, point) as i8;
        let o = self.checkers_on(Side::O, 25 - point) as i8;
        x - o
    }
}
