//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! Backgammon is strictly two-sided. `Side::X` is the first-listed player in
//! a transcript, `Side::O` the second; the glyphs match the ASCII renderer.
//!
//! ## SidePair
//!
//! Fixed two-slot storage indexed by `Side`. Replaces ad-hoc `(x, o)` tuples
//! wherever both sides carry the same kind of value (pip counts, player
//! records, turn records).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a backgammon match.
///
/// `X` is the first-listed player in the transcript, `O` the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// The two sides in transcript order (X moves first within a move line).
    pub const BOTH: [Side; 2] = [Side::X, Side::O];

    /// Get the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Storage index (X = 0, O = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::X => 0,
            Side::O => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::X => write!(f, "X"),
            Side::O => write!(f, "O"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gammon_replay::board::{Side, SidePair};
///
/// let mut pips: SidePair<u32> = SidePair::with_value(167);
/// pips[Side::O] = 140;
///
/// assert_eq!(pips[Side::X], 167);
/// assert_eq!(pips[Side::O], 140);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SidePair<T> {
    data: [T; 2],
}

impl<T> SidePair<T> {
    /// Create a pair from explicit X and O values.
    #[must_use]
    pub fn new(x: T, o: T) -> Self {
        Self { data: [x, o] }
    }

    /// Create a pair with both entries set to the same value.
    #[must_use]
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to one side's value.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to one side's value.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in X, O order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.iter().map(move |&s| (s, &self.data[s.index()]))
    }
}

impl<T> Index<Side> for SidePair<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SidePair<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
