//! Move and dice notation as recorded in match transcripts.
//!
//! Notation is always relative to the moving side's own frame: the 24-point
//! is farthest from home, the 1-point is the last before bearing off. Two
//! sentinel values extend the 1-24 range:
//!
//! - `BAR` (25): origin of a re-entry move (`bar/20`)
//! - `OFF` (0): destination of a bear-off move (`6/off`)

use serde::{Deserialize, Serialize};

/// Origin sentinel for a checker entering from the bar.
pub const BAR: u8 = 25;

/// Destination sentinel for a checker borne off the board.
pub const OFF: u8 = 0;

/// A dice pair as rolled, e.g. `3-1`.
///
/// Order is preserved from the transcript (`31:` is `DiceRoll(3, 1)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll(pub u8, pub u8);

impl DiceRoll {
    /// Create a roll from two die values.
    ///
    /// Returns `None` unless both dice are in 1-6.
    #[must_use]
    pub fn new(first: u8, second: u8) -> Option<Self> {
        if (1..=6).contains(&first) && (1..=6).contains(&second) {
            Some(Self(first, second))
        } else {
            None
        }
    }

    /// Is this a doublet?
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.0 == self.1
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// One recorded checker movement.
///
/// `from` is 1-24 or `BAR`; `to` is 1-24 or `OFF`. `is_hit` records the
/// trailing hit mark (`24/18*`). The engine trusts the notation - no
/// legality checking happens here or anywhere downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveNotation {
    pub from: u8,
    pub to: u8,
    pub is_hit: bool,
}

impl MoveNotation {
    /// Create a move notation.
    #[must_use]
    pub const fn new(from: u8, to: u8, is_hit: bool) -> Self {
        Self { from, to, is_hit }
    }

    /// Does this move enter from the bar?
    #[must_use]
    pub const fn is_bar_entry(self) -> bool {
        self.from == BAR
    }

    /// Does this move bear a checker off?
    #[must_use]
    pub const fn is_bear_off(self) -> bool {
        self.to == OFF
    }
}

impl std::fmt::Display for MoveNotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.from == BAR {
            write!(f, "bar")?;
        } else {
            write!(f, "{}", self.from)?;
        }
        if self.to == OFF {
            write!(f, "/off")?;
        } else {
            write!(f, "/{}", self.to)?;
        }
        if self.is_hit {
            write!(f, "*")?;
        }
        Ok(())
    }
}
