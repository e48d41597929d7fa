//! Opening-roll diagrams and the position-id dispatch.
//!
//! Every opening position is the canonical starting layout; only the dice
//! differ, and there are exactly 21 distinct first rolls (15 non-doubles +
//! 6 doubles). Non-opening position ids get an explicit placeholder instead
//! of a potentially wrong full-board guess - a deliberate, tested
//! limitation.

use super::board::render;
use crate::board::BoardState;

/// The 21 canonical first rolls, larger die first for non-doubles.
pub const OPENING_ROLLS: [&str; 21] = [
    "2-1", "3-1", "3-2", "4-1", "4-2", "4-3", "5-1", "5-2", "5-3", "5-4", "6-1", "6-2", "6-3",
    "6-4", "6-5", "1-1", "2-2", "3-3", "4-4", "5-5", "6-6",
];

/// Prefix of opening position ids (`opening-3-1`).
pub const OPENING_ID_PREFIX: &str = "opening-";

/// Is this a canonical opening roll? Accepts either die order.
#[must_use]
pub fn is_opening_roll(roll: &str) -> bool {
    normalize_roll(roll).is_some()
}

/// Canonicalize a `d-d` roll string: larger die first. `None` for anything
/// that is not two dash-separated digits 1-6.
#[must_use]
pub fn normalize_roll(roll: &str) -> Option<String> {
    let (first, second) = roll.split_once('-')?;
    let a: u8 = first.parse().ok()?;
    let b: u8 = second.parse().ok()?;
    if !(1..=6).contains(&a) || !(1..=6).contains(&b) {
        return None;
    }
    Some(format!("{}-{}", a.max(b), a.min(b)))
}

/// The position id for an opening roll, e.g. `opening-3-1`.
#[must_use]
pub fn opening_position_id(roll: &str) -> Option<String> {
    Some(format!("{OPENING_ID_PREFIX}{}", normalize_roll(roll)?))
}

fn placeholder(id: &str, dice_roll: &str) -> String {
    format!(
        "[position {id}]\nDice: {dice_roll}\n(no diagram available for this position)\n"
    )
}

/// Render the diagram a player faces on an opening roll: the starting
/// layout plus the dice line.
///
/// A roll outside the canonical 21 falls back to the placeholder.
#[must_use]
pub fn render_opening(dice_roll: &str) -> String {
    if !is_opening_roll(dice_roll) {
        return placeholder("opening", dice_roll);
    }
    let mut out = render(&BoardState::starting_position());
    out.push_str(&format!("Dice: {dice_roll}\n"));
    out
}

/// Render a diagram for a stored position id.
///
/// Ids recognized as opening positions dispatch to the opening renderer;
/// everything else gets the generic placeholder, which still reports the
/// dice roll and never fails.
#[must_use]
pub fn render_by_position_id(id: &str, dice_roll: &str) -> String {
    match id.strip_prefix(OPENING_ID_PREFIX) {
        Some(roll) if is_opening_roll(roll) => render_opening(dice_roll),
        _ => placeholder(id, dice_roll),
    }
}
