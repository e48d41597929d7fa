//! Fixed-width ASCII board diagrams.
//!
//! Points are labeled in X's frame: 13-24 across the top, 12-1 across the
//! bottom, with the BAR column between the 18/19 and 7/6 points. Stacks are
//! five checkers high; a taller stack shows its count in the last row.

use crate::board::{BoardState, Side};

/// Checker glyph for the first-listed player.
pub const GLYPH_X: char = 'X';
/// Checker glyph for the second-listed player.
pub const GLYPH_O: char = 'O';

const STACK_ROWS: u8 = 5;
const TOP_POINTS: [u8; 12] = [13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24];
const BOTTOM_POINTS: [u8; 12] = [12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

fn cell(board: &BoardState, point: u8, row: u8) -> String {
    let signed = board.signed_point(point);
    let count = signed.unsigned_abs();
    if count < row {
        return "   ".to_string();
    }
    if row == STACK_ROWS && count > STACK_ROWS {
        return format!("{count:>3}");
    }
    let glyph = if signed > 0 { GLYPH_X } else { GLYPH_O };
    format!("{glyph:>3}")
}

fn half(out: &mut String, board: &BoardState, points: &[u8; 12], rows: impl Iterator<Item = u8>) {
    for row in rows {
        for (i, &point) in points.iter().enumerate() {
            if i == 6 {
                out.push_str(" |     |");
            }
            out.push_str(&cell(board, point, row));
        }
        out.push('\n');
    }
}

fn label_row(points: &[u8; 12]) -> String {
    let mut line = String::new();
    for (i, &point) in points.iter().enumerate() {
        if i == 6 {
            line.push_str(" | BAR |");
        }
        line.push_str(&format!("{point:>3}"));
    }
    line.push('\n');
    line
}

/// Render a board as a fixed-width text diagram.
///
/// Correct for any mechanically consistent `BoardState`; both sides' bar
/// and borne-off counters appear in the summary lines below the grid.
#[must_use]
pub fn render(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str(&label_row(&TOP_POINTS));
    half(&mut out, board, &TOP_POINTS, 1..=STACK_ROWS);
    out.push_str(&"-".repeat(44));
    out.push('\n');
    half(&mut out, board, &BOTTOM_POINTS, (1..=STACK_ROWS).rev());
    out.push_str(&label_row(&BOTTOM_POINTS));

    out.push_str(&format!(
        "Bar: {GLYPH_X} {}  {GLYPH_O} {}   Off: {GLYPH_X} {}  {GLYPH_O} {}\n",
        board.bar(Side::X),
        board.bar(Side::O),
        board.borne_off(Side::X),
        board.borne_off(Side::O),
    ));

    out
}
