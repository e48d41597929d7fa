//! ASCII board rendering for display and prompt layers.
//!
//! ## Key Types
//!
//! - `render`: fixed-width diagram for any board state
//! - `render_opening` / `render_by_position_id`: opening-roll diagrams and
//!   the id-dispatched entry point with its generic placeholder
//! - `OPENING_ROLLS`: the 21 canonical first rolls

pub mod board;
pub mod opening;

pub use board::{render, GLYPH_O, GLYPH_X};
pub use opening::{
    is_opening_roll, normalize_roll, opening_position_id, render_by_position_id, render_opening,
    OPENING_ID_PREFIX, OPENING_ROLLS,
};
