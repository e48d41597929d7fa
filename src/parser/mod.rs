//! Archive parsing: transcript grammar, parsed-match model, provenance.
//!
//! ## Key Types
//!
//! - `parse` / `ParseOptions` / `ParseOutcome`: the JellyFish-family grammar
//! - `ParsedMatch` / `ParsedGame` / `MoveEntry` / `TurnRecord`: the model
//! - `enrich`: filename-derived tournament and collection tags
//!
//! All failures are returned as `ParseError` values - parsing never panics
//! and never aborts a whole archive for one bad line.

pub mod archive;
pub mod metadata;
pub mod types;

pub use archive::{parse, ParseError, ParseOptions, ParseOutcome};
pub use metadata::{enrich, tournament_from_filename};
pub use types::{MatchMetadata, MoveEntry, ParsedGame, ParsedMatch, PlayerRecord, TurnRecord};
