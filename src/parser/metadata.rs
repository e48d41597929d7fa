//! Filename-derived provenance.
//!
//! Archive collections name their files `<Tournament>_<p1>-vs-<p2>.<ext>`.
//! Enrichment recovers the tournament name from that stem and tags the match
//! with its source collection so the position library can cite where every
//! position came from.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{MatchMetadata, ParsedMatch};

// Tournament is everything before the last underscore-delimited token
// preceding `-vs-`; that token is the first player's name.
static FILENAME_STEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<tournament>.+)_(?P<p1>[^_]+)-vs-(?P<p2>.+)$").expect("static regex"));

/// Attach filename-derived provenance to a parsed match.
///
/// Stems that do not follow the `<Tournament>_<p1>-vs-<p2>` convention leave
/// `tournament` unset; the collection label and filename are always recorded.
pub fn enrich(parsed: &mut ParsedMatch, filename: &str, collection: &str) {
    parsed.metadata = Some(MatchMetadata {
        tournament: tournament_from_filename(filename),
        source_collection: collection.to_string(),
        source_file: filename.to_string(),
    });
}

/// Recover the tournament name from an archive filename, if the stem follows
/// the naming convention. Underscores in the tournament become spaces.
#[must_use]
pub fn tournament_from_filename(filename: &str) -> Option<String> {
    let stem = std::path::Path::new(filename).file_stem()?.to_str()?;
    let caps = FILENAME_STEM.captures(stem)?;
    Some(caps["tournament"].replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, ParseOptions};

    #[test]
    fn test_tournament_from_filename() {
        assert_eq!(
            tournament_from_filename("WorldCup1997_Mochy-vs-Falafel.txt").as_deref(),
            Some("WorldCup1997")
        );
        assert_eq!(
            tournament_from_filename("Monte_Carlo_Open_Snowie-vs-Gnu.txt").as_deref(),
            Some("Monte Carlo Open")
        );
    }

    #[test]
    fn test_unconventional_filename_gives_no_tournament() {
        assert_eq!(tournament_from_filename("match001.txt"), None);
        assert_eq!(tournament_from_filename("a-vs-b.txt"), None);
    }

    #[test]
    fn test_enrich_attaches_metadata() {
        let text = "\
 5 point match
 Game 1
 Alpha : 0
 Beta : 0
  1) 31: 8/5 6/5   63: 24/18 13/10
";
        let outcome = parse(text, &ParseOptions::default());
        let mut parsed = outcome.parsed.unwrap();

        enrich(&mut parsed, "Nordic_Open_Alpha-vs-Beta.mat", "classic-archives");

        let meta = parsed.metadata.unwrap();
        assert_eq!(meta.tournament.as_deref(), Some("Nordic Open"));
        assert_eq!(meta.source_collection, "classic-archives");
        assert_eq!(meta.source_file, "Nordic_Open_Alpha-vs-Beta.mat");
    }

    #[test]
    fn test_enrich_without_recognized_stem() {
        let text = "\
 3 point match
 Game 1
 Alpha : 0
 Beta : 0
  1) 31: 8/5 6/5
";
        let outcome = parse(text, &ParseOptions::default());
        let mut parsed = outcome.parsed.unwrap();

        enrich(&mut parsed, "session-42.txt", "club-night");

        let meta = parsed.metadata.unwrap();
        assert_eq!(meta.tournament, None);
        assert_eq!(meta.source_collection, "club-night");
    }
}
