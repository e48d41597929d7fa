//! JellyFish-family transcript grammar.
//!
//! The format is line-oriented: a `<N> point match` header, then per game a
//! `Game N` header, a player-identification block, and numbered move lines
//! of the form `N) DD: move move   DD: move move`.
//!
//! ## Failure policy
//!
//! Nothing here panics or returns early on bad input. An unparsable match
//! header (or zero recovered games) yields `success: false`; every other
//! malformed line becomes a recorded `ParseError` and parsing resumes at the
//! next line or game. Bulk historical imports depend on this skip-and-record
//! behavior - one illegible line must not discard a multi-thousand-line
//! archive.

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::LazyLock;

use super::types::{MoveEntry, ParsedGame, ParsedMatch, PlayerRecord, TurnRecord};
use crate::board::{DiceRoll, MoveNotation, SidePair, BAR, OFF};

/// A lone dice segment starting at or beyond this column of the move text
/// belongs to the second player (the first column was left empty).
const SECOND_COLUMN_OFFSET: usize = 12;

/// Largest `(n)` multiplier a move token may carry: a doublet moves at most
/// four checkers along the same path.
const MAX_TOKEN_MULTIPLIER: u8 = 4;

static MATCH_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+point\s+match").expect("static regex"));
static GAME_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Game\s+(\d+)\b").expect("static regex"));
static MOVE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\)\s?(.*)$").expect("static regex"));
static DICE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([1-6])([1-6]):").expect("static regex"));
static SCORE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*\d+").expect("static regex"));
static SINGLE_PLAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<name>[^:(]+?)\s*(?:\((?P<country>[^)]+)\)\s*)?:\s*(?P<score>\d+)\s*$")
        .expect("static regex")
});
static COMBINED_PLAYERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<n1>\S+?)\s*(?:\((?P<c1>[^)]+)\))?\s*:\s*(?P<s1>\d+)\s+(?P<n2>\S+?)\s*(?:\((?P<c2>[^)]+)\))?\s*:\s*(?P<s2>\d+)\s*$",
    )
    .expect("static regex")
});

/// Parser options.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Stop after this many games. `None` parses the whole archive.
    pub max_games: Option<usize>,
}

impl ParseOptions {
    /// Limit how many games are parsed.
    #[must_use]
    pub fn with_max_games(mut self, max_games: usize) -> Self {
        self.max_games = Some(max_games);
        self
    }
}

/// One recorded parse failure: the 1-based line it happened on (0 for
/// document-level failures) and a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The result of parsing one archive.
///
/// `success` is false only for structural failures (no match header, zero
/// recovered games); a partially damaged archive still parses with
/// `success: true` and its damage listed in `errors`.
#[derive(Clone, Debug)]
pub struct ParseOutcome {
    pub success: bool,
    pub parsed: Option<ParsedMatch>,
    pub errors: Vec<ParseError>,
}

fn record(errors: &mut Vec<ParseError>, line: usize, message: String) {
    warn!("parse error at line {line}: {message}");
    errors.push(ParseError { line, message });
}

/// Parse a match archive.
///
/// Never panics; see the module docs for the failure policy.
#[must_use]
pub fn parse(text: &str, options: &ParseOptions) -> ParseOutcome {
    let lines: Vec<&str> = text.lines().collect();
    let mut errors = Vec::new();

    let Some((header_idx, match_length)) = find_match_header(&lines) else {
        record(&mut errors, 0, "no match-length header found".to_string());
        return ParseOutcome { success: false, parsed: None, errors };
    };
    debug!("parsing {match_length}-point match");

    let mut games = Vec::new();
    let mut cursor = header_idx + 1;
    while cursor < lines.len() {
        let line_no = cursor + 1;
        let Some(caps) = GAME_HEADER.captures(lines[cursor]) else {
            cursor += 1;
            continue;
        };
        if let Some(max) = options.max_games {
            if games.len() >= max {
                debug!("stopping after {max} games (max_games)");
                break;
            }
        }
        cursor += 1;

        let Ok(number) = caps[1].parse::<u32>() else {
            record(&mut errors, line_no, format!("bad game number: {}", &caps[1]));
            continue;
        };
        if let Some(game) = parse_game_body(&lines, &mut cursor, number, &mut errors) {
            games.push(game);
        }
    }

    if games.is_empty() {
        record(&mut errors, 0, "no games recovered from archive".to_string());
        return ParseOutcome { success: false, parsed: None, errors };
    }

    debug!("recovered {} games, {} parse errors", games.len(), errors.len());
    ParseOutcome {
        success: true,
        parsed: Some(ParsedMatch { match_length, games, metadata: None }),
        errors,
    }
}

fn find_match_header(lines: &[&str]) -> Option<(usize, u32)> {
    for (idx, line) in lines.iter().enumerate() {
        if let Some(caps) = MATCH_HEADER.captures(line) {
            if let Ok(length) = caps[1].parse::<u32>() {
                return Some((idx, length));
            }
        }
    }
    None
}

/// Parse one game's player block and move lines. On a player-block failure
/// the error is recorded and the cursor skips to the next game header.
fn parse_game_body(
    lines: &[&str],
    cursor: &mut usize,
    number: u32,
    errors: &mut Vec<ParseError>,
) -> Option<ParsedGame> {
    let Some(players) = parse_player_block(lines, cursor, errors) else {
        skip_to_next_game(lines, cursor);
        return None;
    };

    let mut moves = Vec::new();
    while *cursor < lines.len() && !GAME_HEADER.is_match(lines[*cursor]) {
        let line = lines[*cursor];
        let line_no = *cursor + 1;
        *cursor += 1;

        if line.trim().is_empty() {
            continue;
        }
        if let Some(caps) = MOVE_LINE.captures(line) {
            let Ok(move_number) = caps[1].parse::<u32>() else {
                record(errors, line_no, format!("bad move number: {}", &caps[1]));
                continue;
            };
            let rest = caps.get(2).map_or("", |m| m.as_str());
            if let Some(entry) = parse_move_line(move_number, rest, line_no, errors) {
                moves.push(entry);
            }
        } else if !is_cube_or_result(line) {
            record(errors, line_no, format!("unrecognized line: {}", line.trim()));
        }
    }

    Some(ParsedGame { number, players, moves })
}

fn skip_to_next_game(lines: &[&str], cursor: &mut usize) {
    while *cursor < lines.len() && !GAME_HEADER.is_match(lines[*cursor]) {
        *cursor += 1;
    }
}

fn next_nonblank<'a>(lines: &[&'a str], cursor: &mut usize) -> Option<(usize, &'a str)> {
    while *cursor < lines.len() {
        let line = lines[*cursor];
        let line_no = *cursor + 1;
        if GAME_HEADER.is_match(line) {
            return None;
        }
        *cursor += 1;
        if !line.trim().is_empty() {
            return Some((line_no, line));
        }
    }
    None
}

/// Parse the player-identification block in either convention: two separate
/// `name[(country)] : score` lines, or one combined two-column line with
/// underscore-for-space names.
fn parse_player_block(
    lines: &[&str],
    cursor: &mut usize,
    errors: &mut Vec<ParseError>,
) -> Option<SidePair<PlayerRecord>> {
    let (line_no, first) = match next_nonblank(lines, cursor) {
        Some(found) => found,
        None => {
            record(errors, *cursor, "game ends before its player block".to_string());
            return None;
        }
    };

    if SCORE_FRAGMENT.find_iter(first).count() >= 2 {
        let Some(caps) = COMBINED_PLAYERS.captures(first) else {
            record(errors, line_no, format!("bad combined player line: {}", first.trim()));
            return None;
        };
        let x = player_from_parts(&caps["n1"], caps.name("c1"), &caps["s1"]);
        let o = player_from_parts(&caps["n2"], caps.name("c2"), &caps["s2"]);
        return Some(SidePair::new(x, o));
    }

    let Some(x) = parse_single_player(first) else {
        record(errors, line_no, format!("bad player line: {}", first.trim()));
        return None;
    };
    let (second_no, second) = match next_nonblank(lines, cursor) {
        Some(found) => found,
        None => {
            record(errors, line_no, "missing second player line".to_string());
            return None;
        }
    };
    let Some(o) = parse_single_player(second) else {
        record(errors, second_no, format!("bad player line: {}", second.trim()));
        return None;
    };
    Some(SidePair::new(x, o))
}

fn parse_single_player(line: &str) -> Option<PlayerRecord> {
    let caps = SINGLE_PLAYER.captures(line)?;
    Some(player_from_parts(&caps["name"], caps.name("country"), &caps["score"]))
}

fn player_from_parts(name: &str, country: Option<regex::Match<'_>>, score: &str) -> PlayerRecord {
    PlayerRecord {
        name: normalize_name(name),
        country: country.map(|m| m.as_str().trim().to_string()),
        score: score.parse().unwrap_or(0),
    }
}

/// Underscores stand in for spaces in combined-column names; hyphens in
/// compound names are left alone.
fn normalize_name(raw: &str) -> String {
    raw.trim().replace('_', " ")
}

fn is_cube_or_result(line: &str) -> bool {
    ["Doubles", "Takes", "Drops", "Wins", "Resigns"]
        .iter()
        .any(|word| line.contains(word))
}

fn is_notation_keyword(token: &str) -> bool {
    matches!(token, "Doubles" | "Takes" | "Drops" | "Wins" | "Resigns" | "=>")
}

/// Parse the text after `N)` into a move entry. Returns `None` for skipped
/// lines (cube actions, bare numbers) and for recorded errors.
fn parse_move_line(
    number: u32,
    rest: &str,
    line_no: usize,
    errors: &mut Vec<ParseError>,
) -> Option<MoveEntry> {
    let segments: Vec<(usize, usize, DiceRoll)> = DICE_SEGMENT
        .captures_iter(rest)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let first = caps[1].as_bytes()[0] - b'0';
            let second = caps[2].as_bytes()[0] - b'0';
            Some((whole.start(), whole.end(), DiceRoll::new(first, second)?))
        })
        .collect();

    match segments.len() {
        0 => {
            if !rest.trim().is_empty() && !is_cube_or_result(rest) {
                record(errors, line_no, format!("move line has no dice segment: {}", rest.trim()));
            }
            None
        }
        1 => {
            let (start, end, dice) = segments[0];
            let movetext = &rest[end..];
            let turn = parse_segment(dice, movetext, line_no, errors)?;
            // An empty first column pushes the lone segment to the second
            // player's side of the line.
            let turns = if start >= SECOND_COLUMN_OFFSET {
                SidePair::new(None, Some(turn))
            } else {
                SidePair::new(Some(turn), None)
            };
            Some(MoveEntry { number, turns })
        }
        2 => {
            let (_, x_end, x_dice) = segments[0];
            let (o_start, o_end, o_dice) = segments[1];
            let x = parse_segment(x_dice, &rest[x_end..o_start], line_no, errors)?;
            let o = parse_segment(o_dice, &rest[o_end..], line_no, errors)?;
            Some(MoveEntry { number, turns: SidePair::new(Some(x), Some(o)) })
        }
        n => {
            record(errors, line_no, format!("move line has {n} dice segments"));
            None
        }
    }
}

fn parse_segment(
    dice: DiceRoll,
    movetext: &str,
    line_no: usize,
    errors: &mut Vec<ParseError>,
) -> Option<TurnRecord> {
    let mut moves: SmallVec<[MoveNotation; 4]> = SmallVec::new();
    for token in movetext.split_whitespace() {
        if is_notation_keyword(token) {
            break;
        }
        match parse_move_token(token) {
            Ok((notation, multiplier)) => {
                for _ in 0..multiplier {
                    moves.push(notation);
                }
            }
            Err(message) => {
                record(errors, line_no, format!("bad move token '{token}': {message}"));
                return None;
            }
        }
    }
    Some(TurnRecord { dice, moves })
}

/// Parse one `from/to` token: `24/18`, `bar/20`, `6/off`, trailing `*` for a
/// hit, trailing `(n)` doublet multiplier.
fn parse_move_token(token: &str) -> Result<(MoveNotation, u8), String> {
    let mut body = token;
    let mut is_hit = false;

    while let Some(stripped) = body.strip_suffix('*') {
        body = stripped;
        is_hit = true;
    }

    let mut multiplier = 1u8;
    if let Some(stripped) = body.strip_suffix(')') {
        let Some((head, count)) = stripped.rsplit_once('(') else {
            return Err("unbalanced parenthesis".to_string());
        };
        multiplier = count.parse().map_err(|_| format!("bad multiplier '{count}'"))?;
        if multiplier == 0 || multiplier > MAX_TOKEN_MULTIPLIER {
            return Err(format!("implausible multiplier {multiplier}"));
        }
        body = head;
    }
    while let Some(stripped) = body.strip_suffix('*') {
        body = stripped;
        is_hit = true;
    }

    let Some((from_raw, to_raw)) = body.split_once('/') else {
        return Err("missing '/' separator".to_string());
    };

    let from = if from_raw.eq_ignore_ascii_case("bar") {
        BAR
    } else {
        match from_raw.parse::<u8>() {
            Ok(p) if (1..=25).contains(&p) => p,
            _ => return Err(format!("bad origin '{from_raw}'")),
        }
    };
    let to = if to_raw.eq_ignore_ascii_case("off") {
        OFF
    } else {
        match to_raw.parse::<u8>() {
            Ok(p) if p <= 24 => p,
            _ => return Err(format!("bad destination '{to_raw}'")),
        }
    };

    Ok((MoveNotation::new(from, to, is_hit), multiplier))
}
