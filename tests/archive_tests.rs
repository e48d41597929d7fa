//! End-to-end pipeline tests: transcript -> parse -> enrich -> replay ->
//! classify -> distribution -> render.
//!
//! The fixture is a mechanically consistent two-game excerpt in the
//! JellyFish-family layout, including a cube exchange the engine is
//! expected to skip.

use gammon_replay::{
    classify, distribution, enrich, parse, render, replay_game, DiceRoll, GamePhase, ParseOptions,
    Side,
};

const TOURNAMENT_MATCH: &str = "\
 7 point match

 Game 1
 Mochy (JPN) : 0
 Falafel (USA) : 0
  1) 31: 8/5 6/5                 52: 13/8 24/22
  2) 42: 8/4 6/4                 66: 24/18 13/7(3)
  3) 55: 13/8(2) 13/3(2)         31: 8/5 6/5
  4) Doubles => 2                Takes
  5) 61: 24/18 18/17             43: 13/9 22/19
  6) 33: 6/3(2) 13/10 24/21      21: 9/7 7/6

 Game 2
 Mochy (JPN) : 0
 Falafel (USA) : 2
  1) 31: 8/5 6/5                 62: 24/18 13/11
";

#[test]
fn test_parse_recovers_both_games_cleanly() {
    let outcome = parse(TOURNAMENT_MATCH, &ParseOptions::default());
    assert!(outcome.success, "errors: {:?}", outcome.errors);
    assert!(outcome.errors.is_empty());

    let parsed = outcome.parsed.unwrap();
    assert_eq!(parsed.match_length, 7);
    assert_eq!(parsed.games.len(), 2);
    assert_eq!(parsed.games[0].player(Side::X).name, "Mochy");
    assert_eq!(parsed.games[1].player(Side::O).score, 2);

    // The cube exchange on line 4 is skipped, not an error.
    let numbers: Vec<u32> = parsed.games[0].moves.iter().map(|m| m.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 5, 6]);
}

#[test]
fn test_expected_count_matches_replay_output() {
    let parsed = parse(TOURNAMENT_MATCH, &ParseOptions::default()).parsed.unwrap();
    assert_eq!(parsed.expected_position_count(), 12);

    let total: usize = parsed.games.iter().map(|g| replay_game(g).positions.len()).sum();
    assert_eq!(total, 12);
}

#[test]
fn test_replay_is_clean_and_conserves_checkers() {
    let parsed = parse(TOURNAMENT_MATCH, &ParseOptions::default()).parsed.unwrap();

    for game in &parsed.games {
        let outcome = replay_game(game);
        assert!(outcome.errors.is_empty(), "game {}: {:?}", game.number, outcome.errors);

        for position in &outcome.positions {
            assert_eq!(position.board.total_checkers(Side::X), 15);
            assert_eq!(position.board.total_checkers(Side::O), 15);
            assert_eq!(position.pip_counts[Side::X], position.board.pip_count(Side::X));
            assert_eq!(position.pip_counts[Side::O], position.board.pip_count(Side::O));
        }
    }
}

#[test]
fn test_first_position_is_the_recorded_opening() {
    let parsed = parse(TOURNAMENT_MATCH, &ParseOptions::default()).parsed.unwrap();
    let outcome = replay_game(&parsed.games[0]);

    let first = &outcome.positions[0];
    assert_eq!(first.dice, DiceRoll(3, 1));
    assert_eq!(first.active_side, Side::X);
    assert_eq!(first.pip_counts[Side::X], 167);
    assert_eq!(first.pip_counts[Side::O], 167);
    assert_eq!(first.game_number, 1);
    assert_eq!(first.move_number, 1);

    let classified = classify(first);
    assert_eq!(classified.phase, GamePhase::Opening);
    assert!(classified.confidence > 0.9);
}

#[test]
fn test_phase_distribution_across_the_match() {
    let parsed = parse(TOURNAMENT_MATCH, &ParseOptions::default()).parsed.unwrap();
    let positions: Vec<_> = parsed
        .games
        .iter()
        .flat_map(|g| replay_game(g).positions)
        .collect();

    let dist = distribution(&positions);
    assert_eq!(dist.total(), 12);
    assert_eq!(dist.count(GamePhase::Opening), 6);
    assert_eq!(dist.count(GamePhase::Early), 1);
    assert_eq!(dist.count(GamePhase::Middle), 5);
    assert_eq!(dist.count(GamePhase::Bearoff), 0);
}

#[test]
fn test_enrichment_tags_the_match() {
    let mut parsed = parse(TOURNAMENT_MATCH, &ParseOptions::default()).parsed.unwrap();
    enrich(&mut parsed, "Istanbul_Open_2004_Mochy-vs-Falafel.txt", "big-brother");

    let meta = parsed.metadata.as_ref().unwrap();
    assert_eq!(meta.tournament.as_deref(), Some("Istanbul Open 2004"));
    assert_eq!(meta.source_collection, "big-brother");
}

#[test]
fn test_every_replayed_position_renders() {
    let parsed = parse(TOURNAMENT_MATCH, &ParseOptions::default()).parsed.unwrap();

    for game in &parsed.games {
        for position in replay_game(game).positions {
            let text = render(&position.board);
            assert!(text.contains("BAR"));
            assert!(text.contains("24"));
        }
    }
}

#[test]
fn test_max_games_limits_the_pipeline() {
    let outcome = parse(TOURNAMENT_MATCH, &ParseOptions::default().with_max_games(1));
    let parsed = outcome.parsed.unwrap();
    assert_eq!(parsed.games.len(), 1);
    assert_eq!(parsed.expected_position_count(), 10);
}
