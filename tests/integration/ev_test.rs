//! Integration tests for EV evaluation

use crate::common::{book_line, prop};
use prop_ev::odds::{remove_vig, Side};
use prop_ev::signal::{EvAnalyzer, EvEvaluator, EvQuery};
use rust_decimal_macros::dec;

#[test]
fn test_prizepicks_points_play() {
    let evaluator = EvEvaluator::with_defaults();
    let prop = prop("pp_1", "LeBron James", "Points", "prizepicks", dec!(24.5));
    let lines = vec![book_line(
        "LeBron James",
        "player_points",
        "draftkings",
        dec!(25.0),
        -175,
        100,
    )];

    let play = evaluator
        .evaluate(&prop, &lines, dec!(54), dec!(0))
        .expect("play");
    assert_eq!(play.recommended_play, Side::Over);
    assert_eq!(play.win_probability, dec!(56.00));
    assert_eq!(play.ev_percentage, dec!(1.66));
    assert_eq!(play.best_for, vec!["5_flex", "6_flex"]);
    assert_eq!(play.sharp_odds.over_probability, dec!(56.00));
    assert_eq!(play.sharp_odds.under_probability, dec!(44.00));
}

#[test]
fn test_vig_removal_examples() {
    let no_vig = remove_vig(-140, 140).unwrap();
    assert_eq!(no_vig.over.round_dp(2), dec!(58.33));
    assert_eq!(no_vig.under.round_dp(2), dec!(41.67));

    let no_vig = remove_vig(-140, 120).unwrap();
    assert_eq!(no_vig.over.round_dp(2), dec!(56.20));
    assert_eq!(no_vig.under.round_dp(2), dec!(43.80));

    let no_vig = remove_vig(-110, -110).unwrap();
    assert_eq!(no_vig.over, dec!(50));
    assert_eq!(no_vig.under, dec!(50));
}

#[test]
fn test_closest_name_wins_among_similar_players() {
    let evaluator = EvEvaluator::with_defaults();
    let prop = prop("pp_1", "Steph Curry", "3-Point Made", "prizepicks", dec!(4.5));
    let lines = vec![
        book_line("Seth Curry", "player_threes", "draftkings", dec!(1.5), -110, -110),
        book_line("Stephen Curry", "player_threes", "draftkings", dec!(4.5), -175, 100),
    ];

    let play = evaluator
        .evaluate(&prop, &lines, dec!(54), dec!(0))
        .expect("play");
    assert_eq!(play.sharp_odds.line, dec!(4.5));
    assert_eq!(play.win_probability, dec!(56.00));
}

#[test]
fn test_exact_name_beats_near_miss() {
    let evaluator = EvEvaluator::with_defaults();
    let prop = prop("pp_1", "Jalen Williams", "Points", "prizepicks", dec!(19.5));
    let lines = vec![
        book_line("Jaylin Williams", "player_points", "draftkings", dec!(5.5), -110, -110),
        book_line("Jalen Williams", "player_points", "draftkings", dec!(19.5), -175, 100),
    ];

    let play = evaluator
        .evaluate(&prop, &lines, dec!(54), dec!(0))
        .expect("play");
    assert_eq!(play.sharp_odds.line, dec!(19.5));
}

#[test]
fn test_slate_analysis() {
    let analyzer = EvAnalyzer::default();
    let props = vec![
        prop("pp_1", "LeBron James", "Points", "prizepicks", dec!(24.5)),
        prop("ud_1", "LeBron James", "points", "underdog", dec!(24.5)),
        prop("pp_2", "Anthony Davis", "Blocks", "prizepicks", dec!(2.5)),
        prop("pp_3", "Anthony Davis", "Rebounds", "prizepicks", dec!(12.5)),
    ];
    let lines = vec![
        book_line("LeBron James", "player_points", "fanduel", dec!(24.5), -175, 100),
        book_line("Anthony Davis", "player_blocks", "draftkings", dec!(2.5), -110, -110),
        book_line("Anthony Edwards", "player_rebounds", "draftkings", dec!(5.5), -110, -110),
    ];

    let report = analyzer.analyze(&props, &lines, &EvQuery::default());

    let ids: Vec<&str> = report.plays.iter().map(|p| p.prop.id.as_str()).collect();
    assert_eq!(ids, vec!["ud_1", "pp_1"]);
    assert_eq!(report.plays[0].ev_percentage, dec!(3.62));
    assert_eq!(report.sharp_books_used, vec!["fanduel"]);
    assert_eq!(report.skipped.get("below_min_win"), Some(&1));
    assert_eq!(report.skipped.get("no_player_match"), Some(&1));
}
