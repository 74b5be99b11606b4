//! Integration tests for configuration

use crate::common::{book_line, prop};
use prop_ev::config::Config;
use prop_ev::signal::{EvEvaluator, MiddleDetector};
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.matching.threshold, 80);
    assert_eq!(config.ev.min_win, dec!(54));
    assert_eq!(config.middle.min_spread, dec!(0.5));
}

#[test]
fn test_threshold_from_config() {
    let file = write_config(
        r#"
        [matching]
        threshold = 90
        "#,
    );
    let config = Config::load(file.path()).unwrap();

    let prop = prop("pp_1", "Steph Curry", "Rebounds", "prizepicks", dec!(4.5));
    let lines = vec![book_line(
        "Stephen Curry",
        "player_rebounds",
        "draftkings",
        dec!(4.5),
        -175,
        100,
    )];

    // Score 85: accepted at the default threshold, rejected at 90
    assert!(EvEvaluator::default()
        .evaluate(&prop, &lines, dec!(54), dec!(0))
        .is_some());
    assert!(EvEvaluator::from_config(&config)
        .evaluate(&prop, &lines, dec!(54), dec!(0))
        .is_none());
}

#[test]
fn test_market_and_break_even_overrides() {
    let file = write_config(
        r#"
        [markets]
        "Fantasy Score" = "player_fantasy_points"

        [[break_even.platforms]]
        platform = "chalkboard"
        default = 53.00

        [[break_even.platforms.slips]]
        name = "4_pick"
        break_even = 55.00
        "#,
    );
    let config = Config::load(file.path()).unwrap();
    let evaluator = EvEvaluator::from_config(&config);

    let prop = prop("cb_1", "Nikola Jokic", "Fantasy Score", "chalkboard", dec!(60.5));
    let lines = vec![book_line(
        "Nikola Jokic",
        "player_fantasy_points",
        "fanduel",
        dec!(60.5),
        -175,
        100,
    )];

    let play = evaluator
        .evaluate(&prop, &lines, dec!(54), dec!(0))
        .expect("play");
    assert_eq!(play.ev_percentage, dec!(3.00));
    assert_eq!(play.best_for, vec!["4_pick"]);
}

#[test]
fn test_min_spread_from_config() {
    let file = write_config(
        r#"
        [middle]
        min_spread = 2.5
        "#,
    );
    let config = Config::load(file.path()).unwrap();
    let detector = MiddleDetector::new(config.middle.min_spread);

    let a = vec![prop("pp_1", "Jalen Brunson", "Assists", "prizepicks", dec!(7.5))];
    let b = vec![prop("ud_1", "Jalen Brunson", "Assists", "underdog", dec!(5.5))];
    assert!(detector.find(&a, &b).is_empty());
}

#[test]
fn test_invalid_config_is_error() {
    let file = write_config("[matching]\nthreshold = \"high\"\n");
    assert!(Config::load(file.path()).is_err());
}
