//! Integration tests for snapshot sources feeding analysis

use prop_ev::market::{SharpBooks, StatMarketMap};
use prop_ev::props::{slate_summary, ALL_SPORTS};
use prop_ev::signal::{EvAnalyzer, EvQuery, MiddleDetector};
use prop_ev::source::{
    collect_lines, collect_props, OddsSource, PropSource, SnapshotOddsSource, SnapshotPropSource,
};
use rust_decimal_macros::dec;
use std::path::Path;
use std::sync::Arc;

const PRIZEPICKS: &str = r#"[
    {"id": "pp_1", "player_name": "LeBron James", "team": "LAL", "sport": "NBA",
     "stat_type": "Points", "platform": "prizepicks", "line": 24.5},
    {"id": "pp_2", "player_name": "Anthony Davis", "team": "LAL", "sport": "NBA",
     "stat_type": "Rebounds", "platform": "prizepicks", "line": 11.5},
    {"id": "pp_3", "player_name": "Patrick Mahomes", "team": "KC", "sport": "NFL",
     "stat_type": "Pass Yards", "platform": "prizepicks", "line": 265.5},
    {"id": "pp_4", "player_name": "Broken Record", "sport": "NBA",
     "stat_type": "Points", "platform": "prizepicks"}
]"#;

const UNDERDOG: &str = r#"[
    {"id": "ud_1", "player_name": "LeBron James", "team": "LAL", "sport": "NBA",
     "stat_type": "points", "platform": "underdog", "line": 26.5,
     "game_time": "2026-01-15T03:00:00Z"},
    {"id": "ud_2", "player_name": "Anthony Davis", "team": "LAL", "sport": "NBA",
     "stat_type": "rebounds", "platform": "underdog", "line": 11.5, "game_time": ""}
]"#;

const ODDS: &str = r#"[
    {"player": "LeBron James", "market": "player_points", "bookmaker": "betmgm",
     "line": 24.5, "over_odds": -110, "under_odds": -110},
    {"player": "LeBron James", "market": "player_points", "bookmaker": "draftkings",
     "line": 25.0, "over_odds": -175, "under_odds": 100},
    {"player": "Anthony Davis", "market": "player_rebounds", "bookmaker": "fanduel",
     "line": 11.5, "over_odds": 120, "under_odds": -170},
    {"player": "Anthony Davis", "market": "player_assists", "bookmaker": "fanduel",
     "line": 3.5, "over_odds": 0, "under_odds": -110}
]"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_snapshot_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let pp_path = write(dir.path(), "prizepicks.json", PRIZEPICKS);
    let ud_path = write(dir.path(), "underdog.json", UNDERDOG);
    let odds_path = write(dir.path(), "odds.json", ODDS);

    let prop_sources: Vec<Arc<dyn PropSource>> = vec![
        Arc::new(SnapshotPropSource::new("prizepicks", pp_path)),
        Arc::new(SnapshotPropSource::new("underdog", ud_path)),
        Arc::new(SnapshotPropSource::new("missing", dir.path().join("missing.json"))),
    ];
    let props = collect_props(&prop_sources, "nba").await;
    let ids: Vec<&str> = props.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["pp_1", "pp_2", "ud_1", "ud_2"]);

    let markets = StatMarketMap::default().markets_by_sport(&props, None);
    let nba = markets.get("NBA").cloned().unwrap_or_default();
    assert_eq!(
        nba.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["player_points", "player_rebounds"]
    );

    let odds_sources: Vec<Arc<dyn OddsSource>> = vec![Arc::new(SnapshotOddsSource::new(
        odds_path,
        SharpBooks::default(),
    ))];
    let lines = collect_lines(&odds_sources, "NBA", &nba).await;
    assert_eq!(lines.len(), 3);
    // Priority order within a market: draftkings ahead of betmgm
    assert_eq!(lines[0].bookmaker, "draftkings");
    assert!(lines[0].is_sharp);
    assert!(!lines[1].is_sharp);

    let report = EvAnalyzer::default().analyze(&props, &lines, &EvQuery::default());
    let ids: Vec<&str> = report.plays.iter().map(|p| p.prop.id.as_str()).collect();
    // Davis under 58.07 on underdog (+5.69) and prizepicks (+3.73), LeBron over 56.00 (+1.66)
    assert_eq!(ids, vec!["ud_2", "pp_2", "pp_1"]);
    assert_eq!(report.plays[2].sharp_odds.bookmaker, "draftkings");
    assert_eq!(report.skipped.get("no_line_within_tolerance"), Some(&1));

    let middles = MiddleDetector::default().find(&props[..2], &props[2..]);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].spread, dec!(2.0));
    assert_eq!(middles[0].middle_zone, vec![dec!(25), dec!(26)]);
}

#[tokio::test]
async fn test_report_json_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let pp_path = write(dir.path(), "prizepicks.json", PRIZEPICKS);
    let odds_path = write(dir.path(), "odds.json", ODDS);

    let source = SnapshotPropSource::new("prizepicks", pp_path);
    let odds = SnapshotOddsSource::new(odds_path, SharpBooks::default());
    let props = source.fetch_props("NBA").await.unwrap();
    let lines = odds.load_all().await.unwrap();

    let analyzer = EvAnalyzer::default();
    let query = EvQuery::default();
    let first = serde_json::to_string(&analyzer.analyze(&props, &lines, &query)).unwrap();
    let second = serde_json::to_string(&analyzer.analyze(&props, &lines, &query)).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_slate_summary_across_sports() {
    let dir = tempfile::tempdir().unwrap();
    let sources: Vec<Arc<dyn PropSource>> = vec![
        Arc::new(SnapshotPropSource::new(
            "prizepicks",
            write(dir.path(), "prizepicks.json", PRIZEPICKS),
        )),
        Arc::new(SnapshotPropSource::new(
            "underdog",
            write(dir.path(), "underdog.json", UNDERDOG),
        )),
    ];

    let nba = collect_props(&sources, "NBA").await;
    let summary = slate_summary(&nba);
    assert_eq!(summary.sport, "NBA");
    assert_eq!(summary.teams_with_props, vec!["LAL"]);
    assert_eq!(summary.total_props, 4);

    let mut slate = nba;
    slate.extend(collect_props(&sources, "NFL").await);
    let summary = slate_summary(&slate);
    assert_eq!(summary.sport, ALL_SPORTS);
    assert_eq!(summary.teams_with_props, vec!["KC (NFL)", "LAL (NBA)"]);
    assert_eq!(summary.total_props, 5);
    assert_eq!(summary.platforms["prizepicks"], 3);
    assert_eq!(summary.platforms["underdog"], 2);
}
