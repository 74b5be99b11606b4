//! Integration tests for middle detection

use crate::common::prop;
use prop_ev::odds::Side;
use prop_ev::signal::MiddleDetector;
use rust_decimal_macros::dec;

#[test]
fn test_two_platform_slate() {
    let prizepicks = vec![
        prop("pp_1", "Jalen Brunson", "Assists", "prizepicks", dec!(7.5)),
        prop("pp_2", "Josh Hart", "Rebounds", "prizepicks", dec!(6.5)),
        prop("pp_3", "Mikal Bridges", "Points", "prizepicks", dec!(17.5)),
        prop("pp_4", "OG Anunoby", "Points", "prizepicks", dec!(15.0)),
    ];
    let underdog = vec![
        prop("ud_1", "Josh Hart", "rebounds", "underdog", dec!(6.7)),
        prop("ud_2", "jalen brunson", "assists", "underdog", dec!(5.5)),
        prop("ud_3", "OG Anunoby", "points", "underdog", dec!(15.5)),
        prop("ud_4", "Karl-Anthony Towns", "points", "underdog", dec!(24.5)),
    ];

    let middles = MiddleDetector::default().find(&prizepicks, &underdog);
    assert_eq!(middles.len(), 2);

    let brunson = &middles[0];
    assert_eq!(brunson.player_name, "Jalen Brunson");
    assert_eq!(brunson.spread, dec!(2.0));
    assert_eq!(brunson.middle_zone, vec![dec!(6), dec!(7)]);
    assert_eq!(brunson.platform_a.name, "prizepicks");
    assert_eq!(brunson.platform_a.recommended, Side::Under);
    assert_eq!(brunson.platform_b.name, "underdog");
    assert_eq!(brunson.platform_b.recommended, Side::Over);

    let anunoby = &middles[1];
    assert_eq!(anunoby.player_name, "OG Anunoby");
    assert_eq!(anunoby.platform_a.name, "underdog");
    assert_eq!(anunoby.platform_a.line, dec!(15.5));
    assert_eq!(anunoby.middle_zone, vec![dec!(15.5)]);
}

#[test]
fn test_swapping_platforms_keeps_legs() {
    let a = vec![prop("pp_1", "Jalen Brunson", "Assists", "prizepicks", dec!(7.5))];
    let b = vec![prop("ud_1", "Jalen Brunson", "Assists", "underdog", dec!(5.5))];

    let detector = MiddleDetector::default();
    let forward = &detector.find(&a, &b)[0];
    let backward = &detector.find(&b, &a)[0];

    assert_eq!(forward.platform_a, backward.platform_a);
    assert_eq!(forward.platform_b, backward.platform_b);
    assert_eq!(forward.middle_zone, backward.middle_zone);
}

#[test]
fn test_implausible_line_gap_skipped() {
    let prizepicks = vec![
        prop("pp_1", "Josh Hart", "Rebounds", "prizepicks", dec!(0.5)),
        prop("pp_2", "Jalen Brunson", "Assists", "prizepicks", dec!(7.5)),
    ];
    let underdog = vec![
        prop("ud_1", "Josh Hart", "Rebounds", "underdog", dec!(5000000.5)),
        prop("ud_2", "Jalen Brunson", "Assists", "underdog", dec!(5.5)),
    ];

    let middles = MiddleDetector::default().find(&prizepicks, &underdog);
    assert_eq!(middles.len(), 1);
    assert_eq!(middles[0].player_name, "Jalen Brunson");
}
