//! Shared fixtures

use prop_ev::props::{BookLine, Prop};
use rust_decimal::Decimal;

pub fn prop(id: &str, player: &str, stat: &str, platform: &str, line: Decimal) -> Prop {
    Prop {
        id: id.to_string(),
        player_name: player.to_string(),
        team: String::new(),
        opponent: None,
        sport: "NBA".to_string(),
        stat_type: stat.to_string(),
        platform: platform.to_string(),
        line,
        game_time: None,
    }
}

pub fn book_line(
    player: &str,
    market: &str,
    bookmaker: &str,
    line: Decimal,
    over_odds: i32,
    under_odds: i32,
) -> BookLine {
    BookLine {
        player: player.to_string(),
        market: market.to_string(),
        bookmaker: bookmaker.to_string(),
        line,
        over_odds,
        under_odds,
        is_sharp: matches!(bookmaker, "draftkings" | "fanduel"),
    }
}
