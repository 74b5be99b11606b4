//! Platform stat label to sportsbook market mapping

use crate::props::Prop;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Built-in stat label → market table
///
/// Keys are exact platform labels; PrizePicks uses title case ("Points"),
/// Underdog uses snake case ("points", "pts_rebs_asts").
const DEFAULT_STAT_MARKETS: &[(&str, &str)] = &[
    // Basketball
    ("Points", "player_points"),
    ("Rebounds", "player_rebounds"),
    ("Assists", "player_assists"),
    ("3-Point Made", "player_threes"),
    ("Pts+Rebs+Asts", "player_points_rebounds_assists"),
    ("Pts+Rebs", "player_points_rebounds"),
    ("Pts+Asts", "player_points_assists"),
    ("Rebs+Asts", "player_rebounds_assists"),
    ("Steals", "player_steals"),
    ("Blocks", "player_blocks"),
    ("Turnovers", "player_turnovers"),
    // Football
    ("Pass Yards", "player_pass_yds"),
    ("Rush Yards", "player_rush_yds"),
    ("Receiving Yards", "player_reception_yds"),
    ("Receptions", "player_receptions"),
    ("Pass TDs", "player_pass_tds"),
    // Baseball
    ("Strikeouts", "pitcher_strikeouts"),
    ("Hits Allowed", "pitcher_hits_allowed"),
    // Hockey
    ("Shots On Goal", "player_shots_on_goal"),
    ("Goals", "player_goals"),
    // Underdog vocabulary
    ("points", "player_points"),
    ("rebounds", "player_rebounds"),
    ("assists", "player_assists"),
    ("pts_rebs_asts", "player_points_rebounds_assists"),
    ("three_pointers_made", "player_threes"),
    ("passing_yards", "player_pass_yds"),
    ("rushing_yards", "player_rush_yds"),
    ("receiving_yards", "player_reception_yds"),
];

/// Immutable stat label → sportsbook market lookup
///
/// Lookups are exact and case-sensitive. A label without an entry is a
/// coverage gap: props carrying it are left out of EV analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatMarketMap {
    entries: HashMap<String, String>,
}

impl StatMarketMap {
    /// Empty table
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a table from explicit entries
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Return a copy with extra entries layered on top (overriding on conflict)
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (label, market) in overrides {
            self.entries.insert(label.clone(), market.clone());
        }
        self
    }

    /// Market for a platform stat label
    pub fn market_for(&self, stat_label: &str) -> Option<&str> {
        self.entries.get(stat_label).map(String::as_str)
    }

    /// Number of mapped labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct markets needed to price `props`, grouped by sport
    ///
    /// Sports are keyed upper-case. Markets within a sport are sorted; when
    /// `max_per_sport` is set only the first markets in that order are kept,
    /// which bounds upstream requests per sport.
    pub fn markets_by_sport(
        &self,
        props: &[Prop],
        max_per_sport: Option<usize>,
    ) -> BTreeMap<String, BTreeSet<String>> {
        let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for prop in props {
            if let Some(market) = self.market_for(&prop.stat_type) {
                grouped
                    .entry(prop.sport.to_uppercase())
                    .or_default()
                    .insert(market.to_string());
            }
        }

        if let Some(limit) = max_per_sport {
            for markets in grouped.values_mut() {
                *markets = std::mem::take(markets).into_iter().take(limit).collect();
            }
        }

        grouped
    }
}

impl Default for StatMarketMap {
    fn default() -> Self {
        Self::from_entries(DEFAULT_STAT_MARKETS.iter().copied())
    }
}
