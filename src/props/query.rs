//! Prop browsing: filtering and cross-platform comparison

use super::Prop;
use crate::identity::partial_ratio;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Minimum partial-match score for a player search
const PLAYER_SEARCH_SCORE: u8 = 70;

/// Minimum partial-match score for a player comparison
const PLAYER_COMPARE_SCORE: u8 = 80;

/// Optional criteria for narrowing a prop list
#[derive(Debug, Clone, Default)]
pub struct PropFilter {
    /// Exact platform, case-insensitive
    pub platform: Option<String>,
    /// Substring of the stat label, case-insensitive
    pub stat: Option<String>,
    /// Loose player-name search
    pub player: Option<String>,
}

impl PropFilter {
    /// Whether a prop satisfies every set criterion
    pub fn matches(&self, prop: &Prop) -> bool {
        if let Some(platform) = &self.platform {
            if !prop.platform.eq_ignore_ascii_case(platform) {
                return false;
            }
        }

        if let Some(stat) = &self.stat {
            if !prop
                .stat_type
                .to_lowercase()
                .contains(&stat.to_lowercase())
            {
                return false;
            }
        }

        if let Some(player) = &self.player {
            let score = partial_ratio(&player.to_lowercase(), &prop.player_name.to_lowercase());
            if score < PLAYER_SEARCH_SCORE {
                return false;
            }
        }

        true
    }

    /// Props satisfying the filter, in input order
    pub fn apply<'a>(&self, props: &'a [Prop]) -> Vec<&'a Prop> {
        props.iter().filter(|p| self.matches(p)).collect()
    }
}

/// One player's lines across platforms
#[derive(Debug, Clone, Serialize)]
pub struct PlayerComparison {
    /// Name as spelled by the first matching prop
    pub player: String,
    /// Team of the first matching prop
    pub team: String,
    /// stat label → platform → line
    pub by_stat: BTreeMap<String, BTreeMap<String, Decimal>>,
    /// Every matching prop, in input order
    pub props: Vec<Prop>,
}

/// Collect a player's lines from every platform
///
/// Matching is loose (partial match ≥ 80) so "Jokic" finds "Nikola Jokic".
/// When a platform lists the same stat twice, the later line wins.
pub fn compare_player(name: &str, props: &[Prop]) -> Option<PlayerComparison> {
    let needle = name.to_lowercase();
    let matches: Vec<Prop> = props
        .iter()
        .filter(|p| partial_ratio(&needle, &p.player_name.to_lowercase()) >= PLAYER_COMPARE_SCORE)
        .cloned()
        .collect();

    let first = matches.first()?;

    let mut by_stat: BTreeMap<String, BTreeMap<String, Decimal>> = BTreeMap::new();
    for prop in &matches {
        by_stat
            .entry(prop.stat_type.clone())
            .or_default()
            .insert(prop.platform.clone(), prop.line);
    }

    Some(PlayerComparison {
        player: first.player_name.clone(),
        team: first.team.clone(),
        by_stat,
        props: matches,
    })
}
