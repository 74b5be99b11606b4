//! Slate overview: which teams have props and how many each platform lists

use super::Prop;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Sport label used when a slate spans more than one sport
pub const ALL_SPORTS: &str = "ALL";

/// Teams and prop counts for one slate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlateSummary {
    /// Upper-cased sport, or [`ALL_SPORTS`]
    pub sport: String,
    /// Distinct teams, sorted; tagged "TEAM (SPORT)" on multi-sport slates
    pub teams_with_props: Vec<String>,
    pub total_props: usize,
    /// Prop count per lower-cased platform
    pub platforms: BTreeMap<String, usize>,
}

/// Summarize a slate of props
///
/// Props with an empty team still count toward the totals but add no team.
/// An empty slate is reported as [`ALL_SPORTS`].
pub fn slate_summary(props: &[Prop]) -> SlateSummary {
    let sports: BTreeSet<String> = props.iter().map(|p| p.sport.trim().to_uppercase()).collect();
    let multi_sport = sports.len() != 1;

    let teams: BTreeSet<String> = props
        .iter()
        .filter(|p| !p.team.trim().is_empty())
        .map(|p| {
            let team = p.team.trim();
            if multi_sport {
                format!("{} ({})", team, p.sport.trim().to_uppercase())
            } else {
                team.to_string()
            }
        })
        .collect();

    let mut platforms = BTreeMap::new();
    for prop in props {
        *platforms
            .entry(prop.platform.trim().to_lowercase())
            .or_insert(0) += 1;
    }

    let sport = match sports.into_iter().next() {
        Some(sport) if !multi_sport => sport,
        _ => ALL_SPORTS.to_string(),
    };

    SlateSummary {
        sport,
        teams_with_props: teams.into_iter().collect(),
        total_props: props.len(),
        platforms,
    }
}
