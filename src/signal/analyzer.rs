//! Batch EV analysis

use super::evaluator::sort_sharp_first;
use super::{EvEvaluator, EvPlay, EvThresholds};
use crate::props::{BookLine, Prop};
use crate::telemetry::{record_plays, record_skip};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Parameters for one analysis run
#[derive(Debug, Clone, Default)]
pub struct EvQuery {
    /// Win probability and EV minimums
    pub thresholds: EvThresholds,
    /// Only analyze props from this platform (case-insensitive)
    pub platform: Option<String>,
}

impl EvQuery {
    /// Query with explicit minimums and no platform filter
    pub fn new(min_win: Decimal, min_ev: Decimal) -> Self {
        Self {
            thresholds: EvThresholds { min_win, min_ev },
            platform: None,
        }
    }

    /// Restrict the run to one platform
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}

/// Outcome of an analysis run
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvReport {
    /// Plays sorted by EV percentage, best first
    pub plays: Vec<EvPlay>,
    /// Distinct bookmakers backing the reported plays
    pub sharp_books_used: Vec<String>,
    /// Count of props skipped, by reason
    pub skipped: BTreeMap<String, usize>,
}

impl EvReport {
    /// Number of plays found
    pub fn count(&self) -> usize {
        self.plays.len()
    }
}

/// Runs the evaluator over a whole batch of props
///
/// A prop that cannot be priced is counted and skipped; it never aborts the
/// batch.
#[derive(Debug, Clone, Default)]
pub struct EvAnalyzer {
    evaluator: EvEvaluator,
}

impl EvAnalyzer {
    /// Create an analyzer around an evaluator
    pub fn new(evaluator: EvEvaluator) -> Self {
        Self { evaluator }
    }

    /// The evaluator used for each prop
    pub fn evaluator(&self) -> &EvEvaluator {
        &self.evaluator
    }

    /// Price every prop and collect the plays that clear the query's minimums
    pub fn analyze(&self, props: &[Prop], lines: &[BookLine], query: &EvQuery) -> EvReport {
        let by_market = group_by_market(lines);
        let mut report = EvReport::default();

        for prop in props {
            if let Some(platform) = &query.platform {
                if !prop.platform.eq_ignore_ascii_case(platform) {
                    continue;
                }
            }

            let outcome = match self.evaluator.markets().market_for(&prop.stat_type) {
                None => Err(super::SkipReason::UnmappedStat),
                Some(market) => {
                    let market_lines = by_market.get(market).map(Vec::as_slice).unwrap_or(&[]);
                    self.evaluator
                        .assess_market_lines(prop, market_lines, &query.thresholds)
                }
            };

            match outcome {
                Ok(play) => report.plays.push(play),
                Err(reason) => {
                    tracing::trace!(
                        prop = %prop.id,
                        player = %prop.player_name,
                        stat = %prop.stat_type,
                        reason = %reason,
                        "Prop skipped"
                    );
                    record_skip(&reason);
                    *report.skipped.entry(reason.label().to_string()).or_default() += 1;
                }
            }
        }

        report
            .plays
            .sort_by(|a, b| b.ev_percentage.cmp(&a.ev_percentage));

        report.sharp_books_used = report
            .plays
            .iter()
            .map(|p| p.sharp_odds.bookmaker.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        record_plays(report.plays.len());
        tracing::debug!(
            props = props.len(),
            lines = lines.len(),
            plays = report.plays.len(),
            skipped = report.skipped.values().sum::<usize>(),
            "EV analysis complete"
        );

        report
    }
}

fn group_by_market(lines: &[BookLine]) -> HashMap<&str, Vec<&BookLine>> {
    let mut grouped: HashMap<&str, Vec<&BookLine>> = HashMap::new();
    for line in lines {
        grouped.entry(line.market.as_str()).or_default().push(line);
    }
    for market_lines in grouped.values_mut() {
        sort_sharp_first(market_lines);
    }
    grouped
}
