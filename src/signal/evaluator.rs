//! Single-prop EV evaluation
//!
//! Pricing pipeline for one prop:
//! 1. Map the platform stat to a sportsbook market
//! 2. Keep that market's lines, sharp books first
//! 3. Fuzzy-match the player against those lines
//! 4. Take the first line for the matched player within the line tolerance
//! 5. Remove the vig and pick the more likely side
//! 6. Compare against the platform's break-even

use super::{EvPlay, EvThresholds, FilterResult, SharpOdds, SkipReason};
use crate::config::Config;
use crate::identity::FuzzyMatcher;
use crate::market::StatMarketMap;
use crate::odds::remove_vig;
use crate::payout::{BreakEvenTable, FALLBACK_BREAK_EVEN};
use crate::props::{BookLine, Prop};
use crate::telemetry::{record_config_gap, ConfigGap};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default maximum distance between a platform line and a sportsbook line
pub const DEFAULT_LINE_TOLERANCE: Decimal = dec!(0.5);

/// Prices individual props against sportsbook lines
///
/// Holds only immutable tables, so one evaluator can be shared across
/// threads and reused across runs.
#[derive(Debug, Clone)]
pub struct EvEvaluator {
    markets: StatMarketMap,
    break_evens: BreakEvenTable,
    matcher: FuzzyMatcher,
    line_tolerance: Decimal,
}

impl EvEvaluator {
    /// Create an evaluator from explicit tables
    pub fn new(
        markets: StatMarketMap,
        break_evens: BreakEvenTable,
        matcher: FuzzyMatcher,
        line_tolerance: Decimal,
    ) -> Self {
        Self {
            markets,
            break_evens,
            matcher,
            line_tolerance,
        }
    }

    /// Evaluator with the built-in tables, threshold 80 and tolerance 0.5
    pub fn with_defaults() -> Self {
        Self::new(
            StatMarketMap::default(),
            BreakEvenTable::default(),
            FuzzyMatcher::default(),
            DEFAULT_LINE_TOLERANCE,
        )
    }

    /// Create from application config
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.stat_markets(),
            config.break_even_table(),
            FuzzyMatcher::new(config.matching.threshold),
            config.matching.line_tolerance,
        )
    }

    /// Stat → market table in use
    pub fn markets(&self) -> &StatMarketMap {
        &self.markets
    }

    /// Price a prop, returning a play only if it clears both minimums
    pub fn evaluate(
        &self,
        prop: &Prop,
        lines: &[BookLine],
        min_win: Decimal,
        min_ev: Decimal,
    ) -> Option<EvPlay> {
        let thresholds = EvThresholds { min_win, min_ev };
        self.assess(prop, lines, &thresholds).ok()
    }

    /// Price a prop, reporting why no play was produced
    ///
    /// `lines` may span several markets and books; they are filtered to the
    /// prop's market here. Among equally placed lines, input order decides.
    pub fn assess(
        &self,
        prop: &Prop,
        lines: &[BookLine],
        thresholds: &EvThresholds,
    ) -> Result<EvPlay, SkipReason> {
        let market = self
            .markets
            .market_for(&prop.stat_type)
            .ok_or(SkipReason::UnmappedStat)?;

        let mut market_lines: Vec<&BookLine> =
            lines.iter().filter(|l| l.market == market).collect();
        sort_sharp_first(&mut market_lines);

        self.assess_market_lines(prop, &market_lines, thresholds)
    }

    /// Price a prop against lines already filtered to its market and sorted
    /// sharp-first
    pub(crate) fn assess_market_lines(
        &self,
        prop: &Prop,
        market_lines: &[&BookLine],
        thresholds: &EvThresholds,
    ) -> Result<EvPlay, SkipReason> {
        if market_lines.is_empty() {
            return Err(SkipReason::NoOddsForMarket);
        }

        let matched = self
            .matcher
            .best_match(
                &prop.player_name,
                market_lines.iter().map(|l| l.player.as_str()),
            )
            .ok_or_else(|| {
                tracing::trace!(
                    player = %prop.player_name,
                    candidates = market_lines.len(),
                    threshold = self.matcher.threshold(),
                    "No player cleared the match threshold"
                );
                SkipReason::NoPlayerMatch
            })?;

        // First line in sharp-priority order wins; lines from other books
        // for the same player are not averaged in.
        let line = market_lines
            .iter()
            .find(|l| l.player == matched && (l.line - prop.line).abs() <= self.line_tolerance)
            .ok_or(SkipReason::NoLineWithinTolerance)?;

        self.price(prop, line, thresholds)
    }

    fn price(
        &self,
        prop: &Prop,
        line: &BookLine,
        thresholds: &EvThresholds,
    ) -> Result<EvPlay, SkipReason> {
        let no_vig = remove_vig(line.over_odds, line.under_odds).map_err(|e| {
            tracing::warn!(
                player = %line.player,
                bookmaker = %line.bookmaker,
                over_odds = line.over_odds,
                under_odds = line.under_odds,
                "Rejecting sportsbook quote"
            );
            SkipReason::InvalidOdds(e)
        })?;

        let side = no_vig.favored();
        let win_probability = no_vig.probability(side);

        let break_even = self.break_evens.default_for(&prop.platform).unwrap_or_else(|| {
            tracing::warn!(
                platform = %prop.platform,
                fallback = %FALLBACK_BREAK_EVEN,
                "No break-even configured for platform"
            );
            record_config_gap(ConfigGap::BreakEven);
            FALLBACK_BREAK_EVEN
        });
        let ev_percentage = win_probability - break_even;

        if let FilterResult::Reject(reason) = thresholds.apply(win_probability, ev_percentage) {
            return Err(SkipReason::Rejected(reason));
        }

        Ok(EvPlay {
            prop: prop.clone(),
            sharp_odds: SharpOdds::new(line, &no_vig),
            recommended_play: side,
            win_probability: win_probability.round_dp(super::REPORT_DP),
            ev_percentage: ev_percentage.round_dp(super::REPORT_DP),
            best_for: self.break_evens.best_for(&prop.platform, win_probability),
        })
    }
}

impl Default for EvEvaluator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Stable sort putting sharp-book lines ahead of the rest
pub(crate) fn sort_sharp_first(lines: &mut [&BookLine]) {
    lines.sort_by_key(|l| !l.is_sharp);
}
