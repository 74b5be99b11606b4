//! Counters recorded through the `metrics` facade
//!
//! No recorder is installed by this crate, so these are no-ops unless the
//! embedding application installs one.

use crate::signal::SkipReason;
use metrics::counter;

/// Kinds of configuration gap hit at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigGap {
    /// Platform missing from the break-even table
    BreakEven,
}

impl ConfigGap {
    fn label(&self) -> &'static str {
        match self {
            ConfigGap::BreakEven => "break_even",
        }
    }
}

/// Count a prop that produced no play
pub fn record_skip(reason: &SkipReason) {
    counter!("propev_skipped_total", "reason" => reason.label()).increment(1);
}

/// Count plays produced by an analysis run
pub fn record_plays(count: usize) {
    counter!("propev_plays_total").increment(count as u64);
}

/// Count middles produced by a scan
pub fn record_middles(count: usize) {
    counter!("propev_middles_total").increment(count as u64);
}

/// Count a source fetch that failed
pub fn record_source_failure(source: &str) {
    counter!("propev_source_failures_total", "source" => source.to_string()).increment(1);
}

/// Count a fallback taken because configuration had no entry
pub fn record_config_gap(gap: ConfigGap) {
    counter!("propev_config_gaps_total", "kind" => gap.label()).increment(1);
}
