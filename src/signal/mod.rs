//! Signal generation module
//!
//! Prices platform props against sharp sportsbook lines and detects
//! cross-platform line gaps

mod analyzer;
mod evaluator;
mod filter;
mod middle;
mod types;

pub use analyzer::{EvAnalyzer, EvQuery, EvReport};
pub use evaluator::{EvEvaluator, DEFAULT_LINE_TOLERANCE};
pub use filter::{EvThresholds, FilterResult, RejectReason};
pub use middle::{middle_zone, MiddleDetector, DEFAULT_MIN_SPREAD, MAX_MIDDLE_ZONE};
pub use types::{EvPlay, MiddleLeg, MiddleOpportunity, SharpOdds, SkipReason, REPORT_DP};
