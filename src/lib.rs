//! prop-ev: +EV finder for DFS pick'em player props
//!
//! This library provides the core components for:
//! - Player name normalization and fuzzy matching
//! - Vig removal from American odds
//! - Platform stat label → sportsbook market mapping
//! - Platform payout break-evens
//! - EV evaluation of props against sharp sportsbook lines
//! - Cross-platform middle detection
//! - Snapshot-backed prop and odds sources

pub mod cli;
pub mod config;
pub mod identity;
pub mod market;
pub mod odds;
pub mod payout;
pub mod props;
pub mod signal;
pub mod source;
pub mod telemetry;
