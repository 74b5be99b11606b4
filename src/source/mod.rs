//! Prop and odds sources
//!
//! The fetch boundary between upstream data and the pricing engine. Sources
//! are async; everything downstream of them is synchronous.

mod gather;
mod snapshot;

pub use gather::{collect_lines, collect_props};
pub use snapshot::{SnapshotOddsSource, SnapshotPropSource};

use crate::props::{BookLine, Prop};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Source fetch errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Provider of platform props
#[async_trait]
pub trait PropSource: Send + Sync {
    /// Platform or source identifier, used in logs and metrics
    fn name(&self) -> &str;

    /// Props for one sport, in the platform's order
    async fn fetch_props(&self, sport: &str) -> Result<Vec<Prop>, SourceError>;
}

/// Provider of sportsbook lines
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Source identifier, used in logs and metrics
    fn name(&self) -> &str;

    /// Lines for one sport and market
    async fn fetch_lines(&self, sport: &str, market: &str) -> Result<Vec<BookLine>, SourceError>;
}
