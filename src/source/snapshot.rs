//! File-backed sources
//!
//! A snapshot is a JSON array of records captured from an upstream API.
//! Records are decoded one at a time so a malformed record is dropped
//! without losing the rest of the file.

use super::{OddsSource, PropSource, SourceError};
use crate::market::SharpBooks;
use crate::props::{BookLine, Prop};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let raw: Vec<serde_json::Value> =
        serde_json::from_str(&content).map_err(|source| SourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    index,
                    error = %e,
                    "Dropping malformed record"
                );
                None
            }
        })
        .collect();

    tracing::debug!(
        path = %path.display(),
        total,
        kept = records.len(),
        "Loaded snapshot"
    );
    Ok(records)
}

/// Platform props read from a snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotPropSource {
    name: String,
    path: PathBuf,
}

impl SnapshotPropSource {
    /// Create a source named `name` reading from `path`
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Every prop in the file, regardless of sport
    pub async fn load_all(&self) -> Result<Vec<Prop>, SourceError> {
        read_records(&self.path).await
    }
}

#[async_trait]
impl PropSource for SnapshotPropSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_props(&self, sport: &str) -> Result<Vec<Prop>, SourceError> {
        let props: Vec<Prop> = self.load_all().await?;
        Ok(props
            .into_iter()
            .filter(|p| p.sport.eq_ignore_ascii_case(sport))
            .collect())
    }
}

/// Sportsbook lines read from a snapshot file
///
/// The snapshot holds one sport's lines across markets. `is_sharp` is set
/// from the configured book priority, and lines are returned in priority
/// order.
#[derive(Debug, Clone)]
pub struct SnapshotOddsSource {
    path: PathBuf,
    books: SharpBooks,
}

impl SnapshotOddsSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>, books: SharpBooks) -> Self {
        Self {
            path: path.into(),
            books,
        }
    }

    /// Every line in the file, tagged and ordered by book priority
    pub async fn load_all(&self) -> Result<Vec<BookLine>, SourceError> {
        let mut lines: Vec<BookLine> = read_records(&self.path).await?;
        for line in &mut lines {
            line.is_sharp = self.books.is_sharp(&line.bookmaker);
        }
        self.books.sort_by_priority(&mut lines, |l| l.bookmaker.as_str());
        Ok(lines)
    }
}

#[async_trait]
impl OddsSource for SnapshotOddsSource {
    fn name(&self) -> &str {
        "snapshot"
    }

    async fn fetch_lines(&self, _sport: &str, market: &str) -> Result<Vec<BookLine>, SourceError> {
        let lines = self.load_all().await?;
        Ok(lines.into_iter().filter(|l| l.market == market).collect())
    }
}
