//! Concurrent fan-out over sources

use super::{OddsSource, PropSource};
use crate::props::{BookLine, Prop};
use crate::telemetry::record_source_failure;
use futures_util::future::join_all;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Fetch props from every source concurrently
///
/// Results are concatenated in source order. A failing source contributes
/// nothing.
pub async fn collect_props(sources: &[Arc<dyn PropSource>], sport: &str) -> Vec<Prop> {
    let fetches = sources.iter().map(|source| async move {
        match source.fetch_props(sport).await {
            Ok(props) => {
                tracing::debug!(source = source.name(), sport, count = props.len(), "Fetched props");
                props
            }
            Err(e) => {
                tracing::warn!(source = source.name(), sport, error = %e, "Prop source failed");
                record_source_failure(source.name());
                Vec::new()
            }
        }
    });

    join_all(fetches).await.into_iter().flatten().collect()
}

/// Fetch lines for each market from every source concurrently
///
/// Results are ordered by source, then market. A failing (source, market)
/// pair contributes nothing.
pub async fn collect_lines(
    sources: &[Arc<dyn OddsSource>],
    sport: &str,
    markets: &BTreeSet<String>,
) -> Vec<BookLine> {
    let fetches = sources.iter().flat_map(|source| {
        markets.iter().map(move |market| async move {
            match source.fetch_lines(sport, market).await {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        sport,
                        market = %market,
                        error = %e,
                        "Odds source failed"
                    );
                    record_source_failure(source.name());
                    Vec::new()
                }
            }
        })
    });

    let lines: Vec<BookLine> = join_all(fetches).await.into_iter().flatten().collect();
    tracing::debug!(sport, markets = markets.len(), lines = lines.len(), "Fetched lines");
    lines
}
