//! Cross-platform middle detection
//!
//! When two platforms quote the same player stat at different lines, taking
//! UNDER on the higher line and OVER on the lower line wins both legs if the
//! stat lands between them.
//!
//! Detection is pairwise. Covering more than two platforms means running
//! [`MiddleDetector::find`] on each pair.

use super::{MiddleLeg, MiddleOpportunity};
use crate::identity::normalize_stat;
use crate::odds::Side;
use crate::props::Prop;
use crate::telemetry::record_middles;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Default minimum line gap for a middle
pub const DEFAULT_MIN_SPREAD: Decimal = dec!(0.5);

/// Most whole-number outcomes a middle zone may span
///
/// Wider gaps come from bad upstream lines, not real middles.
pub const MAX_MIDDLE_ZONE: usize = 100;

type PropKey = (String, String, String);

fn prop_key(prop: &Prop) -> PropKey {
    (
        prop.player_name.trim().to_lowercase(),
        normalize_stat(&prop.stat_type),
        prop.sport.trim().to_lowercase(),
    )
}

/// Props indexed by (player, stat, sport), keeping first-seen key order
///
/// A later prop with the same key replaces the earlier one.
struct KeyedProps<'a> {
    order: Vec<PropKey>,
    by_key: HashMap<PropKey, &'a Prop>,
}

impl<'a> KeyedProps<'a> {
    fn new(props: &'a [Prop]) -> Self {
        let mut order = Vec::new();
        let mut by_key = HashMap::new();
        for prop in props {
            let key = prop_key(prop);
            if by_key.insert(key.clone(), prop).is_none() {
                order.push(key);
            }
        }
        Self { order, by_key }
    }

    fn iter(&self) -> impl Iterator<Item = (&PropKey, &'a Prop)> + '_ {
        self.order.iter().map(|k| (k, self.by_key[k]))
    }

    fn get(&self, key: &PropKey) -> Option<&'a Prop> {
        self.by_key.get(key).copied()
    }
}

/// Finds middles between two platforms' prop lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleDetector {
    min_spread: Decimal,
}

impl MiddleDetector {
    /// Create a detector requiring at least `min_spread` between lines
    pub fn new(min_spread: Decimal) -> Self {
        Self { min_spread }
    }

    /// Minimum line gap
    pub fn min_spread(&self) -> Decimal {
        self.min_spread
    }

    /// Middles between platform A and platform B, widest spread first
    ///
    /// Keys are matched on lower-cased, trimmed player, stat and sport.
    /// Equal spreads keep platform A's prop order.
    pub fn find(&self, props_a: &[Prop], props_b: &[Prop]) -> Vec<MiddleOpportunity> {
        let keyed_a = KeyedProps::new(props_a);
        let keyed_b = KeyedProps::new(props_b);

        let mut middles: Vec<MiddleOpportunity> = keyed_a
            .iter()
            .filter_map(|(key, a)| {
                let b = keyed_b.get(key)?;
                self.middle_between(a, b)
            })
            .collect();

        middles.sort_by(|x, y| y.spread.cmp(&x.spread));

        record_middles(middles.len());
        tracing::debug!(
            props_a = props_a.len(),
            props_b = props_b.len(),
            middles = middles.len(),
            "Middle scan complete"
        );

        middles
    }

    fn middle_between(&self, a: &Prop, b: &Prop) -> Option<MiddleOpportunity> {
        let spread = (a.line - b.line).abs();
        if spread < self.min_spread {
            return None;
        }

        let (high, low) = if a.line > b.line { (a, b) } else { (b, a) };

        let Some(zone) = middle_zone(low.line, high.line) else {
            tracing::warn!(
                player = %a.player_name,
                stat = %a.stat_type,
                low = %low.line,
                high = %high.line,
                max_zone = MAX_MIDDLE_ZONE,
                "Line gap too wide for a middle"
            );
            return None;
        };

        Some(MiddleOpportunity {
            player_name: a.player_name.clone(),
            stat_type: a.stat_type.clone(),
            sport: a.sport.clone(),
            platform_a: MiddleLeg {
                name: high.platform.clone(),
                line: high.line,
                recommended: Side::Under,
            },
            platform_b: MiddleLeg {
                name: low.platform.clone(),
                line: low.line,
                recommended: Side::Over,
            },
            spread,
            middle_zone: zone,
        })
    }
}

impl Default for MiddleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SPREAD)
    }
}

/// Whole-number outcomes from `floor(low) + 1` through `floor(high)`
///
/// When no whole number fits (lines less than one apart inside the same
/// integer), the zone is the single point `low + 0.5`. Returns `None` when
/// the zone would hold more than [`MAX_MIDDLE_ZONE`] outcomes.
pub fn middle_zone(low: Decimal, high: Decimal) -> Option<Vec<Decimal>> {
    let first = low.floor() + Decimal::ONE;
    let last = high.floor();
    if last - first >= Decimal::from(MAX_MIDDLE_ZONE) {
        return None;
    }

    let mut zone = Vec::new();
    let mut value = first;
    while value <= last {
        zone.push(value);
        value += Decimal::ONE;
    }

    if zone.is_empty() {
        zone.push(low + dec!(0.5));
    }
    Some(zone)
}
