//! Platform payout break-evens
//!
//! Each pick'em slip type pays a fixed multiplier, which implies a minimum
//! per-leg win probability for the slip to be profitable long run.

use crate::odds::NoVig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Break-even used when a platform has no entry of its own
pub const FALLBACK_BREAK_EVEN: Decimal = dec!(54.34);

/// Platform whose slip table stands in for unknown platforms
pub const FALLBACK_PLATFORM: &str = "prizepicks";

/// One slip type and its break-even win probability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipBreakEven {
    /// Slip name, e.g. "5_flex"
    pub name: String,
    /// Minimum per-leg win probability, in percent
    pub break_even: Decimal,
}

/// Break-evens for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformBreakEven {
    /// Platform identifier, lower-case
    pub platform: String,
    /// Break-even used for EV percentage
    pub default: Decimal,
    /// Slip types in display order
    #[serde(default)]
    pub slips: Vec<SlipBreakEven>,
}

/// Immutable platform → slip type → break-even table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenTable {
    platforms: Vec<PlatformBreakEven>,
}

fn slip(name: &str, break_even: Decimal) -> SlipBreakEven {
    SlipBreakEven {
        name: name.to_string(),
        break_even,
    }
}

impl Default for BreakEvenTable {
    fn default() -> Self {
        Self::new(vec![
            PlatformBreakEven {
                platform: "prizepicks".to_string(),
                default: dec!(54.34),
                slips: vec![
                    slip("5_flex", dec!(54.34)),
                    slip("6_flex", dec!(54.34)),
                    slip("4_power", dec!(56.23)),
                    slip("2_power", dec!(57.74)),
                ],
            },
            PlatformBreakEven {
                platform: "underdog".to_string(),
                default: dec!(52.38),
                slips: vec![
                    slip("5_leg", dec!(52.38)),
                    slip("4_leg", dec!(53.57)),
                    slip("3_leg", dec!(55.56)),
                    slip("2_leg", dec!(60.00)),
                ],
            },
            // Approximate; payout schedules not yet verified
            PlatformBreakEven {
                platform: "sleeper".to_string(),
                default: dec!(54.00),
                slips: Vec::new(),
            },
            PlatformBreakEven {
                platform: "betr".to_string(),
                default: dec!(54.00),
                slips: Vec::new(),
            },
        ])
    }
}

impl BreakEvenTable {
    /// Build a table from explicit platform entries
    pub fn new(platforms: Vec<PlatformBreakEven>) -> Self {
        Self { platforms }
    }

    /// Entry for a platform, if configured
    pub fn platform(&self, platform: &str) -> Option<&PlatformBreakEven> {
        self.platforms
            .iter()
            .find(|p| p.platform.eq_ignore_ascii_case(platform))
    }

    /// All configured platforms in table order
    pub fn platforms(&self) -> &[PlatformBreakEven] {
        &self.platforms
    }

    /// Default break-even for a platform
    ///
    /// Returns `None` when the platform has no entry; callers decide the
    /// fallback (usually [`FALLBACK_BREAK_EVEN`]) and report the gap.
    pub fn default_for(&self, platform: &str) -> Option<Decimal> {
        self.platform(platform).map(|p| p.default)
    }

    /// Slip types whose break-even is at or below `win_probability`
    ///
    /// Unknown platforms are judged against the [`FALLBACK_PLATFORM`] table.
    pub fn best_for(&self, platform: &str, win_probability: Decimal) -> Vec<String> {
        let Some(entry) = self
            .platform(platform)
            .or_else(|| self.platform(FALLBACK_PLATFORM))
        else {
            return Vec::new();
        };

        entry
            .slips
            .iter()
            .filter(|s| win_probability >= s.break_even)
            .map(|s| s.name.clone())
            .collect()
    }

    /// For every platform and slip type, whether either side of a priced line
    /// clears the break-even
    pub fn slip_report(&self, no_vig: &NoVig) -> BTreeMap<String, Vec<(String, bool)>> {
        let best = no_vig.best_probability();
        self.platforms
            .iter()
            .filter(|p| !p.slips.is_empty())
            .map(|p| {
                let slips = p
                    .slips
                    .iter()
                    .map(|s| (s.name.clone(), best >= s.break_even))
                    .collect();
                (p.platform.clone(), slips)
            })
            .collect()
    }
}
