//! Sportsbook priority

use serde::Deserialize;

/// Bookmakers ordered by how closely their lines track true probability
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SharpBooks {
    /// Bookmaker keys, most trusted first
    #[serde(default = "default_priority")]
    pub priority: Vec<String>,
    /// How many of the leading books count as sharp
    #[serde(default = "default_sharp_count")]
    pub sharp_count: usize,
}

fn default_priority() -> Vec<String> {
    ["draftkings", "fanduel", "betmgm", "caesars", "pointsbet"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_sharp_count() -> usize {
    2
}

impl Default for SharpBooks {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            sharp_count: default_sharp_count(),
        }
    }
}

impl SharpBooks {
    /// Position of a bookmaker in the priority list; unknown books rank last
    pub fn rank(&self, bookmaker: &str) -> usize {
        self.priority
            .iter()
            .position(|b| b == bookmaker)
            .unwrap_or(usize::MAX)
    }

    /// Whether the bookmaker is one of the top-priority books
    pub fn is_sharp(&self, bookmaker: &str) -> bool {
        self.rank(bookmaker) < self.sharp_count
    }

    /// Stable-sort items by bookmaker priority
    pub fn sort_by_priority<T, F>(&self, items: &mut [T], bookmaker: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by_key(|item| self.rank(bookmaker(item)));
    }
}
