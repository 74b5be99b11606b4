//! Fuzzy player-name matching
//!
//! Three complementary similarity heuristics, each on a 0-100 scale:
//! - [`ratio`]: whole-string similarity (tolerates small edits and transpositions)
//! - [`partial_ratio`]: best alignment of the shorter string inside the longer
//!   one (tolerates truncation, e.g. "Curry" vs "Stephen Curry")
//! - [`token_sort_ratio`]: similarity after sorting tokens (tolerates
//!   "Last First" vs "First Last")
//!
//! A candidate's score is the maximum of the three.

use super::normalize_name;
use strsim::normalized_levenshtein;

/// Default minimum score for a candidate to count as a match
pub const DEFAULT_MATCH_THRESHOLD: u8 = 80;

/// Whole-string similarity: `1 - levenshtein / longer_len`, scaled to 0-100
///
/// Either string empty scores 0, including two empty strings.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_score(normalized_levenshtein(a, b))
}

/// Best [`ratio`] of the shorter string against every equal-length window of
/// the longer string
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let width = shorter.chars().count();

    // Char boundaries of `longer`, so windows never split a code point
    let bounds: Vec<usize> = longer
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(longer.len()))
        .collect();

    let mut best = 0u8;
    for start in 0..bounds.len() - width {
        let window = &longer[bounds[start]..bounds[start + width]];
        let score = ratio(shorter, window);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// [`ratio`] after splitting on non-alphanumerics, lower-casing and sorting tokens
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<String> = s
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();
    tokens.sort();
    tokens.join(" ")
}

fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

fn combined_score(a: &str, b: &str) -> u8 {
    ratio(a, b)
        .max(partial_ratio(a, b))
        .max(token_sort_ratio(a, b))
}

/// Resolves a player name against a candidate set
///
/// Candidates are scored in the order given. A candidate becomes the best
/// match only if its score is strictly greater than every earlier candidate's
/// and at least the threshold, so on equal scores the first-seen candidate
/// is kept. Callers that need a priority (e.g. sharp books first) must order
/// the candidates accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatcher {
    threshold: u8,
}

impl FuzzyMatcher {
    /// Create a matcher with the given minimum score (0-100)
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.min(100),
        }
    }

    /// Minimum accepted score
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Similarity of two names after normalization
    pub fn score(&self, a: &str, b: &str) -> u8 {
        combined_score(&normalize_name(a), &normalize_name(b))
    }

    /// Best candidate for `target`, or `None` if nothing clears the threshold
    ///
    /// Returns the candidate as given (not normalized).
    pub fn best_match<'a, I>(&self, target: &str, candidates: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let target = normalize_name(target);
        let mut best: Option<&'a str> = None;
        let mut best_score = 0u8;

        for candidate in candidates {
            let score = combined_score(&target, &normalize_name(candidate));

            if score > best_score && score >= self.threshold {
                best_score = score;
                best = Some(candidate);
                if best_score == 100 {
                    break;
                }
            }
        }

        best
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}
