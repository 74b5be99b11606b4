//! Name canonicalization

/// Generational suffixes stripped from player names, applied in this order.
pub const NAME_SUFFIXES: [&str; 5] = [" jr.", " sr.", " iii", " ii", " iv"];

/// Canonicalize a player display name for comparison
///
/// Lower-cases, trims, then removes every occurrence of each suffix in
/// [`NAME_SUFFIXES`]. Removal is a substring replacement, not a trailing-token
/// strip, so a last name that starts with "Iv" or "Ii" is altered as well
/// ("Marcus Ivey" becomes "marcusey").
pub fn normalize_name(name: &str) -> String {
    let mut normalized = name.to_lowercase().trim().to_string();
    for suffix in NAME_SUFFIXES {
        normalized = normalized.replace(suffix, "");
    }
    normalized
}

/// Canonicalize a stat label for cross-platform keys
pub fn normalize_stat(label: &str) -> String {
    label.trim().to_lowercase()
}
