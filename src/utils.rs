//! Utility functions for string processing.

/// Case-fold a string for comparison.
///
/// Plain Unicode lowercasing, no diacritic stripping: "Nokia" and "nokia"
/// compare equal, "Kävelykatu" and "kavelykatu" do not.
#[inline]
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// First character of every whitespace-delimited word, concatenated.
///
/// - "professional disc golf world championships" → "pdgwc"
/// - "  us   open " → "uo"
pub fn initials(value: &str) -> String {
    value
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Remove every whitespace character.
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lowercase and keep only ASCII letters and digits.
///
/// Used to clean acronym queries: "P.D.G.A." → "pdga", "D-G 2" → "dg2".
pub fn alnum_only(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Lowercase, keep ASCII letters, digits and whitespace, then trim.
///
/// Word boundaries survive, punctuation does not: "Disc-Golf Pro Tour!" →
/// "discgolf pro tour".
pub fn alnum_words(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Treat `None` and `Some("")` alike.
#[inline]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
