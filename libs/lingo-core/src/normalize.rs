//! Text normalization shared by every checker.

/// Normalize free text for comparison.
///
/// Lower-cases, drops every character that is neither alphanumeric nor
/// whitespace, collapses whitespace runs to a single space and trims.
/// Lower-casing runs first since it can emit combining marks ('İ' -> "i\u{307}").
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize and split into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    split_words(&normalize(text))
}

/// Split text that is already normalized into word tokens.
pub fn split_words(normalized: &str) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
