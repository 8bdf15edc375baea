//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for case-insensitive matching.
///
/// Composed and decomposed spellings of the same text compare equal:
/// - "Café" → "café"
/// - "Cafe\u{301}" → "café"
///
/// Whitespace is left alone so a substring match on normalized text is a
/// substring match on the original.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Lowercase only. Assumes input is already in composed form.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive substring test. `needle` must already be normalized.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(needle)
}
