//! Label folding for tolerant name lookups

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a label for comparison: trimmed, lowercase, accents stripped.
///
/// `"  Inteligência "`, `"inteligencia"` and `"INTELIGÊNCIA"` all fold to
/// `"inteligencia"`.
pub fn fold(label: &str) -> String {
    label
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two labels after folding
pub fn same_label(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}
