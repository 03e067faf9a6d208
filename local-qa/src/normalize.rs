//! Text folding for keyword comparison.
//!
//! Vietnamese input arrives both with and without tone marks ("trầy xước" vs
//! "tray xuoc"), so matching happens on a folded form that only keeps
//! `[a-z0-9 ]`.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Folds `text` into a lowercase ASCII form suitable for substring matching.
///
/// Steps, in order:
/// - lowercase;
/// - NFD decomposition, dropping combining marks U+0300..=U+036F;
/// - `đ` becomes `d` (it has no decomposition);
/// - every character outside `[a-z0-9 ]` becomes a single space.
///
/// Never fails, and `normalize(&normalize(s)) == normalize(s)` for any `s`.
///
/// # Example
/// ```
/// use local_qa::normalize;
/// assert_eq!(normalize("Trầy xước!"), "tray xuoc ");
/// assert_eq!(normalize("Đau"), "dau");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| match c {
            'đ' => 'd',
            'a'..='z' | '0'..='9' | ' ' => c,
            _ => ' ',
        })
        .collect()
}
