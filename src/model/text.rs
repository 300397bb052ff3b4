//! Text normalization shared by record validation and matching.
//!
//! Case-insensitive comparison here is ASCII-only: `A`-`Z` fold to
//! `a`-`z`, every other character compares by exact code point. `É` and `é`
//! are therefore different tags.
//!
//! Trimming is ASCII-only as well: space, `\t`, `\n`, `\v`, `\f` and `\r`.
//! Unicode spaces such as U+00A0 are kept as text.

use std::cmp::Ordering;

/// Strip leading and trailing ASCII whitespace, including vertical tab.
pub(crate) fn trim_space(s: &str) -> &str {
    // char::is_ascii_whitespace skips \x0B
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

/// [`trim_space`] into an owned string.
pub(crate) fn trimmed(s: &str) -> String {
    trim_space(s).to_string()
}

/// ASCII-lowercased copy.
pub(crate) fn fold(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Equality ignoring ASCII case.
pub(crate) fn eq_folded(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Lexicographic byte order ignoring ASCII case.
pub(crate) fn cmp_folded(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Whether `haystack` contains `needle_folded`, which must already be folded.
pub(crate) fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    fold(haystack).contains(needle_folded)
}
