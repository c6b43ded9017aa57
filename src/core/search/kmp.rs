//! Knuth-Morris-Pratt exact substring search.
//!
//! Pure functions over Unicode scalar values: indices returned here
//! count chars, not bytes. KMP is chosen over a naive scan for its
//! worst-case guarantee: the text cursor never moves backwards, so a
//! repetitive pattern against a repetitive text (`"aaab"` in
//! `"aaaaaaab"`) stays O(text + pattern) instead of degrading to
//! O(text * pattern).

/// Find the leftmost occurrence of `pattern` in `text`.
///
/// Returns the char index of the first match, or `None`. An empty
/// pattern matches vacuously at index 0 regardless of `text`.
pub fn find(text: &str, pattern: &str) -> Option<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_from(&text, &pattern, 0)
}

/// Find the leftmost occurrence of `pattern` in `text` at or after
/// char position `start`.
///
/// Operates on pre-collected char slices so callers enumerating every
/// occurrence (e.g. match highlighting) collect only once.
pub fn find_from(text: &[char], pattern: &[char], start: usize) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return if start <= n { Some(start) } else { None };
    }

    let lps = lps_table(pattern);

    let mut i = start; // text cursor, never moves backwards
    let mut j = 0; // pattern cursor

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                return Some(i - j);
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}

/// Compute the longest-proper-prefix-suffix table for `pattern`.
///
/// `lps[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it. On a mismatch at
/// pattern position `j`, the scan resumes at `lps[j - 1]` without
/// re-reading text characters.
fn lps_table(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];
    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}
