//! Codepoint-level helpers over `&[char]`.
//!
//! Every offset in the stemmer is a codepoint index, never a byte offset,
//! so accented letters and the semivowel markers count as one position.

/// Whether `word` ends with `suffix`.
pub fn has_suffix(word: &[char], suffix: &[char]) -> bool {
    word.ends_with(suffix)
}

/// Start index of the last occurrence of `needle` in `word`.
///
/// An empty needle matches at `word.len()`.
pub fn last_index(word: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(word.len());
    }
    if needle.len() > word.len() {
        return None;
    }
    word.windows(needle.len()).rposition(|w| w == needle)
}

/// Index at which `suffix` starts when `word` ends with it.
pub fn suffix_start(word: &[char], suffix: &[char]) -> Option<usize> {
    if has_suffix(word, suffix) {
        last_index(word, suffix)
    } else {
        None
    }
}

/// Replace every non-overlapping occurrence of `old` with `new`, scanning
/// left to right in a single pass.
pub fn replace(word: &[char], old: &[char], new: &[char]) -> Vec<char> {
    if old.is_empty() {
        return word.to_vec();
    }

    let mut out = Vec::with_capacity(word.len());
    let mut i = 0;
    while i < word.len() {
        if word[i..].starts_with(old) {
            out.extend_from_slice(new);
            i += old.len();
        } else {
            out.push(word[i]);
            i += 1;
        }
    }
    out
}

/// Convert a literal into a codepoint vector.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
