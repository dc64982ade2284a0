//! Word preparation before the suffix steps, and restoration after them.

use crate::runes::replace;
use crate::vowel::is_vowel;

/// Stand-in for a semivowel `i`; not a vowel.
pub const I_MARKER: char = 'I';
/// Stand-in for a semivowel `u`, or the `u` of `qu`; not a vowel.
pub const U_MARKER: char = 'U';

fn fold_accent(c: char) -> char {
    match c {
        'á' => 'à',
        'é' => 'è',
        'í' => 'ì',
        'ó' => 'ò',
        'ú' => 'ù',
        other => other,
    }
}

fn marker_for(c: char) -> Option<char> {
    match c {
        'i' => Some(I_MARKER),
        'u' => Some(U_MARKER),
        _ => None,
    }
}

/// Fold acute accents to grave, mark the `u` of `qu`, then mark every
/// `i`/`u` standing between two vowels.
///
/// The vowel test on the left neighbour reads the word as it was before
/// semivowel marking, so in `aiuola` both the `i` and the `u` get marked.
pub fn prepare_word(word: &[char]) -> Vec<char> {
    let folded: Vec<char> = word.iter().copied().map(fold_accent).collect();
    let word = replace(&folded, &['q', 'u'], &['q', U_MARKER]);

    word.iter()
        .enumerate()
        .map(|(i, &c)| {
            let between_vowels = i > 0
                && is_vowel(word[i - 1])
                && word.get(i + 1).is_some_and(|&next| is_vowel(next));
            match marker_for(c) {
                Some(marker) if between_vowels => marker,
                _ => c,
            }
        })
        .collect()
}

/// Turn the semivowel markers back into lowercase letters.
pub fn restore_word(mut word: Vec<char>) -> Vec<char> {
    for c in word.iter_mut() {
        match *c {
            I_MARKER => *c = 'i',
            U_MARKER => *c = 'u',
            _ => {}
        }
    }
    word
}
