//! R1, R2 and RV region boundaries.
//!
//! A boundary is a codepoint offset into the word; `word.len()` denotes the
//! null region. Every function here returns a value clamped to the word
//! length, so callers can slice with it directly.

use crate::vowel::is_vowel;

/// Which boundary gates a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    R1,
    R2,
    Rv,
}

/// All three boundaries of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
    pub rv: usize,
}

impl Regions {
    pub fn of(word: &[char]) -> Self {
        let (r1, r2) = find_r1_r2(word);
        Self {
            r1,
            r2,
            rv: find_rv(word),
        }
    }

    pub fn get(&self, region: Region) -> usize {
        match region {
            Region::R1 => self.r1,
            Region::R2 => self.r2,
            Region::Rv => self.rv,
        }
    }
}

/// Offset just after the first non-vowel that follows a vowel, looking at
/// positions from `start` on. Returns `word.len()` when there is none.
pub fn find_region(word: &[char], start: usize) -> usize {
    (start.max(1)..word.len())
        .find(|&i| !is_vowel(word[i]) && is_vowel(word[i - 1]))
        .map_or(word.len(), |i| i + 1)
}

/// R1 is the region after the first non-vowel following a vowel; R2 is the
/// same rule applied again inside R1. Both are null when R1 is.
pub fn find_r1_r2(word: &[char]) -> (usize, usize) {
    let len = word.len();
    let r1 = find_region(word, 0);
    if r1 == len {
        return (len, len);
    }
    (r1, find_region(word, r1))
}

/// RV:
/// - second letter a consonant: the region after the next vowel;
/// - first two letters vowels: the region after the next consonant;
/// - otherwise (consonant, vowel): the region after the third letter.
///
/// The end of the word when no such position exists.
pub fn find_rv(word: &[char]) -> usize {
    let len = word.len();
    if len < 2 {
        return len;
    }

    if !is_vowel(word[1]) {
        (1..len)
            .find(|&i| is_vowel(word[i]))
            .map_or(len, |i| i + 1)
    } else if is_vowel(word[0]) {
        (2..len)
            .find(|&i| !is_vowel(word[i]))
            .map_or(len, |i| i + 1)
    } else {
        3.min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runes::chars;

    fn tail(word: &[char], at: usize) -> String {
        word[at..].iter().collect()
    }

    #[test]
    fn test_r1_r2() {
        let cases = [
            ("beautiful", "iful", "ul"),
            ("beauty", "y", ""),
            ("beau", "", ""),
            ("animadversion", "imadversion", "adversion"),
            ("sprinkled", "kled", ""),
            ("eucharist", "harist", "ist"),
            ("giocatrici", "atrici", "rici"),
        ];
        for (word, r1, r2) in cases {
            let w = chars(word);
            let (b1, b2) = find_r1_r2(&w);
            assert_eq!(tail(&w, b1), r1, "R1 of {word}");
            assert_eq!(tail(&w, b2), r2, "R2 of {word}");
            assert!(b1 <= b2);
        }
    }

    #[test]
    fn test_find_region_skips_before_start() {
        let w = chars("abbandonata");
        assert_eq!(find_region(&w, 0), 2);
        assert_eq!(find_region(&w, 2), 5);
        assert_eq!(find_region(&w, w.len()), w.len());
    }

    #[test]
    fn test_rv_consonant_second() {
        assert_eq!(tail(&chars("olio"), find_rv(&chars("olio"))), "o");
        assert_eq!(find_rv(&chars("abbandonata")), 4);
        // the vowel is the last letter
        assert_eq!(find_rv(&chars("tra")), 3);
        assert_eq!(find_rv(&chars("str")), 3);
    }

    #[test]
    fn test_rv_two_vowels() {
        assert_eq!(tail(&chars("aereo"), find_rv(&chars("aereo"))), "eo");
        assert_eq!(find_rv(&chars("aiuo")), 4);
    }

    #[test]
    fn test_rv_consonant_vowel() {
        assert_eq!(tail(&chars("macchina"), find_rv(&chars("macchina"))), "china");
        // the third letter does not exist: clamped to the null region
        assert_eq!(find_rv(&chars("ba")), 2);
    }

    #[test]
    fn test_rv_short_words() {
        assert_eq!(find_rv(&[]), 0);
        assert_eq!(find_rv(&chars("a")), 1);
        assert_eq!(find_rv(&chars("è")), 1);
    }

    #[test]
    fn test_markers_are_consonants() {
        // "qU" behaves as consonant + consonant
        let w = chars("qUadro");
        assert_eq!(find_rv(&w), 3);
        assert_eq!(find_r1_r2(&w), (4, 6));
    }

    #[test]
    fn test_regions_of() {
        let w = chars("giocatrici");
        let regions = Regions::of(&w);
        assert_eq!(regions.get(Region::R1), 4);
        assert_eq!(regions.get(Region::R2), 6);
        assert_eq!(regions.get(Region::Rv), 3);
    }
}
