/// Italian vowels, grave-accented forms included.
///
/// The semivowel markers `I` and `U` are deliberately absent: marked
/// semivowels must behave like consonants in region finding.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'à' | 'è' | 'ì' | 'ò' | 'ù')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels() {
        for c in "aeiouàèìòù".chars() {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
    }

    #[test]
    fn test_non_vowels() {
        for c in "bcdfghlmnpqrstvzyIUAEáé".chars() {
            assert!(!is_vowel(c), "{c} should not be a vowel");
        }
    }
}
