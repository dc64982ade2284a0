//! Italian stemming pipeline.
//!
//! prepare → step 0 → step 1 (or step 2 when step 1 changed nothing)
//! → step 3a → step 3b → restore.

use italstem_core::StemmerConfig;
use tracing::trace;

use crate::normalize::{prepare_word, restore_word};
use crate::steps::{step0, step1, step2, step3a, step3b};

/// Stem a word given as codepoints.
///
/// With `lowercase_first` every character is lowercased before anything
/// else; otherwise the word is taken as is. The result never contains the
/// internal semivowel markers.
pub fn stem(word: &[char], lowercase_first: bool) -> Vec<char> {
    if word.is_empty() {
        return Vec::new();
    }

    let word: Vec<char> = if lowercase_first {
        word.iter().flat_map(|c| c.to_lowercase()).collect()
    } else {
        word.to_vec()
    };

    let prepared = prepare_word(&word);
    let after_pronoun = step0(&prepared);
    let after_suffix = step1(&after_pronoun);
    trace!(
        prepared = %as_string(&prepared),
        step0 = %as_string(&after_pronoun),
        step1 = %as_string(&after_suffix),
        "Suffix steps"
    );

    let stemmed = if after_suffix == after_pronoun {
        let after_verb = step2(&after_suffix);
        trace!(step2 = %as_string(&after_verb), "Verb suffix step");
        after_verb
    } else {
        after_suffix
    };

    let stemmed = step3b(&step3a(&stemmed));
    restore_word(stemmed)
}

/// Stem a word given as a string.
pub fn stem_str(word: &str, lowercase_first: bool) -> String {
    let chars: Vec<char> = word.chars().collect();
    stem(&chars, lowercase_first).into_iter().collect()
}

fn as_string(word: &[char]) -> String {
    word.iter().collect()
}

/// Stemmer bound to a configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalianStemmer {
    config: StemmerConfig,
}

impl ItalianStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: StemmerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Stem a single word.
    pub fn stem(&self, word: &str) -> String {
        stem_str(word, self.config.lowercase_first)
    }

    /// Stem every word, preserving order.
    pub fn stem_words<'a, I>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().map(|w| self.stem(w)).collect()
    }
}
