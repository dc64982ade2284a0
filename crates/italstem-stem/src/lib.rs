//! italstem stem — Snowball-style stemmer for Italian.
//!
//! Words are handled as codepoint sequences. A word is prepared (accent
//! folding, semivowel marking), run through the suffix steps gated by the
//! R1, R2 and RV regions, and restored.

pub mod normalize;
pub mod region;
pub mod runes;
pub mod stemmer;
pub mod steps;
pub mod suffixes;
pub mod vocabulary;
pub mod vowel;

pub use region::{find_r1_r2, find_region, find_rv, Region, Regions};
pub use stemmer::{stem, stem_str, ItalianStemmer};
pub use vocabulary::{check_files, check_lines, Mismatch, VocabularyReport};
