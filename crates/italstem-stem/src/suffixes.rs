//! Suffix tables for the Italian steps.
//!
//! Tables are consulted in declared order and the first match wins, so
//! the order below is part of the algorithm. Do not sort them.

use once_cell::sync::Lazy;

use crate::region::Region;
use crate::runes::chars;

/// An ordered list of suffixes as codepoint sequences.
pub type SuffixTable = Vec<Vec<char>>;

fn table(entries: &[&str]) -> SuffixTable {
    entries.iter().map(|s| chars(s)).collect()
}

/// Attached pronouns removed by step 0.
pub static PRONOUN_SUFFIXES: Lazy<SuffixTable> = Lazy::new(|| {
    table(&[
        "gliela", "gliele", "glieli", "glielo", "gliene", "sene", "mela", "mele", "meli", "melo",
        "mene", "tela", "tele", "teli", "telo", "tene", "cela", "cele", "celi", "celo", "cene",
        "vela", "vele", "veli", "velo", "vene", "gli", "ci", "la", "le", "li", "lo", "mi", "ne",
        "si", "ti", "vi",
    ])
});

/// Gerund endings that stay in place when a pronoun is removed.
pub static GERUND_ENDINGS: Lazy<SuffixTable> = Lazy::new(|| table(&["ando", "endo"]));

/// Infinitive stems that get their final `e` back when a pronoun is removed.
pub static INFINITIVE_ENDINGS: Lazy<SuffixTable> = Lazy::new(|| table(&["ar", "er", "ir"]));

/// Step 1 suffixes deleted outright when they lie in R2.
pub static STEP1_SUFFIXES: Lazy<SuffixTable> = Lazy::new(|| {
    table(&[
        "atrici", "atrice", "mente", "istì", "istè", "istà", "ibili", "ibile", "abili", "abile",
        "isti", "iste", "ista", "ismo", "ismi", "ichi", "iche", "anze", "anza", "anti", "ante",
        "oso", "osi", "ose", "osa", "ico", "ici", "ice", "ica",
    ])
});

/// Step 1 suffixes that may be preceded by `ic`.
pub static AZIONE_SUFFIXES: Lazy<SuffixTable> =
    Lazy::new(|| table(&["azione", "azioni", "atore", "atori"]));

/// Step 1 suffixes that may be preceded by `at`, itself preceded by `ic`.
pub static IVE_SUFFIXES: Lazy<SuffixTable> = Lazy::new(|| table(&["ivo", "ivi", "iva", "ive"]));

/// What may precede `amente` when it is not `iv`.
pub static AMENTE_PRECEDING: Lazy<SuffixTable> = Lazy::new(|| table(&["os", "ic", "abil"]));

/// What may precede `ità`.
pub static ITA_PRECEDING: Lazy<SuffixTable> = Lazy::new(|| table(&["abil", "ic", "iv"]));

pub const AMENTE: &[char] = &['a', 'm', 'e', 'n', 't', 'e'];
pub const ITA: &[char] = &['i', 't', 'à'];
pub const IV: &[char] = &['i', 'v'];
pub const AT: &[char] = &['a', 't'];
pub const IC: &[char] = &['i', 'c'];

/// Verb endings removed by step 2 when they lie in RV. Longest first,
/// with `Yamo` kept as listed in the reference table.
pub static VERB_SUFFIXES: Lazy<SuffixTable> = Lazy::new(|| {
    table(&[
        "irebbero", "erebbero", "issero", "iscono", "iscano", "iresti", "ireste", "iremmo",
        "irebbe", "iranno", "essero", "eresti", "ereste", "eremmo", "erebbe", "eranno", "assimo",
        "assero", "ivate", "ivano", "ivamo", "irono", "irete", "iremo", "evate", "evano", "evamo",
        "erono", "erete", "eremo", "avate", "avano", "avamo", "arono", "isco", "isci", "isce",
        "isca", "irò", "irà", "irei", "irai", "immo", "iamo", "erò", "erà", "erei", "erai", "endo",
        "endi", "ende", "enda", "emmo", "assi", "asse", "ando", "ammo", "Yamo", "uto", "uti", "ute",
        "uta", "ono", "ivo", "ivi", "iva", "ito", "iti", "ite", "ita", "ire", "evo", "evi", "eva",
        "ete", "ere", "avo", "avi", "ava", "ato", "ati", "ate", "ata", "are", "ano", "ir", "ar",
    ])
});

/// Final vowels removed by step 3a.
pub static FINAL_VOWELS: Lazy<SuffixTable> =
    Lazy::new(|| table(&["a", "e", "i", "o", "à", "è", "ì", "ò"]));

pub const FINAL_I: &[char] = &['i'];

/// A group of suffixes rewritten to one replacement inside a region.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub suffixes: SuffixTable,
    pub replacement: Vec<char>,
    pub region: Region,
}

impl ReplacementRule {
    fn new(suffixes: &[&str], replacement: &str, region: Region) -> Self {
        Self {
            suffixes: table(suffixes),
            replacement: chars(replacement),
            region,
        }
    }
}

/// Step 1 rewrite rules, tried in order.
pub static REPLACEMENT_RULES: Lazy<Vec<ReplacementRule>> = Lazy::new(|| {
    vec![
        ReplacementRule::new(&["logia", "logie"], "log", Region::R2),
        ReplacementRule::new(&["uzione", "uzioni", "usione", "usioni"], "u", Region::R2),
        ReplacementRule::new(&["enza", "enze"], "ente", Region::R2),
        ReplacementRule::new(&["amento", "amenti", "imento", "imenti"], "", Region::Rv),
    ]
});

/// Step 3b digraph rewrites.
pub static DIGRAPH_RULES: Lazy<Vec<ReplacementRule>> = Lazy::new(|| {
    vec![
        ReplacementRule::new(&["ch"], "c", Region::Rv),
        ReplacementRule::new(&["gh"], "g", Region::Rv),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(PRONOUN_SUFFIXES.len(), 37);
        assert_eq!(STEP1_SUFFIXES.len(), 29);
        assert_eq!(VERB_SUFFIXES.len(), 87);
        assert_eq!(REPLACEMENT_RULES.len(), 4);
    }

    #[test]
    fn test_entries_are_codepoints() {
        let ista: Vec<char> = "istà".chars().collect();
        assert!(STEP1_SUFFIXES.contains(&ista));
        assert!(STEP1_SUFFIXES.iter().all(|s| !s.is_empty()));
        assert!(VERB_SUFFIXES.iter().any(|s| s.len() == 3 && s[2] == 'ò'));
    }

    #[test]
    fn test_verb_table_is_longest_first_per_group() {
        // the 8-letter conditionals must be tried before anything they contain
        assert_eq!(VERB_SUFFIXES[0], chars("irebbero"));
        assert_eq!(VERB_SUFFIXES[VERB_SUFFIXES.len() - 1], chars("ar"));
    }
}
