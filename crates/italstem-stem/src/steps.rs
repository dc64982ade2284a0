//! The suffix-removal steps.
//!
//! Each step reads its input word, recomputes the regions it needs from that
//! input, and returns the resulting word. Nothing before the gating region
//! is ever touched.

use crate::region::{find_rv, Regions};
use crate::runes::{has_suffix, suffix_start};
use crate::suffixes::{
    ReplacementRule, AMENTE, AMENTE_PRECEDING, AT, AZIONE_SUFFIXES, DIGRAPH_RULES, FINAL_I,
    FINAL_VOWELS, GERUND_ENDINGS, IC, INFINITIVE_ENDINGS, ITA, ITA_PRECEDING, IV, IVE_SUFFIXES,
    PRONOUN_SUFFIXES, REPLACEMENT_RULES, STEP1_SUFFIXES, VERB_SUFFIXES,
};

/// Start of `suffix` in `word` if the word ends with it at or after `region`.
fn suffix_in_region(word: &[char], suffix: &[char], region: usize) -> Option<usize> {
    suffix_start(word, suffix).filter(|&p| p >= region)
}

/// Replace the first of `suffixes` found at or after `region`.
fn replace_in_region(
    word: &[char],
    suffixes: &[Vec<char>],
    replacement: &[char],
    region: usize,
) -> Option<Vec<char>> {
    suffixes.iter().find_map(|suffix| {
        suffix_in_region(word, suffix, region).map(|p| {
            let mut out = word[..p].to_vec();
            out.extend_from_slice(replacement);
            out
        })
    })
}

fn apply_rule(word: &[char], rule: &ReplacementRule, regions: &Regions) -> Option<Vec<char>> {
    replace_in_region(
        word,
        &rule.suffixes,
        &rule.replacement,
        regions.get(rule.region),
    )
}

/// Step 0: attached pronouns.
///
/// A pronoun goes when it follows a gerund (`ando`, `endo`) or an infinitive
/// stem (`ar`, `er`, `ir`, which gets its `e` back) and the whole ending
/// lies in RV.
pub fn step0(word: &[char]) -> Vec<char> {
    let rv = find_rv(word);

    for pronoun in PRONOUN_SUFFIXES.iter() {
        for gerund in GERUND_ENDINGS.iter() {
            let ending = [gerund.as_slice(), pronoun.as_slice()].concat();
            if let Some(p) = suffix_in_region(word, &ending, rv) {
                return word[..p + gerund.len()].to_vec();
            }
        }

        for infinitive in INFINITIVE_ENDINGS.iter() {
            let ending = [infinitive.as_slice(), pronoun.as_slice()].concat();
            if let Some(p) = suffix_in_region(word, &ending, rv) {
                let mut stem = word[..p + infinitive.len()].to_vec();
                stem.push('e');
                return stem;
            }
        }
    }

    word.to_vec()
}

/// Step 1: standard (derivational) suffix removal.
pub fn step1(word: &[char]) -> Vec<char> {
    let regions = Regions::of(word);
    let r2 = regions.r2;
    let mut word = word.to_vec();

    if let Some(p) = suffix_start(&word, AMENTE) {
        if p >= regions.r1 {
            word.truncate(p);
            if has_suffix(&word, IV) {
                if let Some(p) = suffix_in_region(&word, IV, r2) {
                    word.truncate(p);
                    if let Some(p) = suffix_in_region(&word, AT, r2) {
                        word.truncate(p);
                    }
                }
            } else if let Some(stripped) = replace_in_region(&word, &AMENTE_PRECEDING, &[], r2) {
                word = stripped;
            }
        }
        return word;
    }

    // Only the first suffix the word ends with is considered here.
    if let Some(p) = STEP1_SUFFIXES.iter().find_map(|s| suffix_start(&word, s)) {
        if p >= r2 {
            word.truncate(p);
            return word;
        }
    }

    for suffix in AZIONE_SUFFIXES.iter() {
        if let Some(p) = suffix_in_region(&word, suffix, r2) {
            word.truncate(p);
            if let Some(p) = suffix_in_region(&word, IC, r2) {
                word.truncate(p);
            }
            return word;
        }
    }

    for rule in REPLACEMENT_RULES.iter() {
        if let Some(replaced) = apply_rule(&word, rule, &regions) {
            return replaced;
        }
    }

    if let Some(p) = suffix_start(&word, ITA) {
        if p >= r2 {
            word.truncate(p);
        }
        if let Some(stripped) = replace_in_region(&word, &ITA_PRECEDING, &[], r2) {
            word = stripped;
        }
        return word;
    }

    // No early return: every entry is tried against the shrinking word.
    for suffix in IVE_SUFFIXES.iter() {
        if let Some(p) = suffix_in_region(&word, suffix, r2) {
            word.truncate(p);
            if let Some(p) = suffix_in_region(&word, AT, r2) {
                word.truncate(p);
                if let Some(p) = suffix_in_region(&word, IC, r2) {
                    word.truncate(p);
                }
            }
        }
    }

    word
}

/// Step 2: verb suffixes lying entirely in RV.
pub fn step2(word: &[char]) -> Vec<char> {
    let rv = find_rv(word);
    let in_rv = &word[rv..];

    match VERB_SUFFIXES.iter().find(|s| has_suffix(in_rv, s)) {
        Some(suffix) => word[..word.len() - suffix.len()].to_vec(),
        None => word.to_vec(),
    }
}

/// Step 3a: a final vowel in RV, then a preceding `i` in RV.
pub fn step3a(word: &[char]) -> Vec<char> {
    let rv = find_rv(word);
    let mut word = word.to_vec();

    for vowel in FINAL_VOWELS.iter() {
        let Some(p) = suffix_in_region(&word, vowel, rv) else {
            continue;
        };
        word.truncate(p);

        match suffix_start(&word, FINAL_I) {
            Some(p) if p >= rv => {
                word.truncate(p);
                return word;
            }
            Some(_) => {}
            None => return word,
        }
    }

    word
}

/// Step 3b: `ch` → `c` and `gh` → `g` in RV.
pub fn step3b(word: &[char]) -> Vec<char> {
    let rv = find_rv(word);

    DIGRAPH_RULES
        .iter()
        .find_map(|rule| replace_in_region(word, &rule.suffixes, &rule.replacement, rv))
        .unwrap_or_else(|| word.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runes::chars;

    fn run(step: fn(&[char]) -> Vec<char>, word: &str) -> String {
        step(&chars(word)).into_iter().collect()
    }

    #[test]
    fn test_step0_gerund_keeps_ending() {
        assert_eq!(run(step0, "mangiandolo"), "mangiando");
        assert_eq!(run(step0, "prendendone"), "prendendo");
    }

    #[test]
    fn test_step0_infinitive_gets_e_back() {
        assert_eq!(run(step0, "propagarla"), "propagare");
        assert_eq!(run(step0, "vedergli"), "vedere");
    }

    #[test]
    fn test_step0_requires_rv() {
        // "arla" would start at 0, before RV
        assert_eq!(run(step0, "arla"), "arla");
        assert_eq!(run(step0, "abbandonata"), "abbandonata");
    }

    #[test]
    fn test_step1_amente() {
        assert_eq!(run(step1, "rapidamente"), "rapid");
        // "iv" lies before R2 and stays
        assert_eq!(run(step1, "attivamente"), "attiv");
    }

    #[test]
    fn test_step1_flat_list() {
        assert_eq!(run(step1, "ottimismo"), "ottim");
        // "mente" matches but lies before R2
        assert_eq!(run(step1, "mente"), "mente");
    }

    #[test]
    fn test_step1_azione() {
        assert_eq!(run(step1, "organizzazione"), "organizz");
    }

    #[test]
    fn test_step1_replacement_rules() {
        assert_eq!(run(step1, "metodologia"), "metodolog");
        assert_eq!(run(step1, "rivoluzione"), "rivolu");
        assert_eq!(run(step1, "differenza"), "differente");
        assert_eq!(run(step1, "abbassamento"), "abbass");
    }

    #[test]
    fn test_step1_ita() {
        assert_eq!(run(step1, "attività"), "attiv");
    }

    #[test]
    fn test_step1_amente_preceding() {
        assert_eq!(run(step1, "generosamente"), "gener");
        assert_eq!(run(step1, "criticamente"), "critic");
    }

    #[test]
    fn test_step1_azione_after_ic() {
        assert_eq!(run(step1, "comunicazione"), "comun");
    }

    #[test]
    fn test_step1_ita_preceding() {
        assert_eq!(run(step1, "elettricità"), "elettr");
        // "abil" lies before R2 and stays
        assert_eq!(run(step1, "amabilità"), "amabil");
    }

    #[test]
    fn test_step1_ive_cascade() {
        assert_eq!(run(step1, "significativa"), "signif");
        assert_eq!(run(step1, "indicativo"), "indic");
        assert_eq!(run(step1, "produttivo"), "produtt");
    }

    #[test]
    fn test_step1_leaves_verbs_alone() {
        assert_eq!(run(step1, "abbandonata"), "abbandonata");
        assert_eq!(run(step1, "mangiando"), "mangiando");
    }

    #[test]
    fn test_step2() {
        assert_eq!(run(step2, "abbandonata"), "abbandon");
        assert_eq!(run(step2, "abbandoneranno"), "abbandon");
        assert_eq!(run(step2, "propagare"), "propag");
        assert_eq!(run(step2, "mangiando"), "mangi");
    }

    #[test]
    fn test_step2_short_words() {
        assert_eq!(run(step2, "ar"), "ar");
        assert_eq!(run(step2, "ba"), "ba");
        assert_eq!(run(step2, ""), "");
    }

    #[test]
    fn test_step3a() {
        assert_eq!(run(step3a, "propizio"), "propiz");
        assert_eq!(run(step3a, "banche"), "banch");
        assert_eq!(run(step3a, "mangi"), "mang");
        assert_eq!(run(step3a, "abband"), "abband");
    }

    #[test]
    fn test_step3a_keeps_i_before_rv() {
        // the `i` left behind sits just before RV, so the scan goes on and stops
        assert_eq!(run(step3a, "occhio"), "occhi");
        assert_eq!(run(step3a, "chio"), "chi");
    }

    #[test]
    fn test_step3b() {
        assert_eq!(run(step3b, "banch"), "banc");
        assert_eq!(run(step3b, "alberghi"), "alberghi");
        // "gh" starts before RV
        assert_eq!(run(step3b, "lagh"), "lagh");
    }
}
