//! Line-aligned vocabulary checks.
//!
//! A vocabulary file holds one word per line; a second file holds the
//! expected stem of each word on the same line. Lines are paired
//! positionally and the check stops at the end of the shorter file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::stemmer::stem_str;
use italstem_core::{Error, Result};

/// A word whose stem differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    pub word: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of a vocabulary check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyReport {
    /// Number of line pairs compared.
    pub compared: usize,
    pub words_lines: usize,
    pub stems_lines: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VocabularyReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Check every word against its expected stem.
pub fn check_lines<'a, W, S>(words: W, stems: S, lowercase_first: bool) -> VocabularyReport
where
    W: IntoIterator<Item = &'a str>,
    S: IntoIterator<Item = &'a str>,
{
    let words: Vec<&str> = words.into_iter().map(trim_line_end).collect();
    let stems: Vec<&str> = stems.into_iter().map(trim_line_end).collect();

    if words.len() != stems.len() {
        warn!(
            words = words.len(),
            stems = stems.len(),
            "Vocabulary files differ in length, comparing the common prefix"
        );
    }

    let mismatches: Vec<Mismatch> = words
        .iter()
        .zip(stems.iter())
        .enumerate()
        .filter_map(|(i, (&word, &expected))| {
            let actual = stem_str(word, lowercase_first);
            (actual != expected).then(|| {
                debug!(line = i + 1, word, expected, %actual, "Stem mismatch");
                Mismatch {
                    line: i + 1,
                    word: word.to_string(),
                    expected: expected.to_string(),
                    actual,
                }
            })
        })
        .collect();

    VocabularyReport {
        compared: words.len().min(stems.len()),
        words_lines: words.len(),
        stems_lines: stems.len(),
        mismatches,
    }
}

/// Read both files and check them line by line.
pub fn check_files(
    words_path: &Path,
    stems_path: &Path,
    lowercase_first: bool,
) -> Result<VocabularyReport> {
    let words = read_lines(words_path)?;
    let stems = read_lines(stems_path)?;

    let report = check_lines(words.lines(), stems.lines(), lowercase_first);
    info!(
        words = %words_path.display(),
        stems = %stems_path.display(),
        compared = report.compared,
        mismatches = report.mismatches.len(),
        "Vocabulary check finished"
    );
    Ok(report)
}

fn read_lines(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::Vocabulary(format!("cannot read {}: {}", path.display(), e)))
}

fn trim_line_end(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
