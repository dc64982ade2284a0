//! italstem — command line Italian stemmer.

use std::io::{self, BufRead, BufWriter, Write};

use italstem_core::StemmerConfig;
use italstem_stem::{check_files, ItalianStemmer};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Command;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries stems and reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match cli::parse(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    let config = StemmerConfig::from_env()?;

    match command {
        Command::Help => {
            println!("{}", cli::USAGE);
        }
        Command::Stem { lowercase, words } => {
            let config = config.with_lowercase(config.lowercase_first || lowercase);
            run_stem(&ItalianStemmer::from_config(config), &words)?;
        }
        Command::Check {
            lowercase,
            json,
            words,
            stems,
        } => {
            let config = config.with_lowercase(config.lowercase_first || lowercase);
            let report = check_files(&words, &stems, config.lowercase_first)?;

            if json {
                println!("{}", report.to_json()?);
            } else {
                for m in &report.mismatches {
                    println!(
                        "line {}: {:?} stems to {:?}, expected {:?}",
                        m.line, m.word, m.actual, m.expected
                    );
                }
                println!(
                    "{} compared, {} mismatches",
                    report.compared,
                    report.mismatches.len()
                );
            }
            std::process::exit(if report.is_clean() { 0 } else { 1 });
        }
    }

    Ok(())
}

/// Stem the given words, or every line of stdin when none are given.
fn run_stem(stemmer: &ItalianStemmer, words: &[String]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if words.is_empty() {
        debug!("Reading words from stdin");
        let mut count = 0usize;
        for line in io::stdin().lock().lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            writeln!(out, "{}\t{}", word, stemmer.stem(word))?;
            count += 1;
        }
        info!("Stemmed {} words from stdin", count);
    } else {
        for word in words {
            writeln!(out, "{}\t{}", word, stemmer.stem(word))?;
        }
    }

    out.flush()?;
    Ok(())
}
