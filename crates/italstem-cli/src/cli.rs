//! Command line parsing.

use std::path::PathBuf;

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stem the given words, or stdin when empty.
    Stem { lowercase: bool, words: Vec<String> },
    /// Compare stems against an expected-output file.
    Check {
        lowercase: bool,
        json: bool,
        words: PathBuf,
        stems: PathBuf,
    },
    Help,
}

pub const USAGE: &str = "\
italstem — Italian stemmer

Usage: italstem <command> [options]

Commands:
  stem [--lowercase] [WORD ...]              Stem words (reads stdin when none given)
  check [--lowercase] [--json] WORDS STEMS   Compare stems with a line-aligned expected file
  help                                       Show this help message

Environment:
  ITALSTEM_LOWERCASE   lowercase words before stemming (1/0, true/false)
  RUST_LOG             log filter (default: info)";

/// Parse arguments (without the program name).
pub fn parse(args: &[String]) -> Result<Command, String> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "stem" => {
            let mut lowercase = false;
            let mut words = Vec::new();
            for arg in rest {
                match arg.as_str() {
                    "--lowercase" | "-l" => lowercase = true,
                    flag if flag.starts_with('-') => {
                        return Err(format!("Unknown option for stem: {flag}"))
                    }
                    word => words.push(word.to_string()),
                }
            }
            Ok(Command::Stem { lowercase, words })
        }
        "check" => {
            let mut lowercase = false;
            let mut json = false;
            let mut paths = Vec::new();
            for arg in rest {
                match arg.as_str() {
                    "--lowercase" | "-l" => lowercase = true,
                    "--json" => json = true,
                    flag if flag.starts_with('-') => {
                        return Err(format!("Unknown option for check: {flag}"))
                    }
                    path => paths.push(PathBuf::from(path)),
                }
            }
            match <[PathBuf; 2]>::try_from(paths) {
                Ok([words, stems]) => Ok(Command::Check {
                    lowercase,
                    json,
                    words,
                    stems,
                }),
                Err(_) => Err("Usage: italstem check [--lowercase] [--json] <WORDS> <STEMS>".into()),
            }
        }
        "--help" | "-h" | "help" => Ok(Command::Help),
        other => Err(format!(
            "Unknown command: {other}. Use 'italstem help' for usage."
        )),
    }
}
