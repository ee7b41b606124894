//! Non-fatal diagnostics for properties files.
//!
//! Transpiling never enforces any of these; they point at input that will
//! produce surprising or invalid generated code.

use std::{collections::HashMap, fmt::Display, path::Path};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::{
    error::Error, formats::properties::split_lines, traits::read_to_utf8, types::ResourceEntry,
};

lazy_static! {
    // Bare identifier usable as an object-literal key without quoting.
    static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
}

/// A single finding. Line numbers are 1-based source lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The key was already used by an earlier entry.
    DuplicateKey {
        key: String,
        first_line: usize,
        line: usize,
    },
    /// The key is not a bare identifier, so the generated member is not valid syntax.
    InvalidIdentifier { key: String, line: usize },
    /// The source line had no `=`; the whole line became both key and value.
    MissingDelimiter { key: String, line: usize },
    /// The value holds both quote characters, so the generated literal is broken.
    UnbalancedQuote { key: String, line: usize },
}

impl Diagnostic {
    pub fn key(&self) -> &str {
        match self {
            Diagnostic::DuplicateKey { key, .. }
            | Diagnostic::InvalidIdentifier { key, .. }
            | Diagnostic::MissingDelimiter { key, .. }
            | Diagnostic::UnbalancedQuote { key, .. } => key,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::DuplicateKey {
                key,
                first_line,
                line,
            } => write!(
                f,
                "line {}: duplicate key `{}` (first defined on line {})",
                line, key, first_line
            ),
            Diagnostic::InvalidIdentifier { key, line } => {
                write!(f, "line {}: key `{}` is not a valid identifier", line, key)
            }
            Diagnostic::MissingDelimiter { key, line } => {
                write!(f, "line {}: `{}` has no `=` separator", line, key)
            }
            Diagnostic::UnbalancedQuote { key, line } => write!(
                f,
                "line {}: value of `{}` mixes single and double quotes",
                line, key
            ),
        }
    }
}

/// Collects diagnostics for properties text, in line order.
pub fn inspect(content: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut entries = 0usize;

    for (index, line) in split_lines(content).enumerate() {
        let number = index + 1;
        let Some(entry) = ResourceEntry::from_line(line) else {
            continue;
        };
        entries += 1;

        let has_delimiter = line.contains('=');
        if !has_delimiter {
            diagnostics.push(Diagnostic::MissingDelimiter {
                key: entry.key.clone(),
                line: number,
            });
        }

        match seen.get(&entry.key) {
            Some(&first_line) => diagnostics.push(Diagnostic::DuplicateKey {
                key: entry.key.clone(),
                first_line,
                line: number,
            }),
            None => {
                seen.insert(entry.key.clone(), number);
            }
        }

        if has_delimiter && !IDENTIFIER_REGEX.is_match(&entry.key) {
            diagnostics.push(Diagnostic::InvalidIdentifier {
                key: entry.key.clone(),
                line: number,
            });
        }

        if entry.raw_value.contains('\'') && entry.raw_value.contains('"') {
            diagnostics.push(Diagnostic::UnbalancedQuote {
                key: entry.key,
                line: number,
            });
        }
    }

    tracing::debug!(
        entries,
        diagnostics = diagnostics.len(),
        "inspected properties"
    );
    diagnostics
}

/// Reads a properties file and collects its diagnostics.
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<Vec<Diagnostic>, Error> {
    let content = read_to_utf8(path)?;
    Ok(inspect(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostics_for(content: &str) -> Vec<Diagnostic> {
        inspect(content)
    }

    #[test]
    fn test_clean_file_has_no_diagnostics() {
        assert!(diagnostics_for("ok = Hello, world\nquoted = It's fine\n").is_empty());
    }

    #[test]
    fn test_duplicate_key() {
        let diagnostics = diagnostics_for("a=1\nb=2\n\na=3\n");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::DuplicateKey {
                key: "a".to_string(),
                first_line: 1,
                line: 4,
            }]
        );
    }

    #[test]
    fn test_invalid_identifier() {
        let diagnostics = diagnostics_for("menu.file = File\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].key(), "menu.file");
        assert!(matches!(
            diagnostics[0],
            Diagnostic::InvalidIdentifier { line: 1, .. }
        ));
    }

    #[test]
    fn test_missing_delimiter_is_reported_once() {
        let diagnostics = diagnostics_for("a=1\n# comment\n");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::MissingDelimiter {
                key: "# comment".to_string(),
                line: 2,
            }]
        );
    }

    #[test]
    fn test_unbalanced_quote() {
        let diagnostics = diagnostics_for("mixed = It's \"odd\"\n");
        assert!(matches!(
            diagnostics.as_slice(),
            [Diagnostic::UnbalancedQuote { line: 1, .. }]
        ));
    }

    #[test]
    fn test_carriage_return_lines_are_numbered() {
        let diagnostics = diagnostics_for("a=1\rb=2\ra=3\r");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::DuplicateKey {
                key: "a".to_string(),
                first_line: 1,
                line: 3,
            }]
        );
    }

    #[test]
    fn test_lookalike_key_and_value_is_not_missing_delimiter() {
        assert!(diagnostics_for("same = same\n").is_empty());
    }

    #[test]
    fn test_inspect_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Cres_en.properties");
        std::fs::write(&path, "\u{feff}a=1\na=2\n").unwrap();
        let diagnostics = inspect_file(&path).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].key(), "a");
        assert!(inspect_file(tmp.path().join("missing.properties")).is_err());
    }

    #[test]
    fn test_display_and_serialize() {
        let diagnostic = Diagnostic::InvalidIdentifier {
            key: "a-b".to_string(),
            line: 4,
        };
        assert_eq!(
            diagnostic.to_string(),
            "line 4: key `a-b` is not a valid identifier"
        );
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["kind"], "invalid_identifier");
        assert_eq!(json["line"], 4);
    }
}
