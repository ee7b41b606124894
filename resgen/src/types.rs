//! Core types for resgen.
//! Parsers decode into these; writers serialize these.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single `key=value` pair read from one line of a properties file.
///
/// Keys carry no identity beyond themselves; uniqueness is never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceEntry {
    pub key: String,

    /// Value exactly as it appeared after the `=`, minus one leading space.
    #[serde(rename = "value")]
    pub raw_value: String,
}

impl ResourceEntry {
    pub fn new(key: impl Into<String>, raw_value: impl Into<String>) -> Self {
        ResourceEntry {
            key: key.into(),
            raw_value: raw_value.into(),
        }
    }

    /// Parses one input line.
    ///
    /// Returns `None` for blank or whitespace-only lines. The key is everything
    /// before the first `=`, trimmed; the value is everything after it with a
    /// single leading space removed. A line without `=` uses the whole line on
    /// both sides.
    ///
    /// ```rust
    /// use resgen::ResourceEntry;
    /// let entry = ResourceEntry::from_line("ok = Hello, world").unwrap();
    /// assert_eq!(entry.key, "ok");
    /// assert_eq!(entry.raw_value, "Hello, world");
    /// assert!(ResourceEntry::from_line("   ").is_none());
    /// ```
    pub fn from_line(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        let (key, value) = line.split_once('=').unwrap_or((line, line));
        let value = value.strip_prefix(' ').unwrap_or(value);

        Some(ResourceEntry::new(key.trim(), value))
    }

    pub fn quote(&self) -> Quote {
        Quote::for_value(&self.raw_value)
    }

    /// The value wrapped in its quote character, verbatim inside.
    pub fn quoted_value(&self) -> String {
        let quote = self.quote();
        format!("{quote}{}{quote}", self.raw_value)
    }

    /// One object-literal member line: `  <key>: <quoted-value>,`
    pub fn member_line(&self) -> String {
        format!("  {}: {},", self.key, self.quoted_value())
    }
}

/// Quote character used around a generated string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    /// Double quotes when the value holds a single quote, single quotes otherwise.
    pub fn for_value(value: &str) -> Self {
        if value.contains('\'') {
            Quote::Double
        } else {
            Quote::Single
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Display for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.raw_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_splits_on_first_equals() {
        let entry = ResourceEntry::from_line("expr = a=b").unwrap();
        assert_eq!(entry.key, "expr");
        assert_eq!(entry.raw_value, "a=b");
    }

    #[test]
    fn test_from_line_strips_only_one_leading_space() {
        let entry = ResourceEntry::from_line("padded =   three").unwrap();
        assert_eq!(entry.raw_value, "  three");

        let entry = ResourceEntry::from_line("tight=value ").unwrap();
        assert_eq!(entry.key, "tight");
        assert_eq!(entry.raw_value, "value ");
    }

    #[test]
    fn test_from_line_empty_value() {
        let entry = ResourceEntry::from_line("empty=").unwrap();
        assert_eq!(entry.key, "empty");
        assert_eq!(entry.raw_value, "");
    }

    #[test]
    fn test_from_line_skips_blank_lines() {
        assert!(ResourceEntry::from_line("").is_none());
        assert!(ResourceEntry::from_line(" \t ").is_none());
    }

    #[test]
    fn test_from_line_without_delimiter_uses_whole_line() {
        let entry = ResourceEntry::from_line(" orphan").unwrap();
        assert_eq!(entry.key, "orphan");
        assert_eq!(entry.raw_value, "orphan");
    }

    #[test]
    fn test_quote_selection() {
        assert_eq!(Quote::for_value("Hello"), Quote::Single);
        assert_eq!(Quote::for_value("It's"), Quote::Double);
        assert_eq!(Quote::for_value("say \"hi\""), Quote::Single);
    }

    #[test]
    fn test_member_line_single_quoted() {
        let entry = ResourceEntry::from_line("ok = Hello, world").unwrap();
        assert_eq!(entry.member_line(), "  ok: 'Hello, world',");
    }

    #[test]
    fn test_member_line_double_quoted() {
        let entry = ResourceEntry::from_line("quoted = It's fine").unwrap();
        assert_eq!(entry.member_line(), "  quoted: \"It's fine\",");
    }

    #[test]
    fn test_member_line_keeps_backslashes_verbatim() {
        let entry = ResourceEntry::new("path", r"C:\temp");
        assert_eq!(entry.member_line(), r"  path: 'C:\temp',");
    }

    #[test]
    fn test_serialize_uses_value_field() {
        let entry = ResourceEntry::new("a", "b");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"key":"a","value":"b"}"#);
    }
}
