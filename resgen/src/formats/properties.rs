//! Support for Java-style `key=value` properties files.
//!
//! Only the line-oriented subset is understood: no comments, no continuation
//! lines, no `\uXXXX` escapes. Every non-blank line becomes one entry.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use crate::{
    error::Error,
    options::ParseOptions,
    traits::{Parser, Writer, read_to_utf8},
    types::ResourceEntry,
};

/// A parsed properties file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    /// Locale of the file, when known (properties files carry no such metadata).
    pub language: Option<String>,
    /// Entries in file order.
    pub entries: Vec<ResourceEntry>,
}

impl Format {
    pub fn new(entries: Vec<ResourceEntry>) -> Self {
        Format {
            language: None,
            entries,
        }
    }

    /// Parses with explicit options.
    ///
    /// In strict mode a non-blank line without `=` fails with
    /// [`Error::MalformedLine`] carrying its 1-based line number.
    pub fn parse_with<R: BufRead>(mut reader: R, options: &ParseOptions) -> Result<Self, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut entries = Vec::new();
        for (index, line) in split_lines(&content).enumerate() {
            if options.strict && !line.trim().is_empty() && !line.contains('=') {
                return Err(Error::MalformedLine {
                    line: index + 1,
                    content: line.to_string(),
                });
            }
            if let Some(entry) = ResourceEntry::from_line(line) {
                entries.push(entry);
            }
        }

        tracing::trace!(entries = entries.len(), "parsed properties");
        Ok(Format::new(entries))
    }

    /// Parses a string with explicit options.
    pub fn parse_str_with(content: &str, options: &ParseOptions) -> Result<Self, Error> {
        Self::parse_with(std::io::Cursor::new(content), options)
    }

    /// Reads a file with explicit options; see [`Parser::read_from`] for decoding.
    pub fn read_from_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self, Error> {
        let decoded = read_to_utf8(path)?;
        Self::parse_str_with(&decoded, options)
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_entry(&self, key: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// Splits `content` into lines ending in `\n`, `\r` or `\r\n`.
///
/// A final terminator does not open an extra empty line.
pub fn split_lines(content: &str) -> Lines<'_> {
    Lines { rest: content }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match self.rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &self.rest[..end];
                let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + terminator..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };
        Some(line)
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Self::parse_with(reader, &ParseOptions::default())
    }
}

impl Writer for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        for entry in &self.entries {
            writeln!(writer, "{}", entry)?;
        }
        Ok(())
    }
}
