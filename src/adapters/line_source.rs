// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line source adapters for in-memory text and buffered readers.

use crate::domain::Result;
use crate::ports::LineSource;
use std::io::BufRead;

/// Serves the lines of a borrowed string.
///
/// # Examples
///
/// ```rust
/// use kvconf::adapters::StrLineSource;
/// use kvconf::ports::LineSource;
///
/// let mut source = StrLineSource::new("a = 1\r\nb = 2");
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("a = 1"));
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("b = 2"));
/// assert_eq!(source.next_line().unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct StrLineSource<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> StrLineSource<'a> {
    /// Creates a source over `content`.
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
        }
    }
}

impl LineSource for StrLineSource<'_> {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next().map(str::to_string))
    }
}

/// Serves the lines of any buffered reader.
///
/// Both `\n` and `\r\n` terminators are removed. Invalid UTF-8 surfaces as
/// [`ConfigError::IoError`](crate::domain::ConfigError::IoError).
///
/// # Examples
///
/// ```rust
/// use kvconf::adapters::ReaderLineSource;
/// use kvconf::ports::LineSource;
/// use std::io::Cursor;
///
/// let mut source = ReaderLineSource::new(Cursor::new("k = v\n"));
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("k = v"));
/// assert_eq!(source.next_line().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct ReaderLineSource<R> {
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> ReaderLineSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            self.exhausted = true;
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use std::io::Cursor;

    fn collect(mut source: impl LineSource) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_str_source_keeps_blank_lines() {
        let lines = collect(StrLineSource::new("a\n\n  \nb"));
        assert_eq!(lines, vec!["a", "", "  ", "b"]);
    }

    #[test]
    fn test_str_source_empty() {
        assert!(collect(StrLineSource::new("")).is_empty());
    }

    #[test]
    fn test_reader_source_strips_terminators() {
        let lines = collect(ReaderLineSource::new(Cursor::new("one\r\ntwo\nthree")));
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_reader_source_keeps_inner_carriage_return() {
        let lines = collect(ReaderLineSource::new(Cursor::new("a\rb\n")));
        assert_eq!(lines, vec!["a\rb"]);
    }

    #[test]
    fn test_reader_source_stays_exhausted() {
        let mut source = ReaderLineSource::new(Cursor::new("x\n"));
        assert!(source.next_line().unwrap().is_some());
        assert!(source.next_line().unwrap().is_none());
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn test_reader_source_invalid_utf8() {
        let mut source = ReaderLineSource::new(Cursor::new(vec![0x6b, 0x3d, 0xff, 0x0a]));
        let err = source.next_line().unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
