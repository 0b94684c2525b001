// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parser for `key = value` files.
//!
//! The grammar is line oriented:
//!
//! ```text
//! key1 = value1
//! # full-line comment
//! key2 = value line one
//!    continuation line two
//! key3 = value \# with escaped marker
//! ```
//!
//! A line holding the delimiter starts an entry. Following lines without a
//! delimiter are folded into its value, one per line; blank lines in between
//! are absorbed. Anything from an unescaped comment marker to the end of the
//! line is dropped. On the line that starts an entry, `\#` keeps the marker
//! and the backslash is removed; on continuation lines the backslash stays.

use crate::adapters::line_source::StrLineSource;
use crate::domain::{ConfigKey, ConfigValue, Result, Syntax};
use crate::ports::{ConfigParser, Entries, LineSource};
use std::borrow::Cow;
use std::fmt;

/// Characters removed from both ends of keys, values and continuation lines.
const WHITESPACE: &[char] = &[' ', '\n', '\t', '\u{0b}', '\r', '\u{0c}'];

/// Removes leading and trailing whitespace (space, `\n`, `\t`, `\v`, `\r`, `\f`).
///
/// Unlike [`str::trim`], other Unicode whitespace is left alone.
///
/// ```
/// use kvconf::adapters::key_value::trim;
///
/// assert_eq!(trim("\t value \x0b"), "value");
/// assert_eq!(trim("\u{a0}x"), "\u{a0}x");
/// ```
pub fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

/// Cuts `line` at the first comment marker not preceded by a backslash.
///
/// `markers` is a set of characters. With `unescape` set, and only if an
/// escaped marker was skipped, every backslash left in the kept text is
/// removed.
///
/// ```
/// use kvconf::adapters::key_value::strip_comment;
///
/// assert_eq!(strip_comment("a = b # note", "#", true), "a = b ");
/// assert_eq!(strip_comment(r"a = b \# c", "#", true), "a = b # c");
/// assert_eq!(strip_comment(r"a = b \# c", "#", false), r"a = b \# c");
/// ```
pub fn strip_comment<'a>(line: &'a str, markers: &str, unescape: bool) -> Cow<'a, str> {
    let bytes = line.as_bytes();
    let mut skipped_escape = false;
    let mut cut = line.len();

    for (pos, ch) in line.char_indices() {
        if !markers.contains(ch) {
            continue;
        }
        if pos > 0 && bytes[pos - 1] == b'\\' {
            skipped_escape = true;
            continue;
        }
        cut = pos;
        break;
    }

    let kept = &line[..cut];
    if unescape && skipped_escape {
        Cow::Owned(kept.replace('\\', ""))
    } else {
        Cow::Borrowed(kept)
    }
}

/// Splits a comment-stripped line at the first delimiter.
///
/// Returns the trimmed key and the raw remainder, or `None` when the line has
/// no delimiter or an empty key.
fn split_entry<'a>(line: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let pos = line.find(delimiter)?;
    let key = trim(&line[..pos]);
    if key.is_empty() {
        return None;
    }
    Some((key, &line[pos + delimiter.len()..]))
}

/// The `key = value` grammar engine.
///
/// # Examples
///
/// ```rust
/// use kvconf::adapters::KeyValueParser;
///
/// let parser = KeyValueParser::new();
/// let entries = parser.parse_str("name = demo\nmotd = hello\n  world").unwrap();
///
/// assert_eq!(entries[0].0.as_str(), "name");
/// assert_eq!(entries[1].1.as_str(), "hello\nworld");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyValueParser {
    syntax: Syntax,
}

impl KeyValueParser {
    /// Creates a parser for the default syntax (`=` and `#`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser for the given syntax.
    pub fn with_syntax(syntax: Syntax) -> Self {
        Self { syntax }
    }

    /// Returns the syntax this parser reads and writes.
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Parses an in-memory string.
    pub fn parse_str(&self, content: &str) -> Result<Entries> {
        self.parse_lines(&mut StrLineSource::new(content))
    }

    /// Writes each entry through [`ConfigParser::format_entry`], one per line.
    pub fn write_entries<'a, W, I>(&self, out: &mut W, entries: I) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
        I: IntoIterator<Item = (&'a ConfigKey, &'a ConfigValue)>,
    {
        for (key, value) in entries {
            writeln!(out, "{}", self.format_entry(key, value))?;
        }
        Ok(())
    }

    /// Reads continuation lines for the entry that was just started.
    ///
    /// Returns the folded value and, if scanning stopped at a line holding
    /// the delimiter, that line so it can be processed as a new entry.
    fn fold_continuation(
        &self,
        first: &str,
        source: &mut dyn LineSource,
    ) -> Result<(String, Option<String>)> {
        let mut value = trim(first).to_string();

        while let Some(next) = source.next_line()? {
            if trim(&next).is_empty() {
                continue;
            }

            let stripped = strip_comment(&next, &self.syntax.comment, false);
            if stripped.contains(self.syntax.delimiter.as_str()) {
                return Ok((value, Some(next)));
            }

            let body = trim(&stripped);
            if !body.is_empty() {
                value.push('\n');
                value.push_str(body);
            }
        }

        Ok((value, None))
    }
}

impl ConfigParser for KeyValueParser {
    fn parse_lines(&self, source: &mut dyn LineSource) -> Result<Entries> {
        let mut entries = Vec::new();
        let mut held: Option<String> = None;

        loop {
            let raw = match held.take() {
                Some(line) => line,
                None => match source.next_line()? {
                    Some(line) => line,
                    None => break,
                },
            };

            let line = strip_comment(&raw, &self.syntax.comment, true);
            let Some((key, first)) = split_entry(&line, &self.syntax.delimiter) else {
                tracing::trace!("Skipping line without an entry: {:?}", raw);
                continue;
            };

            let (value, next) = self.fold_continuation(first, source)?;
            held = next;
            entries.push((ConfigKey::from(key), ConfigValue::from(trim(&value))));
        }

        tracing::debug!("Parsed {} configuration entries", entries.len());
        Ok(entries)
    }

    fn format_entry(&self, key: &ConfigKey, value: &ConfigValue) -> String {
        format!("{} {} {}", key, self.syntax.delimiter, value)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["conf", "cfg", "properties"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<(String, String)> {
        parse_with(Syntax::default(), content)
    }

    fn parse_with(syntax: Syntax, content: &str) -> Vec<(String, String)> {
        KeyValueParser::with_syntax(syntax)
            .parse_str(content)
            .unwrap()
            .into_iter()
            .map(|(k, v)| (k.into_string(), v.into()))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_trim_only_ascii_set() {
        assert_eq!(trim(" \t\r\n\x0b\x0cabc\x0c\x0b\n\r\t "), "abc");
        assert_eq!(trim(""), "");
        assert_eq!(trim("  "), "");
    }

    #[test]
    fn test_strip_comment_no_marker() {
        assert!(matches!(
            strip_comment("plain = text", "#", true),
            Cow::Borrowed("plain = text")
        ));
    }

    #[test]
    fn test_strip_comment_cuts_at_first_unescaped() {
        assert_eq!(strip_comment(r"a \# b # c # d", "#", false), r"a \# b ");
        assert_eq!(strip_comment(r"a \# b # c # d", "#", true), "a # b ");
    }

    #[test]
    fn test_strip_comment_marker_set() {
        assert_eq!(strip_comment("a = 1 ; note", ";#", true), "a = 1 ");
        assert_eq!(strip_comment("a = 1 # note ; more", ";#", true), "a = 1 ");
    }

    #[test]
    fn test_strip_comment_unescape_removes_all_backslashes() {
        assert_eq!(strip_comment(r"p = C:\dir \# x", "#", true), "p = C:dir # x");
    }

    #[test]
    fn test_strip_comment_backslashes_kept_without_escape() {
        assert_eq!(strip_comment(r"p = C:\dir # x", "#", true), r"p = C:\dir ");
    }

    #[test]
    fn test_strip_comment_leading_marker() {
        assert_eq!(strip_comment("# whole line", "#", true), "");
    }

    #[test]
    fn test_strip_comment_empty_marker_set() {
        assert_eq!(strip_comment("a = b # c", "", true), "a = b # c");
    }

    #[test]
    fn test_strip_comment_multibyte() {
        assert_eq!(strip_comment("名前 = 値 # メモ", "#", true), "名前 = 値 ");
    }

    #[test]
    fn test_simple_entries() {
        assert_eq!(
            parse("a = 1\nb=2\n  c   =   three words  "),
            pairs(&[("a", "1"), ("b", "2"), ("c", "three words")])
        );
    }

    #[test]
    fn test_duplicate_keys_in_source_order() {
        assert_eq!(
            parse("a = 1\nb = 2\na = 3"),
            pairs(&[("a", "1"), ("b", "2"), ("a", "3")])
        );
    }

    #[test]
    fn test_continuation_lines_joined() {
        assert_eq!(
            parse("k = line1\n  line2\n  line3"),
            pairs(&[("k", "line1\nline2\nline3")])
        );
    }

    #[test]
    fn test_first_line_trimmed_before_continuation() {
        assert_eq!(
            parse("k = line1   # note\n  line2"),
            pairs(&[("k", "line1\nline2")])
        );
        assert_eq!(
            parse("k =   line1 \t\n  line2  \n"),
            pairs(&[("k", "line1\nline2")])
        );
    }

    #[test]
    fn test_write_entries() {
        let parser = KeyValueParser::with_syntax(Syntax::new(":", ";"));
        let (a, one) = (ConfigKey::from("a"), ConfigValue::from("1"));
        let (b, two) = (ConfigKey::from("b"), ConfigValue::from("two words"));

        let mut out = String::new();
        parser
            .write_entries(&mut out, vec![(&a, &one), (&b, &two)])
            .unwrap();
        assert_eq!(out, "a : 1\nb : two words\n");
    }

    #[test]
    fn test_continuation_stops_at_delimiter_line() {
        assert_eq!(parse("k = v1\nm = v2"), pairs(&[("k", "v1"), ("m", "v2")]));
    }

    #[test]
    fn test_blank_lines_absorbed_by_continuation() {
        assert_eq!(
            parse("k = first\n\n   \n  second\n\nnext = 1"),
            pairs(&[("k", "first\nsecond"), ("next", "1")])
        );
    }

    #[test]
    fn test_comment_lines_inside_continuation() {
        assert_eq!(
            parse("k = first\n# note\n  second # tail"),
            pairs(&[("k", "first\nsecond")])
        );
    }

    #[test]
    fn test_trailing_comment_stripped() {
        assert_eq!(parse("k = v # trailing comment"), pairs(&[("k", "v")]));
    }

    #[test]
    fn test_escaped_marker_on_key_line() {
        assert_eq!(parse(r"k = v \# escaped"), pairs(&[("k", "v # escaped")]));
    }

    #[test]
    fn test_escaped_marker_kept_raw_on_continuation() {
        assert_eq!(
            parse("k = a \\# b\n  c \\# d # gone"),
            pairs(&[("k", "a # b\nc \\# d")])
        );
    }

    #[test]
    fn test_commented_delimiter_does_not_stop_continuation() {
        assert_eq!(
            parse("k = a\n  b # x = y"),
            pairs(&[("k", "a\nb")])
        );
    }

    #[test]
    fn test_held_line_processed_with_unescape() {
        assert_eq!(
            parse("k = a\nm = b \\# c"),
            pairs(&[("k", "a"), ("m", "b # c")])
        );
    }

    #[test]
    fn test_lines_without_delimiter_skipped() {
        assert_eq!(
            parse("orphan text\n\n# comment\nk = v"),
            pairs(&[("k", "v")])
        );
    }

    #[test]
    fn test_empty_key_not_matched() {
        assert_eq!(parse("= value\n  = other\nk = v"), pairs(&[("k", "v")]));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(parse("k =\nm = "), pairs(&[("k", ""), ("m", "")]));
    }

    #[test]
    fn test_empty_first_line_value_with_continuation() {
        assert_eq!(parse("k =\n  body"), pairs(&[("k", "body")]));
        assert_eq!(parse("k =   # note\n  body"), pairs(&[("k", "body")]));
    }

    #[test]
    fn test_value_keeps_later_delimiters() {
        assert_eq!(parse("url = a=b=c"), pairs(&[("url", "a=b=c")]));
    }

    #[test]
    fn test_custom_syntax() {
        let syntax = Syntax::new(":", ";");
        assert_eq!(
            parse_with(syntax, "host: example.org ; primary\nnote: a = b\n  more"),
            pairs(&[("host", "example.org"), ("note", "a = b\nmore")])
        );
    }

    #[test]
    fn test_multichar_delimiter() {
        let syntax = Syntax::new(":=", "#");
        assert_eq!(
            parse_with(syntax, "a := 1\nb = 2\nc := 3"),
            pairs(&[("a", "1\nb = 2"), ("c", "3")])
        );
    }

    #[test]
    fn test_empty_delimiter_yields_nothing() {
        let syntax = Syntax::new("", "#");
        assert!(parse_with(syntax, "a = 1\nb = 2").is_empty());
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            parse("a = 1\r\n  more\r\nb = 2\r\n"),
            pairs(&[("a", "1\nmore"), ("b", "2")])
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n# only comments\n").is_empty());
    }

    #[test]
    fn test_format_entry() {
        let parser = KeyValueParser::with_syntax(Syntax::new(":", "#"));
        let line = parser.format_entry(&ConfigKey::from("a"), &ConfigValue::from("b"));
        assert_eq!(line, "a : b");
    }

    #[test]
    fn test_supported_extensions() {
        let parser = KeyValueParser::new();
        assert!(parser.supported_extensions().contains(&"conf"));
    }
}
