// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns a stream of lines
//! into ordered key/value entries and formats entries back into lines.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::LineSource;

/// An ordered list of parsed entries. Later entries win over earlier ones
/// with the same key when applied to a store.
pub type Entries = Vec<(ConfigKey, ConfigValue)>;

/// A trait for parsing and formatting configuration text.
///
/// # Examples
///
/// ```rust
/// use kvconf::domain::{ConfigKey, ConfigValue, Result};
/// use kvconf::ports::{ConfigParser, Entries, LineSource};
///
/// /// Treats every non-empty line as a key with an empty value.
/// struct FlagParser;
///
/// impl ConfigParser for FlagParser {
///     fn parse_lines(&self, source: &mut dyn LineSource) -> Result<Entries> {
///         let mut entries = Vec::new();
///         while let Some(line) = source.next_line()? {
///             if !line.trim().is_empty() {
///                 entries.push((ConfigKey::from(line.trim()), ConfigValue::default()));
///             }
///         }
///         Ok(entries)
///     }
///
///     fn format_entry(&self, key: &ConfigKey, _value: &ConfigValue) -> String {
///         key.to_string()
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["flags"]
///     }
/// }
/// ```
pub trait ConfigParser {
    /// Reads `source` to the end and returns the entries it defines, in
    /// source order.
    ///
    /// # Returns
    ///
    /// * `Ok(Entries)` - The parsed entries; lines the grammar does not match
    ///   are skipped, not reported
    /// * `Err(ConfigError)` - The source failed while being read
    fn parse_lines(&self, source: &mut dyn LineSource) -> Result<Entries>;

    /// Formats one entry as a single line without a line terminator.
    fn format_entry(&self, key: &ConfigKey, value: &ConfigValue) -> String;

    /// Returns the file extensions (without the leading dot) this parser
    /// is meant for.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecSource(std::vec::IntoIter<String>);

    impl LineSource for VecSource {
        fn next_line(&mut self) -> Result<Option<String>> {
            Ok(self.0.next())
        }
    }

    struct ColonParser;

    impl ConfigParser for ColonParser {
        fn parse_lines(&self, source: &mut dyn LineSource) -> Result<Entries> {
            let mut entries = Vec::new();
            while let Some(line) = source.next_line()? {
                if let Some((k, v)) = line.split_once(':') {
                    entries.push((ConfigKey::from(k.trim()), ConfigValue::from(v.trim())));
                }
            }
            Ok(entries)
        }

        fn format_entry(&self, key: &ConfigKey, value: &ConfigValue) -> String {
            format!("{}: {}", key, value)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["colon"]
        }
    }

    #[test]
    fn test_parser_through_trait_object() {
        let parser: Box<dyn ConfigParser> = Box::new(ColonParser);
        let mut source = VecSource(vec!["a: 1".to_string(), "junk".to_string()].into_iter());

        let entries = parser.parse_lines(&mut source).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.as_str(), "a");
        assert_eq!(
            parser.format_entry(&entries[0].0, &entries[0].1),
            "a: 1".to_string()
        );
        assert_eq!(parser.supported_extensions(), &["colon"]);
    }
}
