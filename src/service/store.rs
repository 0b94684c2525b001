// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed configuration store.
//!
//! `ConfigStore` holds trimmed key/value strings in key order and converts
//! them on the way in and out through the traits in
//! [`domain::conversion`](crate::domain::conversion).

use crate::adapters::key_value::trim;
use crate::adapters::kv_file::write_file;
use crate::adapters::{KeyValueParser, KvFileAdapter, ReaderLineSource, StrLineSource};
use crate::domain::{
    ConfigError, ConfigKey, ConfigValue, FromConfigValue, Result, Syntax, ToConfigValue,
};
use crate::ports::{ConfigParser, Entries, LineSource};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

/// An in-memory `key = value` configuration.
///
/// # Examples
///
/// ```rust
/// use kvconf::service::ConfigStore;
///
/// # fn main() -> kvconf::domain::Result<()> {
/// let mut store = ConfigStore::parse_str("port = 8080\nverbose = no\n")?;
///
/// let port: u16 = store.read("port")?;
/// let verbose: bool = store.read("verbose")?;
/// let workers: usize = store.read_or("workers", 4)?;
/// assert_eq!((port, verbose, workers), (8080, false, 4));
///
/// store.add("workers", 8);
/// assert_eq!(store.to_string(), "port = 8080\nverbose = no\nworkers = 8\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    /// Delimiter and comment marker used for parsing and serialization
    syntax: Syntax,
    /// Entries, ordered by key
    entries: BTreeMap<ConfigKey, ConfigValue>,
}

impl ConfigStore {
    /// Creates an empty store with the default syntax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given syntax.
    pub fn with_syntax(syntax: Syntax) -> Self {
        Self {
            syntax,
            entries: BTreeMap::new(),
        }
    }

    /// Parses `content` with the default syntax.
    pub fn parse_str(content: &str) -> Result<Self> {
        let mut store = Self::new();
        store.load(&mut StrLineSource::new(content))?;
        Ok(store)
    }

    /// Reads `reader` to the end with the default syntax.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut store = Self::new();
        store.load(&mut ReaderLineSource::new(reader))?;
        Ok(store)
    }

    /// Loads a file with the default syntax.
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, Syntax::default())
    }

    /// Loads a file written with `syntax`.
    pub fn open_with<P: AsRef<Path>>(path: P, syntax: Syntax) -> Result<Self> {
        let adapter = KvFileAdapter::with_syntax(path, syntax.clone())?;
        let mut store = Self::with_syntax(syntax);
        store.apply(adapter.load()?);
        Ok(store)
    }

    /// Sets the syntax and merges the entries of a file into the store.
    ///
    /// Returns `false`, leaving the entries untouched, if the file cannot be
    /// loaded. The syntax change is kept either way.
    pub fn init<P: AsRef<Path>>(&mut self, path: P, delimiter: &str, comment: &str) -> bool {
        self.set_delimiter(delimiter);
        self.set_comment(comment);

        let loaded = KvFileAdapter::with_syntax(path, self.syntax.clone())
            .and_then(|adapter| adapter.load());
        match loaded {
            Ok(entries) => {
                self.apply(entries);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to initialize configuration: {}", e);
                false
            }
        }
    }

    /// Merges every entry of `source` into the store using the current syntax.
    ///
    /// Entries become visible only once the whole source has been read; on
    /// error the store is unchanged.
    pub fn load(&mut self, source: &mut dyn LineSource) -> Result<()> {
        let entries = self.parser().parse_lines(source)?;
        self.apply(entries);
        Ok(())
    }

    /// Merges the entries of `content` into the store using the current syntax.
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        self.load(&mut StrLineSource::new(content))
    }

    fn apply(&mut self, entries: Entries) {
        self.entries.extend(entries);
    }

    fn parser(&self) -> KeyValueParser {
        KeyValueParser::with_syntax(self.syntax.clone())
    }

    /// Returns the current syntax.
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Returns the key/value delimiter.
    pub fn delimiter(&self) -> &str {
        &self.syntax.delimiter
    }

    /// Returns the comment marker set.
    pub fn comment(&self) -> &str {
        &self.syntax.comment
    }

    /// Replaces the delimiter and returns the previous one.
    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) -> String {
        std::mem::replace(&mut self.syntax.delimiter, delimiter.into())
    }

    /// Replaces the comment marker set and returns the previous one.
    pub fn set_comment(&mut self, comment: impl Into<String>) -> String {
        std::mem::replace(&mut self.syntax.comment, comment.into())
    }

    /// Reads and converts the value of `key`.
    ///
    /// # Errors
    ///
    /// * `ConfigKeyNotFound` - the key is absent
    /// * `TypeConversionError` - the value does not parse as `T`
    pub fn read<T: FromConfigValue>(&self, key: &str) -> Result<T> {
        let value = self
            .entries
            .get(key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })?;
        T::from_config_value(key, value)
    }

    /// Reads and converts the value of `key`, or returns `default` if the key
    /// is absent.
    ///
    /// A present value that does not parse as `T` is still an error.
    pub fn read_or<T: FromConfigValue>(&self, key: &str, default: T) -> Result<T> {
        match self.entries.get(key) {
            Some(value) => T::from_config_value(key, value),
            None => {
                tracing::debug!("Configuration key '{}' not found, using default", key);
                Ok(default)
            }
        }
    }

    /// Converts the value of `key` into `out`.
    ///
    /// Returns `Ok(false)` and leaves `out` untouched if the key is absent.
    /// On a conversion error `out` is also untouched.
    pub fn read_into<T: FromConfigValue>(&self, out: &mut T, key: &str) -> Result<bool> {
        match self.entries.get(key) {
            Some(value) => {
                *out = T::from_config_value(key, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Converts the value of `key` into `out`, writing `default` if the key is
    /// absent.
    ///
    /// Returns whether the key was present.
    pub fn read_into_or<T: FromConfigValue>(
        &self,
        out: &mut T,
        key: &str,
        default: T,
    ) -> Result<bool> {
        let found = self.read_into(out, key)?;
        if !found {
            tracing::debug!("Configuration key '{}' not found, using default", key);
            *out = default;
        }
        Ok(found)
    }

    /// Stores the canonical form of `value` under `key`, replacing any
    /// previous value.
    ///
    /// Key and value are trimmed. A key that is empty after trimming is not
    /// stored.
    pub fn add<T: ToConfigValue>(&mut self, key: &str, value: T) {
        let key = trim(key);
        if key.is_empty() {
            tracing::warn!("Ignoring configuration entry with an empty key");
            return;
        }

        let value = value.to_config_value();
        self.entries
            .insert(ConfigKey::from(key), ConfigValue::from(trim(value.as_str())));
    }

    /// Removes `key` and returns its value.
    ///
    /// # Errors
    ///
    /// `KeyAbsentOnRemove` if the key is not present; the store is unchanged.
    pub fn remove(&mut self, key: &str) -> Result<ConfigValue> {
        self.entries
            .remove(key)
            .ok_or_else(|| ConfigError::KeyAbsentOnRemove {
                key: key.to_string(),
            })
    }

    /// Returns `true` if `key` is present.
    pub fn key_exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the raw value of `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, ConfigKey, ConfigValue> {
        self.entries.keys()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, ConfigKey, ConfigValue> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every entry as `key <delimiter> value`, one per line, in key
    /// order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }

    /// Writes the store to `path`, creating or truncating the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_file(path.as_ref(), &self.to_string())
    }
}

impl fmt::Display for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser().write_entries(f, &self.entries)
    }
}

impl FromStr for ConfigStore {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = (&'a ConfigKey, &'a ConfigValue);
    type IntoIter = btree_map::Iter<'a, ConfigKey, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
