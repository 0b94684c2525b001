// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! This module provides the `ConfigValue` type, which holds the raw string a
//! key was assigned and offers the conversions the typed accessors build on.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spellings that read as `false`, compared case-insensitively.
const FALSE_LITERALS: &[&str] = &["false", "f", "no", "n", "0", "none"];

/// A configuration value stored as a string.
///
/// # Examples
///
/// ```
/// use kvconf::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("42");
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.parse::<i32>("answer").unwrap(), 42);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an owned copy of the value.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Interprets the value as a boolean.
    ///
    /// `false`, `f`, `no`, `n`, `0` and `none` (any case) are `false`. Anything
    /// else, including the empty string and unrecognized text, is `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvconf::domain::config_value::ConfigValue;
    ///
    /// assert!(!ConfigValue::from("No").as_bool());
    /// assert!(ConfigValue::from("-1").as_bool());
    /// assert!(ConfigValue::from("whatever").as_bool());
    /// ```
    pub fn as_bool(&self) -> bool {
        !FALSE_LITERALS
            .iter()
            .any(|literal| self.0.eq_ignore_ascii_case(literal))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// The whole string must parse; `key` is only used to label the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvconf::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("bind.address").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::conversion::<T, _>(key, e))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
