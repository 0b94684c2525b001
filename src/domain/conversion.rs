// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between stored strings and caller types.
//!
//! Reading goes through [`FromConfigValue`], which has one implementation per
//! target type. Strings come back unchanged, booleans use the permissive rule
//! of [`ConfigValue::as_bool`], and every other scalar must parse in full via
//! `FromStr`. Writing goes through [`ToConfigValue`], which any `Display` type
//! gets for free.
//!
//! A type of your own plugs in by implementing `FromConfigValue`:
//!
//! ```
//! use kvconf::domain::{ConfigValue, FromConfigValue, Result};
//!
//! struct Percent(u8);
//!
//! impl FromConfigValue for Percent {
//!     fn from_config_value(key: &str, value: &ConfigValue) -> Result<Self> {
//!         let digits = value.as_str().trim_end_matches('%');
//!         ConfigValue::from(digits).parse(key).map(Percent)
//!     }
//! }
//!
//! let p = Percent::from_config_value("ratio", &ConfigValue::from("75%")).unwrap();
//! assert_eq!(p.0, 75);
//! ```

use crate::domain::config_value::ConfigValue;
use crate::domain::errors::Result;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

/// Converts a stored value into a caller type.
pub trait FromConfigValue: Sized {
    /// Converts `value`, labelling any failure with `key`.
    fn from_config_value(key: &str, value: &ConfigValue) -> Result<Self>;
}

/// Converts a caller value into its canonical stored string.
pub trait ToConfigValue {
    /// Returns the canonical representation of `self`.
    fn to_config_value(&self) -> ConfigValue;
}

impl<T: fmt::Display + ?Sized> ToConfigValue for T {
    fn to_config_value(&self) -> ConfigValue {
        ConfigValue::new(self.to_string())
    }
}

impl FromConfigValue for String {
    fn from_config_value(_key: &str, value: &ConfigValue) -> Result<Self> {
        Ok(value.as_string())
    }
}

impl FromConfigValue for ConfigValue {
    fn from_config_value(_key: &str, value: &ConfigValue) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromConfigValue for bool {
    fn from_config_value(_key: &str, value: &ConfigValue) -> Result<Self> {
        Ok(value.as_bool())
    }
}

macro_rules! from_str_conversion {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromConfigValue for $ty {
                fn from_config_value(key: &str, value: &ConfigValue) -> Result<Self> {
                    value.parse::<$ty>(key)
                }
            }
        )*
    };
}

from_str_conversion!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, IpAddr,
    Ipv4Addr, Ipv6Addr, SocketAddr, PathBuf,
);
