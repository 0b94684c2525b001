// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! Keys, values, the line syntax, typed conversions and errors. Nothing in
//! here performs I/O.

pub mod config_key;
pub mod config_value;
pub mod conversion;
pub mod errors;
pub mod syntax;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use conversion::{FromConfigValue, ToConfigValue};
pub use errors::{ConfigError, Result};
pub use syntax::Syntax;
