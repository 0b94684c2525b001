// SPDX-License-Identifier: MIT OR Apache-2.0

//! Load, query and serialize `key = value` configuration files.
//!
//! The format is line oriented, with `#` comments, backslash-escaped comment
//! markers and values that continue over following lines:
//!
//! ```text
//! name = demo          # trailing comments are dropped
//! banner = Welcome
//!     to the demo
//! channel = \#general  # escaped marker is kept
//! ```
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `Syntax`), typed
//!   conversions and errors
//! - **Ports**: Trait definitions (`LineSource`, `ConfigParser`)
//! - **Adapters**: The `key = value` grammar, line sources and the file adapter
//! - **Service**: `ConfigStore`, the typed store callers work with
//!
//! # Feature Flags
//!
//! - `cli`: Build the `kvconf` command-line tool (default)
//!
//! # Quick Start
//!
//! ```rust
//! use kvconf::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = ConfigStore::parse_str("retries = 3\nbanner = hello\n  world\n")?;
//!
//! let retries: u32 = store.read("retries")?;
//! let banner: String = store.read("banner")?;
//! let debug: bool = store.read_or("debug", false)?;
//!
//! assert_eq!(retries, 3);
//! assert_eq!(banner, "hello\nworld");
//! assert!(!debug);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{KeyValueParser, KvFileAdapter, ReaderLineSource, StrLineSource};
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, FromConfigValue, Result, Syntax, ToConfigValue,
    };
    pub use crate::ports::{ConfigParser, LineSource};
    pub use crate::service::ConfigStore;
}
