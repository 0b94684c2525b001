// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! The `key = value` grammar, line sources for strings and readers, and the
//! file adapter that ties them to the filesystem.

pub mod key_value;
pub mod kv_file;
pub mod line_source;

// Re-export commonly used types
pub use key_value::KeyValueParser;
pub use kv_file::{file_exists, read_lines, KvFileAdapter};
pub use line_source::{ReaderLineSource, StrLineSource};
