// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the store and the outside world. The
//! adapters layer provides the implementations this crate ships with.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::{ConfigParser, Entries};
pub use source::LineSource;
