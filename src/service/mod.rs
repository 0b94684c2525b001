// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store.
//!
//! `ConfigStore` is the entry point most callers need: it loads sources
//! through the adapters and exposes typed accessors over the result.

pub mod store;

// Re-export commonly used types
pub use store::ConfigStore;
