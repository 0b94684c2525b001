// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary configuration file with the given content.
///
/// The file is deleted when the returned handle is dropped.
#[allow(dead_code)]
pub fn temp_conf(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// A configuration exercising every part of the grammar.
#[allow(dead_code)]
pub const SAMPLE_CONF: &str = r"# Sample configuration
name = demo service
port = 8080          # listening port
verbose = no

motd = Welcome to the demo.
    Please be nice.

    Really.
channel = \#general
ratio = 0.75
";
