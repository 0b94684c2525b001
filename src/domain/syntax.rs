// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line syntax settings shared by the parser and the store.

use serde::{Deserialize, Serialize};

/// Default separator between a key and its value.
pub const DEFAULT_DELIMITER: &str = "=";

/// Default set of comment marker characters.
pub const DEFAULT_COMMENT: &str = "#";

/// The delimiter and comment marker a file is written with.
///
/// The delimiter is matched as a whole substring. The comment marker is a set
/// of characters; any one of them starts a comment unless it is preceded by a
/// backslash.
///
/// # Examples
///
/// ```
/// use kvconf::domain::Syntax;
///
/// let syntax = Syntax::default();
/// assert_eq!(syntax.delimiter, "=");
/// assert_eq!(syntax.comment, "#");
///
/// let ini_like = Syntax::new(":", ";#");
/// assert_eq!(ini_like.delimiter, ":");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Syntax {
    /// Separator between key and value
    pub delimiter: String,
    /// Characters that start a comment
    pub comment: String,
}

impl Syntax {
    /// Creates a syntax from a delimiter and a comment marker set.
    pub fn new(delimiter: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            comment: comment.into(),
        }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, DEFAULT_COMMENT)
    }
}
