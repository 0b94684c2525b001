// SPDX-License-Identifier: MIT OR Apache-2.0

//! File adapter for `key = value` configuration files.
//!
//! The adapter owns the file handle only for the duration of a single load or
//! save, so the file is closed again on every exit path.

use crate::adapters::key_value::KeyValueParser;
use crate::adapters::line_source::ReaderLineSource;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result, Syntax};
use crate::ports::{ConfigParser, Entries};
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Maximum accepted size for a configuration file (10MB).
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name used when only an application name is known.
const DEFAULT_FILE_NAME: &str = "config.conf";

/// Returns `true` if `path` can be opened for reading.
///
/// # Examples
///
/// ```rust
/// use kvconf::adapters::file_exists;
///
/// assert!(!file_exists("/nonexistent/path/to/app.conf"));
/// ```
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    File::open(path).is_ok()
}

/// Returns the non-empty lines of a file, unparsed.
///
/// Lines are returned as written, comments included. Only lines that are
/// completely empty are left out.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| ConfigError::unavailable(display_name(path), "Failed to open file", e))?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

/// Creates or truncates `path` and writes `contents` to it.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| ConfigError::unavailable(display_name(path), "Failed to create file", e))?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Configuration file adapter.
///
/// # Examples
///
/// ```rust,no_run
/// use kvconf::adapters::KvFileAdapter;
/// use kvconf::domain::Syntax;
///
/// let adapter = KvFileAdapter::from_file("/etc/myapp/app.conf").unwrap();
/// let entries = adapter.load().unwrap();
///
/// let colon = KvFileAdapter::with_syntax("/etc/myapp/legacy.cfg", Syntax::new(":", ";")).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct KvFileAdapter {
    /// Path to the configuration file
    file_path: PathBuf,
    /// Parser for the file's syntax
    parser: KeyValueParser,
}

impl KvFileAdapter {
    /// Creates an adapter for an existing file using the default syntax.
    ///
    /// Fails with `SourceUnavailable` if the file does not exist.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_syntax(path, Syntax::default())
    }

    /// Creates an adapter for an existing file using `syntax`.
    pub fn with_syntax<P: AsRef<Path>>(path: P, syntax: Syntax) -> Result<Self> {
        let path = path.as_ref();
        let file_path = path.canonicalize().map_err(|e| {
            ConfigError::unavailable(display_name(path), "Invalid or inaccessible path", e)
        })?;

        Ok(Self {
            file_path,
            parser: KeyValueParser::with_syntax(syntax),
        })
    }

    /// Creates an adapter for `config.conf` in the OS configuration directory
    /// of the given application.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use kvconf::adapters::KvFileAdapter;
    ///
    /// let adapter = KvFileAdapter::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Creates an adapter for `filename` in the OS configuration directory of
    /// the given application.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
                ConfigError::SourceUnavailable {
                    location: app_name.to_string(),
                    message: "Failed to determine project directories".to_string(),
                    source: None,
                }
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the canonical path of the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the syntax used to read and write the file.
    pub fn syntax(&self) -> &Syntax {
        self.parser.syntax()
    }

    /// Opens, parses and closes the file.
    pub fn load(&self) -> Result<Entries> {
        let location = display_name(&self.file_path);

        let metadata = fs::metadata(&self.file_path)
            .map_err(|e| ConfigError::unavailable(&location, "Failed to read file metadata", e))?;
        if !metadata.is_file() {
            return Err(ConfigError::SourceUnavailable {
                location,
                message: "Not a regular file".to_string(),
                source: None,
            });
        }
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::SourceUnavailable {
                location,
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
                source: None,
            });
        }

        let file = File::open(&self.file_path)
            .map_err(|e| ConfigError::unavailable(&location, "Failed to open file", e))?;
        let mut source = ReaderLineSource::new(BufReader::new(file));
        let entries = self.parser.parse_lines(&mut source)?;

        tracing::debug!("Loaded {} entries from '{}'", entries.len(), location);
        Ok(entries)
    }

    /// Writes `entries` to the file, one formatted entry per line,
    /// replacing its contents.
    pub fn save<'a, I>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a ConfigKey, &'a ConfigValue)>,
    {
        let mut contents = String::new();
        self.parser
            .write_entries(&mut contents, entries)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        write_file(&self.file_path, &contents)
    }
}
