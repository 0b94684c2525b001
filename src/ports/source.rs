// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line source trait definition.
//!
//! This module defines the `LineSource` trait, the port through which the
//! parser pulls raw text. Files, readers and in-memory strings all reach the
//! grammar through it.

use crate::domain::Result;

/// A sequential supply of text lines.
///
/// Lines are returned without their line terminator. End of input is
/// `Ok(None)`; once a source has returned `None` it keeps returning `None`.
///
/// Opening the underlying resource is the implementor's job: a source that
/// cannot be opened must fail at construction with
/// [`ConfigError::SourceUnavailable`](crate::domain::ConfigError::SourceUnavailable)
/// rather than behave as an empty source.
///
/// # Examples
///
/// ```rust
/// use kvconf::ports::LineSource;
/// use kvconf::domain::Result;
///
/// struct Fixed(Vec<String>);
///
/// impl LineSource for Fixed {
///     fn next_line(&mut self) -> Result<Option<String>> {
///         if self.0.is_empty() {
///             Ok(None)
///         } else {
///             Ok(Some(self.0.remove(0)))
///         }
///     }
/// }
///
/// let mut source = Fixed(vec!["a = 1".to_string()]);
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("a = 1"));
/// assert_eq!(source.next_line().unwrap(), None);
/// ```
pub trait LineSource {
    /// Returns the next line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Result<Option<String>> {
        (**self).next_line()
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self) -> Result<Option<String>> {
        (**self).next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl LineSource for Countdown {
        fn next_line(&mut self) -> Result<Option<String>> {
            if self.0 == 0 {
                return Ok(None);
            }
            self.0 -= 1;
            Ok(Some(format!("n = {}", self.0)))
        }
    }

    #[test]
    fn test_source_reaches_end() {
        let mut source = Countdown(2);
        assert_eq!(source.next_line().unwrap().as_deref(), Some("n = 1"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("n = 0"));
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_source_through_trait_object() {
        let mut boxed: Box<dyn LineSource> = Box::new(Countdown(1));
        assert!(boxed.next_line().unwrap().is_some());

        fn drain<S: LineSource>(mut source: S) -> usize {
            let mut count = 0;
            while source.next_line().unwrap().is_some() {
                count += 1;
            }
            count
        }

        let mut inner = Countdown(3);
        assert_eq!(drain(&mut inner), 3);
        assert!(inner.next_line().unwrap().is_none());
    }
}
