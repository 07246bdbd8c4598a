//! Line splitting and the comparison entry point.

use crate::engine::{compute_diff, EditScript};

/// Split text into lines on `'\n'`.
///
/// Matches a plain newline split exactly: empty input yields one empty
/// line, a trailing newline yields a trailing empty line, and `'\r'` stays
/// part of the line text.
///
/// ```
/// use diffcheck::split_lines;
///
/// assert_eq!(split_lines(""), vec![""]);
/// assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Outcome of comparing two text blobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Both inputs were empty; there is nothing to compare.
    Empty,
    /// The inputs were split and diffed.
    Ready(EditScript),
}

impl Comparison {
    /// Compare two text blobs line by line.
    ///
    /// If exactly one side is empty it is still diffed as a single empty
    /// line.
    pub fn of(original: &str, modified: &str) -> Self {
        if original.is_empty() && modified.is_empty() {
            tracing::debug!("both inputs empty, skipping diff");
            return Self::Empty;
        }
        Self::Ready(compute_diff(&split_lines(original), &split_lines(modified)))
    }

    /// Borrow the edit script, if one was computed.
    pub const fn script(&self) -> Option<&EditScript> {
        match self {
            Self::Empty => None,
            Self::Ready(script) => Some(script),
        }
    }

    /// Check whether the comparison was skipped.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
