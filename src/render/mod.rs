//! Render module: Turn an edit script into display output.
//!
//! [`rows`] is the boundary with the engine: one [`DiffRow`] per operation,
//! carrying line numbers, a prefix marker and the raw line text. Escaping
//! is left to each concrete renderer:
//! - [`html`]: The diff-checker markup, HTML-escaped
//! - [`unified`]: Plain text, one row per line
//! - [`ansi`]: Colored terminal output, inline or side-by-side

pub mod ansi;
pub mod html;
mod output;
pub mod unified;

pub use output::OutputBuffer;

use crate::engine::{EditKind, EditOp, EditScript};

/// Row prefix marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Unchanged line.
    Same,
    /// Added line.
    Add,
    /// Removed line.
    Remove,
}

impl Marker {
    /// Two-column prefix written before the line text.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Same => "  ",
            Self::Add => "+ ",
            Self::Remove => "- ",
        }
    }
}

impl From<EditKind> for Marker {
    fn from(kind: EditKind) -> Self {
        match kind {
            EditKind::Same => Self::Same,
            EditKind::Add => Self::Add,
            EditKind::Remove => Self::Remove,
        }
    }
}

/// One display row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffRow<'a> {
    /// Line number in the original text, blank for additions.
    pub left: Option<usize>,
    /// Line number in the modified text, blank for removals.
    pub right: Option<usize>,
    /// Prefix marker.
    pub marker: Marker,
    /// Unescaped line text.
    pub text: &'a str,
}

impl<'a> From<&'a EditOp> for DiffRow<'a> {
    fn from(op: &'a EditOp) -> Self {
        Self {
            left: op.index_a(),
            right: op.index_b(),
            marker: op.kind().into(),
            text: op.line(),
        }
    }
}

/// Build display rows for an edit script, in order.
pub fn rows(script: &EditScript) -> Vec<DiffRow<'_>> {
    script.iter().map(DiffRow::from).collect()
}

/// Width needed to print the largest line number in `script`, at least `min`.
pub(crate) fn gutter_width(script: &EditScript, min: usize) -> usize {
    let max = script
        .iter()
        .flat_map(|op| op.index_a().into_iter().chain(op.index_b()))
        .max()
        .unwrap_or(0);
    digits(max).max(min)
}

const fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Format an optional line number right-aligned in `width` columns.
pub(crate) fn line_number(n: Option<usize>, width: usize) -> String {
    n.map_or_else(|| " ".repeat(width), |n| format!("{n:>width$}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_diff;

    #[test]
    fn test_rows_carry_numbers_and_markers() {
        let script = compute_diff(&["one", "two", "three"], &["one", "three", "four"]);
        let rows = rows(&script);

        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[1],
            DiffRow { left: Some(2), right: None, marker: Marker::Remove, text: "two" }
        );
        assert_eq!(
            rows[3],
            DiffRow { left: None, right: Some(3), marker: Marker::Add, text: "four" }
        );
        assert_eq!(rows[2].marker.prefix(), "  ");
    }

    #[test]
    fn test_rows_do_not_escape() {
        let script = compute_diff(&["<b>"], &["<b>"]);
        assert_eq!(rows(&script)[0].text, "<b>");
    }

    #[test]
    fn test_gutter_width() {
        let lines: Vec<String> = (0..120).map(|n| n.to_string()).collect();
        let script = compute_diff(&lines, &lines);
        assert_eq!(gutter_width(&script, 1), 3);
        assert_eq!(gutter_width(&script, 5), 5);
        assert_eq!(gutter_width(&EditScript::default(), 0), 1);
    }

    #[test]
    fn test_line_number() {
        assert_eq!(line_number(Some(7), 3), "  7");
        assert_eq!(line_number(None, 3), "   ");
    }
}
