//! Diff engine: LCS alignment of two line sequences.
//!
//! This module contains:
//! - [`LcsTable`]: The dynamic-programming length table
//! - [`EditOp`] / [`EditScript`]: The same/add/remove output
//! - [`compute_diff`]: Table build + backtracking
//!
//! The engine is a pure, total function. It never escapes text and never
//! fails; callers split input into lines (see [`crate::lines`]) first.

mod script;
mod table;

pub use script::{DiffStats, EditKind, EditOp, EditScript};
pub use table::LcsTable;

use crate::lines::split_lines;

/// Table size above which a warning is logged before building.
///
/// The algorithm is quadratic; inputs past this size are still diffed.
pub const LARGE_TABLE_CELLS: usize = 4_000_000;

/// Compute the edit script turning `a` into `b`.
///
/// The script maximises the number of [`EditOp::Same`] operations. When
/// several alignments are optimal, the backtracking walk prefers an Add
/// whenever the left and up neighbours hold equal LCS lengths, so output is
/// deterministic.
///
/// # Example
///
/// ```
/// use diffcheck::{compute_diff, EditOp};
///
/// let script = compute_diff(&["one", "two"], &["one", "three"]);
/// assert_eq!(script[0], EditOp::Same { line: "one".into(), index_a: 1, index_b: 1 });
/// assert_eq!(script.len(), 3);
/// ```
pub fn compute_diff<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> EditScript {
    let cells = (a.len() + 1).saturating_mul(b.len() + 1);
    if cells > LARGE_TABLE_CELLS {
        tracing::warn!(
            lines_a = a.len(),
            lines_b = b.len(),
            cells,
            "diffing large inputs; LCS table is quadratic"
        );
    }

    let table = LcsTable::build(a, b);
    let script = backtrack(&table, a, b);

    tracing::debug!(
        lines_a = a.len(),
        lines_b = b.len(),
        lcs = table.lcs_len(),
        ops = script.len(),
        "computed diff"
    );

    script
}

/// Split two text blobs into lines and diff them.
pub fn diff_text(original: &str, modified: &str) -> EditScript {
    compute_diff(&split_lines(original), &split_lines(modified))
}

/// Walk the table from `(n, m)` back to `(0, 0)`, then reverse.
fn backtrack<A: AsRef<str>, B: AsRef<str>>(table: &LcsTable, a: &[A], b: &[B]) -> EditScript {
    let mut i = a.len();
    let mut j = b.len();
    let mut ops = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1].as_ref() == b[j - 1].as_ref() {
            ops.push(EditOp::Same {
                line: a[i - 1].as_ref().to_owned(),
                index_a: i,
                index_b: j,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            // Ties go to Add
            ops.push(EditOp::Add {
                line: b[j - 1].as_ref().to_owned(),
                index_b: j,
            });
            j -= 1;
        } else {
            ops.push(EditOp::Remove {
                line: a[i - 1].as_ref().to_owned(),
                index_a: i,
            });
            i -= 1;
        }
    }

    ops.reverse();
    EditScript::from_ops(ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_both_empty() {
        let script = compute_diff(&NONE, &NONE);
        assert!(script.is_empty());
    }

    #[test]
    fn test_original_empty_is_all_adds() {
        let script = compute_diff(&NONE, &["a", "b"]);
        assert_eq!(
            script.ops(),
            &[
                EditOp::Add { line: "a".into(), index_b: 1 },
                EditOp::Add { line: "b".into(), index_b: 2 },
            ]
        );
    }

    #[test]
    fn test_modified_empty_is_all_removes() {
        let script = compute_diff(&["a", "b"], &NONE);
        assert_eq!(
            script.ops(),
            &[
                EditOp::Remove { line: "a".into(), index_a: 1 },
                EditOp::Remove { line: "b".into(), index_a: 2 },
            ]
        );
    }

    #[test]
    fn test_identical() {
        let lines = ["x", "y", "z"];
        let script = compute_diff(&lines, &lines);
        assert!(script.is_identical());
        for (n, op) in script.iter().enumerate() {
            assert_eq!(op.index_a(), Some(n + 1));
            assert_eq!(op.index_b(), Some(n + 1));
        }
    }

    #[test]
    fn test_remove_and_add() {
        let script = compute_diff(&["one", "two", "three"], &["one", "three", "four"]);
        assert_eq!(
            script.ops(),
            &[
                EditOp::Same { line: "one".into(), index_a: 1, index_b: 1 },
                EditOp::Remove { line: "two".into(), index_a: 2 },
                EditOp::Same { line: "three".into(), index_a: 3, index_b: 2 },
                EditOp::Add { line: "four".into(), index_b: 3 },
            ]
        );
    }

    #[test]
    fn test_single_empty_line() {
        let script = compute_diff(&[""], &[""]);
        assert_eq!(
            script.ops(),
            &[EditOp::Same { line: String::new(), index_a: 1, index_b: 1 }]
        );
    }

    #[test]
    fn test_replacement_tie_break() {
        // Backtracking sees the Add first (ties prefer Add), so once
        // reversed the Remove precedes the Add.
        let script = compute_diff(&["a"], &["b"]);
        assert_eq!(
            script.ops(),
            &[
                EditOp::Remove { line: "a".into(), index_a: 1 },
                EditOp::Add { line: "b".into(), index_b: 1 },
            ]
        );
    }

    #[test]
    fn test_swapped_lines_tie_break() {
        // Two optimal alignments keep either "a" or "b"; ties keep "b".
        let script = compute_diff(&["a", "b"], &["b", "a"]);
        assert_eq!(
            script.ops(),
            &[
                EditOp::Remove { line: "a".into(), index_a: 1 },
                EditOp::Same { line: "b".into(), index_a: 2, index_b: 1 },
                EditOp::Add { line: "a".into(), index_b: 2 },
            ]
        );
    }

    #[test]
    fn test_same_count_is_lcs_length() {
        let a = ["a", "b", "c", "d", "e"];
        let b = ["b", "x", "d", "e", "f"];
        let script = compute_diff(&a, &b);
        assert_eq!(script.stats().same, LcsTable::build(&a, &b).lcs_len());
        assert_eq!(script.stats().same, 3);
    }

    #[test]
    fn test_diff_text_splits_on_newline() {
        let script = diff_text("one\ntwo\n", "one\ntwo");
        assert_eq!(
            script.ops(),
            &[
                EditOp::Same { line: "one".into(), index_a: 1, index_b: 1 },
                EditOp::Same { line: "two".into(), index_a: 2, index_b: 2 },
                EditOp::Remove { line: String::new(), index_a: 3 },
            ]
        );
    }

    #[test]
    fn test_mixed_element_types() {
        let a = vec![String::from("k"), String::from("x")];
        let script = compute_diff(&a, &["k"]);
        assert_eq!(script.stats().removed, 1);
        assert_eq!(LcsTable::build(&["k"], &a).lcs_len(), 1);
    }

    #[test]
    fn test_owned_strings() {
        let a = vec![String::from("k"), String::from("l")];
        let b = vec![String::from("l")];
        let script = compute_diff(&a, &b);
        assert_eq!(script.stats().removed, 1);
        assert_eq!(script.modified_lines(), vec!["l"]);
    }
}
