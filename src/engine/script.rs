//! Edit script: The ordered output of the diff engine.

use std::ops::Index;

/// A single edit operation.
///
/// Line indices are 1-based positions in the respective input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// The line is present, unchanged, in both sequences.
    Same {
        /// Line text.
        line: String,
        /// 1-based line number in sequence A.
        index_a: usize,
        /// 1-based line number in sequence B.
        index_b: usize,
    },
    /// The line exists only in sequence B.
    Add {
        /// Line text.
        line: String,
        /// 1-based line number in sequence B.
        index_b: usize,
    },
    /// The line exists only in sequence A.
    Remove {
        /// Line text.
        line: String,
        /// 1-based line number in sequence A.
        index_a: usize,
    },
}

/// Discriminant of an [`EditOp`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Unchanged line.
    Same,
    /// Added line.
    Add,
    /// Removed line.
    Remove,
}

impl EditOp {
    /// Line text carried by the operation.
    #[inline]
    pub fn line(&self) -> &str {
        match self {
            Self::Same { line, .. } | Self::Add { line, .. } | Self::Remove { line, .. } => line,
        }
    }

    /// Line number in sequence A, if the operation consumes a line from A.
    #[inline]
    pub const fn index_a(&self) -> Option<usize> {
        match self {
            Self::Same { index_a, .. } | Self::Remove { index_a, .. } => Some(*index_a),
            Self::Add { .. } => None,
        }
    }

    /// Line number in sequence B, if the operation consumes a line from B.
    #[inline]
    pub const fn index_b(&self) -> Option<usize> {
        match self {
            Self::Same { index_b, .. } | Self::Add { index_b, .. } => Some(*index_b),
            Self::Remove { .. } => None,
        }
    }

    /// The operation's kind.
    #[inline]
    pub const fn kind(&self) -> EditKind {
        match self {
            Self::Same { .. } => EditKind::Same,
            Self::Add { .. } => EditKind::Add,
            Self::Remove { .. } => EditKind::Remove,
        }
    }
}

/// Operation counts for an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of unchanged lines.
    pub same: usize,
    /// Number of added lines.
    pub added: usize,
    /// Number of removed lines.
    pub removed: usize,
}

impl DiffStats {
    /// Number of lines that differ (added + removed).
    #[inline]
    pub const fn changed(&self) -> usize {
        self.added + self.removed
    }
}

impl std::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{} -{} ={}", self.added, self.removed, self.same)
    }
}

/// An ordered sequence of edit operations in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    pub(crate) const fn from_ops(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    /// Borrow the operations.
    #[inline]
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Number of operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the script has no operations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the operations.
    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    /// Count operations by kind.
    pub fn stats(&self) -> DiffStats {
        self.ops.iter().fold(DiffStats::default(), |mut stats, op| {
            match op.kind() {
                EditKind::Same => stats.same += 1,
                EditKind::Add => stats.added += 1,
                EditKind::Remove => stats.removed += 1,
            }
            stats
        })
    }

    /// Check whether the script contains no additions or removals.
    pub fn is_identical(&self) -> bool {
        self.ops.iter().all(|op| op.kind() == EditKind::Same)
    }

    /// Replay Same and Remove lines, reconstructing sequence A.
    pub fn original_lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter(|op| op.index_a().is_some())
            .map(EditOp::line)
            .collect()
    }

    /// Replay Same and Add lines, reconstructing sequence B.
    pub fn modified_lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter(|op| op.index_b().is_some())
            .map(EditOp::line)
            .collect()
    }

    /// Consume the script, returning the operations.
    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }
}

impl Index<usize> for EditScript {
    type Output = EditOp;

    fn index(&self, index: usize) -> &Self::Output {
        &self.ops[index]
    }
}

impl IntoIterator for EditScript {
    type Item = EditOp;
    type IntoIter = std::vec::IntoIter<EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
