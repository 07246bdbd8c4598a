//! LCS table: The dynamic-programming grid behind the diff.
//!
//! # Memory Layout
//!
//! The table is stored as a single flat `Vec<u32>` in row-major order
//! rather than a `Vec<Vec<_>>`, so a full build is one allocation and the
//! inner loop walks contiguous memory:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  row 0      │  row 1      │ ... │  row n      │
//! │  m+1 cells  │  m+1 cells  │     │  m+1 cells  │
//! └──────────────────────────────────────────────┘
//! index(i, j) = i * (m + 1) + j
//! ```

/// Longest-common-subsequence length table for two line sequences.
///
/// Entry `(i, j)` holds the LCS length of the first `i` lines of A and the
/// first `j` lines of B. Row 0 and column 0 are zero.
#[derive(Clone, PartialEq, Eq)]
pub struct LcsTable {
    cells: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl LcsTable {
    /// Build the table for sequences `a` (rows) and `b` (columns).
    ///
    /// Lines are compared with exact string equality: case-sensitive and
    /// without trimming. Runs in O(n·m) time and space.
    pub fn build<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            let line_a = a[i - 1].as_ref();
            let row = i * cols;
            let prev = (i - 1) * cols;
            for j in 1..cols {
                cells[row + j] = if line_a == b[j - 1].as_ref() {
                    cells[prev + j - 1] + 1
                } else {
                    cells[prev + j].max(cells[row + j - 1])
                };
            }
        }

        Self { cells, rows, cols }
    }

    /// Number of rows (`len(a) + 1`).
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len(b) + 1`).
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get the LCS length of `a[..i]` and `b[..j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.cols, "LCS index ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    #[inline]
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1) as usize
    }

    /// Total number of cells, `(n+1)·(m+1)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A table always holds at least the `(0, 0)` cell.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Borrow one row of the table.
    pub fn row(&self, i: usize) -> &[u32] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
}

impl std::fmt::Debug for LcsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LcsTable({}x{}, lcs={})", self.rows, self.cols, self.lcs_len())
    }
}
