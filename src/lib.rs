//! # Diffcheck
//!
//! A line-based text diff engine with HTML, plain-text and terminal renderers.
//!
//! Diffcheck aligns two texts by their longest common subsequence of lines
//! and reports the result as an edit script of same/add/remove operations.
//!
//! ## Core Concepts
//!
//! - **Line splitting**: Input is split on `'\n'` exactly; empty text is one empty line
//! - **LCS table**: A dense `(n+1)×(m+1)` dynamic-programming table
//! - **Deterministic backtracking**: Ties between equally good alignments resolve to Add
//! - **Renderer boundary**: The engine never escapes; each renderer escapes for its medium
//!
//! ## Example
//!
//! ```rust
//! use diffcheck::{compute_diff, EditOp};
//!
//! let script = compute_diff(&["one", "two", "three"], &["one", "three", "four"]);
//!
//! assert_eq!(script[1], EditOp::Remove { line: "two".into(), index_a: 2 });
//! assert_eq!(script[3], EditOp::Add { line: "four".into(), index_b: 3 });
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod engine;
pub mod error;
pub mod lines;
pub mod render;
pub mod source;
pub mod style;

// Re-exports for convenience
pub use config::{RenderConfig, Theme};
pub use engine::{compute_diff, diff_text, DiffStats, EditKind, EditOp, EditScript, LcsTable};
pub use error::DiffError;
pub use lines::{split_lines, Comparison};
pub use render::{rows, DiffRow, Marker, OutputBuffer};
pub use style::{Modifiers, Rgb, Style};
