//! # spor-rs: Anchored Metadata for Source Files
//!
//! Attach metadata to a region of text in a file and keep it attached while
//! the file is edited.
//!
//! ## Design Principles
//!
//! 1. **Anchors are values**: `Anchor` and `Context` are never mutated; an
//!    update returns a new anchor
//! 2. **Alignment is generic**: `alignment` knows nothing about files, only
//!    element slices, a score function and a gap cost
//! 3. **Lazy results**: alignments and validation diffs are single-pass
//!    iterators, so taking the first one stays cheap
//! 4. **Store-agnostic**: batch operations go through the `AnchorStore` trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spor::{Anchor, update_from_text};
//!
//! # fn example() -> spor::Result<()> {
//! let anchor = Anchor::from_text(
//!     "/src/lib.rs",
//!     "fn main() { todo!() }",
//!     12,
//!     7,
//!     4,
//!     serde_json::json!({"note": "replace this"}),
//! )?;
//!
//! let moved = update_from_text(&anchor, "// header\nfn main() { todo!() }")?;
//! assert_eq!(moved.offset(), 22);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod alignment;
pub mod anchor;
pub mod store;
pub mod updating;
pub mod validation;

// ============================================================================
// Re-exports
// ============================================================================

pub use alignment::{align, Alignment, Alignments, Correspondence, Direction, Matrix, SimpleScorer};
pub use anchor::{Anchor, Context, Metadata, Span};
pub use store::{AnchorId, AnchorStore, MemoryStore};
pub use updating::{update, update_from_reader, update_from_text, update_store, UpdateReport, Updater};
pub use validation::{anchor_diff, validate, AnchorDiff};

// ============================================================================
// Error Types
// ============================================================================

/// Failure to cut a context out of file contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextReadError {
    #[error("unable to read topic of width {width} at offset {offset} (only {available} available)")]
    Topic { offset: usize, width: usize, available: usize },

    #[error("unable to read before-text of width {width} at offset {offset} (only {available} available)")]
    Before { offset: usize, width: usize, available: usize },
}

/// Failure to re-locate an anchor in its updated file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignmentError {
    #[error("no alignments between anchor context and updated source")]
    NoAlignments,

    #[error("best alignment does not map topic to updated source")]
    TopicNotMapped,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid matrix dimensions {rows}x{cols}: must be non-negative")]
    InvalidDimension { rows: i64, cols: i64 },

    #[error("context read error: {0}")]
    ContextRead(#[from] ContextReadError),

    #[error("alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    #[error("anchor file path must be absolute: {}", .0.display())]
    Path(std::path::PathBuf),

    #[error("anchor not found: {0}")]
    NotFound(AnchorId),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for per-anchor drift failures that a batch run should skip past.
    pub fn is_alignment(&self) -> bool {
        matches!(self, Error::Alignment(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
