//! # Local Sequence Alignment
//!
//! Smith–Waterman local alignment over arbitrary element slices.
//!
//! ```text
//! a, b, score, gap ─► build_score_matrix ─► max cells ─► tracebacks ─► Alignment
//! ```
//!
//! [`align`] returns every equally-best alignment lazily. Nothing is
//! materialized past what the caller pulls, which keeps "take the first"
//! cheap even when ties explode the number of optimal paths.

pub mod direction;
pub mod matrix;
pub mod score_matrix;
pub mod scorer;
pub mod traceback;

use serde::{Deserialize, Serialize};

pub use direction::Direction;
pub use matrix::{Cell, Matrix};
pub use score_matrix::{build_score_matrix, ScoreMatrix, TracebackMatrix};
pub use scorer::SimpleScorer;
pub use traceback::{tracebacks, Traceback, Tracebacks};

use traceback::TracebackWalk;

// ============================================================================
// Alignment
// ============================================================================

/// One position of an alignment: an index into `a`, into `b`, or both.
///
/// There is no variant with neither side present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Correspondence {
    /// `a[a]` lines up with `b[b]`.
    Both { a: usize, b: usize },
    /// `a[a]` has no counterpart in `b`.
    GapInB { a: usize },
    /// `b[b]` has no counterpart in `a`.
    GapInA { b: usize },
}

impl Correspondence {
    pub fn a(&self) -> Option<usize> {
        match *self {
            Self::Both { a, .. } | Self::GapInB { a } => Some(a),
            Self::GapInA { .. } => None,
        }
    }

    pub fn b(&self) -> Option<usize> {
        match *self {
            Self::Both { b, .. } | Self::GapInA { b } => Some(b),
            Self::GapInB { .. } => None,
        }
    }

    /// `(index_in_a, index_in_b)` with `None` marking the gap side.
    pub fn pair(&self) -> (Option<usize>, Option<usize>) {
        (self.a(), self.b())
    }

    /// Translate one traceback step from matrix space to sequence space.
    fn from_step((row, col): Cell, direction: Direction) -> Self {
        if direction == Direction::UP {
            Self::GapInB { a: row - 1 }
        } else if direction == Direction::LEFT {
            Self::GapInA { b: col - 1 }
        } else {
            Self::Both { a: row - 1, b: col - 1 }
        }
    }
}

/// Correspondences in increasing order along both sequences.
pub type Alignment = Vec<Correspondence>;

/// Convert a non-empty traceback into an alignment.
pub fn traceback_to_alignment(traceback: &[(Cell, Direction)]) -> Alignment {
    traceback
        .iter()
        .map(|&(cell, direction)| Correspondence::from_step(cell, direction))
        .collect()
}

// ============================================================================
// Alignments iterator
// ============================================================================

/// Lazy, single-pass sequence of the best local alignments.
///
/// Alignments come out grouped by starting cell (row-major over the cells
/// holding the maximal score) and, within a cell, in traceback order. The
/// iterator cannot be rewound; call [`align`] again to start over.
#[derive(Debug)]
pub struct Alignments {
    score: i64,
    traceback: TracebackMatrix,
    starts: std::vec::IntoIter<Cell>,
    walk: Option<TracebackWalk>,
}

impl Alignments {
    /// Score shared by every alignment this iterator yields.
    pub fn score(&self) -> i64 {
        self.score
    }
}

impl Iterator for Alignments {
    type Item = Alignment;

    fn next(&mut self) -> Option<Alignment> {
        loop {
            if let Some(walk) = self.walk.as_mut() {
                match walk.next_path(&self.traceback) {
                    Some(tb) if tb.is_empty() => continue,
                    Some(tb) => return Some(traceback_to_alignment(&tb)),
                    None => self.walk = None,
                }
            }

            let start = self.starts.next()?;
            self.walk = Some(TracebackWalk::new(&self.traceback, start));
        }
    }
}

/// Align `a` against `b`, yielding every alignment that reaches the global
/// maximum of the score matrix.
///
/// `score` rates a pair of elements; `gap_penalty` is the non-negative cost
/// of a gap and is only ever called with a length of 1. When either input is
/// empty, or nothing scores above zero, no alignment is produced.
pub fn align<A, B, S, G>(a: &[A], b: &[B], score: S, gap_penalty: G) -> Alignments
where
    S: Fn(&A, &B) -> i64,
    G: Fn(usize) -> i64,
{
    let (scores, traceback) = build_score_matrix(a, b, score, gap_penalty);
    let max_score = scores.values().copied().max().unwrap_or(0);

    // Zero-score cells carry no directions and yield only empty tracebacks.
    let starts: Vec<Cell> = if max_score > 0 {
        scores
            .iter()
            .filter(|(_, s)| **s == max_score)
            .map(|(cell, _)| cell)
            .collect()
    } else {
        Vec::new()
    };

    tracing::debug!(
        a_len = a.len(),
        b_len = b.len(),
        max_score,
        starts = starts.len(),
        "built alignment matrices"
    );

    Alignments {
        score: max_score,
        traceback,
        starts: starts.into_iter(),
        walk: None,
    }
}
