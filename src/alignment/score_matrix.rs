//! Score and traceback table construction (Smith–Waterman recurrence).

use super::direction::Direction;
use super::matrix::Matrix;

/// Alignment scores, one row per element of `a` plus a zero boundary row.
pub type ScoreMatrix = Matrix<i64>;

/// Direction flags parallel to a [`ScoreMatrix`].
pub type TracebackMatrix = Matrix<Direction>;

/// Fill the score and traceback tables for `a` against `b`.
///
/// Both tables are `(a.len() + 1) × (b.len() + 1)`; row 0 and column 0 stay
/// at score 0 / `NONE`. Every direction tying for a cell's maximum is
/// recorded. A cell whose maximum is 0 keeps `NONE` only, so tracebacks
/// terminate there. Gaps are always charged as `gap_penalty(1)` per step.
pub fn build_score_matrix<A, B, S, G>(
    a: &[A],
    b: &[B],
    score: S,
    gap_penalty: G,
) -> (ScoreMatrix, TracebackMatrix)
where
    S: Fn(&A, &B) -> i64,
    G: Fn(usize) -> i64,
{
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut scores = ScoreMatrix::filled(rows, cols, 0);
    let mut traceback = TracebackMatrix::filled(rows, cols, Direction::NONE);
    let gap = gap_penalty(1);

    for row in 1..rows {
        for col in 1..cols {
            let candidates = [
                (scores[(row - 1, col - 1)] + score(&a[row - 1], &b[col - 1]), Direction::DIAGONAL),
                (scores[(row - 1, col)] - gap, Direction::UP),
                (scores[(row, col - 1)] - gap, Direction::LEFT),
            ];

            let max_score = candidates.iter().map(|(s, _)| *s).fold(0, i64::max);
            if max_score <= 0 {
                continue;
            }

            scores[(row, col)] = max_score;
            traceback[(row, col)] = candidates
                .iter()
                .filter(|(s, _)| *s == max_score)
                .fold(Direction::NONE, |acc, (_, d)| acc | *d);
        }
    }

    (scores, traceback)
}
