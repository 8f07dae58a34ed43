//! Lazy enumeration of traceback paths.
//!
//! The walk is a depth-first search over the traceback matrix kept on an
//! explicit stack, so deep tables never recurse on the call stack. Out of
//! each cell it branches UP, then LEFT, then DIAGONAL, and it yields one
//! complete path per `next()`. Pathological tie patterns can make the number
//! of paths exponential; consumers should take what they need and drop the
//! iterator.

use super::direction::Direction;
use super::matrix::Cell;
use super::score_matrix::TracebackMatrix;

/// One traceback: `(cell, direction)` steps in forward order, i.e. from the
/// cell nearest the boundary up to the starting cell. The terminating
/// zero-score cell is not part of the path.
pub type Traceback = Vec<(Cell, Direction)>;

/// Paths out of `start`, excluding the empty "no movement" path.
pub fn tracebacks(matrix: &TracebackMatrix, start: Cell) -> impl Iterator<Item = Traceback> + '_ {
    Tracebacks::new(matrix, start).filter(|tb| !tb.is_empty())
}

#[derive(Debug)]
struct Frame {
    cell: Cell,
    /// Directions out of `cell` not yet explored.
    pending: Direction,
    /// `cell` is a zero-score terminator.
    terminal: bool,
}

/// Walk state that does not borrow the matrix.
///
/// [`Alignments`](super::Alignments) owns its matrix and drives a walk per
/// maximal cell, so the state and the matrix have to live apart.
#[derive(Debug)]
pub(crate) struct TracebackWalk {
    stack: Vec<Frame>,
    /// `steps[i]` is the move taken out of `stack[i]`.
    steps: Vec<(Cell, Direction)>,
}

impl TracebackWalk {
    pub(crate) fn new(matrix: &TracebackMatrix, start: Cell) -> Self {
        let mut walk = Self { stack: Vec::new(), steps: Vec::new() };
        walk.push(matrix, start);
        walk
    }

    fn push(&mut self, matrix: &TracebackMatrix, cell: Cell) {
        let pending = *matrix.get(cell);
        self.stack.push(Frame { cell, pending, terminal: pending.is_empty() });
    }

    fn pop(&mut self) {
        self.stack.pop();
        self.steps.pop();
    }

    /// Advance to the next complete path, possibly the empty one.
    pub(crate) fn next_path(&mut self, matrix: &TracebackMatrix) -> Option<Traceback> {
        loop {
            let frame = self.stack.last_mut()?;

            if frame.terminal {
                let path = self.steps.iter().rev().copied().collect();
                self.pop();
                return Some(path);
            }

            let next = Direction::TRACEBACK_ORDER
                .into_iter()
                .find(|d| frame.pending.contains(*d));

            match next {
                Some(direction) => {
                    frame.pending.remove(direction);
                    let from = frame.cell;
                    self.steps.push((from, direction));
                    self.push(matrix, direction.step(from));
                }
                None => self.pop(),
            }
        }
    }
}

/// Single-pass iterator over every traceback from one cell, including the
/// empty path when the cell itself is a terminator.
#[derive(Debug)]
pub struct Tracebacks<'m> {
    matrix: &'m TracebackMatrix,
    walk: TracebackWalk,
}

impl<'m> Tracebacks<'m> {
    pub fn new(matrix: &'m TracebackMatrix, start: Cell) -> Self {
        Self { matrix, walk: TracebackWalk::new(matrix, start) }
    }
}

impl Iterator for Tracebacks<'_> {
    type Item = Traceback;

    fn next(&mut self) -> Option<Traceback> {
        self.walk.next_path(self.matrix)
    }
}
