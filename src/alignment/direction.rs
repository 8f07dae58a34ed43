//! Traceback direction flags.

use super::matrix::Cell;

bitflags::bitflags! {
    /// Directions a traceback may take out of a cell.
    ///
    /// A populated cell holds the OR of every direction whose candidate
    /// reached the cell's maximal score. An empty set (`NONE`) marks a
    /// zero-score cell where tracebacks stop.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Direction: u8 {
        const NONE = 0x00;
        const DIAGONAL = 0x01;
        const UP = 0x02;
        const LEFT = 0x04;
    }
}

impl Direction {
    /// Order in which tracebacks branch out of a cell.
    pub const TRACEBACK_ORDER: [Direction; 3] = [Direction::UP, Direction::LEFT, Direction::DIAGONAL];

    /// The cell a single-direction step leads to.
    ///
    /// Panics on a multi-bit or empty direction, or when stepping off the
    /// grid, since the builder never records such moves.
    pub fn step(self, (row, col): Cell) -> Cell {
        if self == Direction::DIAGONAL {
            (row - 1, col - 1)
        } else if self == Direction::UP {
            (row - 1, col)
        } else if self == Direction::LEFT {
            (row, col - 1)
        } else {
            panic!("cannot step along compound direction {self:?}")
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}
