//! Board geometry: the eight scan directions and the bounds check.

use crate::point::Point;
use crate::EDGE_LENGTH;

/// A single step between neighbouring cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    /// The eight compass directions, in clockwise order starting from the upper-left.
    pub const ALL: [Direction; 8] = [
        Direction { dx: -1, dy: -1 },
        Direction { dx: -1, dy: 0 },
        Direction { dx: -1, dy: 1 },
        Direction { dx: 0, dy: 1 },
        Direction { dx: 1, dy: 1 },
        Direction { dx: 1, dy: 0 },
        Direction { dx: 1, dy: -1 },
        Direction { dx: 0, dy: -1 },
    ];

    /// How far one step moves a bit index.
    #[inline]
    pub fn bit_offset(self) -> i32 {
        i32::from(self.dx) * EDGE_LENGTH as i32 + i32::from(self.dy)
    }
}

/// Returns whether `(x, y)` is on the board.
#[inline]
pub fn in_bounds(x: i32, y: i32) -> bool {
    let edge = EDGE_LENGTH as i32;
    x >= 0 && x < edge && y >= 0 && y < edge
}

/// Returns whether a scan may step onto `(x, y)`: it must be on the board and
/// must not be the black hole.
#[inline]
pub fn is_open(x: i32, y: i32, obstacle: Point) -> bool {
    in_bounds(x, y) && !(x == i32::from(obstacle.x) && y == i32::from(obstacle.y))
}
