//! A slow, cell-by-cell implementation of the capture rule, used to check the
//! bitboard engine.

use crate::geometry::{self, Direction};
use crate::point::Point;
use crate::state::{BoardState, Cell};

/// The cells captured in direction `dir` by placing on `from`, walking one
/// cell at a time. Empty unless an opponent run is closed by one of our pieces.
fn run_in_direction(state: &BoardState, from: Point, dir: Direction) -> Vec<Point> {
    let obstacle = state.obstacle();
    let mut run = Vec::new();
    let (mut x, mut y) = (i32::from(from.x), i32::from(from.y));

    loop {
        x += i32::from(dir.dx);
        y += i32::from(dir.dy);
        if !geometry::is_open(x, y, obstacle) {
            return Vec::new();
        }

        let here = Point {
            x: x as u8,
            y: y as u8,
        };
        match state.get(here) {
            Cell::Theirs => run.push(here),
            Cell::Mine if !run.is_empty() => return run,
            _ => return Vec::new(),
        }
    }
}

/// Every cell captured by placing on `point`, in no particular order.
pub fn reference_captures(state: &BoardState, point: Point) -> Vec<Point> {
    Direction::ALL
        .iter()
        .flat_map(|&dir| run_in_direction(state, point, dir))
        .collect()
}

/// Every legal move for the side to move, found by trying each cell in each direction.
pub fn reference_moves(state: &BoardState) -> Vec<Point> {
    Point::all()
        .filter(|&point| {
            point != state.obstacle()
                && state.get(point) == Cell::Empty
                && !reference_captures(state, point).is_empty()
        })
        .collect()
}
