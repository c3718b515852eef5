//! The position on the board, stored from the point of view of the side to move.

use crate::bitboard::{self, Bitboard};
use crate::error::InvalidBoardError;
use crate::point::Point;
use crate::{utils, EDGE_LENGTH};
use std::fmt;

// Positional weight classes.
const C: i32 = 6; // corner
const B: i32 = 3; // edge, and stable interior diagonals
const G: i32 = 1; // good interior
const R: i32 = 2; // risky interior, next to an edge

/// Share of a cell's weight credited to the side that does not own it, in percent.
const BACK_PENALTY_PERCENT: i32 = 20;

#[rustfmt::skip]
const WEIGHTS: [[i32; EDGE_LENGTH]; EDGE_LENGTH] = [
    //  0  1  2  3  4  5  6  7
    [C, B, B, B, B, B, B, C], // 0
    [B, B, R, R, R, R, B, B], // 1
    [B, R, B, G, G, B, R, B], // 2
    [B, R, G, B, B, G, R, B], // 3
    [B, R, G, B, B, G, R, B], // 4
    [B, R, B, G, G, B, R, B], // 5
    [B, B, R, R, R, R, B, B], // 6
    [C, B, B, B, B, B, B, C], // 7
];

/// What occupies a single cell, relative to the side to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Mine,
    Theirs,
    /// Also returned for the black hole.
    Empty,
}

/// Positional weights of both sides, as computed by [`BoardState::score`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Score {
    pub mine: i32,
    /// Never below 1.
    pub theirs: i32,
}

/// A complete position: the pieces of the side to move ("mine"), the pieces of
/// the other side ("theirs"), and the black hole.
///
/// Invariants: the two bitboards never share a cell, and neither ever has the
/// black hole set. [`BoardState::place`] does not check legality; go through
/// [`crate::engine`] to play moves.
#[derive(Clone, Debug)]
pub struct BoardState {
    mine: Bitboard,
    theirs: Bitboard,
    obstacle: Point,
    labels: (char, char),
}

impl BoardState {
    /// The starting position for a game with the black hole at `obstacle`,
    /// seen by the side that moves first.
    ///
    /// Panics if the black hole is one of the four starting cells.
    pub fn new(obstacle: Point) -> Self {
        Self::from_bitboards(bitboard::FIRST_START, bitboard::SECOND_START, obstacle)
            .expect("the black hole cannot be a starting cell")
    }

    /// Build an arbitrary position, checking the bitboard invariants.
    pub fn from_bitboards(
        mine: Bitboard,
        theirs: Bitboard,
        obstacle: Point,
    ) -> Result<Self, InvalidBoardError> {
        if mine.intersects(theirs) {
            return Err(InvalidBoardError::Overlapping);
        }
        if (mine | theirs).intersects(obstacle.to_onehot()) {
            return Err(InvalidBoardError::ObstacleOccupied);
        }

        Ok(Self {
            mine,
            theirs,
            obstacle,
            labels: ('B', 'W'),
        })
    }

    #[inline]
    pub fn mine(&self) -> Bitboard {
        self.mine
    }

    #[inline]
    pub fn theirs(&self) -> Bitboard {
        self.theirs
    }

    #[inline]
    pub fn obstacle(&self) -> Point {
        self.obstacle
    }

    /// Display labels for (mine, theirs).
    #[inline]
    pub fn labels(&self) -> (char, char) {
        self.labels
    }

    /// Cells that are empty and may be played on: everything but the pieces
    /// and the black hole.
    #[inline]
    pub fn open_mask(&self) -> Bitboard {
        !(self.mine | self.theirs | self.obstacle.to_onehot())
    }

    /// Take `point` for the side to move, removing any opposing piece there.
    #[inline]
    pub fn place(&mut self, point: Point) {
        let mask = point.to_onehot();
        self.mine |= mask;
        self.theirs &= !mask;
    }

    /// Look up a single cell.
    #[inline]
    pub fn get(&self, point: Point) -> Cell {
        let mask = point.to_onehot();
        if self.mine.intersects(mask) {
            Cell::Mine
        } else if self.theirs.intersects(mask) {
            Cell::Theirs
        } else {
            Cell::Empty
        }
    }

    /// Positional evaluation used at search leaves.
    ///
    /// Each occupied cell credits its owner with the cell weight. The other side
    /// receives a back penalty of 20% of that weight (rounded toward zero): added
    /// to "mine" for cells "theirs" holds, subtracted from "theirs" for cells
    /// "mine" holds. The second component is floored at 1.
    pub fn score(&self) -> Score {
        let mut mine = 0;
        let mut theirs = 0;

        for point in Point::all() {
            let weight = WEIGHTS[usize::from(point.x)][usize::from(point.y)];
            let back_penalty = weight * BACK_PENALTY_PERCENT / 100;
            match self.get(point) {
                Cell::Mine => {
                    mine += weight;
                    theirs -= back_penalty;
                }
                Cell::Theirs => {
                    theirs += weight;
                    mine += back_penalty;
                }
                Cell::Empty => {}
            }
        }

        Score {
            mine,
            theirs: theirs.max(1),
        }
    }

    /// Raw piece counts for (mine, theirs).
    #[inline]
    pub fn stone_count(&self) -> (u8, u8) {
        (self.mine.count_occupied(), self.theirs.count_occupied())
    }

    /// Hand the move to the other side: exchange "mine" and "theirs".
    #[inline]
    pub fn swap_perspective(&mut self) {
        std::mem::swap(&mut self.mine, &mut self.theirs);
        self.labels = (self.labels.1, self.labels.0);
    }

    /// Whether `other` shows the same physical board, whichever side it sees it from.
    pub fn states_equal(&self, other: &BoardState) -> bool {
        (self.mine == other.mine && self.theirs == other.theirs)
            || (self.mine == other.theirs && self.theirs == other.mine)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            Point::all().map(|point| match self.get(point) {
                _ if point == self.obstacle => 'O',
                Cell::Mine => self.labels.0,
                Cell::Theirs => self.labels.1,
                Cell::Empty => '.',
            }),
            f,
        )
    }
}
