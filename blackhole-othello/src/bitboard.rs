//! Low-level bitboard operations.
//!
//! A [`Bitboard`] holds one bit per cell. Bit `x * 8 + y` stands for the cell
//! at row `x`, column `y`, so the least significant bit is the upper-left
//! corner and each byte is one row.

use crate::geometry::Direction;
use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on the board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(pub u64);

/// Starting bitboard for the side that moves first: (3, 3) and (4, 4).
pub const FIRST_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// Starting bitboard for the side that moves second: (3, 4) and (4, 3).
pub const SECOND_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

/// Every cell except column 0.
const NOT_FIRST_COLUMN: u64 = 0xfefe_fefe_fefe_fefe;

/// Every cell except column 7.
const NOT_LAST_COLUMN: u64 = 0x7f7f_7f7f_7f7f_7f7f;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// A bitboard with no cells set.
    pub const EMPTY: Self = Self(0);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if every bit of `other` is also set here.
    #[inline]
    pub fn contains(self, other: Bitboard) -> bool {
        self.0 & other.0 == other.0
    }

    /// Return true if the two bitboards share at least one cell.
    #[inline]
    pub fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// Move every set cell one step along `dir`, dropping cells that leave the board.
    #[inline]
    pub fn shift(self, dir: Direction) -> Self {
        let offset = dir.bit_offset();
        let shifted = if offset >= 0 {
            self.0 << offset
        } else {
            self.0 >> -offset
        };

        // A horizontal step wraps into the neighbouring row; clip the far column.
        let wrap_mask = match dir.dy {
            1 => NOT_FIRST_COLUMN,
            -1 => NOT_LAST_COLUMN,
            _ => !0,
        };

        Self(shifted & wrap_mask)
    }
}

/// Compute a mask of the legal moves for the active player.
///
/// `open` is the set of cells a piece may be placed on; the black hole must not
/// be part of it, and must not be set in `active` or `opponent` either, which
/// makes it stop every run the same way the board edge does.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard, open: Bitboard) -> Bitboard {
    let mut moves = Bitboard::EMPTY;

    for &dir in Direction::ALL.iter() {
        // Smear our pieces across adjacent opponent runs. A run is at most six long.
        let mut run = active.shift(dir) & opponent;
        for _ in 0..5 {
            run |= run.shift(dir) & opponent;
        }

        moves |= run.shift(dir) & open;
    }

    moves
}

/// Compute the opponent cells flipped by placing a piece on `move_mask`.
/// `move_mask` must be one-hot.
#[inline]
pub fn get_flip_mask(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    let mut flips = Bitboard::EMPTY;

    for &dir in Direction::ALL.iter() {
        let mut run = Bitboard::EMPTY;
        let mut cursor = move_mask.shift(dir);
        while cursor.intersects(opponent) {
            run |= cursor;
            cursor = cursor.shift(dir);
        }

        // The run only counts if our own piece closes it.
        if cursor.intersects(active) {
            flips |= run;
        }
    }

    flips
}

/// Iterator for the bits in a [`Bitboard`], starting from bit 0.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    next: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.0 & (1u64 << self.next) != 0;
        self.next += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            next: 0,
            bitboard: self,
        }
    }
}
