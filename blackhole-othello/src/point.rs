//! Code for working with [`Point`]s on the board.

use crate::bitboard::Bitboard;
use crate::geometry::{self, Direction};
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

const ROW_LETTERS: &str = "ABCDEFGH";
const COLUMN_DIGITS: &str = "12345678";

/// A cell on the board: row `x`, column `y`.
/// Orders lexicographically, `x` first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

/// A set of points on the board, which can be iterated to retrieve them
/// in lexicographic order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(Bitboard);

impl Point {
    /// Construct a point, or `None` if the coordinates are off the board.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if usize::from(x) < EDGE_LENGTH && usize::from(y) < EDGE_LENGTH {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Convert from a bit index `x * 8 + y`.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!(usize::from(index) < crate::NUM_SPACES);
        Self {
            x: index / EDGE_LENGTH as u8,
            y: index % EDGE_LENGTH as u8,
        }
    }

    /// Convert into a bit index `x * 8 + y`.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.x * EDGE_LENGTH as u8 + self.y
    }

    /// The bitboard with only this point set.
    #[inline]
    pub fn to_onehot(self) -> Bitboard {
        Bitboard(1 << self.to_index())
    }

    /// Step one cell along `dir`, or `None` when that leaves the board.
    pub fn offset(self, dir: Direction) -> Option<Self> {
        let x = i32::from(self.x) + i32::from(dir.dx);
        let y = i32::from(self.y) + i32::from(dir.dy);
        if geometry::in_bounds(x, y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over every point on the board in lexicographic order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..crate::NUM_SPACES as u8).map(Point::from_index)
    }
}

/// Convert this [`Point`] into string notation: row letter, then 1-based column ("C5").
impl fmt::Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row = ROW_LETTERS
            .chars()
            .nth(usize::from(self.x))
            .ok_or(fmt::Error)?;
        let col = COLUMN_DIGITS
            .chars()
            .nth(usize::from(self.y))
            .ok_or(fmt::Error)?;
        f.write_char(row)?;
        f.write_char(col)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid point string")]
pub struct ParsePointError;

/// Build a [`Point`] from its string notation ("C5").
impl std::str::FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row_str = chars.next().ok_or(ParsePointError)?.to_ascii_uppercase();
        let x = ROW_LETTERS.find(row_str).ok_or(ParsePointError)?;
        let y = chars
            .next()
            .ok_or(ParsePointError)?
            .to_digit(10)
            .ok_or(ParsePointError)? as usize;

        if y == 0 || chars.next() != None {
            return Err(ParsePointError);
        }

        Point::new(x as u8, (y - 1) as u8).ok_or(ParsePointError)
    }
}

impl MoveList {
    /// Returns whether `point` is in this list.
    pub fn contains(self, point: Point) -> bool {
        self.0.contains(point.to_onehot())
    }

    /// The first point in canonical order, if any.
    pub fn first(mut self) -> Option<Point> {
        self.next()
    }

    /// Returns whether the list has no points.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl ExactSizeIterator for MoveList {}

impl Iterator for MoveList {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let index = bitboard.trailing_zeros() as u8;
        self.0 ^= Bitboard(1 << index);

        Some(Point::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn point(x: u8, y: u8) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn point_new_rejects_off_board() {
        assert_eq!(Point::new(7, 7), Some(Point { x: 7, y: 7 }));
        assert_eq!(Point::new(8, 0), None);
        assert_eq!(Point::new(0, 8), None);
    }

    #[test]
    fn point_index_round_trip() {
        assert_eq!(point(0, 0).to_index(), 0);
        assert_eq!(point(7, 7).to_index(), 63);
        assert_eq!(Point::from_index(27), point(3, 3));
    }

    #[test]
    fn point_order_is_lexicographic() {
        assert!(point(0, 7) < point(1, 0));
        assert!(point(3, 2) < point(3, 5));
    }

    #[test]
    fn point_offset() {
        let up_left = Direction { dx: -1, dy: -1 };
        assert_eq!(point(3, 3).offset(up_left), Some(point(2, 2)));
        assert_eq!(point(0, 3).offset(up_left), None);
    }

    #[test]
    fn point_from_str_success() {
        assert_eq!(Point::from_str("A1"), Ok(point(0, 0)));
        assert_eq!(Point::from_str("h8"), Ok(point(7, 7)));
        assert_eq!(Point::from_str("C5"), Ok(point(2, 4)));
    }

    #[test]
    fn point_from_str_fail() {
        assert_eq!(Point::from_str(""), Err(ParsePointError));
        assert_eq!(Point::from_str("A12"), Err(ParsePointError));
        assert_eq!(Point::from_str("AA"), Err(ParsePointError));
        assert_eq!(Point::from_str("A9"), Err(ParsePointError));
        assert_eq!(Point::from_str("A0"), Err(ParsePointError));
        assert_eq!(Point::from_str("I5"), Err(ParsePointError));
    }

    #[test]
    fn point_to_str() {
        assert_eq!(point(7, 7).to_string(), "H8");
        assert_eq!(point(2, 4).to_string(), "C5");
    }

    #[test]
    fn move_list_iterates_in_order() {
        let list = MoveList::from(point(5, 3).to_onehot() | point(2, 4).to_onehot());
        assert_eq!(list.len(), 2);
        assert!(list.contains(point(5, 3)));
        assert!(!list.contains(point(3, 5)));
        assert_eq!(list.first(), Some(point(2, 4)));
        assert_eq!(list.collect::<Vec<_>>(), vec![point(2, 4), point(5, 3)]);
        assert_eq!(list.to_string(), "[C5, F4]");
    }
}
