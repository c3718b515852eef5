//! `blackhole-othello` implements Othello on an 8x8 board with one permanently
//! blocked cell, the "black hole".
//!
//! This package is organized in layers:
//!
//!  - [`bitboard`] contains the raw bit-twiddling operations on 64-bit cell sets.
//!  - [`geometry`] holds the board directions and the bounds check that treats
//!    the black hole as a wall.
//!  - [`BoardState`] stores a position from the perspective of the side to move
//!    and knows how to score it.
//!  - [`engine`] enumerates legal moves and applies captures to a [`BoardState`].
//!
//! Cells are addressed by [`Point`]s `(x, y)`. The bit for a point is `x * 8 + y`,
//! so iterating a bitboard from its least significant bit yields points in
//! lexicographic order.

pub mod bitboard;
pub mod engine;
pub mod geometry;
pub mod test_utils;

mod error;
mod point;
mod state;
mod utils;

pub use engine::{available_turns, make_turn};
pub use error::*;
pub use point::*;
pub use state::*;

/// The number of spaces on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on the board, including the black hole.
pub const NUM_SPACES: usize = 64;
