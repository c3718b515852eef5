//! Game rules: legal-move enumeration and move application.
//!
//! Both operations work on a [`BoardState`] from the perspective of the side
//! to move. The black hole is never part of the open cells and is never
//! occupied, so it stops a capture run exactly like the edge of the board.

use crate::bitboard::{self, Bitboard};
use crate::error::GameOver;
use crate::point::{MoveList, Point};
use crate::state::{BoardState, Cell};

/// List the legal moves for the side to move, in lexicographic order.
///
/// Returns `Err(GameOver)` when no playable cell is empty. An empty list means
/// the side to move must pass while the game goes on.
pub fn available_turns(state: &BoardState) -> Result<MoveList, GameOver> {
    let open = state.open_mask();
    if open.is_empty() {
        return Err(GameOver);
    }

    Ok(MoveList::from(bitboard::get_move_mask(
        state.mine(),
        state.theirs(),
        open,
    )))
}

/// The opposing pieces that placing on `point` would capture.
/// Empty if `point` is occupied or is the black hole.
pub fn capture_mask(state: &BoardState, point: Point) -> Bitboard {
    if !state.open_mask().contains(point.to_onehot()) {
        return Bitboard::EMPTY;
    }

    bitboard::get_flip_mask(state.mine(), state.theirs(), point.to_onehot())
}

/// Place a piece on `point` for the side to move and flip every captured run.
///
/// Silently does nothing when `point` is occupied or is the black hole, so
/// playing the same move twice leaves the board untouched the second time.
/// Placing on an empty cell that captures nothing still places the piece.
pub fn make_turn(state: &mut BoardState, point: Point) {
    if point == state.obstacle() || state.get(point) != Cell::Empty {
        return;
    }

    let flips = capture_mask(state, point);
    state.place(point);
    for captured in MoveList::from(flips) {
        state.place(captured);
    }
}
