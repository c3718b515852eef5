//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the move generator against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::engine;
use crate::point::Point;
use crate::state::BoardState;

/// Count the leaves `depth` plies below the starting position, with the black
/// hole at `obstacle`. A forced pass counts as a ply.
pub fn run_perft(obstacle: Point, depth: u64) -> u64 {
    leaves_below(BoardState::new(obstacle), depth, false)
}

fn leaves_below(state: BoardState, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = match engine::available_turns(&state) {
        Ok(moves) => moves,
        // Board is full: game is over
        Err(_) => return 1,
    };

    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        let mut next = state;
        next.swap_perspective();
        return leaves_below(next, depth - 1, true);
    }

    all_moves
        .map(|mv| {
            let mut next = state.clone();
            engine::make_turn(&mut next, mv);
            next.swap_perspective();
            leaves_below(next, depth - 1, false)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner() -> Point {
        Point::new(0, 0).unwrap()
    }

    #[test]
    fn perft_01() {
        assert_eq!(run_perft(corner(), 1), 4);
    }

    #[test]
    fn perft_02() {
        assert_eq!(run_perft(corner(), 2), 12);
    }

    #[test]
    fn perft_03() {
        assert_eq!(run_perft(corner(), 3), 56);
    }

    #[test]
    fn perft_blocked_opening() {
        assert_eq!(run_perft(Point::new(2, 4).unwrap(), 1), 3);
    }
}
