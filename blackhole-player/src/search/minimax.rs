//! Depth-limited minimax with alpha-beta pruning.

use super::incumbent::{SharedSearch, Standing};
use arrayvec::ArrayVec;
use blackhole_othello::{engine, BoardState, Point};
use log::trace;
use std::sync::Arc;

/// Root candidates; an 8x8 board never has more legal moves than cells.
pub type Candidates = ArrayVec<[Point; 64]>;

/// The state after `mv`, seen by the side that has to answer it.
fn child(state: &BoardState, mv: Point) -> BoardState {
    let mut next = state.clone();
    engine::make_turn(&mut next, mv);
    next.swap_perspective();
    next
}

/// Heuristic value of a leaf: the positional weight of the root side.
/// `root_to_move` says whether "mine" in `state` is the root side.
pub fn root_value(state: &BoardState, root_to_move: bool) -> i32 {
    if root_to_move {
        state.score().mine
    } else {
        let mut flipped = state.clone();
        flipped.swap_perspective();
        flipped.score().mine
    }
}

/// One complete search below a root position, run as a single unit of work.
pub struct RootSearch {
    pub root: BoardState,
    pub candidates: Candidates,
    /// Ply budget, counting the root move.
    pub depth: u8,
    pub shared: Arc<SharedSearch>,
}

impl RootSearch {
    /// Search every candidate to full depth and return the index and value of
    /// the best one, or `None` if the search was cancelled first.
    ///
    /// Before the deep search starts, each candidate gets a preliminary static
    /// score so an incumbent exists as early as possible.
    pub fn run(&self) -> Option<(usize, i32)> {
        for (index, &mv) in self.candidates.iter().enumerate() {
            if self.shared.is_cancelled() {
                return None;
            }

            let score = root_value(&child(&self.root, mv), false);
            self.shared.incumbent.offer(Standing {
                index,
                score,
                settled: false,
            });
        }

        let mut best: Option<(usize, i32)> = None;
        let mut alpha = i32::MIN;

        for (index, &mv) in self.candidates.iter().enumerate() {
            let score = self.minimax(&child(&self.root, mv), self.depth - 1, alpha, i32::MAX)?;
            trace!("candidate {} scored {}", mv, score);

            self.shared.incumbent.offer(Standing {
                index,
                score,
                settled: true,
            });

            // Ties keep the earliest candidate.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
                alpha = alpha.max(score);
            }
        }

        best
    }

    /// Value of `state` for the root side, `depth` plies from the search horizon.
    /// Returns `None` as soon as the search is cancelled.
    pub fn minimax(
        &self,
        state: &BoardState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Option<i32> {
        if self.shared.is_cancelled() {
            return None;
        }
        self.shared.count_node();

        let maximizing = match (self.depth - depth) % 2 {
            0 => true,
            1 => false,
            _ => unreachable!("node is neither maximizing nor minimizing"),
        };

        if depth == 0 {
            return Some(root_value(state, maximizing));
        }

        // Full board and forced pass both end the line here.
        let moves = match engine::available_turns(state) {
            Ok(moves) if !moves.is_empty() => moves,
            _ => return Some(root_value(state, maximizing)),
        };

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in moves {
                let eval = self.minimax(&child(state, mv), depth - 1, alpha, beta)?;
                max_eval = max_eval.max(eval);
                alpha = alpha.max(max_eval);
                if beta <= alpha {
                    break;
                }
            }
            Some(max_eval)
        } else {
            let mut min_eval = i32::MAX;
            for mv in moves {
                let eval = self.minimax(&child(state, mv), depth - 1, alpha, beta)?;
                min_eval = min_eval.min(eval);
                beta = beta.min(min_eval);
                if beta <= alpha {
                    break;
                }
            }
            Some(min_eval)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::IteratorRandom;
    use rand::SeedableRng;

    /// Plain minimax without pruning, for comparison.
    fn exhaustive(state: &BoardState, plies_left: u8, root_to_move: bool) -> i32 {
        let moves = match engine::available_turns(state) {
            Ok(moves) if plies_left > 0 && !moves.is_empty() => moves,
            _ => return root_value(state, root_to_move),
        };

        let values = moves.map(|mv| exhaustive(&child(state, mv), plies_left - 1, !root_to_move));
        if root_to_move {
            values.max().unwrap()
        } else {
            values.min().unwrap()
        }
    }

    fn search(state: &BoardState, depth: u8) -> RootSearch {
        RootSearch {
            root: state.clone(),
            candidates: engine::available_turns(state).unwrap().collect(),
            depth,
            shared: Arc::new(SharedSearch::new()),
        }
    }

    /// A position a few random moves into a game.
    fn midgame(seed: u64, plies: usize) -> BoardState {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = BoardState::new(Point::new(1, 6).unwrap());
        for _ in 0..plies {
            if let Some(mv) = engine::available_turns(&state).unwrap().choose(&mut rng) {
                engine::make_turn(&mut state, mv);
            }
            state.swap_perspective();
        }
        state
    }

    #[test]
    fn root_value_is_from_root_side() {
        let state = BoardState::new(Point::new(0, 0).unwrap());
        let mut moved = child(&state, Point::new(2, 4).unwrap());
        let for_root = root_value(&moved, false);

        // (2,4) weighs 1 and flips (3,4), which weighs 3.
        moved.swap_perspective();
        assert_eq!(for_root, moved.score().mine);
        assert_eq!(for_root, state.score().mine + 4);
    }

    #[test]
    fn pruning_matches_exhaustive_minimax() {
        for seed in 0..12 {
            let state = midgame(seed, 10);
            if engine::available_turns(&state).map_or(true, |moves| moves.is_empty()) {
                continue;
            }

            for depth in 1..=3 {
                let search = search(&state, depth);
                let (index, value) = search.run().unwrap();

                let expected = search
                    .candidates
                    .iter()
                    .map(|&mv| exhaustive(&child(&state, mv), depth - 1, false))
                    .max()
                    .unwrap();
                assert_eq!(value, expected, "seed {} depth {}", seed, depth);
                assert_eq!(
                    exhaustive(&child(&state, search.candidates[index]), depth - 1, false),
                    expected
                );
            }
        }
    }

    #[test]
    fn completed_search_settles_incumbent() {
        let state = midgame(5, 6);
        let search = search(&state, 2);
        let (index, value) = search.run().unwrap();

        let standing = search.shared.incumbent.snapshot().unwrap();
        assert!(standing.settled);
        assert_eq!((standing.index, standing.score), (index, value));
        assert!(search.shared.nodes() > 0);
    }

    #[test]
    fn cancelled_search_stops_immediately() {
        let state = midgame(1, 4);
        let search = search(&state, 6);
        search.shared.cancel();
        assert_eq!(search.run(), None);
        assert_eq!(search.shared.nodes(), 0);
    }
}
