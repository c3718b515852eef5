use crate::Agent;
use blackhole_othello::{engine, BoardState, GameOver, Point};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

/// Plays a uniformly random legal move. Useful as a baseline opponent.
pub struct RandomAgent<R = StdRng> {
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A reproducible agent for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn choose_move(&mut self, state: &mut BoardState) -> Result<Option<Point>, GameOver> {
        let choice = engine::available_turns(state)?.choose(&mut self.rng);
        if let Some(mv) = choice {
            engine::make_turn(state, mv);
        }

        Ok(choice)
    }
}
