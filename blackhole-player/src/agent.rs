use blackhole_othello::{BoardState, GameOver, Point};

/// Something that can take a turn in a game.
pub trait Agent {
    /// Pick a move for the side to move in `state` ("mine") and play it.
    ///
    /// Returns `Ok(None)` and leaves `state` untouched when the side to move has
    /// to pass, and `Err(GameOver)` when no empty cell is left.
    fn choose_move(&mut self, state: &mut BoardState) -> Result<Option<Point>, GameOver>;
}
