//! Error types shared by the board and the agents.

use derive_more::{Display, Error};

/// Raised when the board has no playable empty cell left: the game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "game over: no empty cells remain")]
pub struct GameOver;

/// Reasons a pair of bitboards cannot form a [`BoardState`](crate::BoardState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum InvalidBoardError {
    #[display(fmt = "both sides occupy the same cell")]
    Overlapping,
    #[display(fmt = "a piece occupies the black hole")]
    ObstacleOccupied,
}
