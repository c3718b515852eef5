use crate::Agent;
use blackhole_othello::{BoardState, GameOver, Point};
use log::info;

/// The course and result of a finished game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    /// Every turn in order, starting with the first player; `None` is a pass.
    pub moves: Vec<Option<Point>>,
    /// The final position, seen by the first player.
    pub final_state: BoardState,
    /// Final piece counts for (first player, second player).
    pub stones: (u8, u8),
}

/// Play a whole game between two agents from the starting position, `first`
/// moving first, until the board is full or neither side can move.
pub fn play_out(first: &mut dyn Agent, second: &mut dyn Agent, obstacle: Point) -> GameRecord {
    let mut state = BoardState::new(obstacle);
    let mut moves = Vec::new();
    let mut first_to_move = true;
    // The position at the start of the previous turn.
    let mut previous: Option<BoardState> = None;

    loop {
        let agent: &mut dyn Agent = if first_to_move {
            &mut *first
        } else {
            &mut *second
        };

        let start = state.clone();
        match agent.choose_move(&mut state) {
            Err(GameOver) => break,
            Ok(mv) => moves.push(mv),
        }

        state.swap_perspective();
        first_to_move = !first_to_move;

        // Every move adds a piece, so an unchanged board after a whole round
        // means both sides passed.
        if let Some(round_start) = &previous {
            if state.states_equal(round_start) {
                break;
            }
        }
        previous = Some(start);
    }

    if !first_to_move {
        state.swap_perspective();
    }

    let stones = state.stone_count();
    info!(
        "game over after {} turns: {} to {}",
        moves.len(),
        stones.0,
        stones.1
    );

    GameRecord {
        moves,
        final_state: state,
        stones,
    }
}
