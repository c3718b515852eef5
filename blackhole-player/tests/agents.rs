//! End-to-end behaviour of the agents on hand-built positions.

use blackhole_othello::bitboard::Bitboard;
use blackhole_othello::{available_turns, BoardState, GameOver, Point};
use blackhole_player::{Agent, RandomAgent, SearchAgent, SearchConfig, SearchOutcome};
use std::time::{Duration, Instant};

fn point(x: u8, y: u8) -> Point {
    Point::new(x, y).unwrap()
}

/// Mine at (0,0), theirs at (0,1): the only legal move is (0,2).
fn single_move_position() -> BoardState {
    BoardState::from_bitboards(
        point(0, 0).to_onehot(),
        point(0, 1).to_onehot(),
        point(7, 7),
    )
    .unwrap()
}

/// Every cell except the black hole is occupied.
fn full_board() -> BoardState {
    let obstacle = point(5, 2);
    let all = !obstacle.to_onehot();
    let mine = all & Bitboard(0x5555_5555_5555_5555);
    BoardState::from_bitboards(mine, all & !mine, obstacle).unwrap()
}

#[test]
fn opening_move_raises_own_score() {
    let mut state = BoardState::new(point(0, 0));
    let legal = available_turns(&state).unwrap();
    let before = state.score().mine;

    let mv = SearchAgent::new(1).choose_move(&mut state).unwrap().unwrap();
    assert!(legal.contains(mv));
    assert!(state.score().mine > before);
}

#[test]
fn leaves_are_scored_by_own_weight() {
    // Two moves: the corner A1 flips A2 and leaves mine at 15 (theirs 5);
    // G3 flips G4..G6 and leaves mine at 14 (theirs 3). Own weight prefers A1
    // even though G3 opens the wider gap.
    let mine = point(0, 2).to_onehot() | point(6, 6).to_onehot();
    let theirs = point(0, 1).to_onehot()
        | point(6, 3).to_onehot()
        | point(6, 4).to_onehot()
        | point(6, 5).to_onehot();
    let mut state = BoardState::from_bitboards(mine, theirs, point(3, 0)).unwrap();
    let legal: Vec<Point> = available_turns(&state).unwrap().collect();
    assert_eq!(legal, vec![point(0, 0), point(6, 2)]);

    let report = SearchAgent::new(1).search(&mut state).unwrap();
    assert_eq!(report.outcome, SearchOutcome::Completed);
    assert_eq!(report.chosen, Some(point(0, 0)));
    assert_eq!(state.score().mine, 15);
}

#[test]
fn single_legal_move_skips_search() {
    let mut state = single_move_position();
    assert_eq!(available_turns(&state).unwrap().len(), 1);

    let report = SearchAgent::new(6).search(&mut state).unwrap();
    assert_eq!(report.chosen, Some(point(0, 2)));
    assert_eq!(report.outcome, SearchOutcome::Forced);
    assert_eq!(report.nodes, 0);
    assert_eq!(state.mine(), Bitboard(0b111));
}

#[test]
fn full_board_is_game_over() {
    let mut state = full_board();
    assert_eq!(available_turns(&state), Err(GameOver));
    assert_eq!(SearchAgent::new(3).choose_move(&mut state), Err(GameOver));
    assert_eq!(RandomAgent::seeded(1).choose_move(&mut state), Err(GameOver));
}

#[test]
fn forced_pass_leaves_board_alone() {
    let mine = point(0, 0).to_onehot();
    let theirs = point(7, 7).to_onehot();
    let mut state = BoardState::from_bitboards(mine, theirs, point(3, 3)).unwrap();

    let report = SearchAgent::new(4).search(&mut state).unwrap();
    assert_eq!(report.chosen, None);
    assert_eq!(report.outcome, SearchOutcome::Pass);
    assert_eq!(state.mine(), mine);
    assert_eq!(state.theirs(), theirs);
}

#[test]
fn deadline_falls_back_to_a_legal_move() {
    let mut state = BoardState::new(point(6, 6));
    let legal = available_turns(&state).unwrap();
    let config = SearchConfig::default()
        .with_depth(14)
        .with_time_budget(Duration::from_millis(1));

    let started = Instant::now();
    let report = SearchAgent::with_config(config).search(&mut state).unwrap();

    assert_eq!(report.outcome, SearchOutcome::TimedOut);
    assert!(legal.contains(report.chosen.unwrap()));
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn repeated_searches_are_independent() {
    // No state carries over between calls: the same position gives the same answer.
    let agent = SearchAgent::new(3);
    let start = BoardState::new(point(1, 1));

    let mut first = start.clone();
    let mut second = start.clone();
    let a = agent.search(&mut first).unwrap();
    let b = agent.search(&mut second).unwrap();
    assert_eq!(a.chosen, b.chosen);
    assert!(first.states_equal(&second));
}
