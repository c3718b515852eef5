//! `blackhole-player` contains the agents that play black-hole Othello.
//!
//! Every agent implements [`Agent`]: given a position from its own point of
//! view, it picks a legal move, plays it on the board and reports it.
//!
//!  - [`SearchAgent`] runs a depth-limited alpha-beta search against a
//!    wall-clock deadline, falling back to the best move found so far.
//!  - [`RandomAgent`] picks uniformly among the legal moves.

pub mod test_utils;

mod agent;
mod config;
mod random;
mod search;

pub use agent::Agent;
pub use config::SearchConfig;
pub use random::RandomAgent;
pub use search::{SearchAgent, SearchOutcome, SearchReport};
