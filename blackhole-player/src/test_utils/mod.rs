//! Utilities used for testing and benchmarking.

mod play;
pub use play::{play_out, GameRecord};
