//! The searching agent: alpha-beta minimax raced against a deadline.

mod incumbent;
mod minimax;

use crate::{Agent, SearchConfig};
use async_std::{future, task};
use blackhole_othello::{engine, BoardState, GameOver, Point};
use derive_more::Display;
use incumbent::SharedSearch;
use itertools::Itertools;
use log::{debug, warn};
use minimax::{Candidates, RootSearch};
use std::sync::Arc;

/// How a move was decided.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No legal move: the side to move passes.
    #[display(fmt = "pass")]
    Pass,
    /// Exactly one legal move, played without searching.
    #[display(fmt = "forced")]
    Forced,
    /// The search finished within its time budget.
    #[display(fmt = "completed")]
    Completed,
    /// The deadline expired and the incumbent candidate was played.
    #[display(fmt = "timed out")]
    TimedOut,
}

/// The result of one [`SearchAgent::search`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub chosen: Option<Point>,
    pub outcome: SearchOutcome,
    /// Search tree nodes visited; zero when no search ran.
    pub nodes: u64,
}

/// Picks moves with a depth-limited alpha-beta search under a wall-clock budget.
///
/// The search runs on a worker task. If it does not finish within the
/// configured budget it is cancelled and the best candidate it had recorded so
/// far is played instead, so every call returns within roughly the budget.
#[derive(Clone, Debug)]
pub struct SearchAgent {
    config: SearchConfig,
}

impl SearchAgent {
    /// An agent searching `depth` plies with the default time budget.
    pub fn new(depth: u8) -> Self {
        Self::with_config(SearchConfig::default().with_depth(depth))
    }

    /// Panics if `config.depth` is zero.
    pub fn with_config(config: SearchConfig) -> Self {
        assert!(config.depth > 0, "search depth must be positive");
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Choose and play a move for the side to move in `state`, reporting how it
    /// was decided.
    pub fn search(&self, state: &mut BoardState) -> Result<SearchReport, GameOver> {
        let candidates: Candidates = engine::available_turns(state)?.collect();

        let report = match candidates.len() {
            0 => SearchReport {
                chosen: None,
                outcome: SearchOutcome::Pass,
                nodes: 0,
            },
            1 => SearchReport {
                chosen: Some(candidates[0]),
                outcome: SearchOutcome::Forced,
                nodes: 0,
            },
            _ => self.search_bounded(state, candidates),
        };

        if let Some(mv) = report.chosen {
            engine::make_turn(state, mv);
        }

        Ok(report)
    }

    /// Race a full search of `candidates` against the time budget.
    fn search_bounded(&self, state: &BoardState, candidates: Candidates) -> SearchReport {
        debug!(
            "searching {} plies over [{}]",
            self.config.depth,
            candidates.iter().join(", ")
        );

        let shared = Arc::new(SharedSearch::new());
        let worker = RootSearch {
            root: state.clone(),
            candidates: candidates.clone(),
            depth: self.config.depth,
            shared: Arc::clone(&shared),
        };

        let finished = task::block_on(future::timeout(
            self.config.time_budget,
            task::spawn_blocking(move || worker.run()),
        ));

        let (index, outcome) = match finished {
            Ok(Some((index, _))) => (index, SearchOutcome::Completed),
            _ => {
                // The worker notices at its next node and drops its partial result.
                shared.cancel();
                (fallback(&shared), SearchOutcome::TimedOut)
            }
        };

        let report = SearchReport {
            chosen: Some(candidates[index]),
            outcome,
            nodes: shared.nodes(),
        };
        debug!(
            "chose {} ({}, {} nodes)",
            candidates[index], report.outcome, report.nodes
        );

        report
    }
}

/// The candidate to play once the deadline has passed: the incumbent if one
/// was recorded, otherwise the first candidate.
fn fallback(shared: &SharedSearch) -> usize {
    match shared.incumbent.snapshot() {
        Some(standing) => standing.index,
        None => {
            warn!("deadline passed before any candidate was scored");
            0
        }
    }
}

impl Agent for SearchAgent {
    fn choose_move(&mut self, state: &mut BoardState) -> Result<Option<Point>, GameOver> {
        self.search(state).map(|report| report.chosen)
    }
}
