//! State shared between a search worker and the caller waiting on its deadline.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Marks an incumbent cell that has never been written.
const NO_CANDIDATE: u64 = 0xFF;

/// Set when the stored score comes from a complete search of the candidate.
const SETTLED_BIT: u64 = 1 << 8;

/// The best root candidate known so far, packed into one atomic word so the
/// index and its score always change together.
///
/// Layout: `[score as u32: bits 32-63][settled: bit 8][candidate index: bits 0-7]`.
#[derive(Debug)]
pub struct Incumbent(AtomicU64);

/// One candidate's standing, as stored in the [`Incumbent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Standing {
    pub index: usize,
    pub score: i32,
    /// False while the score is only a preliminary static estimate.
    pub settled: bool,
}

impl Standing {
    fn pack(self) -> u64 {
        let score_bits = u64::from(self.score as u32) << 32;
        let settled_bits = if self.settled { SETTLED_BIT } else { 0 };
        score_bits | settled_bits | (self.index as u64 & 0xFF)
    }

    fn unpack(packed: u64) -> Option<Self> {
        let index = packed & 0xFF;
        if index == NO_CANDIDATE {
            return None;
        }

        Some(Self {
            index: index as usize,
            score: (packed >> 32) as u32 as i32,
            settled: packed & SETTLED_BIT != 0,
        })
    }

    /// A settled score always outranks a preliminary one; otherwise the higher score wins.
    fn beats(self, current: Option<Standing>) -> bool {
        match current {
            None => true,
            Some(current) => match (self.settled, current.settled) {
                (true, false) => true,
                (false, true) => false,
                _ => self.score > current.score,
            },
        }
    }
}

impl Incumbent {
    pub fn new() -> Self {
        Self(AtomicU64::new(NO_CANDIDATE))
    }

    /// Record `standing` if it beats the current incumbent.
    /// Returns whether the incumbent changed.
    pub fn offer(&self, standing: Standing) -> bool {
        debug_assert!(standing.index < NO_CANDIDATE as usize);
        let packed = standing.pack();

        let mut current = self.0.load(Ordering::Acquire);
        loop {
            if !standing.beats(Standing::unpack(current)) {
                return false;
            }

            match self
                .0
                .compare_exchange(current, packed, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    /// The incumbent at this instant, if any candidate was ever recorded.
    pub fn snapshot(&self) -> Option<Standing> {
        Standing::unpack(self.0.load(Ordering::Acquire))
    }
}

impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a running search shares with the thread that launched it.
#[derive(Debug)]
pub struct SharedSearch {
    pub incumbent: Incumbent,
    cancelled: AtomicBool,
    nodes: AtomicU64,
}

impl SharedSearch {
    pub fn new() -> Self {
        Self {
            incumbent: Incumbent::new(),
            cancelled: AtomicBool::new(false),
            nodes: AtomicU64::new(0),
        }
    }

    /// Ask the worker to stop at its next node.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    #[inline]
    pub fn count_node(&self) {
        self.nodes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }
}

impl Default for SharedSearch {
    fn default() -> Self {
        Self::new()
    }
}
