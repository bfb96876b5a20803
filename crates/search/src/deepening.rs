//! Iterative deepening on top of the pruning search.
//!
//! Runs the alpha-beta engine at depth 1, 2, 3, ... until the deadline
//! cuts in or the ceiling is reached, always keeping the deepest result
//! that finished. A depth interrupted by the deadline is discarded whole,
//! never merged into the answer.

use std::time::Duration;

use ply_core::{Evaluator, Game};
use tracing::debug;

use crate::alphabeta::AlphaBeta;
use crate::deadline::{Deadline, SearchTimeout};
use crate::result::SearchResult;

/// Default deepening ceiling. A safety stop for degenerate trees, not a
/// depth any timed game is expected to reach.
pub const DEPTH_CEILING: u32 = 64;

/// Deepening driver around [`AlphaBeta`], generic over the same game and
/// evaluator pair.
pub struct IterativeDeepening<G: Game, E: Evaluator<G>> {
    engine: AlphaBeta<G, E>,
    ceiling: u32,
}

impl<G, E> IterativeDeepening<G, E>
where
    G: Game,
    E: Evaluator<G>,
{
    /// Create a new driver with the default depth ceiling.
    pub fn new(evaluator: E) -> Self {
        Self::with_ceiling(evaluator, DEPTH_CEILING)
    }

    /// Create a driver that stops deepening at the given ceiling.
    pub fn with_ceiling(evaluator: E, ceiling: u32) -> Self {
        IterativeDeepening {
            engine: AlphaBeta::new(evaluator),
            ceiling,
        }
    }

    /// Searches deeper and deeper until the deadline cuts in, returning
    /// the result of the deepest fully completed depth.
    ///
    /// If not even the depth-1 search finishes in time, the returned
    /// result is the sentinel: no move, a lost score, depth zero. The
    /// deadline is absorbed here; the caller never sees it.
    pub fn search<F>(
        &mut self,
        game: &G,
        state: &G::State,
        deadline: &Deadline<F>,
    ) -> SearchResult<G::Move>
    where
        F: Fn() -> Duration,
    {
        let mut best = SearchResult::sentinel();
        for depth in 1..=self.ceiling {
            match self.engine.search(game, state, depth, deadline) {
                Ok(result) => {
                    debug!(depth, score = %result.score, nodes = result.nodes, "depth completed");
                    best = result;
                }
                Err(SearchTimeout) => {
                    debug!(depth, kept = best.depth, "deadline reached");
                    break;
                }
            }
        }
        best
    }
}
