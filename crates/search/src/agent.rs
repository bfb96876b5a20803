//! The playing surface: a game, an evaluator and a time policy bundled
//! into something that picks moves.

use std::time::Duration;

use ply_core::{Evaluator, Game};

use crate::alphabeta::AlphaBeta;
use crate::deadline::{Deadline, SearchTimeout};
use crate::deepening::{IterativeDeepening, DEPTH_CEILING};
use crate::result::SearchResult;

/// Default ply depth for fixed-depth play.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default safety margin: the search aborts once less than this much of
/// the budget remains, leaving room to unwind and answer.
pub const TIME_MARGIN: Duration = Duration::from_millis(10);

/// How an [`Agent`] spends its time budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// One pruning search at exactly this depth.
    Fixed { depth: u32 },

    /// Iterative deepening up to this ceiling.
    Iterative { ceiling: u32 },
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Iterative {
            ceiling: DEPTH_CEILING,
        }
    }
}

/// A complete player.
///
/// [`select_move`](Agent::select_move) never fails and never overruns
/// the budget. When there is no legal move, or not enough time to finish
/// even a depth-1 search, it answers `None` and the caller treats that
/// as a forfeit.
pub struct Agent<G: Game, E: Evaluator<G>> {
    game: G,
    evaluator: E,
    mode: SearchMode,
    margin: Duration,
}

impl<G, E> Agent<G, E>
where
    G: Game,
    E: Evaluator<G> + Clone,
{
    /// An agent playing `game`, deepening iteratively by default.
    pub fn new(game: G, evaluator: E) -> Self {
        Agent {
            game,
            evaluator,
            mode: SearchMode::default(),
            margin: TIME_MARGIN,
        }
    }

    /// Set the search mode.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the deadline safety margin.
    pub fn with_margin(mut self, margin: Duration) -> Self {
        self.margin = margin;
        self
    }

    /// The game this agent plays.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Picks a move for `state`, polling `time_left` against the margin.
    pub fn select_move<F>(&self, state: &G::State, time_left: F) -> Option<G::Move>
    where
        F: Fn() -> Duration,
    {
        self.search(state, time_left).best_move
    }

    /// Like [`select_move`](Agent::select_move) but keeps the whole
    /// [`SearchResult`] for callers that log depth and node counts.
    pub fn search<F>(&self, state: &G::State, time_left: F) -> SearchResult<G::Move>
    where
        F: Fn() -> Duration,
    {
        let deadline = Deadline::new(time_left, self.margin);
        match self.mode {
            SearchMode::Fixed { depth } => {
                let mut engine = AlphaBeta::new(self.evaluator.clone());
                match engine.search(&self.game, state, depth, &deadline) {
                    Ok(result) => result,
                    Err(SearchTimeout) => SearchResult::sentinel(),
                }
            }
            SearchMode::Iterative { ceiling } => {
                let mut driver = IterativeDeepening::with_ceiling(self.evaluator.clone(), ceiling);
                driver.search(&self.game, state, &deadline)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgame::{ScriptedGame, TableEval};

    fn two_depth_tree() -> (ScriptedGame, TableEval) {
        let game = ScriptedGame::new(vec![vec![1, 2], vec![3], vec![4], vec![], vec![]]);
        let eval = TableEval::new(vec![0.0, 9.0, 2.0, 1.0, 2.0]);
        (game, eval)
    }

    #[test]
    fn test_fixed_mode_searches_exactly_one_depth() {
        let (game, eval) = two_depth_tree();
        let agent = Agent::new(game, eval).with_mode(SearchMode::Fixed { depth: 1 });

        let state = agent.game().initial_state();
        let result = agent.search(&state, || Duration::MAX);

        assert_eq!(result.depth, 1);
        assert_eq!(result.best_move, Some(1));
    }

    #[test]
    fn test_iterative_mode_reaches_the_ceiling_with_time_to_spare() {
        let (game, eval) = two_depth_tree();
        let agent = Agent::new(game, eval).with_mode(SearchMode::Iterative { ceiling: 2 });

        let state = agent.game().initial_state();
        let result = agent.search(&state, || Duration::MAX);

        assert_eq!(result.depth, 2);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_expired_clock_forfeits_in_both_modes() {
        let (game, eval) = two_depth_tree();
        let state = game.initial_state();

        let fixed = Agent::new(game.clone(), eval.clone())
            .with_mode(SearchMode::Fixed { depth: DEFAULT_DEPTH });
        assert_eq!(fixed.select_move(&state, || Duration::ZERO), None);

        let iterative = Agent::new(game, eval);
        assert_eq!(iterative.select_move(&state, || Duration::ZERO), None);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let (game, eval) = two_depth_tree();
        let agent = Agent::new(game, eval).with_mode(SearchMode::Iterative { ceiling: 4 });

        let state = agent.game().initial_state();
        let first = agent.select_move(&state, || Duration::MAX);
        let second = agent.select_move(&state, || Duration::MAX);

        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
