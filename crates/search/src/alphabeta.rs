//! Minimax with alpha-beta pruning.
//!
//! Same tree and same decisions as [`Minimax`](crate::Minimax), but each
//! layer carries a [`SearchBound`] and stops scoring siblings once the
//! bound proves they cannot change the parent's choice.

use std::marker::PhantomData;
use std::time::Duration;

use ply_core::{Evaluator, Game, Player, Score};

use crate::deadline::{Deadline, SearchTimeout};
use crate::result::SearchResult;

/// An `(alpha, beta)` window: the score the maximizer is already
/// guaranteed, and the score the minimizer is already guaranteed, along
/// the current path.
///
/// Passed by value and only ever narrowed: a child receives a window
/// tightened by its parent's running best, never a widened one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchBound {
    pub alpha: Score,
    pub beta: Score,
}

impl SearchBound {
    /// The unbounded window a root search starts from.
    pub const FULL: SearchBound = SearchBound {
        alpha: Score::LOST,
        beta: Score::WON,
    };

    /// Create a window from explicit bounds.
    pub fn new(alpha: Score, beta: Score) -> Self {
        SearchBound { alpha, beta }
    }
}

/// Depth-limited alpha-beta search over any [`Game`], frontier scored
/// by `E`.
pub struct AlphaBeta<G: Game, E: Evaluator<G>> {
    evaluator: E,
    nodes: u64,
    _game: PhantomData<G>,
}

impl<G, E> AlphaBeta<G, E>
where
    G: Game,
    E: Evaluator<G>,
{
    /// Create a new pruning engine with the given frontier evaluator.
    pub fn new(evaluator: E) -> Self {
        AlphaBeta {
            evaluator,
            nodes: 0,
            _game: PhantomData,
        }
    }

    /// Searches `depth` plies ahead inside the full window.
    ///
    /// Tie-break, trapped-side scores and the chosen move all match
    /// [`Minimax::search`](crate::Minimax::search) on the same state;
    /// only the number of visited states differs.
    ///
    /// # Errors
    /// Returns [`SearchTimeout`] when the deadline expires mid-search; no
    /// partial result survives.
    pub fn search<F>(
        &mut self,
        game: &G,
        state: &G::State,
        depth: u32,
        deadline: &Deadline<F>,
    ) -> Result<SearchResult<G::Move>, SearchTimeout>
    where
        F: Fn() -> Duration,
    {
        self.search_bounded(game, state, depth, SearchBound::FULL, deadline)
    }

    /// Searches `depth` plies ahead inside a caller-supplied window.
    ///
    /// # Errors
    /// Returns [`SearchTimeout`] when the deadline expires mid-search.
    pub fn search_bounded<F>(
        &mut self,
        game: &G,
        state: &G::State,
        depth: u32,
        bound: SearchBound,
        deadline: &Deadline<F>,
    ) -> Result<SearchResult<G::Move>, SearchTimeout>
    where
        F: Fn() -> Duration,
    {
        debug_assert!(depth >= 1, "a search needs at least one ply");
        self.nodes = 0;
        deadline.check()?;
        self.nodes += 1;

        let player = game.to_move(state);
        let moves = game.legal_moves(state, player);
        if moves.is_empty() {
            return Ok(SearchResult {
                best_move: None,
                score: Score::LOST,
                depth,
                nodes: self.nodes,
            });
        }

        let mut best_move = moves[0];
        let mut best_score = bound.alpha;
        for mv in moves {
            deadline.check()?;
            let child = game.apply(state, mv);
            let score = self.min_play(
                game,
                &child,
                player,
                depth.saturating_sub(1),
                SearchBound::new(best_score, bound.beta),
                deadline,
            )?;
            if score > best_score {
                best_move = mv;
                best_score = score;
            }
            // Inside the full window this only fires on a proven win.
            if best_score >= bound.beta {
                break;
            }
        }

        Ok(SearchResult {
            best_move: Some(best_move),
            score: best_score,
            depth,
            nodes: self.nodes,
        })
    }

    /// Minimizing layer: running best starts at the inherited beta.
    fn min_play<F>(
        &mut self,
        game: &G,
        state: &G::State,
        root: Player,
        depth: u32,
        bound: SearchBound,
        deadline: &Deadline<F>,
    ) -> Result<Score, SearchTimeout>
    where
        F: Fn() -> Duration,
    {
        deadline.check()?;
        self.nodes += 1;

        if depth == 0 {
            return Ok(self.evaluator.score(game, state, root));
        }
        let moves = game.legal_moves(state, game.to_move(state));
        if moves.is_empty() {
            // The minimizing side is trapped: a won line for the root player.
            return Ok(Score::WON);
        }

        let mut best = bound.beta;
        for mv in moves {
            deadline.check()?;
            let child = game.apply(state, mv);
            let score = self.max_play(
                game,
                &child,
                root,
                depth - 1,
                SearchBound::new(bound.alpha, best),
                deadline,
            )?;
            if score < best {
                best = score;
            }
            // The maximizer already has alpha elsewhere; nothing here can matter.
            if bound.alpha >= best {
                break;
            }
        }
        Ok(best)
    }

    /// Maximizing layer: running best starts at the inherited alpha.
    fn max_play<F>(
        &mut self,
        game: &G,
        state: &G::State,
        root: Player,
        depth: u32,
        bound: SearchBound,
        deadline: &Deadline<F>,
    ) -> Result<Score, SearchTimeout>
    where
        F: Fn() -> Duration,
    {
        deadline.check()?;
        self.nodes += 1;

        if depth == 0 {
            return Ok(self.evaluator.score(game, state, root));
        }
        let moves = game.legal_moves(state, game.to_move(state));
        if moves.is_empty() {
            // The maximizing side is trapped: a lost line for the root player.
            return Ok(Score::LOST);
        }

        let mut best = bound.alpha;
        for mv in moves {
            deadline.check()?;
            let child = game.apply(state, mv);
            let score = self.min_play(
                game,
                &child,
                root,
                depth - 1,
                SearchBound::new(best, bound.beta),
                deadline,
            )?;
            if score > best {
                best = score;
            }
            // The minimizer already has beta elsewhere; nothing here can matter.
            if best >= bound.beta {
                break;
            }
        }
        Ok(best)
    }
}
