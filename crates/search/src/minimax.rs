//! Fixed-depth minimax search.
//!
//! Explores every line to an exact depth, alternating maximizing and
//! minimizing layers, and scores the frontier with the configured
//! evaluator. [`AlphaBeta`](crate::AlphaBeta) reaches the same decision
//! while visiting fewer states; this engine is the plain reference it is
//! checked against.

use std::marker::PhantomData;
use std::time::Duration;

use ply_core::{Evaluator, Game, Player, Score};

use crate::deadline::{Deadline, SearchTimeout};
use crate::result::SearchResult;

/// Depth-limited minimax over any [`Game`], frontier scored by `E`.
pub struct Minimax<G: Game, E: Evaluator<G>> {
    evaluator: E,
    nodes: u64,
    _game: PhantomData<G>,
}

impl<G, E> Minimax<G, E>
where
    G: Game,
    E: Evaluator<G>,
{
    /// Create a new engine with the given frontier evaluator.
    pub fn new(evaluator: E) -> Self {
        Minimax {
            evaluator,
            nodes: 0,
            _game: PhantomData,
        }
    }

    /// Searches `depth` plies ahead and returns the best move for the
    /// side to move, together with its backed-up score.
    ///
    /// Score ties keep the earliest move in the game's enumeration order.
    /// When the side to move has no legal move the result carries no move
    /// and a lost score.
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
        let mut best_score = Score::LOST;
        for mv in moves {
            deadline.check()?;
            let child = game.apply(state, mv);
            let score = self.min_play(game, &child, player, depth.saturating_sub(1), deadline)?;
            if score > best_score {
                best_move = mv;
                best_score = score;
            }
        }

        Ok(SearchResult {
            best_move: Some(best_move),
            score: best_score,
            depth,
            nodes: self.nodes,
        })
    }

    /// Minimizing layer: the opponent picks the score worst for `root`.
    fn min_play<F>(
        &mut self,
        game: &G,
        state: &G::State,
        root: Player,
        depth: u32,
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

        let mut best = Score::WON;
        for mv in moves {
            deadline.check()?;
            let child = game.apply(state, mv);
            let score = self.max_play(game, &child, root, depth - 1, deadline)?;
            if score < best {
                best = score;
            }
        }
        Ok(best)
    }

    /// Maximizing layer: the root player picks the score best for itself.
    fn max_play<F>(
        &mut self,
        game: &G,
        state: &G::State,
        root: Player,
        depth: u32,
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

        let mut best = Score::LOST;
        for mv in moves {
            deadline.check()?;
            let child = game.apply(state, mv);
            let score = self.min_play(game, &child, root, depth - 1, deadline)?;
            if score > best {
                best = score;
            }
        }
        Ok(best)
    }
}
