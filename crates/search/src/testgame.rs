//! A scripted game tree for exercising the search engines.
//!
//! The whole tree is written out as an adjacency list and the move to a
//! child is that child's node id, so a test states exactly the tree it
//! searches and the score every frontier node gets.

use ply_core::{Evaluator, Game, Player, Score};

/// A game whose tree is given explicitly.
///
/// The state is `(node, side to move)`. Node 0 is the root and player One
/// moves first; applying a move descends to that child and flips the side.
#[derive(Clone)]
pub struct ScriptedGame {
    children: Vec<Vec<usize>>,
}

impl ScriptedGame {
    pub fn new(children: Vec<Vec<usize>>) -> Self {
        ScriptedGame { children }
    }
}

impl Game for ScriptedGame {
    type State = (usize, Player);
    type Move = usize;

    fn initial_state(&self) -> (usize, Player) {
        (0, Player::One)
    }

    fn to_move(&self, state: &(usize, Player)) -> Player {
        state.1
    }

    fn legal_moves(&self, state: &(usize, Player), _player: Player) -> Vec<usize> {
        self.children[state.0].clone()
    }

    fn apply(&self, state: &(usize, Player), mv: usize) -> (usize, Player) {
        debug_assert!(self.children[state.0].contains(&mv));
        (mv, state.1.opponent())
    }

    fn is_winner(&self, state: &(usize, Player), player: Player) -> bool {
        self.children[state.0].is_empty() && player != state.1
    }

    fn is_loser(&self, state: &(usize, Player), player: Player) -> bool {
        self.children[state.0].is_empty() && player == state.1
    }
}

/// Scores a state by looking up its node id in a table.
///
/// Table entries are written from the root player's perspective, the way
/// the engines ask for them.
#[derive(Clone)]
pub struct TableEval {
    scores: Vec<f64>,
}

impl TableEval {
    pub fn new(scores: Vec<f64>) -> Self {
        TableEval { scores }
    }
}

impl Evaluator<ScriptedGame> for TableEval {
    fn score(&self, _game: &ScriptedGame, state: &(usize, Player), _perspective: Player) -> Score {
        Score::new(self.scores[state.0])
    }
}
