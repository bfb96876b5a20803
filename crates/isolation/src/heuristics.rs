//! Heuristic evaluators for Isolation.
//!
//! All three score `own mobility - opponent mobility` plus a bonus shaped
//! by the player's distance from the board center; they differ only in
//! the bonus coefficients. Decided positions short-circuit to the
//! infinities so no mobility count can outrank a finished game.

use ply_core::{Evaluator, Player, Score};

use crate::{Board, Isolation, Move};

/// Mobility difference with a bonus of `2 / (d + 1)`: rewards keeping
/// close to the center, where knight mobility stays highest.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterSeeking;

/// Mobility difference with a bonus of `1 - 2 / (d + 1)`: a mild penalty
/// for hugging the center. The strongest of the three in head-to-head
/// play and the default agent heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterShy;

/// Mobility difference with a bonus of `1 - 4 / (d + 1)`: a steep center
/// penalty that drives play toward the edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterAverse;

impl Evaluator<Isolation> for CenterSeeking {
    fn score(&self, _game: &Isolation, state: &Board, perspective: Player) -> Score {
        mobility_with_bonus(state, perspective, 0.0, 2.0)
    }
}

impl Evaluator<Isolation> for CenterShy {
    fn score(&self, _game: &Isolation, state: &Board, perspective: Player) -> Score {
        mobility_with_bonus(state, perspective, 1.0, -2.0)
    }
}

impl Evaluator<Isolation> for CenterAverse {
    fn score(&self, _game: &Isolation, state: &Board, perspective: Player) -> Score {
        mobility_with_bonus(state, perspective, 1.0, -4.0)
    }
}

/// `own - opp + base + weight / (center distance + 1)`, with the
/// infinities for decided positions.
fn mobility_with_bonus(board: &Board, player: Player, base: f64, weight: f64) -> Score {
    if board.is_loser(player) {
        return Score::LOST;
    }
    if board.is_winner(player) {
        return Score::WON;
    }

    let own = board.legal_moves(player).len() as f64;
    let opp = board.legal_moves(player.opponent()).len() as f64;
    let bonus = match board.location(player) {
        Some(loc) => base + weight / (center_distance(board, loc) + 1.0),
        // Before placement there is no distance to measure.
        None => 0.0,
    };
    Score::new(own - opp + bonus)
}

/// Euclidean distance from a cell to the nearest central cell. Boards
/// with an even dimension have two central lines on that axis; the
/// nearer one counts.
fn center_distance(board: &Board, loc: Move) -> f64 {
    let dr = (loc.row - nearest_center(board.height(), loc.row)) as f64;
    let dc = (loc.col - nearest_center(board.width(), loc.col)) as f64;
    (dr * dr + dc * dc).sqrt()
}

fn nearest_center(dim: u8, coord: i8) -> i8 {
    let half = (dim / 2) as i8;
    if dim % 2 == 1 || coord >= half {
        half
    } else {
        half - 1
    }
}
