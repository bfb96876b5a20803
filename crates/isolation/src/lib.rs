//! Knight-move Isolation with a bitboard occupancy mask.
//!
//! Two players take turns hopping around a rectangular board with knight
//! moves. Every visited cell is burned for the rest of the game, and the
//! first player left without a legal move on their turn loses. The crate
//! provides the rules as an implementation of the core `Game` trait plus
//! the classic mobility-and-center heuristic evaluators.

mod board;
mod game_impl;
mod heuristics;

pub use board::{Board, Move};
pub use game_impl::{Isolation, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use heuristics::{CenterAverse, CenterSeeking, CenterShy};
