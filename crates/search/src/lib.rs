//! Time-bounded adversarial search.
//!
//! This crate provides depth-limited minimax and alpha-beta search for
//! any game implementing the `ply_core::Game` trait, plus an iterative
//! deepening driver that spends a wall-clock budget and still always
//! answers with a legal move when one exists.
//!
//! # Features
//!
//! - **Generic**: works with any `Game` implementation and any
//!   `Evaluator` for the frontier
//! - **Cooperative deadline**: the caller supplies a remaining-time
//!   query; the search polls it and unwinds cleanly when time is up
//! - **Iterative deepening**: keeps the deepest fully completed result,
//!   discarding an interrupted depth whole
//! - **Deterministic**: moves are explored in the game's enumeration
//!   order and score ties keep the earliest move
//!
//! # Example
//!
//! ```
//! use ply_core::Game;
//! use ply_isolation::{CenterShy, Isolation};
//! use ply_search::{Agent, SearchMode};
//! use std::time::Duration;
//!
//! let game = Isolation::with_size(5, 5).unwrap();
//! let agent = Agent::new(game.clone(), CenterShy).with_mode(SearchMode::Fixed { depth: 3 });
//!
//! let board = game.initial_state();
//! let mv = agent.select_move(&board, || Duration::from_millis(150));
//! assert!(mv.is_some());
//! ```

mod agent;
mod alphabeta;
mod deadline;
mod deepening;
mod minimax;
mod result;
#[cfg(test)]
mod testgame;

pub use agent::{Agent, SearchMode, DEFAULT_DEPTH, TIME_MARGIN};
pub use alphabeta::{AlphaBeta, SearchBound};
pub use deadline::{Deadline, SearchTimeout};
pub use deepening::{IterativeDeepening, DEPTH_CEILING};
pub use minimax::Minimax;
pub use result::SearchResult;
