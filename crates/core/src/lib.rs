//! Ply Core - Game abstractions and common types
//!
//! This crate provides the capability traits consumed by the search
//! engine: the `Game` board interface and the `Evaluator` scoring
//! interface, together with the shared score and player types.
//!
//! # Types
//!
//! - [`Game`] - Trait for two-player, perfect-information game implementations
//! - [`Evaluator`] - Trait for pluggable position scoring
//! - [`Player`] - The two sides, with `opponent()`
//! - [`Score`] - Extended-real search score (finite heuristics, infinite win/loss)

mod error;
mod eval;
mod game;
mod types;

pub use error::{PlyError, Result};
pub use eval::{Evaluator, Neutral};
pub use game::{Game, Player};
pub use types::Score;
