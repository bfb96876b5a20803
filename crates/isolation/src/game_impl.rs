//! Implementation of the core Game trait for Isolation.

use ply_core::{Game, Player, PlyError, Result};

use crate::{Board, Move};

/// Default board width.
pub const DEFAULT_WIDTH: u8 = 7;

/// Default board height.
pub const DEFAULT_HEIGHT: u8 = 7;

/// Knight-move Isolation on a `width x height` board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Isolation {
    width: u8,
    height: u8,
}

impl Isolation {
    /// The standard 7x7 game.
    pub fn new() -> Self {
        Isolation {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// A game on a custom board. The occupancy mask is a `u64`, so the
    /// board may have at most 64 cells.
    pub fn with_size(width: u8, height: u8) -> Result<Self> {
        if width == 0 || height == 0 || (width as u16) * (height as u16) > 64 {
            return Err(PlyError::BoardTooLarge { width, height });
        }
        Ok(Isolation { width, height })
    }

    /// Board width in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// A mid-game position with both players placed, for tests and
    /// analysis. Cells can be burned afterwards with [`Board::block`].
    pub fn position(&self, one: Move, two: Move, to_move: Player) -> Result<Board> {
        Board::with_positions(self.width, self.height, one, two, to_move)
    }
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Isolation {
    type State = Board;
    type Move = Move;

    fn initial_state(&self) -> Board {
        Board::empty(self.width, self.height)
    }

    fn to_move(&self, state: &Board) -> Player {
        state.to_move()
    }

    fn legal_moves(&self, state: &Board, player: Player) -> Vec<Move> {
        state.legal_moves(player)
    }

    fn apply(&self, state: &Board, mv: Move) -> Board {
        state.apply(mv)
    }

    fn is_winner(&self, state: &Board, player: Player) -> bool {
        state.is_winner(player)
    }

    fn is_loser(&self, state: &Board, player: Player) -> bool {
        state.is_loser(player)
    }
}
