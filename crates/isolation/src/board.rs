//! Isolation board representation on a u64 occupancy bitboard.
//!
//! Both players hop around a rectangular grid with knight moves. Every
//! cell a player has ever occupied stays blocked for the rest of the
//! game; the first player left without a move on their turn loses.

use std::fmt;

use ply_core::{Player, PlyError, Result};

/// Knight move offsets as (row, col) deltas, in the fixed order the
/// board enumerates them. This order is the engine's tie-break, so it is
/// part of the game's observable behavior.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A board cell, doubling as a move (a move names the cell moved to).
///
/// `Move::NONE` is the `(-1, -1)` sentinel a tournament driver receives
/// when an agent has no move to make.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    /// The no-move sentinel.
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// Create a move targeting the given cell.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Move { row, col }
    }

    /// Check whether this is the no-move sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.row == -1 && self.col == -1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable Isolation position.
///
/// `apply` returns a new board; no method mutates an existing one. The
/// occupancy mask only ever gains bits over a game, since visited cells
/// never reopen.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    width: u8,
    height: u8,
    /// Bit `row * width + col` is set once the cell has been visited.
    used: u64,
    /// Current cell of each player; `None` until their first placement.
    locations: [Option<Move>; 2],
    to_move: Player,
}

impl Board {
    /// Empty board with player One to place first. Dimensions must have
    /// been validated by the game constructor (at most 64 cells).
    pub(crate) fn empty(width: u8, height: u8) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        debug_assert!((width as u16) * (height as u16) <= 64);
        Board {
            width,
            height,
            used: 0,
            locations: [None, None],
            to_move: Player::One,
        }
    }

    /// Mid-game board with both players already placed.
    pub(crate) fn with_positions(
        width: u8,
        height: u8,
        one: Move,
        two: Move,
        to_move: Player,
    ) -> Result<Self> {
        let mut board = Board::empty(width, height);
        board.to_move = Player::One;
        board = board.try_place(one)?;
        board = board.try_place(two)?;
        board.to_move = to_move;
        Ok(board)
    }

    fn try_place(self, mv: Move) -> Result<Self> {
        if !self.in_bounds(mv) {
            return Err(PlyError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if !self.is_open(mv) {
            return Err(PlyError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(self.apply(mv))
    }

    /// Mark a cell as used without placing anyone on it, for setting up
    /// positions where part of the board has already been burned.
    pub fn block(mut self, mv: Move) -> Result<Self> {
        if !self.in_bounds(mv) {
            return Err(PlyError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if !self.is_open(mv) {
            return Err(PlyError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.used |= self.cell_bit(mv);
        Ok(self)
    }

    /// Board width in cells.
    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Board height in cells.
    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The player whose turn it is.
    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current cell of the given player, if they have been placed.
    #[inline]
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[Self::index(player)]
    }

    /// Check whether a cell lies on the board.
    #[inline]
    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row >= 0 && mv.col >= 0 && (mv.row as u8) < self.height && (mv.col as u8) < self.width
    }

    /// Check whether a cell is on the board and never visited.
    #[inline]
    pub fn is_open(&self, mv: Move) -> bool {
        self.in_bounds(mv) && self.used & self.cell_bit(mv) == 0
    }

    /// Legal moves for `player`, in the board's stable enumeration order:
    /// every open cell in row-major order before the player's first
    /// placement, knight jumps in offset order afterwards.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        match self.location(player) {
            None => self.open_cells(),
            Some(from) => KNIGHT_OFFSETS
                .iter()
                .map(|&(dr, dc)| Move::new(from.row + dr, from.col + dc))
                .filter(|&mv| self.is_open(mv))
                .collect(),
        }
    }

    /// Apply a legal move for the player to move, returning the new board.
    pub fn apply(&self, mv: Move) -> Board {
        debug_assert!(self.is_open(mv), "move {mv} applied to a closed cell");
        let mut next = self.clone();
        next.used |= next.cell_bit(mv);
        next.locations[Self::index(self.to_move)] = Some(mv);
        next.to_move = self.to_move.opponent();
        next
    }

    /// A player has lost when it is their turn and they cannot move.
    pub fn is_loser(&self, player: Player) -> bool {
        self.to_move == player && self.legal_moves(player).is_empty()
    }

    /// A player has won when their opponent is to move and cannot.
    pub fn is_winner(&self, player: Player) -> bool {
        let opponent = player.opponent();
        self.to_move == opponent && self.legal_moves(opponent).is_empty()
    }

    fn open_cells(&self) -> Vec<Move> {
        let mut cells = Vec::with_capacity((self.width as usize) * (self.height as usize));
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                let mv = Move::new(row, col);
                if self.is_open(mv) {
                    cells.push(mv);
                }
            }
        }
        cells
    }

    #[inline]
    fn index(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    fn cell_bit(&self, mv: Move) -> u64 {
        1u64 << ((mv.row as u32) * (self.width as u32) + (mv.col as u32))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let cell = Move::new(row, col);
                if self.location(Player::One) == Some(cell) {
                    write!(f, "1")?;
                } else if self.location(Player::Two) == Some(cell) {
                    write!(f, "2")?;
                } else if self.is_open(cell) {
                    write!(f, ".")?;
                } else {
                    write!(f, "#")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
