use std::fmt;
use std::hash::Hash;

/// One of the two sides in a game.
///
/// Every game the engine can search is strictly two-player, so the side
/// to move is always one of these and the other side is `opponent()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

/// A game abstraction for adversarial search.
///
/// This trait defines the interface that any game must implement to be
/// searchable by the engine. It is designed to be game-agnostic, supporting
/// any two-player, perfect-information, zero-sum game.
///
/// States are immutable snapshots: `apply` returns a fresh state and never
/// touches its input, so search frames can hold child states by value with
/// nothing shared between them.
pub trait Game: Clone + Send + Sync {
    /// The game state (e.g., a board position)
    type State: Clone + Send;

    /// A game move (e.g., a destination cell)
    type Move: Clone + Copy + Send + Eq + Hash;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// Returns the player whose turn it is in the given state
    fn to_move(&self, state: &Self::State) -> Player;

    /// Returns all legal moves for `player` from the given state.
    ///
    /// The order of the returned moves must be stable for a given state:
    /// the engine breaks score ties by taking the earliest move in this
    /// enumeration, so the order is part of a game's observable behavior.
    /// An empty result is legal and means `player` cannot move.
    fn legal_moves(&self, state: &Self::State, player: Player) -> Vec<Self::Move>;

    /// Applies a move, returning a new state (immutable operation)
    fn apply(&self, state: &Self::State, mv: Self::Move) -> Self::State;

    /// Returns true if `player` has won in the given state
    fn is_winner(&self, state: &Self::State, player: Player) -> bool;

    /// Returns true if `player` has lost in the given state
    fn is_loser(&self, state: &Self::State, player: Player) -> bool;
}
