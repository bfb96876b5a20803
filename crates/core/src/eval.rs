//! Position evaluation for adversarial search.
//!
//! The engine calls an evaluator only at a search frontier or terminal
//! node; everything above the frontier is decided by backed-up scores.

use crate::{Game, Player, Score};

/// Evaluates positions from a chosen player's perspective.
///
/// Implementations must be total over every reachable state: the method
/// never fails and never returns NaN. `Score::EVEN` means no preference,
/// and the infinities are reserved for states an implementation can prove
/// won or lost. The engine independently handles the move-starved terminal
/// case, so an evaluator is free to stay purely heuristic.
pub trait Evaluator<G: Game> {
    /// Score `state` as seen by `perspective`.
    fn score(&self, game: &G, state: &G::State, perspective: Player) -> Score;
}

impl<G: Game, E: Evaluator<G> + ?Sized> Evaluator<G> for &E {
    fn score(&self, game: &G, state: &G::State, perspective: Player) -> Score {
        (**self).score(game, state, perspective)
    }
}

impl<G: Game, E: Evaluator<G> + ?Sized> Evaluator<G> for Box<E> {
    fn score(&self, game: &G, state: &G::State, perspective: Player) -> Score {
        (**self).score(game, state, perspective)
    }
}

/// The evaluator with no opinion: every state scores `Score::EVEN`.
///
/// Useful as a baseline and in tests where only the search's own terminal
/// handling should influence the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct Neutral;

impl<G: Game> Evaluator<G> for Neutral {
    fn score(&self, _game: &G, _state: &G::State, _perspective: Player) -> Score {
        Score::EVEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One cell that player One may take; afterwards nobody can move.
    #[derive(Clone)]
    struct OneCell;

    impl Game for OneCell {
        type State = bool;
        type Move = ();

        fn initial_state(&self) -> bool {
            false
        }

        fn to_move(&self, _state: &bool) -> Player {
            Player::One
        }

        fn legal_moves(&self, state: &bool, _player: Player) -> Vec<()> {
            if *state {
                Vec::new()
            } else {
                vec![()]
            }
        }

        fn apply(&self, _state: &bool, _mv: ()) -> bool {
            true
        }

        fn is_winner(&self, state: &bool, player: Player) -> bool {
            *state && player == Player::One
        }

        fn is_loser(&self, state: &bool, player: Player) -> bool {
            *state && player == Player::Two
        }
    }

    #[test]
    fn test_neutral_has_no_preference() {
        let game = OneCell;
        let state = game.initial_state();
        assert_eq!(Neutral.score(&game, &state, Player::One), Score::EVEN);
        assert_eq!(Neutral.score(&game, &state, Player::Two), Score::EVEN);
    }

    #[test]
    fn test_evaluator_by_reference_and_boxed() {
        let game = OneCell;
        let state = game.initial_state();

        let by_ref: &Neutral = &Neutral;
        assert_eq!(by_ref.score(&game, &state, Player::One), Score::EVEN);

        let boxed: Box<dyn Evaluator<OneCell>> = Box::new(Neutral);
        assert_eq!(boxed.score(&game, &state, Player::Two), Score::EVEN);
    }
}
