//! The engines driving a real game of knight-move Isolation.

use std::time::Duration;

use ply_core::{Game, Neutral, Player};
use ply_isolation::{CenterShy, Isolation, Move};
use ply_search::{Agent, AlphaBeta, Deadline, IterativeDeepening, Minimax, SearchMode};

/// 3x3 board, player One on (0,2), player Two on (2,2), the cell (0,1)
/// burned. Two's only escape square is (1,0), so One wins on the spot by
/// taking it.
fn boxed_in_corner() -> (Isolation, ply_isolation::Board) {
    let game = Isolation::with_size(3, 3).unwrap();
    let board = game
        .position(Move::new(0, 2), Move::new(2, 2), Player::One)
        .unwrap()
        .block(Move::new(0, 1))
        .unwrap();
    (game, board)
}

#[test]
fn test_both_engines_finish_off_a_boxed_in_opponent() {
    let (game, board) = boxed_in_corner();

    let mut plain = Minimax::new(CenterShy);
    let full = plain
        .search(&game, &board, 2, &Deadline::unbounded())
        .unwrap();
    assert_eq!(full.best_move, Some(Move::new(1, 0)));
    assert!(full.score.is_win());

    let mut pruning = AlphaBeta::new(CenterShy);
    let pruned = pruning
        .search(&game, &board, 2, &Deadline::unbounded())
        .unwrap();
    assert_eq!(pruned.best_move, Some(Move::new(1, 0)));
    assert!(pruned.score.is_win());

    // The win at the first move cuts the rest of the root.
    assert!(pruned.nodes < full.nodes);
}

#[test]
fn test_engines_agree_on_move_and_value_at_every_depth() {
    let game = Isolation::with_size(4, 4).unwrap();
    let board = game
        .position(Move::new(0, 0), Move::new(3, 3), Player::One)
        .unwrap();

    for depth in 1..=4 {
        let mut plain = Minimax::new(CenterShy);
        let mut pruning = AlphaBeta::new(CenterShy);

        let full = plain
            .search(&game, &board, depth, &Deadline::unbounded())
            .unwrap();
        let pruned = pruning
            .search(&game, &board, depth, &Deadline::unbounded())
            .unwrap();

        assert_eq!(pruned.best_move, full.best_move, "depth {depth}");
        assert_eq!(pruned.score, full.score, "depth {depth}");
        assert!(pruned.nodes <= full.nodes, "depth {depth}");
    }
}

#[test]
fn test_chosen_move_is_legal_even_before_placement() {
    // On an empty board the first move may claim any open cell.
    let game = Isolation::with_size(5, 5).unwrap();
    let board = game.initial_state();
    let legal = game.legal_moves(&board, Player::One);
    assert_eq!(legal.len(), 25);

    let mut engine = AlphaBeta::new(CenterShy);
    let result = engine
        .search(&game, &board, 3, &Deadline::unbounded())
        .unwrap();

    let chosen = result.best_move.unwrap();
    assert!(legal.contains(&chosen));
}

#[test]
fn test_trapped_root_player_has_no_move() {
    // The center of a 3x3 board has no knight moves at all.
    let game = Isolation::with_size(3, 3).unwrap();
    let board = game
        .position(Move::new(1, 1), Move::new(0, 0), Player::One)
        .unwrap();
    assert!(game.legal_moves(&board, Player::One).is_empty());

    let mut engine = AlphaBeta::new(CenterShy);
    let result = engine
        .search(&game, &board, 3, &Deadline::unbounded())
        .unwrap();
    assert_eq!(result.best_move, None);
    assert!(result.score.is_loss());

    let agent = Agent::new(game, CenterShy);
    assert_eq!(agent.select_move(&board, || Duration::MAX), None);
}

#[test]
fn test_deepening_with_spare_time_matches_the_fixed_ceiling() {
    let game = Isolation::with_size(4, 4).unwrap();
    let board = game
        .position(Move::new(1, 0), Move::new(2, 3), Player::One)
        .unwrap();

    let mut driver = IterativeDeepening::with_ceiling(CenterShy, 3);
    let deepened = driver.search(&game, &board, &Deadline::unbounded());

    let mut fixed = AlphaBeta::new(CenterShy);
    let direct = fixed
        .search(&game, &board, 3, &Deadline::unbounded())
        .unwrap();

    assert_eq!(deepened, direct);
    assert_eq!(deepened.depth, 3);
}

#[test]
fn test_deepening_under_an_expired_clock_forfeits() {
    let game = Isolation::with_size(4, 4).unwrap();
    let board = game
        .position(Move::new(0, 0), Move::new(3, 3), Player::One)
        .unwrap();

    let agent = Agent::new(game, CenterShy);
    assert_eq!(agent.select_move(&board, || Duration::ZERO), None);
}

#[test]
fn test_neutral_frontier_ties_break_to_the_first_enumerated_move() {
    // With the evaluator voicing no preference every depth-1 line scores
    // even, so the engine must keep the first move the board enumerates.
    let game = Isolation::with_size(3, 3).unwrap();
    let board = game
        .position(Move::new(0, 2), Move::new(2, 2), Player::One)
        .unwrap();

    let legal = game.legal_moves(&board, Player::One);
    assert_eq!(legal, vec![Move::new(1, 0), Move::new(2, 1)]);

    let mut plain = Minimax::new(Neutral);
    let full = plain
        .search(&game, &board, 1, &Deadline::unbounded())
        .unwrap();
    assert_eq!(full.best_move, Some(Move::new(1, 0)));

    let mut pruning = AlphaBeta::new(Neutral);
    let pruned = pruning
        .search(&game, &board, 1, &Deadline::unbounded())
        .unwrap();
    assert_eq!(pruned.best_move, Some(Move::new(1, 0)));
}

#[test]
fn test_agent_selection_is_reproducible() {
    let game = Isolation::with_size(4, 4).unwrap();
    let board = game
        .position(Move::new(0, 1), Move::new(3, 2), Player::Two)
        .unwrap();

    let agent = Agent::new(game, CenterShy).with_mode(SearchMode::Iterative { ceiling: 3 });
    let first = agent.select_move(&board, || Duration::MAX);
    let second = agent.select_move(&board, || Duration::MAX);

    assert!(first.is_some());
    assert_eq!(first, second);
}
