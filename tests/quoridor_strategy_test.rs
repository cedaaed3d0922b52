//! Tests for the bot strategies.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_quoridor::{
    Action, Board, HeuristicStrategy, Orientation, Player, Position, RandomStrategy,
    STARTING_WALLS, Strategy, candidate_actions,
};

fn drain_walls(board: &mut Board, player: Player) {
    for _ in 0..STARTING_WALLS {
        board.decrement_walls(player);
    }
}

#[test]
fn test_random_takes_the_only_legal_move() {
    let mut board = Board::new(2).unwrap();
    board
        .apply_wall(Orientation::Vertical, Position::new(8, 3), Player::B)
        .unwrap();
    board
        .apply_wall(Orientation::Vertical, Position::new(8, 4), Player::B)
        .unwrap();
    drain_walls(&mut board, Player::A);

    assert_eq!(candidate_actions(&board, Player::A), vec![Action::step(7, 4)]);
    for seed in 0..32 {
        let mut bot = RandomStrategy::new("easy", ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(bot.decide(&board, Player::A).unwrap(), Action::step(7, 4));
    }
}

#[test]
fn test_random_passes_without_options() {
    let mut board = Board::new(2).unwrap();
    board
        .apply_wall(Orientation::Horizontal, Position::new(7, 4), Player::B)
        .unwrap();
    board
        .apply_wall(Orientation::Vertical, Position::new(8, 3), Player::B)
        .unwrap();
    board
        .apply_wall(Orientation::Vertical, Position::new(8, 4), Player::B)
        .unwrap();
    drain_walls(&mut board, Player::A);

    let mut bot = RandomStrategy::new("easy", ChaCha8Rng::seed_from_u64(1));
    assert_eq!(bot.decide(&board, Player::A).unwrap(), Action::Pass);
}

#[test]
fn test_heuristic_walls_an_opponent_who_is_ahead() {
    let mut board = Board::new(2).unwrap();
    for row in 1..=3 {
        board.apply_move(Player::B, Position::new(row, 4)).unwrap();
    }
    // B needs 6 steps around A, A needs 9 around B.

    let mut bot = HeuristicStrategy::new("hard", ChaCha8Rng::seed_from_u64(5));
    let action = bot.decide(&board, Player::A).unwrap();
    assert!(action.is_wall(), "expected a wall, got {action}");
    assert_eq!(action, Action::wall(Orientation::Horizontal, 3, 4));
}

#[test]
fn test_heuristic_races_without_walls() {
    let mut board = Board::new(2).unwrap();
    for row in 1..=3 {
        board.apply_move(Player::B, Position::new(row, 4)).unwrap();
    }
    drain_walls(&mut board, Player::A);

    let mut bot = HeuristicStrategy::new("hard", ChaCha8Rng::seed_from_u64(5));
    let action = bot.decide(&board, Player::A).unwrap();
    assert!(matches!(action, Action::Move(_)), "expected a move, got {action}");
}

#[test]
fn test_heuristic_targets_next_seat() {
    let mut board = Board::new(3).unwrap();
    // C is next after B; its start cell gets the wall.
    let c = board.position_of(Player::C).unwrap();
    board.apply_move(Player::B, Position::new(0, 3)).unwrap();

    let mut bot = HeuristicStrategy::new("hard", ChaCha8Rng::seed_from_u64(0));
    assert_eq!(
        bot.decide(&board, Player::B).unwrap(),
        Action::wall(Orientation::Horizontal, c.row, c.col)
    );
}
