//! Tests for turn sequencing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_quoridor::{
    Action, ActionError, MatchError, Phase, Player, Position, RandomStrategy, Strategy, Turn,
    TurnController,
};

#[test]
fn test_a_wins_on_the_eighth_move() {
    let mut game = TurnController::new(2).unwrap();

    for (index, row) in (0..=7).rev().enumerate() {
        assert!(!game.board().has_won(Player::A));
        let phase = game.submit(Action::step(row, 4)).unwrap();

        if index < 7 {
            assert_eq!(phase, Phase::AwaitingAction(Player::B));
            let b_action = if index == 0 {
                Action::step(0, 3)
            } else {
                Action::Pass
            };
            assert_eq!(game.submit(b_action), Ok(Phase::AwaitingAction(Player::A)));
        } else {
            assert_eq!(phase, Phase::Won(Player::A));
        }
    }

    assert!(game.board().has_won(Player::A));
    assert_eq!(game.active_player(), None);
    assert_eq!(game.turns_played(), 15);
}

#[test]
fn test_illegal_action_keeps_the_turn() {
    let mut game = TurnController::new(2).unwrap();

    assert_eq!(
        game.submit(Action::step(8, 4)),
        Err(ActionError::Occupied(Position::new(8, 4)))
    );
    assert_eq!(
        game.submit(Action::step(9, 4)),
        Err(ActionError::OutOfBounds(Position::new(9, 4)))
    );
    assert_eq!(game.active_player(), Some(Player::A));
    assert!(game.history().is_empty());

    game.submit(Action::Pass).unwrap();
    assert_eq!(game.history(), &[Turn::new(Player::A, Action::Pass)]);
    assert_eq!(game.active_player(), Some(Player::B));
}

fn random_seats(seed: u64) -> Vec<Box<dyn Strategy>> {
    (0..2)
        .map(|index| -> Box<dyn Strategy> {
            Box::new(RandomStrategy::new(
                format!("easy {index}"),
                ChaCha8Rng::seed_from_u64(seed + index),
            ))
        })
        .collect()
}

#[test]
fn test_seeded_matches_are_reproducible() {
    let play = |seed| {
        let mut game = TurnController::new(2).unwrap().with_max_turns(Some(120));
        let outcome = game.run(&mut random_seats(seed));
        let winner = outcome.as_ref().ok().copied();
        let hit_limit = matches!(outcome, Err(MatchError::TurnLimit(120)));
        assert!(winner.is_some() || hit_limit);
        (winner, game.history().to_vec())
    };

    let (first_winner, first_history) = play(9);
    let (second_winner, second_history) = play(9);
    assert_eq!(first_winner, second_winner);
    assert_eq!(first_history, second_history);
    assert!(!first_history.is_empty());
}

#[test]
fn test_observer_sees_every_turn() {
    let mut game = TurnController::new(2).unwrap().with_max_turns(Some(10));
    let mut seen = 0;
    let result = game.run_observed(&mut random_seats(3), |game| {
        seen += 1;
        assert_eq!(game.turns_played(), seen);
    });

    match result {
        Ok(_) => {}
        Err(MatchError::TurnLimit(limit)) => assert_eq!(limit, 10),
        Err(other) => panic!("unexpected error: {other}"),
    }
    assert_eq!(seen, game.turns_played());
}
