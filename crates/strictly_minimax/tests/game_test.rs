//! Tests for the turn-taking game session.

use strictly_minimax::{
    Game, GameConfig, GameError, GameInvariants, InvariantSet, Outcome, Player, Position,
};

/// Plays every possible human line against the engine and returns the outcomes reached.
fn explore(game: &Game, outcomes: &mut Vec<Outcome>) {
    if game.is_over() {
        outcomes.push(game.outcome());
        return;
    }
    if game.is_ai_turn() {
        let mut next = game.clone();
        next.ai_move().unwrap();
        explore(&next, outcomes);
        return;
    }
    for pos in game.board().list_empty_cells() {
        let mut next = game.clone();
        next.make_move(pos).unwrap();
        assert!(GameInvariants::check_all(&next).is_ok());
        explore(&next, outcomes);
    }
}

#[test]
fn test_engine_never_loses_as_o() {
    let mut outcomes = Vec::new();
    explore(&Game::new(GameConfig::default()), &mut outcomes);
    assert!(!outcomes.is_empty());
    assert!(outcomes.iter().all(|o| *o != Outcome::Win(Player::X)));
}

#[test]
fn test_engine_never_loses_as_x() {
    let mut outcomes = Vec::new();
    explore(&Game::new(GameConfig::new(Player::X, Player::X)), &mut outcomes);
    assert!(outcomes.iter().all(|o| *o != Outcome::Win(Player::O)));
    // Some human lines lose outright.
    assert!(outcomes.contains(&Outcome::Win(Player::X)));
}

#[test]
fn test_engine_beats_first_empty_square_strategy() {
    let mut game = Game::default();
    let mut ai_moves = Vec::new();
    while !game.is_over() {
        if game.is_ai_turn() {
            ai_moves.push(game.ai_move().unwrap());
        } else {
            let pos = game.board().list_empty_cells()[0];
            game.make_move(pos).unwrap();
        }
    }
    assert_eq!(game.outcome(), Outcome::Win(Player::O));
    assert_eq!(
        ai_moves,
        vec![Position::Center, Position::TopRight, Position::BottomLeft]
    );
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let mut game = Game::new(GameConfig::new(Player::O, Player::X));
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
    ] {
        game.make_move(pos).unwrap();
    }
    assert_eq!(
        game.make_move(Position::TopRight),
        Ok(Outcome::Win(Player::X))
    );
    let over = GameError::GameOver(Outcome::Win(Player::X));
    assert_eq!(game.make_move(Position::BottomRight), Err(over.clone()));
    assert_eq!(game.ai_move(), Err(over));
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_o_can_start() {
    let mut game = Game::new(GameConfig::default().with_first_player(Player::O));
    assert!(game.is_ai_turn());
    assert_eq!(game.ai_move(), Ok(Position::TopLeft));
    assert_eq!(game.to_move(), Player::X);
}
