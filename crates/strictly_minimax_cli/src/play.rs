//! Interactive terminal game against the engine.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use strictly_minimax::{Game, GameConfig, GameError, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// A line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Move(Position),
    Restart,
    Quit,
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "restart" => Input::Restart,
            other => Position::from_label_or_number(other).map_or(Input::Unknown, Input::Move),
        }
    }
}

/// Loads the config, applies overrides, and runs the game on stdin/stdout.
#[instrument(skip(config_path), fields(config = %config_path.display()))]
pub fn run_play(config_path: &Path, ai: Option<Player>, first: Option<Player>) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if let Some(ai) = ai {
        config = config.with_ai_player(ai);
    }
    if let Some(first) = first {
        config = config.with_first_player(first);
    }
    info!(?config, "Starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play(Game::new(config), stdin.lock(), stdout.lock())
}

/// Runs the game loop until the input ends or the player quits.
fn play(mut game: Game, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(
        out,
        "You are {}. Enter 1-9 or a square name, r to restart, q to quit.",
        game.config().human_player()
    )?;
    let mut lines = input.lines();

    loop {
        if game.is_ai_turn() {
            let pos = game.ai_move()?;
            writeln!(out, "\nEngine plays {pos}")?;
        }

        writeln!(out, "\n{}", game.board().display())?;
        if game.is_over() {
            writeln!(out, "{}", verdict(game.outcome()))?;
            write!(out, "r to play again, q to quit: ")?;
        } else {
            write!(out, "{} to move: ", game.to_move())?;
        }
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("Input closed");
            return Ok(());
        };
        match Input::parse(&line) {
            Input::Quit => return Ok(()),
            Input::Restart => game.reset(),
            Input::Unknown => writeln!(out, "Unrecognized input {:?}", line.trim())?,
            Input::Move(pos) => match game.make_move(pos) {
                Ok(_) => {}
                Err(e @ (GameError::IllegalMove(_) | GameError::GameOver(_))) => {
                    writeln!(out, "{e}")?;
                }
                Err(e) => {
                    warn!(error = %e, "Unexpected game error");
                    return Err(e.into());
                }
            },
        }
    }
}

fn verdict(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("Player {player} wins!"),
        Outcome::Draw => "Draw!".to_string(),
        Outcome::InProgress => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(config: GameConfig, input: &str) -> String {
        let mut out = Vec::new();
        play(Game::new(config), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse(" Q "), Input::Quit);
        assert_eq!(Input::parse("r"), Input::Restart);
        assert_eq!(Input::parse("5"), Input::Move(Position::Center));
        assert_eq!(Input::parse("top-right"), Input::Move(Position::TopRight));
        assert_eq!(Input::parse("banana"), Input::Unknown);
    }

    #[test]
    fn test_engine_wins_against_first_empty_square() {
        // Always taking the lowest free number loses in three moves.
        let out = transcript(GameConfig::default(), "1\n2\n4\nq\n");
        assert!(out.contains("Engine plays Center (1, 1)"));
        assert!(out.contains("Player O wins!"));
    }

    #[test]
    fn test_occupied_square_is_reported() {
        let out = transcript(GameConfig::default(), "5\n5\nq\n");
        assert!(out.contains("Illegal move: Square Center (1, 1) is already occupied"));
    }

    #[test]
    fn test_engine_opens_when_it_moves_first() {
        let config = GameConfig::new(Player::X, Player::X);
        let out = transcript(config, "");
        assert!(out.starts_with("You are O."));
        assert!(out.contains("Engine plays Top-left (0, 0)"));
    }
}
