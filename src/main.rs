//! Console tic-tac-toe: you versus a computer that moves at random.

use anyhow::Result;
use tictactoe_console::{Board, ConsoleInput, ConsoleOutput, GameController, GameOutput, Outcome, Player};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let human = Player::new("You", 'X');
    let computer = Player::new("Computer", 'O');

    let mut output = ConsoleOutput::new();
    output.show(&format!("{} vs. {}", human.describe(), computer.describe()));

    let mut controller = GameController::new(Board::new(), human, computer);
    let mut input = ConsoleInput::new();
    let outcome = controller.play_round(&mut input, &mut output)?;

    match outcome {
        Outcome::Won(winner) => info!(winner = %winner.name(), "game finished"),
        Outcome::Tied => info!("game finished in a tie"),
    }

    Ok(())
}
