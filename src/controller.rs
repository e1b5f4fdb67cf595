//! Turn loop alternating the human and the random-moving computer.

use crate::board::Board;
use crate::console::{GameOutput, MoveInput};
use crate::player::Player;
use anyhow::Result;
use derive_getters::Getters;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Terminal result of one completed game.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A player completed a winning line.
    Won(Rc<Player>),
    /// The board filled with no winning line.
    Tied,
}

/// Drives one game of tic-tac-toe to completion.
///
/// Owns the board and both players, tracks whose turn it is, and alternates
/// turns until a win or tie. The human moves through the [`MoveInput`]
/// collaborator; the computer picks uniformly at random among open cells.
#[derive(Debug, Getters)]
pub struct GameController {
    board: Board,
    human: Rc<Player>,
    computer: Rc<Player>,
    active_player: Rc<Player>,
    #[getter(skip)]
    rng: SmallRng,
}

impl GameController {
    /// Creates a controller with the human to move first.
    pub fn new(board: Board, human: Player, computer: Player) -> Self {
        Self::with_rng(board, human, computer, SmallRng::from_os_rng())
    }

    /// Same controller with a deterministic seed for the computer's choices.
    pub fn with_seed(board: Board, human: Player, computer: Player, seed: u64) -> Self {
        Self::with_rng(board, human, computer, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, human: Player, computer: Player, rng: SmallRng) -> Self {
        let human = Rc::new(human);
        let computer = Rc::new(computer);
        let active_player = Rc::clone(&human);
        Self {
            board,
            human,
            computer,
            active_player,
            rng,
        }
    }

    /// Toggles the active player between the two configured players.
    pub fn switch_active_player(&mut self) {
        self.active_player = if self.active_player == self.human {
            Rc::clone(&self.computer)
        } else {
            Rc::clone(&self.human)
        };
    }

    /// Runs the full game to completion.
    ///
    /// Each turn: obtain a legal move, apply it, emit the updated board to
    /// `output`, then check for a win or a full board. The final board is
    /// rendered once more before returning.
    ///
    /// # Errors
    ///
    /// Only the input collaborator can fail (e.g. stdin closed); an illegal
    /// human choice is re-requested, never surfaced as an error.
    #[instrument(skip_all)]
    pub fn play_round(&mut self, input: &mut dyn MoveInput, output: &mut dyn GameOutput) -> Result<Outcome> {
        let outcome = loop {
            if self.board.available_cells().is_empty() {
                // Only reachable when the game starts on a full board.
                break Outcome::Tied;
            }

            let (row, column) = if self.active_player == self.human {
                // The human needs to see the board before choosing.
                output.show(&self.board.render());
                self.request_human_move(input)?
            } else {
                self.pick_computer_move()
            };

            debug!(player = %self.active_player.name(), row, column, "applying move");
            self.board.place(row, column, &self.active_player)?;
            output.show(&self.board.render());

            if self.board.has_winner(&self.active_player) {
                info!(winner = %self.active_player.name(), "game won");
                output.show(&format!("{} won!", self.active_player.name()));
                break Outcome::Won(Rc::clone(&self.active_player));
            }
            if self.board.available_cells().is_empty() {
                info!("board full, game tied");
                output.show("It is a tie.");
                break Outcome::Tied;
            }

            self.switch_active_player();
        };

        output.show(&self.board.render());
        Ok(outcome)
    }

    /// Re-requests until the collaborator yields a currently open cell.
    fn request_human_move(&self, input: &mut dyn MoveInput) -> Result<(usize, usize)> {
        loop {
            let choice = input.choose_cell()?;
            if self.board.available_cells().contains(&choice) {
                return Ok(choice);
            }
            debug!(row = choice.0, column = choice.1, "cell not available, asking again");
        }
    }

    /// Picks uniformly at random among the open cells.
    fn pick_computer_move(&mut self) -> (usize, usize) {
        let cells = self.board.available_cells();
        let index = self.rng.random_range(0..cells.len());
        cells[index]
    }
}
