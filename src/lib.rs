//! Console tic-tac-toe against a random-moving computer opponent.
//!
//! The core is the game-state machine: [`Board`] holds the 3x3 grid and
//! answers legality, win, and tie queries; [`Player`] is an immutable
//! identity; [`GameController`] alternates turns until the game ends.
//! Console I/O sits behind the [`MoveInput`] and [`GameOutput`] traits so
//! the loop can be driven by scripted collaborators in tests.
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{Board, GameController, Player};
//!
//! let human = Player::new("You", 'X');
//! let computer = Player::new("Computer", 'O');
//! let controller = GameController::new(Board::new(), human, computer);
//! assert_eq!(controller.active_player().name(), "You");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod controller;
mod player;

pub use board::{Board, PlaceError};
pub use console::{ConsoleInput, ConsoleOutput, GameOutput, MoveInput};
pub use controller::{GameController, Outcome};
pub use player::{Player, PlayerId};
