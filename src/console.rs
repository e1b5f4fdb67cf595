//! Console collaborators for move input and board display.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Supplies `(row, column)` candidates for the human player, 0-based.
pub trait MoveInput {
    /// Asks for the next candidate cell.
    ///
    /// Called again whenever the previous choice was illegal, so
    /// implementations must be able to answer indefinitely. Normalizing
    /// malformed raw input (non-numeric, out-of-range text) happens here,
    /// before a pair is handed to the controller.
    fn choose_cell(&mut self) -> Result<(usize, usize)>;
}

/// Receives display strings: board snapshots and announcements.
pub trait GameOutput {
    /// Surfaces one display string to the user.
    fn show(&mut self, text: &str);
}

/// Human input from stdin.
#[derive(Debug, derive_new::new)]
pub struct ConsoleInput;

impl MoveInput for ConsoleInput {
    fn choose_cell(&mut self) -> Result<(usize, usize)> {
        let row = prompt_index("Row (0-2)?")?;
        let column = prompt_index("Column (0-2)?")?;
        Ok((row, column))
    }
}

/// Prompts until a line parses as an index. EOF is an error.
fn prompt_index(question: &str) -> Result<usize> {
    let stdin = io::stdin();
    loop {
        print!("{question} ");
        io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read move input")?;
        if read == 0 {
            anyhow::bail!("input closed before a move was chosen");
        }

        match line.trim().parse::<usize>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                debug!(input = %line.trim(), "discarding non-numeric input");
                println!("Please enter a number.");
            }
        }
    }
}

/// Display output on stdout, one line per string.
#[derive(Debug, derive_new::new)]
pub struct ConsoleOutput;

impl GameOutput for ConsoleOutput {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}
