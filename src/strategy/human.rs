use std::io::{BufRead, Write};

use log::warn;

use super::PlayerStrategy;
use crate::c4::GameState;
use crate::error::C4Error;

///
/// Asks a person for a column, one line of input per attempt.
///
/// Anything that isn't an available column gets a message and another
/// prompt. Running out of input is an error.
///
pub struct HumanStrategy<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanStrategy { input, output }
    }
}

impl<R: BufRead, W: Write> PlayerStrategy for HumanStrategy<R, W> {
    fn select_column(&mut self, state: &GameState) -> Result<usize, C4Error> {
        let available = state.available_columns();
        if available.is_empty() {
            return Err(C4Error::NoAvailableColumns);
        }
        loop {
            write!(
                self.output,
                "Player {}, choose a column {:?}: ",
                state.current_player(),
                available
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(C4Error::InputClosed);
            }
            match line.trim().parse::<usize>() {
                Ok(column) if available.contains(&column) => return Ok(column),
                Ok(column) => {
                    warn!("Column {} isn't available", column);
                    writeln!(self.output, "Column {} isn't available", column)?;
                }
                Err(_) => {
                    warn!("Couldn't read a column from {:?}", line.trim());
                    writeln!(self.output, "Enter a column number")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_column() {
        let mut output = Vec::new();
        let mut strategy = HumanStrategy::new(Cursor::new("3\n"), &mut output);
        assert_eq!(strategy.select_column(&GameState::default()).unwrap(), 3);
        drop(strategy);
        let prompt = String::from_utf8(output).unwrap();
        assert!(prompt.starts_with("Player P1, choose a column"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut state = GameState::default();
        for _ in 0..6 {
            state = state.apply_move(1).unwrap();
        }
        let mut output = Vec::new();
        let mut strategy = HumanStrategy::new(Cursor::new("left\n-1\n9\n1\n  5 \n"), &mut output);
        assert_eq!(strategy.select_column(&state).unwrap(), 5);
        drop(strategy);
        let prompt = String::from_utf8(output).unwrap();
        assert_eq!(prompt.matches("choose a column").count(), 5);
        assert!(prompt.contains("Column 1 isn't available"));
        assert!(prompt.contains("Column 9 isn't available"));
    }

    #[test]
    fn test_input_closed() {
        let mut strategy = HumanStrategy::new(Cursor::new("x\n"), Vec::new());
        assert!(matches!(
            strategy.select_column(&GameState::default()),
            Err(C4Error::InputClosed)
        ));
    }
}
