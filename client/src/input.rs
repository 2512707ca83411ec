use tictactoe_common::games::tictactoe::{Position, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark(Position),
    Scores,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    Unrecognized(String),
    OutOfRange { row: usize, col: usize },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty => write!(f, "Enter a move as \"row col\", or \"help\""),
            InputError::Unrecognized(text) => write!(f, "Unrecognized command: {}", text),
            InputError::OutOfRange { row, col } => write!(
                f,
                "Cell ({}, {}) is off the board; rows and columns go from 0 to {}",
                row,
                col,
                BOARD_SIZE - 1
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Parses one input line. Moves are `row col` or `row,col`, zero-based.
pub fn parse_command(line: &str) -> Result<ClientCommand, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(ClientCommand::Quit),
        "s" | "scores" => return Ok(ClientCommand::Scores),
        "h" | "help" | "?" => return Ok(ClientCommand::Help),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(InputError::Unrecognized(trimmed.to_string()));
    };

    let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
        return Err(InputError::Unrecognized(trimmed.to_string()));
    };

    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(InputError::OutOfRange { row, col });
    }

    Ok(ClientCommand::PlaceMark(Position::new(row, col)))
}
