use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOccupiedError {
    pub position: Position,
    pub occupant: Mark,
}

impl std::fmt::Display for CellOccupiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell {} is already marked {}",
            self.position,
            self.occupant.symbol()
        )
    }
}

impl std::error::Error for CellOccupiedError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveError {
    CellOccupied(CellOccupiedError),
}

impl std::fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveError::CellOccupied(e) => write!(f, "Illegal move: {}", e),
        }
    }
}

impl std::error::Error for IllegalMoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMoveError::CellOccupied(e) => Some(e),
        }
    }
}

impl From<CellOccupiedError> for IllegalMoveError {
    fn from(e: CellOccupiedError) -> Self {
        IllegalMoveError::CellOccupied(e)
    }
}
