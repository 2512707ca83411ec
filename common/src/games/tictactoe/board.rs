use super::errors::CellOccupiedError;
use super::types::{Mark, Player, Position, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[cfg(test)]
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                board.cells[row][col] = match symbol {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    /// Panics if `row` or `col` is off the board.
    pub fn get(&self, row: usize, col: usize) -> Mark {
        let pos = Position::new(row, col);
        self.cells[pos.row][pos.col]
    }

    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), CellOccupiedError> {
        let pos = Position::new(row, col);
        let cell = &mut self.cells[pos.row][pos.col];
        if !cell.is_empty() {
            return Err(CellOccupiedError {
                position: pos,
                occupant: *cell,
            });
        }
        *cell = player.mark();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    pub fn cells(&self) -> [[Mark; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_place_sets_empty_cell() {
        let mut board = Board::new();
        assert!(board.place(1, 2, Player::O).is_ok());
        assert_eq!(board.get(1, 2), Mark::O);
        assert_eq!(board.get(2, 1), Mark::Empty);
    }

    #[test]
    fn test_place_on_occupied_cell_fails_and_keeps_board() {
        let mut board = Board::new();
        board.place(1, 1, Player::X).unwrap();
        let before = board.clone();

        let result = board.place(1, 1, Player::O);

        assert_eq!(
            result,
            Err(CellOccupiedError {
                position: Position::new(1, 1),
                occupant: Mark::X,
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_same_player_twice_fails() {
        let mut board = Board::new();
        board.place(0, 0, Player::X).unwrap();
        assert!(board.place(0, 0, Player::X).is_err());
        assert_eq!(board.get(0, 0), Mark::X);
    }

    #[test]
    fn test_is_full() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]);
        assert!(board.is_full());

        let board = Board::from_rows(["XOX", "X.O", "OXX"]);
        assert!(!board.is_full());
        assert_eq!(board.empty_positions(), vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::from_rows(["XOX", "XOO", "OXX"]);
        board.reset();
        assert!(board.is_empty());
        assert_eq!(board, Board::new());
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        Board::new().get(0, 3);
    }

    #[test]
    #[should_panic]
    fn test_place_out_of_range_panics() {
        let _ = Board::new().place(5, 5, Player::X);
    }
}
