use super::board::Board;
use super::types::{Position, RoundOutcome, WinningLine, BOARD_SIZE};

/// Outcome of the board as it stands, with the completed line on a win.
pub fn evaluate_board(board: &Board) -> (RoundOutcome, Option<WinningLine>) {
    if let Some(line) = check_win(board) {
        return (RoundOutcome::Win(line.player), Some(line));
    }
    if board.is_full() {
        return (RoundOutcome::Draw, None);
    }
    (RoundOutcome::InProgress, None)
}

/// Returns the first completed line, checking rows, then columns, then the
/// main diagonal and the anti-diagonal.
pub fn check_win(board: &Board) -> Option<WinningLine> {
    for row in 0..BOARD_SIZE {
        if let Some(line) = check_line(board, Position::new(row, 0), 0, 1) {
            return Some(line);
        }
    }

    for col in 0..BOARD_SIZE {
        if let Some(line) = check_line(board, Position::new(0, col), 1, 0) {
            return Some(line);
        }
    }

    if let Some(line) = check_line(board, Position::new(0, 0), 1, 1) {
        return Some(line);
    }

    check_line(board, Position::new(0, BOARD_SIZE - 1), 1, -1)
}

fn check_line(board: &Board, start: Position, d_row: usize, d_col: isize) -> Option<WinningLine> {
    let player = board.get(start.row, start.col).player()?;

    let mut end = start;
    for i in 1..BOARD_SIZE {
        let row = start.row + d_row * i;
        let col = (start.col as isize + d_col * i as isize) as usize;
        if board.get(row, col) != player.mark() {
            return None;
        }
        end = Position::new(row, col);
    }

    Some(WinningLine::new(player, start, end))
}
