use tictactoe_common::games::tictactoe::{GameSnapshot, BOARD_SIZE};

pub const HELP_TEXT: &str = "Commands:\n  row col   place a mark, e.g. \"1 2\" (rows and columns are 0-2)\n  scores    show the score board\n  help      show this help\n  quit      leave the game";

pub fn render_board(snapshot: &GameSnapshot, show_coordinates: bool) -> String {
    let margin = if show_coordinates { "  " } else { "" };
    let separator = vec!["---"; BOARD_SIZE].join("+");
    let mut lines = Vec::new();

    if show_coordinates {
        let header: Vec<String> = (0..BOARD_SIZE).map(|col| format!(" {} ", col)).collect();
        lines.push(format!("{}{}", margin, header.join(" ")));
    }

    for row in 0..BOARD_SIZE {
        if row > 0 {
            lines.push(format!("{}{}", margin, separator));
        }
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| format!(" {} ", snapshot.cell(row, col).symbol()))
            .collect();
        let label = if show_coordinates { format!("{} ", row) } else { String::new() };
        lines.push(format!("{}{}", label, cells.join("|")));
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_scores(snapshot: &GameSnapshot) -> String {
    format!(
        "{}   draws: {}",
        snapshot.score_labels().join("   "),
        snapshot.scores.draws()
    )
}

/// Full screen: round header, banner, board, and scores.
pub fn render_frame(snapshot: &GameSnapshot, show_coordinates: bool) -> String {
    format!(
        "Round {}\n{}\n\n{}\n\n{}\n",
        snapshot.round,
        snapshot.banner(),
        render_board(snapshot, show_coordinates),
        render_scores(snapshot)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{GameEngine, Player};
    use tictactoe_common::games::SessionRng;

    fn snapshot_after(moves: &[(usize, usize)]) -> GameSnapshot {
        let mut engine = GameEngine::with_starting_player(SessionRng::new(1), Player::X);
        for &(row, col) in moves {
            engine.apply_move(row, col).unwrap();
        }
        engine.snapshot()
    }

    #[test]
    fn test_render_board_without_coordinates() {
        let board = render_board(&snapshot_after(&[(0, 0), (1, 1), (2, 2)]), false);
        let expected = [" X |   |", "---+---+---", "   | O |", "---+---+---", "   |   | X"].join("\n");
        assert_eq!(board, expected);
    }

    #[test]
    fn test_render_board_with_coordinates() {
        let board = render_board(&snapshot_after(&[(0, 2)]), true);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "   0   1   2");
        assert_eq!(lines[1], "0    |   | X");
        assert_eq!(lines[2], "  ---+---+---");
    }

    #[test]
    fn test_render_scores() {
        let mut engine = GameEngine::with_starting_player(SessionRng::new(1), Player::X);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.apply_move(row, col).unwrap();
        }
        assert_eq!(render_scores(&engine.snapshot()), "X: 1   O: 0   draws: 0");
    }

    #[test]
    fn test_render_frame_includes_banner_and_round() {
        let frame = render_frame(&snapshot_after(&[(1, 1)]), false);
        assert!(frame.starts_with("Round 1\nO's turn\n"));
        assert!(frame.contains("X: 0   O: 0"));
    }
}
