use super::score_board::ScoreBoard;
use super::types::{Mark, Player, RoundOutcome, WinningLine, BOARD_SIZE};

/// Result of a round, produced by the move that ended it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub outcome: RoundOutcome,
    pub winning_line: Option<WinningLine>,
    pub next_starting_player: Player,
}

/// Read-only copy of engine state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: Player,
    pub round: u32,
    /// Set only between the move that ended a round and the next accepted move.
    pub last_round: Option<RoundSummary>,
    pub scores: ScoreBoard,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn banner(&self) -> String {
        match self.last_round.map(|summary| (summary.outcome, summary.next_starting_player)) {
            Some((RoundOutcome::Win(winner), next)) => format!("{} wins!\n{}'s turn", winner, next),
            Some((RoundOutcome::Draw, next)) => format!("Draw!\n{}'s turn", next),
            _ => format!("{}'s turn", self.current_player),
        }
    }

    pub fn score_labels(&self) -> Vec<String> {
        Player::ALL
            .iter()
            .map(|&player| self.scores.label(player))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn snapshot(current_player: Player, last_round: Option<RoundSummary>) -> GameSnapshot {
        GameSnapshot {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_player,
            round: 2,
            last_round,
            scores: ScoreBoard::new(),
        }
    }

    #[test]
    fn test_banner_shows_turn_mid_round() {
        assert_eq!(snapshot(Player::O, None).banner(), "O's turn");
    }

    #[test]
    fn test_banner_after_win_names_loser_next() {
        let summary = RoundSummary {
            round: 1,
            outcome: RoundOutcome::Win(Player::X),
            winning_line: Some(WinningLine::new(
                Player::X,
                Position::new(0, 0),
                Position::new(0, 2),
            )),
            next_starting_player: Player::O,
        };
        assert_eq!(snapshot(Player::O, Some(summary)).banner(), "X wins!\nO's turn");
    }

    #[test]
    fn test_banner_after_draw() {
        let summary = RoundSummary {
            round: 1,
            outcome: RoundOutcome::Draw,
            winning_line: None,
            next_starting_player: Player::X,
        };
        assert_eq!(snapshot(Player::X, Some(summary)).banner(), "Draw!\nX's turn");
    }

    #[test]
    fn test_score_labels_in_player_order() {
        assert_eq!(snapshot(Player::X, None).score_labels(), vec!["X: 0", "O: 0"]);
    }
}
