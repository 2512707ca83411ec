use crate::games::SessionRng;
use super::board::Board;
use super::errors::IllegalMoveError;
use super::score_board::ScoreBoard;
use super::snapshot::{GameSnapshot, RoundSummary};
use super::starter_picker::StarterPicker;
use super::types::{Player, RoundOutcome, WinningLine};
use super::win_detector::evaluate_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAccepted {
    Continue { next_player: Player },
    /// The board has already been cleared for the next round.
    RoundEnded(RoundSummary),
}

/// Owns the board, turn, and scores of one session. A finished round is
/// scored and the board reset inside the same `apply_move` call, so callers
/// never observe a board that can't accept a move.
pub struct GameEngine<P: StarterPicker = SessionRng> {
    board: Board,
    current_player: Player,
    scores: ScoreBoard,
    round: u32,
    last_round: Option<RoundSummary>,
    picker: P,
}

impl GameEngine<SessionRng> {
    pub fn new() -> Self {
        Self::with_picker(SessionRng::from_random())
    }
}

impl Default for GameEngine<SessionRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: StarterPicker> GameEngine<P> {
    pub fn with_picker(mut picker: P) -> Self {
        let starting_player = picker.pick_starter();
        Self::with_starting_player(picker, starting_player)
    }

    pub fn with_starting_player(picker: P, starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            scores: ScoreBoard::new(),
            round: 1,
            last_round: None,
            picker,
        }
    }

    /// Places the current player's mark. Panics if `row` or `col` is off the
    /// board; an occupied cell is rejected without touching any state.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveAccepted, IllegalMoveError> {
        let player = self.current_player;
        self.board.place(row, col, player)?;
        self.last_round = None;

        let (outcome, winning_line) = evaluate_board(&self.board);
        if !outcome.is_finished() {
            self.current_player = player.opponent();
            return Ok(MoveAccepted::Continue {
                next_player: self.current_player,
            });
        }

        Ok(MoveAccepted::RoundEnded(self.finish_round(outcome, winning_line)))
    }

    fn finish_round(&mut self, outcome: RoundOutcome, winning_line: Option<WinningLine>) -> RoundSummary {
        self.scores.record(outcome);

        // Loser opens the next round; after a draw it's a coin flip.
        let next_starting_player = match outcome {
            RoundOutcome::Win(winner) => winner.opponent(),
            _ => self.picker.pick_starter(),
        };

        let summary = RoundSummary {
            round: self.round,
            outcome,
            winning_line,
            next_starting_player,
        };

        self.board.reset();
        self.current_player = next_starting_player;
        self.round += 1;
        self.last_round = Some(summary);
        summary
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.board.cells(),
            current_player: self.current_player,
            round: self.round,
            last_round: self.last_round,
            scores: self.scores.clone(),
        }
    }
}
