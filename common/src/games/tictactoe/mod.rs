mod board;
mod errors;
mod game_state;
mod score_board;
mod snapshot;
mod starter_picker;
mod types;
mod win_detector;

pub use board::Board;
pub use errors::{CellOccupiedError, IllegalMoveError};
pub use game_state::{GameEngine, MoveAccepted};
pub use score_board::ScoreBoard;
pub use snapshot::{GameSnapshot, RoundSummary};
pub use starter_picker::StarterPicker;
pub use types::{FirstPlayerMode, Mark, Player, Position, RoundOutcome, WinningLine, BOARD_SIZE};
pub use win_detector::{check_win, evaluate_board};
