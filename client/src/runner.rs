use std::io::{self, BufRead, Write};
use tictactoe_common::games::tictactoe::{GameEngine, MoveAccepted, RoundOutcome, StarterPicker};
use tictactoe_common::log;

use crate::input::{parse_command, ClientCommand};
use crate::render::{render_frame, render_scores, HELP_TEXT};

/// Drives a session from line input. All game state stays in the engine;
/// the runner only forwards moves and renders snapshots.
pub struct SessionRunner<P: StarterPicker> {
    engine: GameEngine<P>,
    show_coordinates: bool,
}

impl<P: StarterPicker> SessionRunner<P> {
    pub fn new(engine: GameEngine<P>, show_coordinates: bool) -> Self {
        Self {
            engine,
            show_coordinates,
        }
    }

    pub fn engine(&self) -> &GameEngine<P> {
        &self.engine
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        let mut lines = input.lines();
        let mut redraw = true;

        loop {
            if redraw {
                write!(output, "{}", render_frame(&self.engine.snapshot(), self.show_coordinates))?;
                redraw = false;
            }
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };

            let command = match parse_command(&line?) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match command {
                ClientCommand::PlaceMark(pos) => {
                    let player = self.engine.current_player();
                    match self.engine.apply_move(pos.row, pos.col) {
                        Ok(MoveAccepted::Continue { .. }) => {}
                        Ok(MoveAccepted::RoundEnded(summary)) => match summary.outcome {
                            RoundOutcome::Win(winner) => {
                                log!("Round {} won by {}, {} starts next", summary.round, winner, summary.next_starting_player);
                            }
                            _ => {
                                log!("Round {} drawn, {} starts next", summary.round, summary.next_starting_player);
                            }
                        },
                        Err(e) => {
                            log!("Rejected move by {} at {}: {}", player, pos, e);
                            writeln!(output, "{}", e)?;
                            continue;
                        }
                    }
                    redraw = true;
                }
                ClientCommand::Scores => {
                    writeln!(output, "{}", render_scores(&self.engine.snapshot()))?;
                }
                ClientCommand::Help => {
                    writeln!(output, "{}", HELP_TEXT)?;
                }
                ClientCommand::Quit => break,
            }
        }

        writeln!(output, "Final scores: {}", render_scores(&self.engine.snapshot()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::{Mark, Player};
    use tictactoe_common::games::SessionRng;

    fn run_script(starting_player: Player, script: &str) -> (SessionRunner<SessionRng>, String) {
        let engine = GameEngine::with_starting_player(SessionRng::new(3), starting_player);
        let mut runner = SessionRunner::new(engine, false);
        let mut output = Vec::new();
        runner.run(Cursor::new(script.to_string()), &mut output).unwrap();
        (runner, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_win_is_scored_and_loser_starts() {
        let (runner, output) = run_script(Player::X, "0 0\n1 0\n0 1\n2 2\n0 2\nquit\n");

        assert!(output.contains("X wins!\nO's turn"));
        assert!(output.contains("Round 2"));
        assert!(output.ends_with("Final scores: X: 1   O: 0   draws: 0\n"));
        assert_eq!(runner.engine().current_player(), Player::O);
        assert!(runner.engine().board().is_empty());
    }

    #[test]
    fn test_occupied_cell_is_reported_and_turn_kept() {
        let (runner, output) = run_script(Player::O, "1 1\n1 1\n");

        assert!(output.contains("Illegal move: Cell (1, 1) is already marked O"));
        assert_eq!(runner.engine().current_player(), Player::X);
        assert_eq!(runner.engine().board().get(1, 1), Mark::O);
    }

    #[test]
    fn test_bad_input_reprompts_without_touching_engine() {
        let (runner, output) = run_script(Player::X, "hello\n5 5\n\nscores\nhelp\n");

        assert!(output.contains("Unrecognized command: hello"));
        assert!(output.contains("off the board"));
        assert!(output.contains("X: 0   O: 0   draws: 0"));
        assert!(output.contains("Commands:"));
        assert!(runner.engine().board().is_empty());
        assert_eq!(runner.engine().current_player(), Player::X);
    }

    #[test]
    fn test_draw_round_via_script() {
        let script = "0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\nq\n";
        let (runner, output) = run_script(Player::X, script);

        assert!(output.contains("Draw!\n"));
        assert_eq!(runner.engine().scores().draws(), 1);
        assert_eq!(runner.engine().scores().wins(Player::X), 0);
        assert_eq!(runner.engine().round(), 2);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, output) = run_script(Player::X, "0 0\n");
        assert!(output.ends_with("Final scores: X: 0   O: 0   draws: 0\n"));
    }
}
