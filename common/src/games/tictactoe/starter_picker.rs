use crate::games::SessionRng;
use super::types::Player;

/// Chooses who opens a round when no rule decides it: the first round of a
/// session and every round after a draw.
pub trait StarterPicker {
    fn pick_starter(&mut self) -> Player;
}

impl StarterPicker for SessionRng {
    fn pick_starter(&mut self) -> Player {
        if self.random_bool() {
            Player::X
        } else {
            Player::O
        }
    }
}
