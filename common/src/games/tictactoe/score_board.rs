use std::collections::HashMap;
use super::types::{Player, RoundOutcome};

/// Session-long tally. Win counts only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    wins: HashMap<Player, u32>,
    draws: u32,
    rounds_played: u32,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    pub fn new() -> Self {
        let wins = Player::ALL.iter().map(|&player| (player, 0)).collect();
        Self {
            wins,
            draws: 0,
            rounds_played: 0,
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.wins.get(&player).copied().unwrap_or(0)
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Counts a finished round. `InProgress` is ignored.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win(player) => {
                *self.wins.entry(player).or_insert(0) += 1;
            }
            RoundOutcome::Draw => {
                self.draws += 1;
            }
            RoundOutcome::InProgress => return,
        }
        self.rounds_played += 1;
    }

    pub fn label(&self, player: Player) -> String {
        format!("{}: {}", player, self.wins(player))
    }
}
