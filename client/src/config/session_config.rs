use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    /// Fixed seed for the starting-player coin flips; random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
