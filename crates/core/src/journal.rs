use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::InputCommand;

/// Seed, rules config, and every command delivered to a session, in order. Replaying it
/// reproduces the run exactly; no game state is stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    #[serde(default)]
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub command: InputCommand,
}

impl InputJournal {
    pub const FORMAT_VERSION: u16 = 1;

    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: Self::FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn append(&mut self, command: InputCommand) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, command });
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
