use std::fmt;

use crate::game::GameSession;
use crate::journal::InputJournal;
use crate::types::{GameError, GamePhase};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    /// The session could not be built from the journal's config.
    Setup(GameError),
    /// A recorded command was refused by the session.
    Rejected { seq: u64, error: GameError },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(error) => write!(f, "failed to build session: {error}"),
            Self::Rejected { seq, error } => write!(f, "input {seq} was rejected: {error}"),
        }
    }
}

impl std::error::Error for ReplayError {}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_phase: GamePhase,
    pub final_floor: u32,
    pub final_snapshot_hash: u64,
    pub applied_inputs: usize,
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let mut session =
        GameSession::new(journal.seed, journal.config.clone()).map_err(ReplayError::Setup)?;

    for record in &journal.inputs {
        session
            .handle_input(record.command.clone())
            .map_err(|error| ReplayError::Rejected { seq: record.seq, error })?;
    }

    Ok(ReplayResult {
        final_phase: session.phase(),
        final_floor: session.progression().floor,
        final_snapshot_hash: session.snapshot_hash(),
        applied_inputs: journal.inputs.len(),
    })
}

#[cfg(test)]
mod tests;
