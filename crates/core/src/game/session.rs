//! Process phases: main menu, play, game over, ending, and restart.
//! This module exists to keep phase transitions and input gating in one place.
//! It does not own floor construction or per-move rules.

use tracing::info;

use super::*;
use crate::ports::AudioCue;

impl<R: Renderer> GameSession<R> {
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::MainMenu {
            return Err(GameError::InvalidPhase(self.phase));
        }
        self.log.push(LogEvent::GameStarted { seed: self.seed });
        self.build_floor()?;
        self.phase = GamePhase::Playing;
        self.audio.play(AudioCue::AmbientLoop);
        info!(seed = self.seed, region = self.state.region.key(), "game started");
        Ok(())
    }

    /// Resets player, coin, inventory, and progression, then deals a fresh floor 1.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, GamePhase::GameOver | GamePhase::Ending) {
            return Err(GameError::InvalidPhase(self.phase));
        }
        self.state = fresh_state(&self.config);
        self.pending_chest = None;
        self.view = ViewMode::Map;
        self.build_floor()?;
        self.phase = GamePhase::Playing;
        self.log.push(LogEvent::Restarted);
        info!("run restarted");
        Ok(())
    }

    pub fn switch_view(&mut self) -> ViewMode {
        self.view = match self.view {
            ViewMode::Map => ViewMode::Inventory,
            ViewMode::Inventory => ViewMode::Map,
        };
        self.view
    }

    pub fn input_enabled(&self) -> bool {
        self.phase == GamePhase::Playing && self.pending_chest.is_none()
    }

    pub fn interaction_state(&self) -> InteractionState {
        match self.phase {
            GamePhase::GameOver => InteractionState::GameOver,
            GamePhase::Ending => InteractionState::Ending,
            GamePhase::Playing if self.pending_chest.is_some() => {
                InteractionState::ResolvingInteraction
            }
            GamePhase::MainMenu | GamePhase::Playing => InteractionState::Idle,
        }
    }

    pub(super) fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.pending_chest = None;
        let floor = self.state.progression.floor;
        self.log.push(LogEvent::GameOver { floor });
        info!(floor, "player died");
    }
}
