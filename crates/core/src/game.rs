//! Run session: the single owner of every piece of mutable game state.
//! This module exists to route input commands into the rules submodules.
//! It does not own drawing, asset decoding, or audio playback; those sit behind `ports`.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::GameConfig;
use crate::content::{ContentPack, RelicDef};
use crate::mapgen::{FloorGenerator, MapCatalog};
use crate::ports::{AssetResolver, AudioSink, CatalogAssets, Renderer, SilentAudio};
use crate::scene::Scene;
use crate::state::{GameState, Grid, Inventory, Player, ProgressionState};
use crate::types::*;

mod combat;
mod floor_transition;
mod hash;
mod interaction;
mod inventory;
mod prompts;
mod session;
#[cfg(test)]
mod test_support;

pub use combat::{CombatOutcome, Strike, damage, resolve_ambush, resolve_combat};

pub struct GameSession<R: Renderer = Scene> {
    seed: u64,
    config: GameConfig,
    content: ContentPack,
    generator: FloorGenerator,
    rng: ChaCha8Rng,
    phase: GamePhase,
    view: ViewMode,
    state: GameState,
    pending_chest: Option<ChestOffer>,
    next_input_seq: u64,
    layout_index: Option<usize>,
    log: Vec<LogEvent>,
    renderer: R,
    assets: Box<dyn AssetResolver>,
    audio: Box<dyn AudioSink>,
}

impl GameSession<Scene> {
    /// Session over the built-in catalog, drawing into a `Scene`, with no audio.
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, GameError> {
        Self::with_collaborators(
            seed,
            config,
            MapCatalog::build_default(),
            Scene::new(),
            Box::new(CatalogAssets::new(seed)),
            Box::new(SilentAudio),
        )
    }
}

impl<R: Renderer> GameSession<R> {
    /// Validates `config` and the configured region of `catalog` up front so bad parameters or a
    /// malformed layout fail here rather than mid-run.
    pub fn with_collaborators(
        seed: u64,
        config: GameConfig,
        catalog: MapCatalog,
        renderer: R,
        assets: Box<dyn AssetResolver>,
        audio: Box<dyn AudioSink>,
    ) -> Result<Self, GameError> {
        config.validate().map_err(|err| GameError::Config(err.to_string()))?;
        catalog.validate_region(config.region, config.grid_size)?;
        let generator = FloorGenerator::new(catalog, config.grid_size);
        let state = fresh_state(&config);

        Ok(Self {
            seed,
            config,
            content: ContentPack::default(),
            generator,
            rng: ChaCha8Rng::seed_from_u64(seed),
            phase: GamePhase::MainMenu,
            view: ViewMode::Map,
            state,
            pending_chest: None,
            next_input_seq: 0,
            layout_index: None,
            log: Vec::new(),
            renderer,
            assets,
            audio,
        })
    }

    pub fn handle_input(&mut self, command: InputCommand) -> Result<InputOutcome, GameError> {
        match command {
            InputCommand::StartGame => self.start_game().map(|()| InputOutcome::Started),
            InputCommand::Move(direction) => self.move_player(direction).map(InputOutcome::Move),
            InputCommand::ChestDecision { prompt_id, decision } => {
                self.resolve_chest(prompt_id, decision).map(InputOutcome::Chest)
            }
            InputCommand::InspectSlot(slot) => self
                .inspect_slot(slot)
                .map(|relic| InputOutcome::Inspected { slot, relic: *relic }),
            InputCommand::SwitchView => Ok(InputOutcome::ViewSwitched(self.switch_view())),
            InputCommand::Restart => self.restart().map(|()| InputOutcome::Restarted),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentPack {
        &self.content
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.state.inventory
    }

    pub fn progression(&self) -> &ProgressionState {
        &self.state.progression
    }

    pub fn region(&self) -> RegionId {
        self.state.region
    }

    pub fn pending_chest(&self) -> Option<ChestOffer> {
        self.pending_chest
    }

    pub fn layout_index(&self) -> Option<usize> {
        self.layout_index
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn inspect_slot(&self, index: usize) -> Result<&RelicDef, GameError> {
        let slot = self.state.inventory.slot(index).ok_or(GameError::SlotOutOfRange(index))?;
        slot.relic.as_ref().ok_or(GameError::EmptySlot(index))
    }
}

fn fresh_state(config: &GameConfig) -> GameState {
    GameState {
        region: config.region,
        grid: Grid::default(),
        player: Player::new(&config.player),
        inventory: Inventory::with_capacity(config.inventory_capacity),
        progression: ProgressionState {
            floor: 1,
            tier: config.tier_for_floor(1),
            tier_thresholds: config.tier_thresholds,
            ending_floor: config.ending_floor,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::mapgen::{Layout, MapGenError};

    #[test]
    fn new_session_waits_in_main_menu() {
        let session = GameSession::new(1, GameConfig::default()).expect("default catalog");
        assert_eq!(session.phase(), GamePhase::MainMenu);
        assert!(!session.input_enabled());
        assert!(session.grid().is_empty());
        assert!(session.renderer().is_empty());
    }

    #[test]
    fn malformed_catalog_fails_construction() {
        let mut catalog = MapCatalog::default();
        catalog.add_layout(RegionId::RuinedField, Layout::from_rows(&["S..", "...", "..."]));
        let err = GameSession::with_collaborators(
            1,
            GameConfig::default(),
            catalog,
            Scene::new(),
            Box::new(CatalogAssets::new(1)),
            Box::new(SilentAudio),
        )
        .err()
        .expect("layout of the wrong size");
        assert_eq!(
            err,
            GameError::Catalog(MapGenError::WrongSize {
                region: RegionId::RuinedField,
                layout: 0,
                expected: 7
            })
        );
    }

    #[test]
    fn invalid_config_fails_construction() {
        let config = GameConfig { tier_thresholds: [25, 10, 35], ..GameConfig::default() };
        let err = GameSession::new(1, config).err().expect("descending thresholds");
        assert_eq!(
            err,
            GameError::Config("invalid config: tier_thresholds must be ascending".to_string())
        );

        let config = GameConfig { inventory_capacity: 0, ..GameConfig::default() };
        assert!(matches!(GameSession::new(1, config), Err(GameError::Config(_))));
    }

    #[test]
    fn handle_input_dispatches_every_command() {
        let mut session = GameSession::new(3, GameConfig::default()).expect("default catalog");
        assert_eq!(session.handle_input(InputCommand::StartGame), Ok(InputOutcome::Started));
        install_ascii(&mut session, &["S..", ".P.", "..E"]);

        assert_eq!(
            session.handle_input(InputCommand::Move(Direction::Up)),
            Ok(InputOutcome::Move(MoveOutcome::Moved { to: Pos { y: 0, x: 1 }, ambushed_by: vec![] }))
        );
        assert_eq!(
            session.handle_input(InputCommand::SwitchView),
            Ok(InputOutcome::ViewSwitched(ViewMode::Inventory))
        );
        assert_eq!(
            session.handle_input(InputCommand::InspectSlot(0)),
            Err(GameError::EmptySlot(0))
        );
        assert_eq!(
            session.handle_input(InputCommand::ChestDecision {
                prompt_id: ChoicePromptId(0),
                decision: ChestDecision::Accept
            }),
            Err(GameError::NoPendingPrompt)
        );
        assert_eq!(
            session.handle_input(InputCommand::Restart),
            Err(GameError::InvalidPhase(GamePhase::Playing))
        );
    }

    #[test]
    fn inspect_slot_reports_missing_and_held_relics() {
        let mut session = playing_session(&["S..", ".P.", "..E"]);
        assert_eq!(session.inspect_slot(10).err(), Some(GameError::SlotOutOfRange(10)));

        let relic = session.content().relics[0];
        assert_eq!(session.add_relic(relic), Ok(0));
        assert_eq!(session.inspect_slot(0).map(|held| held.name), Ok(relic.name));
    }
}
