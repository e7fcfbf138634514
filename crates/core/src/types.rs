use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::content::RelicDef;
use crate::mapgen::MapGenError;

new_key_type! {
    pub struct DisplayHandle;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        match direction {
            Direction::Up => Pos { y: self.y - 1, x: self.x },
            Direction::Down => Pos { y: self.y + 1, x: self.x },
            Direction::Left => Pos { y: self.y, x: self.x - 1 },
            Direction::Right => Pos { y: self.y, x: self.x + 1 },
        }
    }

    /// Orthogonal neighbours in clockwise order starting from `Up`.
    pub fn neighbors(self) -> [Pos; 4] {
        [
            self.step(Direction::Up),
            self.step(Direction::Right),
            self.step(Direction::Down),
            self.step(Direction::Left),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    Start,
    End,
    River,
}

impl TileKind {
    pub const ALL: [TileKind; 5] =
        [TileKind::Wall, TileKind::Floor, TileKind::Start, TileKind::End, TileKind::River];

    pub fn is_reachable(self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Start | TileKind::End)
    }

    pub fn name(self) -> &'static str {
        match self {
            TileKind::Wall => "Wall",
            TileKind::Floor => "Floor",
            TileKind::Start => "Start",
            TileKind::End => "End",
            TileKind::River => "River",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionId {
    RuinedField,
    Cave,
}

impl RegionId {
    pub const ALL: [RegionId; 2] = [RegionId::RuinedField, RegionId::Cave];

    pub fn key(self) -> &'static str {
        match self {
            RegionId::RuinedField => "ruined-field",
            RegionId::Cave => "cave",
        }
    }
}

/// Difficulty bracket that decides which monster templates may spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonsterTier {
    Level1,
    Level2,
    Level3,
    Level4,
}

impl MonsterTier {
    pub const ALL: [MonsterTier; 4] =
        [MonsterTier::Level1, MonsterTier::Level2, MonsterTier::Level3, MonsterTier::Level4];

    pub fn label(self) -> &'static str {
        match self {
            MonsterTier::Level1 => "level1",
            MonsterTier::Level2 => "level2",
            MonsterTier::Level3 => "level3",
            MonsterTier::Level4 => "level4",
        }
    }

    /// Tier reached after `steps` thresholds have been crossed, saturating at the top tier.
    pub fn from_steps(steps: usize) -> MonsterTier {
        Self::ALL[steps.min(Self::ALL.len() - 1)]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Slime,
    Bat,
    Rat,
    Goblin,
    Wolf,
    Skeleton,
    Orc,
    Wraith,
    Harpy,
    Golem,
    Drake,
    Lich,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Monster,
    RelicChest,
    Bonfire,
}

/// Process-level phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    MainMenu,
    Playing,
    GameOver,
    Ending,
}

/// State of the per-move interaction machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    ResolvingInteraction,
    GameOver,
    Ending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Map,
    Inventory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoicePromptId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestDecision {
    Accept,
    Decline,
}

/// Discrete commands delivered by an input source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    StartGame,
    Move(Direction),
    ChestDecision { prompt_id: ChoicePromptId, decision: ChestDecision },
    InspectSlot(usize),
    SwitchView,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combatant {
    Player,
    Monster,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelicRejection {
    NoRelicAvailable,
    InventoryFull,
}

impl fmt::Display for RelicRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRelicAvailable => write!(f, "no relic available"),
            Self::InventoryFull => write!(f, "inventory is full"),
        }
    }
}

/// A relic offered by an opened chest, waiting for an accept/decline decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChestOffer {
    pub prompt_id: ChoicePromptId,
    pub pos: Pos,
    pub relic: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Movement input arrived while input was disabled.
    Suppressed,
    /// Out of bounds, wall, river, or any other target the player cannot enter.
    Ignored,
    Moved { to: Pos, ambushed_by: Vec<Pos> },
    Fought { at: Pos, monster_slain: bool },
    Healed { at: Pos, amount: i32 },
    ChestOffered(ChestOffer),
    ChestEmpty { at: Pos },
    FloorAdvanced { floor: u32, tier: MonsterTier },
    EndingReached { floor: u32 },
    PlayerDied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChestResolution {
    Accepted { slot: usize },
    Rejected(RelicRejection),
    Declined,
}

/// What a single `InputCommand` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Started,
    Move(MoveOutcome),
    Chest(ChestResolution),
    Inspected { slot: usize, relic: RelicDef },
    ViewSwitched(ViewMode),
    Restarted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloorAdvance {
    NextFloor { floor: u32, tier: MonsterTier, tier_raised: bool },
    Ending { floor: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    GameStarted { seed: u64 },
    FloorGenerated { floor: u32, region: RegionId, layout: usize, placed: usize },
    PlayerMoved { to: Pos },
    Strike { attacker: Combatant, damage: i32, defender_hp: i32 },
    MonsterSlain { kind: MonsterKind, at: Pos, coin: u32 },
    Ambushed { by: MonsterKind, at: Pos },
    BonfireUsed { at: Pos, healed: i32 },
    ChestOffered { at: Pos, relic: &'static str },
    ChestEmpty { at: Pos },
    ChestDeclined { relic: &'static str },
    RelicAdded { relic: &'static str, slot: usize },
    RelicRejected { relic: &'static str, reason: RelicRejection },
    FloorAdvanced { floor: u32 },
    TierRaised { tier: MonsterTier },
    GameOver { floor: u32 },
    EndingReached { floor: u32 },
    Restarted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The command is not valid in the current phase.
    InvalidPhase(GamePhase),
    /// A chest prompt is open and must be resolved first.
    InputDisabled,
    NoPendingPrompt,
    PromptMismatch,
    SlotOutOfRange(usize),
    EmptySlot(usize),
    /// Rejected rules parameters, with the validation message.
    Config(String),
    Catalog(MapGenError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhase(phase) => write!(f, "command not valid during {phase:?}"),
            Self::InputDisabled => write!(f, "input is suspended until the open prompt resolves"),
            Self::NoPendingPrompt => write!(f, "no chest prompt is open"),
            Self::PromptMismatch => write!(f, "prompt id does not match the open prompt"),
            Self::SlotOutOfRange(index) => write!(f, "inventory slot {index} does not exist"),
            Self::EmptySlot(index) => write!(f, "inventory slot {index} is empty"),
            Self::Config(reason) => write!(f, "{reason}"),
            Self::Catalog(error) => write!(f, "map catalog error: {error}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<MapGenError> for GameError {
    fn from(error: MapGenError) -> Self {
        Self::Catalog(error)
    }
}
