pub mod config;
pub mod content;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod ports;
pub mod replay;
pub mod scene;
pub mod state;
pub mod types;

mod roll;

pub use config::{ConfigError, GameConfig, ObjectCounts, PlayerBase};
pub use content::{ContentPack, RelicDef, RelicEffect, RelicGrade};
pub use game::{CombatOutcome, GameSession, Strike, damage, resolve_ambush, resolve_combat};
pub use journal::{InputJournal, InputRecord};
pub use mapgen::{FloorGenerator, GeneratedFloor, MapCatalog, MapGenError, Placement};
pub use ports::{
    AssetKey, AssetResolver, AudioCue, AudioSink, CatalogAssets, Entity, ImageRef, Renderer,
    SilentAudio,
};
pub use replay::*;
pub use scene::Scene;
pub use state::{GameState, Grid, Inventory, InventorySlot, Monster, Occupant, Player, Tile};
pub use types::*;
